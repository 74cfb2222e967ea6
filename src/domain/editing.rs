use anyhow::{bail, Result};

use super::models::{
    Attendance, Confederation, GameResult, GlobalSettings, Member, UserRole, GAMES_PER_WEEK,
    WEEKS_PER_SEASON,
};

/// Identity of whoever is performing an operation.
///
/// Passed explicitly into each operation and never persisted alongside the
/// data it acts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub role: UserRole,
    /// Confederations a manager may edit; ignored for other roles
    pub conf_scope: Vec<String>,
}

impl Actor {
    pub fn new(role: UserRole) -> Self {
        Self {
            role,
            conf_scope: Vec::new(),
        }
    }

    pub fn with_scope(role: UserRole, conf_scope: Vec<String>) -> Self {
        Self { role, conf_scope }
    }

    pub fn is_owner(&self) -> bool {
        self.role == UserRole::Owner
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin | UserRole::Owner)
    }

    pub fn can_edit_scores(&self) -> bool {
        matches!(
            self.role,
            UserRole::Manager | UserRole::Mod | UserRole::Admin | UserRole::Owner
        )
    }
}

/// Requested change to one game cell; `None` leaves that half untouched
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellUpdate {
    pub week: usize,
    pub game: usize,
    pub result: Option<GameResult>,
    pub attendance: Option<Attendance>,
}

/// Administrative actions (archiving, Top-100 history) need ADMIN or OWNER
pub fn require_admin(actor: &Actor, action: &str) -> Result<()> {
    if !actor.is_admin() {
        bail!("Role '{}' is not allowed to {}", actor.role.as_str(), action);
    }
    Ok(())
}

/// Roster changes (adding or removing members) need MOD or above
pub fn require_moderator(actor: &Actor, action: &str) -> Result<()> {
    if !matches!(actor.role, UserRole::Mod | UserRole::Admin | UserRole::Owner) {
        bail!("Role '{}' is not allowed to {}", actor.role.as_str(), action);
    }
    Ok(())
}

/// Only the owner may edit weeks other than the open one
pub fn is_week_locked(actor: &Actor, week: usize, settings: &GlobalSettings) -> bool {
    !actor.is_owner() && week != settings.active_week
}

pub fn check_cell_bounds(week: usize, game: usize) -> Result<()> {
    if week >= WEEKS_PER_SEASON {
        bail!("Week {} is out of range (0-{})", week, WEEKS_PER_SEASON - 1);
    }
    if game >= GAMES_PER_WEEK {
        bail!("Game {} is out of range (0-{})", game, GAMES_PER_WEEK - 1);
    }
    Ok(())
}

/// Verify that `actor` may change the given cell of `member`
pub fn authorize_cell_edit(
    actor: &Actor,
    member: &Member,
    conf: Option<&Confederation>,
    update: &CellUpdate,
    settings: &GlobalSettings,
) -> Result<()> {
    check_cell_bounds(update.week, update.game)?;

    if !actor.can_edit_scores() {
        bail!("Role '{}' cannot edit scores", actor.role.as_str());
    }
    if is_week_locked(actor, update.week, settings) {
        bail!(
            "Week {} is locked; only week {} is open for editing",
            update.week,
            settings.active_week
        );
    }
    if actor.role == UserRole::Manager && !actor.conf_scope.iter().any(|id| *id == member.conf_id) {
        bail!(
            "Manager has no access to confederation '{}' of member {}",
            member.conf_id,
            member.id
        );
    }
    if !actor.is_owner() && conf.is_some_and(|c| !c.active) {
        bail!("Confederation '{}' is inactive", member.conf_id);
    }
    Ok(())
}

pub fn apply_cell_update(member: &mut Member, update: &CellUpdate) -> Result<()> {
    check_cell_bounds(update.week, update.game)?;

    let cell = &mut member.weeks[update.week].games[update.game];
    if let Some(result) = update.result {
        cell.result = result;
    }
    if let Some(attendance) = update.attendance {
        cell.attendance = attendance;
    }
    Ok(())
}

pub fn set_active_week(actor: &Actor, settings: &mut GlobalSettings, week: usize) -> Result<()> {
    if !actor.is_owner() {
        bail!("Only the owner can change the active week");
    }
    if week >= WEEKS_PER_SEASON {
        bail!("Week {} is out of range (0-{})", week, WEEKS_PER_SEASON - 1);
    }
    settings.active_week = week;
    Ok(())
}
