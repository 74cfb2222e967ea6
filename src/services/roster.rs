use anyhow::{anyhow, bail, Context, Result};
use log::info;

use crate::config::settings::AppConfig;
use crate::database::{self, store, DbPool};
use crate::domain::editing::{require_admin, require_moderator};
use crate::domain::roster::new_member;
use crate::domain::{Actor, Confederation, ConfederationDraft, Member};

use super::next_record_id;

/// Confederation and member maintenance, applied record by record so the
/// rest of the store is left untouched
pub struct RosterService {
    pool: DbPool,
}

impl RosterService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self::with_pool(database::create_pool(&config.storage.database_path)?))
    }

    pub fn with_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a confederation, or replace the one with the draft's ID
    pub fn upsert_confederation(&self, actor: &Actor, draft: ConfederationDraft) -> Result<Confederation> {
        require_admin(actor, "manage confederations")?;

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to start confederation transaction")?;

        let data = database::load_app_data(&tx)?;
        let id = match draft.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => next_record_id(|candidate| data.find_confederation(candidate).is_some()),
        };
        let existed = data.find_confederation(&id).is_some();

        let conf = draft.into_confederation(id)?;
        store::save_confederation(&tx, &conf)?;
        tx.commit().context("Failed to commit confederation")?;

        info!(
            "{} confederation {} '{}' ({}, {})",
            if existed { "Updated" } else { "Created" },
            conf.id,
            conf.name,
            conf.tier,
            if conf.active { "active" } else { "inactive" }
        );
        Ok(conf)
    }

    pub fn set_confederation_active(&self, actor: &Actor, conf_id: &str, active: bool) -> Result<Confederation> {
        require_admin(actor, "manage confederations")?;

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to start confederation transaction")?;

        let mut conf = database::load_app_data(&tx)?
            .find_confederation(conf_id)
            .cloned()
            .ok_or_else(|| anyhow!("Confederation '{}' not found", conf_id))?;
        conf.active = active;
        store::save_confederation(&tx, &conf)?;
        tx.commit().context("Failed to commit confederation")?;

        info!("Confederation {} is now {}", conf.id, if active { "active" } else { "inactive" });
        Ok(conf)
    }

    pub fn add_member(&self, actor: &Actor, conf_id: &str, name: &str, team_name: &str) -> Result<Member> {
        require_moderator(actor, "add members")?;

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to start member transaction")?;

        let data = database::load_app_data(&tx)?;
        let Some(conf) = data.find_confederation(conf_id) else {
            bail!("Confederation '{}' not found", conf_id);
        };
        let id = next_record_id(|candidate| data.members.get(candidate).is_some());
        let member = new_member(&id, conf, name, team_name)?;

        store::save_member(&tx, &member)?;
        tx.commit().context("Failed to commit member")?;

        info!("Added member {} '{}' ({}) to {}", member.id, member.name, member.team_name, conf_id);
        Ok(member)
    }

    /// Remove a live member. Archived seasons keep their own copy.
    pub fn remove_member(&self, actor: &Actor, member_id: &str) -> Result<()> {
        require_moderator(actor, "remove members")?;

        let conn = database::get_connection(&self.pool)?;
        if !store::delete_member(&conn, member_id)? {
            bail!("Member '{}' not found", member_id);
        }

        info!("Removed member {}", member_id);
        Ok(())
    }
}
