use serde::{Deserialize, Serialize};
use std::fmt;

use super::collection::MemberCollection;

/// Number of tracked weeks per season
pub const WEEKS_PER_SEASON: usize = 4;
/// Number of games tracked in each week
pub const GAMES_PER_WEEK: usize = 4;

/// Confederation grade controlling the result-point multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "OURO", alias = "GOLD")]
    Gold,
    #[serde(rename = "PLATINA", alias = "PLATINUM")]
    Platinum,
    #[serde(rename = "DIAMANTE", alias = "DIAMOND")]
    Diamond,
    #[serde(rename = "SUPREMA", alias = "SUPREME")]
    Supreme,
}

impl Tier {
    pub fn as_str(&self) -> &str {
        match self {
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Diamond => "DIAMOND",
            Tier::Supreme => "SUPREME",
        }
    }

    /// Parse either the stored spelling or the English name
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "OURO" | "GOLD" => Some(Tier::Gold),
            "PLATINA" | "PLATINUM" => Some(Tier::Platinum),
            "DIAMANTE" | "DIAMOND" => Some(Tier::Diamond),
            "SUPREMA" | "SUPREME" => Some(Tier::Supreme),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameResult {
    Win,
    Draw,
    Loss,
    #[default]
    None,
}

impl GameResult {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "WIN" => Some(GameResult::Win),
            "DRAW" => Some(GameResult::Draw),
            "LOSS" => Some(GameResult::Loss),
            "NONE" => Some(GameResult::None),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Attendance {
    Present,
    Absent,
    NoTrain,
    #[default]
    None,
}

impl Attendance {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "PRESENT" => Some(Attendance::Present),
            "ABSENT" => Some(Attendance::Absent),
            "NO_TRAIN" => Some(Attendance::NoTrain),
            "NONE" => Some(Attendance::None),
            _ => None,
        }
    }
}

/// One game cell: a match result plus the attendance mark
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    pub result: GameResult,
    pub attendance: Attendance,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub games: [GameScore; GAMES_PER_WEEK],
}

pub type Weeks = [Week; WEEKS_PER_SEASON];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confederation {
    pub id: String,
    pub name: String,
    pub tier: Tier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub team_name: String,
    pub conf_id: String,
    pub is_manager: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_user_id: Option<String>,
    pub weeks: Weeks,
}

impl Member {
    pub fn new(id: &str, name: &str, team_name: &str, conf_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            team_name: team_name.to_string(),
            conf_id: conf_id.to_string(),
            is_manager: false,
            linked_user_id: None,
            weeks: Weeks::default(),
        }
    }

    /// Iterate over all 16 game cells, week by week
    pub fn cells(&self) -> impl Iterator<Item = &GameScore> {
        self.weeks.iter().flat_map(|week| week.games.iter())
    }

    pub fn clear_weeks(&mut self) {
        self.weeks = Weeks::default();
    }
}

/// Historical placement of a confederation in the external Top-100 ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Top100Entry {
    pub id: String,
    pub conf_id: String,
    pub season: String,
    pub rank: i64,
    pub date_added: String,
}

/// Frozen copy of the member and confederation collections at season close
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedSeason {
    pub id: String,
    pub name: String,
    pub date: String,
    pub members: MemberCollection,
    pub confederations: Vec<Confederation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    pub active_week: usize,
}

/// Consistent snapshot of everything the scoring core reads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppData {
    pub confederations: Vec<Confederation>,
    pub members: MemberCollection,
    pub top100_history: Vec<Top100Entry>,
    pub archived_seasons: Vec<ArchivedSeason>,
    pub settings: GlobalSettings,
}

impl AppData {
    pub fn find_confederation(&self, id: &str) -> Option<&Confederation> {
        self.confederations.iter().find(|c| c.id == id)
    }

    pub fn find_season(&self, id: &str) -> Option<&ArchivedSeason> {
        self.archived_seasons.iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,    // registered, no access
    Member,  // can read news
    Manager, // edits scores of members in scope
    Mod,
    Admin,
    Owner,
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::User => "user",
            UserRole::Member => "member",
            UserRole::Manager => "manager",
            UserRole::Mod => "mod",
            UserRole::Admin => "admin",
            UserRole::Owner => "owner",
        }
    }
}
