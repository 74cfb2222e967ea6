use anyhow::{anyhow, bail, Result};
use chrono::Utc;
use log::{info, warn};

use crate::config::settings::AppConfig;
use crate::database::{self, store, DbPool};
use crate::domain::editing::require_admin;
use crate::domain::{Actor, Top100Entry};
use crate::scoring::top100_points_of;

use super::next_record_id;

pub struct HistoryService {
    pool: DbPool,
}

impl HistoryService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self::with_pool(database::create_pool(&config.storage.database_path)?))
    }

    pub fn with_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn add_entry(&self, actor: &Actor, conf_id: &str, season: &str, rank: i64) -> Result<Top100Entry> {
        require_admin(actor, "edit the Top-100 history")?;
        if season.trim().is_empty() {
            bail!("Season label must not be empty");
        }

        let conn = database::get_connection(&self.pool)?;
        let data = database::load_app_data(&conn)?;
        if data.find_confederation(conf_id).is_none() {
            bail!("Confederation '{}' not found", conf_id);
        }
        if !(1..=100).contains(&rank) {
            warn!("Top-100 rank {} for '{}' is outside 1-100 and will score nothing", rank, conf_id);
        }

        let entry = Top100Entry {
            id: next_record_id(|id| data.top100_history.iter().any(|e| e.id == id)),
            conf_id: conf_id.to_string(),
            season: season.trim().to_string(),
            rank,
            date_added: Utc::now().to_rfc3339(),
        };
        store::save_top100_entry(&conn, &entry)?;

        info!(
            "Added Top-100 entry {}: {} placed #{} in season {} (+{} pts)",
            entry.id,
            entry.conf_id,
            entry.rank,
            entry.season,
            top100_points_of(entry.rank).total()
        );
        Ok(entry)
    }

    pub fn remove_entry(&self, actor: &Actor, id: &str) -> Result<()> {
        require_admin(actor, "edit the Top-100 history")?;

        let conn = database::get_connection(&self.pool)?;
        if !store::delete_top100_entry(&conn, id)? {
            return Err(anyhow!("Top-100 entry '{}' not found", id));
        }

        info!("Removed Top-100 entry {}", id);
        Ok(())
    }
}
