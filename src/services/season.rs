use anyhow::{bail, Context, Result};
use chrono::Utc;
use colored::Colorize;
use log::info;

use crate::config::settings::AppConfig;
use crate::database::{self, store, DbPool};
use crate::domain::archive::{reset_live_scores, snapshot_season};
use crate::domain::editing::require_admin;
use crate::domain::{Actor, ArchivedSeason, SeasonSummary};

use super::next_record_id;

pub struct SeasonService {
    pool: DbPool,
}

impl SeasonService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self::with_pool(database::create_pool(&config.storage.database_path)?))
    }

    pub fn with_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Freeze the current season under `name` and clear every member's
    /// game grid. Snapshot and reset are committed together.
    pub fn archive(&self, actor: &Actor, name: &str) -> Result<ArchivedSeason> {
        require_admin(actor, "archive a season")?;
        if name.trim().is_empty() {
            bail!("Season name must not be empty");
        }

        info!("=== Archiving Season '{}' ===\n", name.trim());

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to start archive transaction")?;

        let mut data = database::load_app_data(&tx)?;
        let id = next_record_id(|candidate| data.find_season(candidate).is_some());
        let season = snapshot_season(&data, &id, name, &Utc::now().to_rfc3339());
        store::save_archived_season(&tx, &season)?;
        info!(
            "  → Archived {} members and {} confederations",
            season.members.len(),
            season.confederations.len()
        );

        reset_live_scores(&mut data);
        for member in data.members.iter() {
            store::save_member(&tx, member)?;
        }
        info!("  → Reset scores of {} members\n", data.members.len());

        tx.commit().context("Failed to commit season archive")?;
        info!("=== Archive Complete ===");
        Ok(season)
    }

    pub fn list(&self) -> Result<Vec<SeasonSummary>> {
        let conn = database::get_connection(&self.pool)?;
        let data = database::load_app_data(&conn)?;
        Ok(data.archived_seasons.iter().map(SeasonSummary::from).collect())
    }

    pub fn print(&self) -> Result<()> {
        let seasons = self.list()?;
        if seasons.is_empty() {
            println!("No archived seasons.");
        }
        for season in seasons {
            println!(
                "{}  {}  ({})  {} members, {} confederations",
                season.id.dimmed(),
                season.name.bold(),
                season.date,
                season.member_count,
                season.confederation_count
            );
        }
        Ok(())
    }
}
