use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::config::settings::AppConfig;
use crate::database::{self, setup, store, DbPool};
use crate::domain::{sanitize_app_data, AppData};
use crate::errors::with_parse_context;

pub struct ImportService {
    pool: DbPool,
}

impl ImportService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self::with_pool(database::create_pool(&config.storage.database_path)?))
    }

    pub fn with_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn run(&self, path: &Path) -> Result<AppData> {
        info!("=== Starting Import ===\n");

        // Step 1: Read and sanitize the export
        let data = self.read_export(path)?;
        info!(
            "  → Sanitized {} confederations, {} members, {} Top-100 entries, {} archived seasons",
            data.confederations.len(),
            data.members.len(),
            data.top100_history.len(),
            data.archived_seasons.len()
        );

        // Step 2: Replace the store in one transaction
        self.replace_store(&data)?;
        info!("  → Store replaced\n");

        info!("=== Import Complete ===");
        Ok(data)
    }

    fn read_export(&self, path: &Path) -> Result<AppData> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read export file {}", path.display()))?;
        let raw: serde_json::Value = with_parse_context(serde_json::from_str(&json), "export file")?;
        Ok(sanitize_app_data(&raw))
    }

    fn replace_store(&self, data: &AppData) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to start import transaction")?;

        setup::reset_database(&tx)?;
        store::save_app_data(&tx, data)?;

        tx.commit().context("Failed to commit import")
    }
}
