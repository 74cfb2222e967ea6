use anyhow::{anyhow, Context, Result};
use log::info;

use crate::config::settings::AppConfig;
use crate::database::{self, store, DbPool};
use crate::domain::editing::{apply_cell_update, authorize_cell_edit, set_active_week};
use crate::domain::{Actor, CellUpdate, GlobalSettings, Member};

pub struct EditingService {
    pool: DbPool,
}

impl EditingService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self::with_pool(database::create_pool(&config.storage.database_path)?))
    }

    pub fn with_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Change one game cell of a member, subject to the week lock and the
    /// actor's role
    pub fn record_game(&self, actor: &Actor, member_id: &str, update: &CellUpdate) -> Result<Member> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to start edit transaction")?;

        let data = database::load_app_data(&tx)?;
        let mut member = data
            .members
            .get(member_id)
            .cloned()
            .ok_or_else(|| anyhow!("Member '{}' not found", member_id))?;
        let conf = data.find_confederation(&member.conf_id);

        authorize_cell_edit(actor, &member, conf, update, &data.settings)?;
        apply_cell_update(&mut member, update)?;
        store::save_member(&tx, &member)?;

        tx.commit().context("Failed to commit score edit")?;
        info!(
            "Recorded week {} game {} for member {}: {:?}",
            update.week,
            update.game,
            member.id,
            member.weeks[update.week].games[update.game]
        );
        Ok(member)
    }

    /// Open `week` for non-owner editing
    pub fn set_active_week(&self, actor: &Actor, week: usize) -> Result<GlobalSettings> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to start settings transaction")?;

        let mut settings = store::load_settings(&tx)?;
        set_active_week(actor, &mut settings, week)?;
        store::save_settings(&tx, &settings)?;

        tx.commit().context("Failed to commit active week")?;

        info!("Active week set to {}", settings.active_week);
        Ok(settings)
    }
}
