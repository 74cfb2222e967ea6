use anyhow::{anyhow, Result};
use colored::{ColoredString, Colorize};
use log::info;

use crate::cli::RankingView;
use crate::config::settings::AppConfig;
use crate::database::{self, DbPool};
use crate::ranking::{
    ConfederationStanding, MemberStanding, Rankings, SeasonSelection, Top100Standing,
};

pub struct RankingService {
    pool: DbPool,
}

impl RankingService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self::with_pool(database::create_pool(&config.storage.database_path)?))
    }

    pub fn with_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Compute all leaderboards from a fresh snapshot of the store
    pub fn compute(&self, selection: &SeasonSelection) -> Result<Rankings> {
        let conn = database::get_connection(&self.pool)?;
        let data = database::load_app_data(&conn)?;

        Rankings::compute(&data, selection).ok_or_else(|| match selection {
            SeasonSelection::Archived(id) => anyhow!("Archived season '{}' not found", id),
            SeasonSelection::Current => anyhow!("Current season unavailable"),
        })
    }

    pub fn run(&self, view: RankingView, selection: &SeasonSelection, json: bool) -> Result<()> {
        let rankings = self.compute(selection)?;
        info!("Computed rankings for {:?}", selection);

        let output = if json {
            render_json(&rankings, view)?
        } else {
            render_table(&rankings, view)
        };
        println!("{}", output);
        Ok(())
    }
}

fn render_json(rankings: &Rankings, view: RankingView) -> Result<String> {
    let json = match view {
        RankingView::Confederations => serde_json::to_string_pretty(&rankings.confederations)?,
        RankingView::Members => serde_json::to_string_pretty(&rankings.members)?,
        RankingView::Top100 => serde_json::to_string_pretty(&rankings.top100)?,
    };
    Ok(json)
}

pub fn render_table(rankings: &Rankings, view: RankingView) -> String {
    let lines: Vec<String> = match view {
        RankingView::Confederations => render_confederations(&rankings.confederations),
        RankingView::Members => render_members(&rankings.members),
        RankingView::Top100 => render_top100(&rankings.top100),
    };

    if lines.is_empty() {
        return "No entries.".to_string();
    }
    lines.join("\n")
}

// Gold, silver and bronze for the podium.
fn podium(position: usize, text: String) -> ColoredString {
    match position {
        0 => text.yellow().bold(),
        1 => text.white().bold(),
        2 => text.red(),
        _ => text.normal(),
    }
}

fn render_confederations(standings: &[ConfederationStanding]) -> Vec<String> {
    standings
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let head = podium(idx, format!("#{:<3} {:<28}", idx + 1, s.name));
            format!("{} {:<9} {:>3} members {:>10.2}", head, s.tier, s.member_count, s.total_points)
        })
        .collect()
}

fn render_members(standings: &[MemberStanding]) -> Vec<String> {
    standings
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let head = podium(idx, format!("#{:<3} {:<24}", idx + 1, s.name));
            format!("{} {:<20} {:<20} {:>10.2}", head, s.team_name, s.conf_name, s.points)
        })
        .collect()
}

fn render_top100(standings: &[Top100Standing]) -> Vec<String> {
    let mut lines = Vec::new();
    for (idx, s) in standings.iter().enumerate() {
        let head = podium(idx, format!("#{:<3} {:<28}", idx + 1, s.conf_name));
        lines.push(format!("{} {:>6} pts", head, s.points));
        for entry in &s.entries {
            lines.push(format!(
                "       season {:<10} Top {:<4} +{} pts",
                entry.season, entry.rank, entry.earned_points
            ));
        }
    }
    lines
}
