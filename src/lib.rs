pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod ranking;
pub mod scoring;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::io;
use std::path::Path;

use crate::cli::{Command, ConfAction, MemberAction, RankingView, Top100Action};
use crate::config::settings::AppConfig;
use crate::domain::{Actor, Attendance, CellUpdate, ConfederationDraft, GameResult, UserRole};
use crate::ranking::SeasonSelection;
use crate::services::editing::EditingService;
use crate::services::history::HistoryService;
use crate::services::import::ImportService;
use crate::services::ranking::RankingService;
use crate::services::roster::RosterService;
use crate::services::season::SeasonService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: Option<u16>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let port = port.unwrap_or(config.server.default_port);
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_import(file: &Path) -> Result<()> {
    let service = ImportService::new(&AppConfig::new())?;
    service.run(file)?;
    Ok(())
}

pub fn handle_rankings(view: RankingView, season: Option<&str>, json: bool) -> Result<()> {
    let service = RankingService::new(&AppConfig::new())?;
    service.run(view, &SeasonSelection::from_param(season), json)
}

pub fn handle_seasons() -> Result<()> {
    let service = SeasonService::new(&AppConfig::new())?;
    service.print()
}

pub fn handle_archive(name: &str, role: UserRole) -> Result<()> {
    let service = SeasonService::new(&AppConfig::new())?;
    let season = service.archive(&Actor::new(role), name)?;
    println!("Archived season '{}' as {}", season.name, season.id);
    Ok(())
}

pub fn handle_set_week(week: usize, role: UserRole) -> Result<()> {
    let service = EditingService::new(&AppConfig::new())?;
    service.set_active_week(&Actor::new(role), week)?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_record(
    member: &str,
    week: usize,
    game: usize,
    result: Option<GameResult>,
    attendance: Option<Attendance>,
    role: UserRole,
    conf_scope: &[String],
) -> Result<()> {
    let service = EditingService::new(&AppConfig::new())?;
    let actor = Actor::with_scope(role, conf_scope.to_vec());
    let update = CellUpdate {
        week,
        game,
        result,
        attendance,
    };
    service.record_game(&actor, member, &update)?;
    Ok(())
}

pub fn handle_conf(action: &ConfAction) -> Result<()> {
    let service = RosterService::new(&AppConfig::new())?;
    let conf = match action {
        ConfAction::Save {
            id,
            name,
            tier,
            image_url,
            inactive,
            role,
        } => {
            let draft = ConfederationDraft {
                id: id.clone(),
                name: name.clone(),
                tier: *tier,
                image_url: image_url.clone(),
                active: !inactive,
            };
            service.upsert_confederation(&Actor::new(*role), draft)?
        }
        ConfAction::Activate { id, role } => service.set_confederation_active(&Actor::new(*role), id, true)?,
        ConfAction::Deactivate { id, role } => {
            service.set_confederation_active(&Actor::new(*role), id, false)?
        }
    };
    println!("Saved confederation {} ({})", conf.name, conf.id);
    Ok(())
}

pub fn handle_member(action: &MemberAction) -> Result<()> {
    let service = RosterService::new(&AppConfig::new())?;
    match action {
        MemberAction::Add {
            conf,
            name,
            team,
            role,
        } => {
            let member = service.add_member(&Actor::new(*role), conf, name, team)?;
            println!("Added member {} ({})", member.name, member.id);
        }
        MemberAction::Remove { id, role } => service.remove_member(&Actor::new(*role), id)?,
    }
    Ok(())
}

pub fn handle_top100(action: &Top100Action) -> Result<()> {
    let service = HistoryService::new(&AppConfig::new())?;
    match action {
        Top100Action::Add {
            conf,
            season,
            rank,
            role,
        } => {
            let entry = service.add_entry(&Actor::new(*role), conf, season, *rank)?;
            println!("Added Top-100 entry {}", entry.id);
        }
        Top100Action::Remove { id, role } => service.remove_entry(&Actor::new(*role), id)?,
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
