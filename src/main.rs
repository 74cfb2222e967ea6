use anyhow::Result;

use strongs_ranking::cli::Command;
use strongs_ranking::{
    handle_archive, handle_completions, handle_conf, handle_import, handle_member, handle_rankings,
    handle_record, handle_seasons, handle_serve, handle_set_week, handle_top100, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Import { file } => handle_import(file),
        Command::Rankings { view, season, json } => {
            handle_rankings(*view, season.as_deref(), *json)
        }
        Command::Seasons => handle_seasons(),
        Command::Archive { name, role } => handle_archive(name, *role),
        Command::SetWeek { week, role } => handle_set_week(*week, *role),
        Command::Record {
            member,
            week,
            game,
            result,
            attendance,
            role,
            conf_scope,
        } => handle_record(member, *week, *game, *result, *attendance, *role, conf_scope),
        Command::Conf { action } => handle_conf(action),
        Command::Member { action } => handle_member(action),
        Command::Top100 { action } => handle_top100(action),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
