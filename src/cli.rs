use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::{Attendance, GameResult, Tier, UserRole};

#[derive(Parser, Debug)]
#[command(author, version, about = "Strongs Brazil scoring and ranking backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the read-only rankings server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Replace the store with a JSON export of the portal's document tree
    Import {
        /// Path to the exported JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Print a leaderboard
    Rankings {
        #[arg(short, long, value_enum, default_value_t = RankingView::Confederations)]
        view: RankingView,
        /// Archived season ID (defaults to the current season)
        #[arg(short, long)]
        season: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List archived seasons
    Seasons,
    /// Archive the current season and reset all member scores
    Archive {
        /// Season name, e.g. "Temporada 15"
        #[arg(short, long)]
        name: String,
        #[arg(short, long, value_parser = parse_role)]
        role: UserRole,
    },
    /// Open a week for editing
    SetWeek {
        /// Week index (0-3)
        #[arg(short, long)]
        week: usize,
        #[arg(short, long, value_parser = parse_role)]
        role: UserRole,
    },
    /// Record a result and/or attendance for one game cell
    Record {
        #[arg(short, long)]
        member: String,
        /// Week index (0-3)
        #[arg(short, long)]
        week: usize,
        /// Game index within the week (0-3)
        #[arg(short, long)]
        game: usize,
        #[arg(long, value_parser = parse_result)]
        result: Option<GameResult>,
        #[arg(long, value_parser = parse_attendance)]
        attendance: Option<Attendance>,
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
        /// Confederations a manager may edit
        #[arg(long = "conf-scope")]
        conf_scope: Vec<String>,
    },
    /// Create or edit confederations
    Conf {
        #[clap(subcommand)]
        action: ConfAction,
    },
    /// Add or remove members
    Member {
        #[clap(subcommand)]
        action: MemberAction,
    },
    /// Maintain the Top-100 placement history
    Top100 {
        #[clap(subcommand)]
        action: Top100Action,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum ConfAction {
    /// Create a confederation, or overwrite the one with --id
    Save {
        #[arg(long)]
        id: Option<String>,
        #[arg(short, long)]
        name: String,
        #[arg(short, long, value_parser = parse_tier, default_value = "OURO")]
        tier: Tier,
        #[arg(long)]
        image_url: Option<String>,
        /// Save the confederation as inactive
        #[arg(long)]
        inactive: bool,
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
    },
    Activate {
        #[arg(short, long)]
        id: String,
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
    },
    Deactivate {
        #[arg(short, long)]
        id: String,
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum MemberAction {
    /// Add a member with an empty game grid
    Add {
        #[arg(short, long)]
        conf: String,
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        team: String,
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
    },
    Remove {
        #[arg(short, long)]
        id: String,
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Top100Action {
    /// Append a placement
    Add {
        #[arg(short, long)]
        conf: String,
        #[arg(short, long)]
        season: String,
        #[arg(long, allow_negative_numbers = true)]
        rank: i64,
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
    },
    /// Delete a placement
    Remove {
        #[arg(short, long)]
        id: String,
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingView {
    Confederations,
    Members,
    Top100,
}

fn parse_role(value: &str) -> Result<UserRole, String> {
    match value.trim().to_lowercase().as_str() {
        "user" => Ok(UserRole::User),
        "member" => Ok(UserRole::Member),
        "manager" | "gestor" => Ok(UserRole::Manager),
        "mod" => Ok(UserRole::Mod),
        "admin" => Ok(UserRole::Admin),
        "owner" | "dono" => Ok(UserRole::Owner),
        other => Err(format!("unknown role '{}'", other)),
    }
}

fn parse_tier(value: &str) -> Result<Tier, String> {
    Tier::parse(value).ok_or_else(|| format!("expected OURO, PLATINA, DIAMANTE or SUPREMA, got '{}'", value))
}

fn parse_result(value: &str) -> Result<GameResult, String> {
    GameResult::parse(value).ok_or_else(|| format!("expected WIN, DRAW, LOSS or NONE, got '{}'", value))
}

fn parse_attendance(value: &str) -> Result<Attendance, String> {
    Attendance::parse(value)
        .ok_or_else(|| format!("expected PRESENT, ABSENT, NO_TRAIN or NONE, got '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_command() {
        let cli = Cli::try_parse_from([
            "strongs-ranking", "record", "--member", "m1", "--week", "2", "--game", "0",
            "--result", "win", "--role", "manager", "--conf-scope", "c1", "--conf-scope", "c2",
        ])
        .unwrap();

        match cli.command {
            Command::Record { member, week, result, attendance, role, conf_scope, .. } => {
                assert_eq!(member, "m1");
                assert_eq!(week, 2);
                assert_eq!(result, Some(GameResult::Win));
                assert_eq!(attendance, None);
                assert_eq!(role, UserRole::Manager);
                assert_eq!(conf_scope, vec!["c1", "c2"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rankings_defaults() {
        let cli = Cli::try_parse_from(["strongs-ranking", "rankings"]).unwrap();

        assert_eq!(
            cli.command,
            Command::Rankings { view: RankingView::Confederations, season: None, json: false }
        );
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let parsed = Cli::try_parse_from(["strongs-ranking", "set-week", "--week", "1", "--role", "king"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_conf_save_defaults() {
        let cli = Cli::try_parse_from(["strongs-ranking", "conf", "save", "--name", "Alpha", "--role", "admin"])
            .unwrap();

        assert_eq!(
            cli.command,
            Command::Conf {
                action: ConfAction::Save {
                    id: None,
                    name: "Alpha".to_string(),
                    tier: Tier::Gold,
                    image_url: None,
                    inactive: false,
                    role: UserRole::Admin,
                }
            }
        );
    }

    #[test]
    fn test_conf_save_english_tier() {
        let cli = Cli::try_parse_from([
            "strongs-ranking", "conf", "save", "--id", "c1", "--name", "Alpha", "--tier", "diamond",
            "--inactive", "--role", "owner",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Command::Conf { action: ConfAction::Save { tier: Tier::Diamond, inactive: true, .. } }
        ));
    }

    #[test]
    fn test_member_add() {
        let cli = Cli::try_parse_from([
            "strongs-ranking", "member", "add", "--conf", "c1", "--name", "Ana", "--team", "Alpha FC",
            "--role", "mod",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Command::Member { action: MemberAction::Add { role: UserRole::Mod, .. } }
        ));
    }

    #[test]
    fn test_top100_add() {
        let cli = Cli::try_parse_from([
            "strongs-ranking", "top100", "add", "--conf", "c1", "--season", "15", "--rank", "7",
            "--role", "owner",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Command::Top100 { action: Top100Action::Add { rank: 7, role: UserRole::Owner, .. } }
        ));
    }
}
