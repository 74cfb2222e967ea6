//! Coercion of raw document-tree JSON into the typed data model.
//!
//! Stored data may be partial (eventually consistent writes, older app
//! versions), so nothing here fails: missing or malformed fields fall back
//! to defaults and a warning is logged.

use log::warn;
use serde_json::{Map, Value};

use super::collection::MemberCollection;
use super::models::{
    AppData, ArchivedSeason, Attendance, Confederation, GameResult, GameScore, GlobalSettings,
    Member, Tier, Top100Entry, Week, Weeks, GAMES_PER_WEEK, WEEKS_PER_SEASON,
};

const ROOT_KEY: &str = "strongs_db";

pub fn sanitize_app_data(raw: &Value) -> AppData {
    let root = raw.get(ROOT_KEY).unwrap_or(raw);

    AppData {
        confederations: sanitize_confederations(root.get("confederations")),
        members: sanitize_members(members_node(root)),
        top100_history: sanitize_top100(root.get("top100History")),
        archived_seasons: sanitize_seasons(root.get("archivedSeasons")),
        settings: sanitize_settings(root.get("settings")),
    }
}

// Newer trees keep members as an id-keyed map under `membersConf`.
fn members_node(root: &Value) -> Option<&Value> {
    root.get("membersConf")
        .filter(|v| !v.is_null())
        .or_else(|| root.get("members"))
}

/// Collect the non-null items of an array or of an id-keyed object,
/// keeping the object key so it can stand in for a missing id.
fn collect_items(node: Option<&Value>) -> Vec<(Option<String>, &Value)> {
    match node {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(|item| (None, item))
            .collect(),
        Some(Value::Object(map)) => map
            .iter()
            .filter(|(_, item)| !item.is_null())
            .map(|(key, item)| (Some(key.clone()), item))
            .collect(),
        _ => Vec::new(),
    }
}

/// Look up slot `index` in either an array or an index-keyed object
fn slot(node: Option<&Value>, index: usize) -> Option<&Value> {
    let item = match node {
        Some(Value::Array(items)) => items.get(index),
        Some(Value::Object(map)) => map.get(&index.to_string()),
        _ => None,
    };
    item.filter(|v| !v.is_null())
}

fn str_field(obj: &Value, key: &str) -> Option<String> {
    match obj.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn record_id(obj: &Value, key: Option<String>, fallback: String) -> String {
    str_field(obj, "id")
        .filter(|id| !id.is_empty())
        .or(key)
        .unwrap_or(fallback)
}

pub fn sanitize_confederations(node: Option<&Value>) -> Vec<Confederation> {
    collect_items(node)
        .into_iter()
        .enumerate()
        .map(|(idx, (key, item))| sanitize_confederation(item, key, idx))
        .collect()
}

fn sanitize_confederation(item: &Value, key: Option<String>, idx: usize) -> Confederation {
    let id = record_id(item, key, format!("conf-{}", idx));

    let tier = match str_field(item, "tier") {
        Some(raw) => Tier::parse(&raw).unwrap_or_else(|| {
            warn!("Confederation {} has unknown tier '{}', using GOLD", id, raw);
            Tier::Gold
        }),
        None => {
            warn!("Confederation {} has no tier, using GOLD", id);
            Tier::Gold
        }
    };

    Confederation {
        name: str_field(item, "name").unwrap_or_default(),
        tier,
        image_url: str_field(item, "imageUrl").filter(|url| !url.is_empty()),
        active: item.get("active").and_then(Value::as_bool).unwrap_or(true),
        id,
    }
}

pub fn sanitize_members(node: Option<&Value>) -> MemberCollection {
    collect_items(node)
        .into_iter()
        .enumerate()
        .map(|(idx, (key, item))| sanitize_member(item, key, idx))
        .collect()
}

fn sanitize_member(item: &Value, key: Option<String>, idx: usize) -> Member {
    let id = record_id(item, key, format!("member-{}", idx));
    let weeks = sanitize_weeks(&id, item.get("weeks"));

    Member {
        name: str_field(item, "name").unwrap_or_default(),
        team_name: str_field(item, "teamName").unwrap_or_default(),
        conf_id: str_field(item, "confId").unwrap_or_default(),
        is_manager: item.get("isManager").and_then(Value::as_bool).unwrap_or(false),
        linked_user_id: str_field(item, "linkedUserId"),
        weeks,
        id,
    }
}

fn sanitize_weeks(member_id: &str, node: Option<&Value>) -> Weeks {
    let mut weeks = Weeks::default();
    for (week_idx, week) in weeks.iter_mut().enumerate().take(WEEKS_PER_SEASON) {
        let games = slot(node, week_idx).and_then(|w| w.get("games"));
        *week = sanitize_week(member_id, week_idx, games);
    }
    weeks
}

fn sanitize_week(member_id: &str, week_idx: usize, games: Option<&Value>) -> Week {
    let mut week = Week::default();
    for (game_idx, cell) in week.games.iter_mut().enumerate().take(GAMES_PER_WEEK) {
        if let Some(raw) = slot(games, game_idx) {
            *cell = sanitize_cell(member_id, week_idx, game_idx, raw);
        }
    }
    week
}

fn sanitize_cell(member_id: &str, week_idx: usize, game_idx: usize, raw: &Value) -> GameScore {
    let result = match str_field(raw, "result") {
        Some(value) => GameResult::parse(&value).unwrap_or_else(|| {
            warn!(
                "Member {} week {} game {}: unknown result '{}'",
                member_id, week_idx, game_idx, value
            );
            GameResult::None
        }),
        None => GameResult::None,
    };

    let attendance = match str_field(raw, "attendance") {
        Some(value) => Attendance::parse(&value).unwrap_or_else(|| {
            warn!(
                "Member {} week {} game {}: unknown attendance '{}'",
                member_id, week_idx, game_idx, value
            );
            Attendance::None
        }),
        None => Attendance::None,
    };

    GameScore { result, attendance }
}

pub fn sanitize_top100(node: Option<&Value>) -> Vec<Top100Entry> {
    collect_items(node)
        .into_iter()
        .enumerate()
        .map(|(idx, (key, item))| {
            let id = record_id(item, key, format!("top100-{}", idx));
            Top100Entry {
                conf_id: str_field(item, "confId").unwrap_or_default(),
                season: str_field(item, "season").unwrap_or_default(),
                rank: coerce_rank(&id, item.get("rank")),
                date_added: str_field(item, "dateAdded").unwrap_or_default(),
                id,
            }
        })
        .collect()
}

fn coerce_rank(entry_id: &str, node: Option<&Value>) -> i64 {
    let parsed = match node {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.unwrap_or_else(|| {
        warn!("Top-100 entry {} has no usable rank, scoring it as 0", entry_id);
        0
    })
}

pub fn sanitize_seasons(node: Option<&Value>) -> Vec<ArchivedSeason> {
    collect_items(node)
        .into_iter()
        .enumerate()
        .map(|(idx, (key, item))| ArchivedSeason {
            id: record_id(item, key, format!("season-{}", idx)),
            name: str_field(item, "name").unwrap_or_default(),
            date: str_field(item, "date").unwrap_or_default(),
            members: sanitize_members(item.get("members")),
            confederations: sanitize_confederations(item.get("confederations")),
        })
        .collect()
}

pub fn sanitize_settings(node: Option<&Value>) -> GlobalSettings {
    let raw_week = node
        .and_then(Value::as_object)
        .and_then(|map: &Map<String, Value>| map.get("activeWeek"))
        .and_then(Value::as_u64);

    match raw_week {
        Some(week) if (week as usize) < WEEKS_PER_SEASON => GlobalSettings {
            active_week: week as usize,
        },
        Some(week) => {
            warn!("Active week {} is out of range, using week 0", week);
            GlobalSettings::default()
        }
        None => GlobalSettings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_members_from_map_fill_missing_cells() {
        let raw = json!({
            "membersConf": {
                "m1": {
                    "name": "Ana",
                    "teamName": "Alpha FC",
                    "confId": "c1",
                    "weeks": [
                        { "games": [ { "result": "WIN", "attendance": "PRESENT" } ] }
                    ]
                }
            }
        });

        let data = sanitize_app_data(&raw);
        let member = data.members.get("m1").unwrap();

        assert_eq!(member.id, "m1");
        assert_eq!(member.weeks[0].games[0].result, GameResult::Win);
        assert_eq!(member.weeks[0].games[0].attendance, Attendance::Present);
        assert_eq!(member.weeks[0].games[1], GameScore::default());
        assert_eq!(member.weeks[3].games[3], GameScore::default());
    }

    #[test]
    fn test_sparse_index_keyed_weeks() {
        let raw = json!({
            "members": [
                null,
                {
                    "id": "m2",
                    "confId": "c1",
                    "weeks": { "2": { "games": { "1": { "result": "DRAW" } } } }
                }
            ]
        });

        let data = sanitize_app_data(&raw);
        let member = data.members.get("m2").unwrap();

        assert_eq!(data.members.len(), 1);
        assert_eq!(member.weeks[2].games[1].result, GameResult::Draw);
        assert_eq!(member.weeks[2].games[1].attendance, Attendance::None);
    }

    #[test]
    fn test_unknown_enum_values_become_none() {
        let raw = json!({
            "members": [{
                "id": "m1",
                "weeks": [{ "games": [{ "result": "FORFEIT", "attendance": "LATE" }] }]
            }]
        });

        let data = sanitize_app_data(&raw);
        assert_eq!(data.members.get("m1").unwrap().weeks[0].games[0], GameScore::default());
    }

    #[test]
    fn test_extra_weeks_are_ignored() {
        let week = json!({ "games": [{ "result": "WIN" }] });
        let raw = json!({ "members": [{ "id": "m1", "weeks": [week, week, week, week, week] }] });

        let data = sanitize_app_data(&raw);
        assert_eq!(data.members.get("m1").unwrap().cells().count(), 16);
    }

    #[test]
    fn test_confederation_defaults() {
        let raw = json!({
            "strongs_db": {
                "confederations": [
                    { "id": "c1", "name": "Alpha", "tier": "SUPREMA", "imageUrl": "" },
                    { "id": "c2", "name": "Beta", "tier": "BRONZE", "active": false }
                ]
            }
        });

        let data = sanitize_app_data(&raw);

        assert_eq!(data.confederations[0].tier, Tier::Supreme);
        assert!(data.confederations[0].active);
        assert_eq!(data.confederations[0].image_url, None);
        assert_eq!(data.confederations[1].tier, Tier::Gold);
        assert!(!data.confederations[1].active);
    }

    #[test]
    fn test_top100_rank_coercion() {
        let raw = json!({
            "top100History": [
                { "id": "t1", "confId": "c1", "season": "14", "rank": "7" },
                { "id": "t2", "confId": "c1", "season": "15", "rank": 12 },
                { "id": "t3", "confId": "c1", "season": "16" }
            ]
        });

        let data = sanitize_app_data(&raw);
        let ranks: Vec<i64> = data.top100_history.iter().map(|e| e.rank).collect();

        assert_eq!(ranks, vec![7, 12, 0]);
    }

    #[test]
    fn test_settings_out_of_range_week() {
        assert_eq!(sanitize_settings(Some(&json!({ "activeWeek": 2 }))).active_week, 2);
        assert_eq!(sanitize_settings(Some(&json!({ "activeWeek": 9 }))).active_week, 0);
        assert_eq!(sanitize_settings(None).active_week, 0);
    }

    #[test]
    fn test_archived_seasons_keep_own_snapshot() {
        let raw = json!({
            "archivedSeasons": [{
                "id": "s1",
                "name": "Temporada 14",
                "date": "2025-01-01T00:00:00Z",
                "members": [{ "id": "m9", "confId": "c9" }],
                "confederations": [{ "id": "c9", "name": "Old", "tier": "OURO" }]
            }]
        });

        let data = sanitize_app_data(&raw);
        let season = &data.archived_seasons[0];

        assert_eq!(season.members.len(), 1);
        assert_eq!(season.confederations[0].id, "c9");
        assert!(data.members.is_empty());
    }

    #[test]
    fn test_garbage_input_yields_empty_data() {
        let data = sanitize_app_data(&json!("not a tree"));
        assert_eq!(data, AppData::default());
    }
}
