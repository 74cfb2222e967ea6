use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::{Confederation, Top100Entry};
use crate::scoring::top100_points_of;

use super::types::{Top100Achievement, Top100Standing};

/// Historical leaderboard built from Top-100 placements.
///
/// Every known confederation gets a row, active or not. Entries pointing at
/// confederations that no longer exist are dropped.
pub fn rank_top100(confederations: &[Confederation], history: &[Top100Entry]) -> Vec<Top100Standing> {
    let mut by_conf: HashMap<&str, Vec<Top100Achievement>> = confederations
        .iter()
        .map(|conf| (conf.id.as_str(), Vec::new()))
        .collect();

    for entry in history {
        if let Some(achievements) = by_conf.get_mut(entry.conf_id.as_str()) {
            achievements.push(to_achievement(entry));
        }
    }

    let mut standings: Vec<Top100Standing> = confederations
        .iter()
        .map(|conf| {
            let entries = by_conf.remove(conf.id.as_str()).unwrap_or_default();
            build_standing(conf, entries)
        })
        .collect();

    standings.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.conf_id.cmp(&b.conf_id)));
    standings
}

fn to_achievement(entry: &Top100Entry) -> Top100Achievement {
    Top100Achievement {
        entry_id: entry.id.clone(),
        season: entry.season.clone(),
        rank: entry.rank,
        earned_points: top100_points_of(entry.rank).total(),
    }
}

fn build_standing(conf: &Confederation, mut entries: Vec<Top100Achievement>) -> Top100Standing {
    entries.sort_by(compare_for_display);

    Top100Standing {
        conf_id: conf.id.clone(),
        conf_name: conf.name.clone(),
        conf_image: conf.image_url.clone(),
        points: entries.iter().map(|e| e.earned_points).sum(),
        entries,
    }
}

/// Newest season first. Numeric season labels sort numerically ahead of
/// free-form ones; within a season the best placement comes first.
fn compare_for_display(a: &Top100Achievement, b: &Top100Achievement) -> Ordering {
    let a_num = season_number(&a.season);
    let b_num = season_number(&b.season);

    let by_season = match (a_num, b_num) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.season.cmp(&a.season),
    };

    by_season
        .then_with(|| a.rank.cmp(&b.rank))
        .then_with(|| a.entry_id.cmp(&b.entry_id))
}

// Accepts labels like "15" as well as "Temporada 15".
fn season_number(label: &str) -> Option<i64> {
    let digits: String = label
        .trim()
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tier;

    fn conf(id: &str, active: bool) -> Confederation {
        Confederation {
            id: id.to_string(),
            name: format!("Conf {}", id),
            tier: Tier::Gold,
            image_url: None,
            active,
        }
    }

    fn entry(id: &str, conf_id: &str, season: &str, rank: i64) -> Top100Entry {
        Top100Entry {
            id: id.to_string(),
            conf_id: conf_id.to_string(),
            season: season.to_string(),
            rank,
            date_added: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_sums_points_and_bonus_per_confederation() {
        let confs = vec![conf("c1", true), conf("c2", true)];
        let history = vec![
            entry("t1", "c1", "14", 100),
            entry("t2", "c1", "15", 50),
            entry("t3", "c2", "15", 1),
        ];

        let ranking = rank_top100(&confs, &history);

        assert_eq!(ranking[0].conf_id, "c2");
        assert_eq!(ranking[0].points, 200);
        assert_eq!(ranking[1].conf_id, "c1");
        assert_eq!(ranking[1].points, 6 + 56);
    }

    #[test]
    fn test_inactive_and_empty_confederations_are_listed() {
        let confs = vec![conf("c1", false), conf("c2", true)];
        let history = vec![entry("t1", "c1", "3", 10)];

        let ranking = rank_top100(&confs, &history);

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].conf_id, "c1");
        assert_eq!(ranking[1].points, 0);
        assert!(ranking[1].entries.is_empty());
    }

    #[test]
    fn test_orphaned_entries_are_dropped() {
        let confs = vec![conf("c1", true)];
        let history = vec![entry("t1", "deleted", "3", 1), entry("t2", "c1", "3", 20)];

        let ranking = rank_top100(&confs, &history);

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].points, 91);
        assert_eq!(ranking[0].entries.len(), 1);
    }

    #[test]
    fn test_out_of_range_rank_contributes_nothing() {
        let confs = vec![conf("c1", true)];
        let history = vec![entry("t1", "c1", "3", 0), entry("t2", "c1", "4", 140)];

        let ranking = rank_top100(&confs, &history);
        assert_eq!(ranking[0].points, 0);
        assert_eq!(ranking[0].entries.len(), 2);
    }

    #[test]
    fn test_entries_sorted_by_season_descending() {
        let confs = vec![conf("c1", true)];
        let history = vec![
            entry("t1", "c1", "9", 30),
            entry("t2", "c1", "Especial", 5),
            entry("t3", "c1", "12", 40),
            entry("t4", "c1", "12", 2),
        ];

        let ranking = rank_top100(&confs, &history);
        let order: Vec<&str> = ranking[0].entries.iter().map(|e| e.entry_id.as_str()).collect();

        assert_eq!(order, vec!["t4", "t3", "t1", "t2"]);
    }

    #[test]
    fn test_season_number() {
        assert_eq!(season_number("15"), Some(15));
        assert_eq!(season_number("Temporada 15"), Some(15));
        assert_eq!(season_number("Especial"), None);
    }
}
