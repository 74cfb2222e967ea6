use serde::Serialize;

use crate::domain::{AppData, Confederation, MemberCollection};

use super::confederations::rank_confederations;
use super::members::rank_members;
use super::top100::rank_top100;
use super::types::{ConfederationStanding, MemberStanding, Top100Standing};

/// Which member/confederation data the season-scoped views read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SeasonSelection {
    #[default]
    Current,
    Archived(String),
}

impl SeasonSelection {
    /// `None`, an empty string or "current" select the live season
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None | Some("") => SeasonSelection::Current,
            Some(id) if id.eq_ignore_ascii_case("current") => SeasonSelection::Current,
            Some(id) => SeasonSelection::Archived(id.to_string()),
        }
    }
}

/// Borrowed member and confederation collections for one season
#[derive(Debug, Clone, Copy)]
pub struct RankingSource<'a> {
    pub confederations: &'a [Confederation],
    pub members: &'a MemberCollection,
}

/// Resolve a selection against a snapshot; `None` if the archive is unknown
pub fn resolve_source<'a>(data: &'a AppData, selection: &SeasonSelection) -> Option<RankingSource<'a>> {
    match selection {
        SeasonSelection::Current => Some(RankingSource {
            confederations: &data.confederations,
            members: &data.members,
        }),
        SeasonSelection::Archived(id) => data.find_season(id).map(|season| RankingSource {
            confederations: &season.confederations,
            members: &season.members,
        }),
    }
}

/// All three leaderboards computed from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rankings {
    pub confederations: Vec<ConfederationStanding>,
    pub members: Vec<MemberStanding>,
    pub top100: Vec<Top100Standing>,
}

impl Rankings {
    /// Season-scoped views follow `selection`; the Top-100 view always uses
    /// the live confederations since history is not archived per season.
    pub fn compute(data: &AppData, selection: &SeasonSelection) -> Option<Self> {
        let source = resolve_source(data, selection)?;

        Some(Self {
            confederations: rank_confederations(source.confederations, source.members),
            members: rank_members(source.confederations, source.members),
            top100: rank_top100(&data.confederations, &data.top100_history),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArchivedSeason, GameResult, Member, Tier, Top100Entry};

    fn conf(id: &str, name: &str, tier: Tier) -> Confederation {
        Confederation {
            id: id.to_string(),
            name: name.to_string(),
            tier,
            image_url: None,
            active: true,
        }
    }

    fn winner(id: &str, conf_id: &str) -> Member {
        let mut member = Member::new(id, id, "Team", conf_id);
        member.weeks[0].games[0].result = GameResult::Win;
        member
    }

    fn sample_data() -> AppData {
        let archived_members: MemberCollection = vec![winner("old-1", "c-old"), winner("old-2", "c-old")].into();

        AppData {
            confederations: vec![conf("c1", "Alpha", Tier::Supreme)],
            members: vec![winner("m1", "c1")].into(),
            top100_history: vec![Top100Entry {
                id: "t1".to_string(),
                conf_id: "c1".to_string(),
                season: "15".to_string(),
                rank: 3,
                date_added: "2025-03-01T00:00:00Z".to_string(),
            }],
            archived_seasons: vec![ArchivedSeason {
                id: "s1".to_string(),
                name: "Temporada 14".to_string(),
                date: "2025-02-01T00:00:00Z".to_string(),
                members: archived_members,
                confederations: vec![conf("c-old", "Legacy", Tier::Gold)],
            }],
            settings: Default::default(),
        }
    }

    #[test]
    fn test_selection_from_param() {
        assert_eq!(SeasonSelection::from_param(None), SeasonSelection::Current);
        assert_eq!(SeasonSelection::from_param(Some("")), SeasonSelection::Current);
        assert_eq!(SeasonSelection::from_param(Some("CURRENT")), SeasonSelection::Current);
        assert_eq!(
            SeasonSelection::from_param(Some("s1")),
            SeasonSelection::Archived("s1".to_string())
        );
    }

    #[test]
    fn test_current_season_uses_live_data() {
        let data = sample_data();
        let rankings = Rankings::compute(&data, &SeasonSelection::Current).unwrap();

        assert_eq!(rankings.confederations.len(), 1);
        assert_eq!(rankings.confederations[0].total_points, 4.5);
        assert_eq!(rankings.members[0].member_id, "m1");
    }

    #[test]
    fn test_archived_season_uses_only_snapshot() {
        let data = sample_data();
        let rankings = Rankings::compute(&data, &SeasonSelection::Archived("s1".to_string())).unwrap();

        assert_eq!(rankings.confederations.len(), 1);
        assert_eq!(rankings.confederations[0].conf_id, "c-old");
        assert_eq!(rankings.confederations[0].total_points, 6.0);
        assert!(rankings.members.iter().all(|m| m.member_id.starts_with("old-")));
    }

    #[test]
    fn test_top100_ignores_season_selection() {
        let data = sample_data();
        let current = Rankings::compute(&data, &SeasonSelection::Current).unwrap();
        let archived = Rankings::compute(&data, &SeasonSelection::Archived("s1".to_string())).unwrap();

        assert_eq!(current.top100, archived.top100);
        assert_eq!(archived.top100[0].conf_name, "Alpha");
        assert_eq!(archived.top100[0].points, 138);
    }

    #[test]
    fn test_unknown_archive_resolves_to_none() {
        let data = sample_data();
        assert!(resolve_source(&data, &SeasonSelection::Archived("nope".to_string())).is_none());
        assert!(Rankings::compute(&data, &SeasonSelection::Archived("nope".to_string())).is_none());
    }

    #[test]
    fn test_repeated_computation_is_identical() {
        let data = sample_data();
        let first = Rankings::compute(&data, &SeasonSelection::Current).unwrap();
        let second = Rankings::compute(&data, &SeasonSelection::Current).unwrap();

        assert_eq!(first, second);
        let bits = |r: &Rankings| r.members.iter().map(|m| m.points.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first), bits(&second));
    }
}
