use serde::Serialize;

use super::models::{AppData, ArchivedSeason};

/// Listing view of an archived season
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    pub id: String,
    pub name: String,
    pub date: String,
    pub member_count: usize,
    pub confederation_count: usize,
}

impl From<&ArchivedSeason> for SeasonSummary {
    fn from(season: &ArchivedSeason) -> Self {
        Self {
            id: season.id.clone(),
            name: season.name.clone(),
            date: season.date.clone(),
            member_count: season.members.len(),
            confederation_count: season.confederations.len(),
        }
    }
}

/// Deep copy of the live members and confederations
pub fn snapshot_season(data: &AppData, id: &str, name: &str, date: &str) -> ArchivedSeason {
    ArchivedSeason {
        id: id.to_string(),
        name: name.trim().to_string(),
        date: date.to_string(),
        members: data.members.clone(),
        confederations: data.confederations.clone(),
    }
}

/// Clear every live member's game grid for the next season
pub fn reset_live_scores(data: &mut AppData) {
    for member in data.members.iter_mut() {
        member.clear_weeks();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Attendance, GameResult, Member};

    fn data_with_scores() -> AppData {
        let mut member = Member::new("m1", "Ana", "Alpha FC", "c1");
        member.weeks[0].games[0].result = GameResult::Win;
        member.weeks[3].games[1].attendance = Attendance::Present;

        AppData {
            members: vec![member].into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_snapshot_is_independent_of_reset() {
        let mut data = data_with_scores();
        let season = snapshot_season(&data, "1", " Temporada 15 ", "2025-04-01T00:00:00Z");

        reset_live_scores(&mut data);

        assert_eq!(season.name, "Temporada 15");
        assert_eq!(season.members.get("m1").unwrap().weeks[0].games[0].result, GameResult::Win);
        assert!(data.members.get("m1").unwrap().cells().all(|c| c.result == GameResult::None));
    }

    #[test]
    fn test_summary_counts() {
        let data = data_with_scores();
        let season = snapshot_season(&data, "1", "T15", "2025-04-01T00:00:00Z");
        let summary = SeasonSummary::from(&season);

        assert_eq!(summary.member_count, 1);
        assert_eq!(summary.confederation_count, 0);
    }
}
