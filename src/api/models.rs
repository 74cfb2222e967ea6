use serde::Serialize;

use crate::domain::SeasonSummary;

/// Leaderboard row with its 1-based position
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ranked<T> {
    pub rank: usize,
    #[serde(flatten)]
    pub row: T,
}

pub fn with_ranks<T>(rows: Vec<T>) -> Vec<Ranked<T>> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| Ranked { rank: i + 1, row })
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse<T> {
    /// Archived season ID, or `None` for the live season
    pub season: Option<String>,
    pub items: Vec<Ranked<T>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonListResponse {
    pub items: Vec<SeasonSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
}
