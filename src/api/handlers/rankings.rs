use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;

use super::{error_response, load_snapshot, AppState, SeasonParams};
use crate::api::models::{with_ranks, RankingResponse};
use crate::domain::AppData;
use crate::ranking::{rank_confederations, rank_members, rank_top100, resolve_source, RankingSource, SeasonSelection};

pub async fn get_confederation_rankings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SeasonParams>,
) -> impl IntoResponse {
    season_view(&state, params, |source| {
        rank_confederations(source.confederations, source.members)
    })
}

pub async fn get_member_rankings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SeasonParams>,
) -> impl IntoResponse {
    season_view(&state, params, |source| rank_members(source.confederations, source.members))
}

pub async fn get_top100_rankings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let data = match load_snapshot(&state) {
        Ok(data) => data,
        Err(response) => return response,
    };

    let items = with_ranks(rank_top100(&data.confederations, &data.top100_history));
    Json(RankingResponse { season: None, items }).into_response()
}

fn season_view<T, F>(state: &AppState, params: SeasonParams, rank: F) -> Response
where
    T: Serialize,
    F: Fn(RankingSource<'_>) -> Vec<T>,
{
    let data: AppData = match load_snapshot(state) {
        Ok(data) => data,
        Err(response) => return response,
    };

    let selection = SeasonSelection::from_param(params.season.as_deref());
    let Some(source) = resolve_source(&data, &selection) else {
        return error_response(
            StatusCode::NOT_FOUND,
            format!("Season '{}' not found", params.season.unwrap_or_default()),
        );
    };

    let season = match selection {
        SeasonSelection::Current => None,
        SeasonSelection::Archived(id) => Some(id),
    };
    Json(RankingResponse { season, items: with_ranks(rank(source)) }).into_response()
}
