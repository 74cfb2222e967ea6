use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    rankings::{get_confederation_rankings, get_member_rankings, get_top100_rankings},
    seasons::{get_seasons, get_settings},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/rankings/confederations", get(get_confederation_rankings))
        .route("/api/rankings/members", get(get_member_rankings))
        .route("/api/rankings/top100", get(get_top100_rankings))
        .route("/api/seasons", get(get_seasons))
        .route("/api/settings", get(get_settings))
        .with_state(state)
}
