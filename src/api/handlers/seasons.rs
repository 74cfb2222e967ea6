use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{load_snapshot, AppState};
use crate::api::models::SeasonListResponse;
use crate::domain::SeasonSummary;

pub async fn get_seasons(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let data = match load_snapshot(&state) {
        Ok(data) => data,
        Err(response) => return response,
    };

    let items = data.archived_seasons.iter().map(SeasonSummary::from).collect();
    Json(SeasonListResponse { items }).into_response()
}

pub async fn get_settings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match load_snapshot(&state) {
        Ok(data) => Json(data.settings).into_response(),
        Err(response) => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::create_router;
    use crate::database::{create_memory_pool, get_connection, store};
    use crate::domain::{AppData, ArchivedSeason, GlobalSettings};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_state() -> Arc<AppState> {
        let pool = create_memory_pool().unwrap();
        let data = AppData {
            archived_seasons: vec![ArchivedSeason {
                id: "s1".to_string(),
                name: "Temporada 14".to_string(),
                date: "2024-12-01T00:00:00Z".to_string(),
                members: Default::default(),
                confederations: Vec::new(),
            }],
            settings: GlobalSettings { active_week: 2 },
            ..Default::default()
        };
        store::save_app_data(&get_connection(&pool).unwrap(), &data).unwrap();
        Arc::new(AppState { pool })
    }

    async fn get_json(uri: &str) -> Value {
        let response = create_router(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_seasons() {
        let body = get_json("/api/seasons").await;

        assert_eq!(body["items"][0]["id"], "s1");
        assert_eq!(body["items"][0]["name"], "Temporada 14");
        assert_eq!(body["items"][0]["memberCount"], 0);
    }

    #[tokio::test]
    async fn test_settings() {
        let body = get_json("/api/settings").await;
        assert_eq!(body["activeWeek"], 2);
    }
}
