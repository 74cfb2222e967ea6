use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use serde::Deserialize;

use crate::api::models::ErrorResponse;
use crate::database;
use crate::domain::AppData;

pub mod rankings;
pub mod seasons;

pub struct AppState {
    pub pool: Pool<SqliteConnectionManager>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SeasonParams {
    pub season: Option<String>,
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { error: message.into() })).into_response()
}

/// Read one consistent snapshot of the store for a request
pub(crate) fn load_snapshot(state: &AppState) -> Result<AppData, Response> {
    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error")),
    };

    database::load_app_data(&conn).map_err(|e| {
        log::error!("Failed to load store: {:#}", e);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
    })
}
