use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::database;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let pool = database::create_pool(&self.config.storage.database_path)?;
        info!("Using store at {}", self.config.storage.database_path);

        let state = Arc::new(AppState { pool });

        let app = create_router(state).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
