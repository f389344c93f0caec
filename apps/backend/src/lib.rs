pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::session::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SessionStore>,
}

impl AppState {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build the router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/add-card", post(routes::cards::add))
        .route("/api/cards", post(routes::cards::add))
        .route("/api/cards/{id}/hint", get(routes::cards::hint))
        .route("/api/study/practice", get(routes::study::practice))
        .route("/api/study/review", post(routes::study::review))
        .route("/api/buckets", get(routes::buckets::list))
        .route("/api/buckets/{number}", get(routes::buckets::get))
        .route("/api/progress", get(routes::progress::get))
        .route("/ws", get(routes::events::connect))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        seed_cards = config.seed_cards,
        missing_card = config.settings.missing_card.as_str(),
        hint_policy = config.settings.hint_policy.as_str(),
        mastery_threshold = config.settings.mastery_threshold,
        "Initializing session store..."
    );
    let store = SessionStore::with_settings(config.settings.clone(), config.seed_cards)?;

    let app = router(AppState::new(store))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use leitner_core::LeitnerSettings;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_responds() {
        let store = SessionStore::with_settings(LeitnerSettings::default(), false).unwrap();
        let app = router(AppState::new(store));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
