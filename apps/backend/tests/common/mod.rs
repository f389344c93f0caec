//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up a server over an in-memory session
//! - Helpers for adding cards and reviewing them through the API

pub mod fixtures;

use axum_test::TestServer;
use leitner_core::LeitnerSettings;

use leitner_backend::services::session::SessionStore;
use leitner_backend::{router, AppState};

/// Test context wrapping a test server over a fresh session.
pub struct TestContext {
    pub server: TestServer,
}

impl TestContext {
    /// Empty session with default settings.
    pub fn new() -> Self {
        Self::with_settings(LeitnerSettings::default(), false)
    }

    /// Session seeded with the demo cards.
    pub fn seeded() -> Self {
        Self::with_settings(LeitnerSettings::default(), true)
    }

    pub fn with_settings(settings: LeitnerSettings, seed: bool) -> Self {
        let store = SessionStore::with_settings(settings, seed).expect("Failed to build store");
        let server =
            TestServer::new(router(AppState::new(store))).expect("Failed to start test server");
        Self { server }
    }

    /// Empty session served over a real HTTP transport, needed for WebSockets.
    pub fn with_http_transport() -> Self {
        let store = SessionStore::with_settings(LeitnerSettings::default(), false)
            .expect("Failed to build store");
        let server = TestServer::builder()
            .http_transport()
            .build(router(AppState::new(store)))
            .expect("Failed to start test server");
        Self { server }
    }

    /// Add a card through the API and return its id.
    pub async fn add_card(&self, front: &str, back: &str) -> String {
        let response = self
            .server
            .post("/api/cards")
            .json(&fixtures::add_card_request(front, back, None, &[]))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        body["card"]["id"]
            .as_str()
            .expect("card id in response")
            .to_string()
    }

    /// Review a card and return the bucket it landed in.
    pub async fn review(&self, card_id: &str, difficulty: &str) -> u64 {
        let response = self
            .server
            .post("/api/study/review")
            .json(&fixtures::review_request(card_id, difficulty))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        body["bucket"].as_u64().expect("bucket in response")
    }

    /// Fronts of the cards due on `day`.
    pub async fn due_fronts(&self, day: i64) -> Vec<String> {
        let response = self
            .server
            .get("/api/study/practice")
            .add_query_param("day", day)
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        fixtures::fronts(&body["cards"])
    }
}
