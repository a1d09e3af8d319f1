//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use creatorlink_core::clock::Clock;
use creatorlink_core::storage::KeyValueStore;
use creatorlink_directory::CreatorDirectory;
use creatorlink_storage::{FileStore, MemoryStore};
use creatorlink_test_support::{SequentialIdGenerator, SteppingClock};
use creatorlink_wizard::application::resume::ResumePolicy;
use http_body_util::BodyExt;
use tower::ServiceExt;

use creatorlink_api::routes;
use creatorlink_api::state::AppState;

/// Clock starting at a fixed timestamp and ticking one second per read.
fn test_clock() -> Arc<dyn Clock> {
    Arc::new(SteppingClock::starting_at(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build state over `store` with deterministic clock and ids.
pub fn build_state(store: Arc<dyn KeyValueStore>, policy: ResumePolicy) -> AppState {
    AppState::new(
        store,
        policy,
        CreatorDirectory::builtin().unwrap(),
        test_clock(),
        Arc::new(SequentialIdGenerator::new("campaign")),
    )
}

/// Build in-memory app state.
pub fn memory_state() -> AppState {
    build_state(Arc::new(MemoryStore::new()), ResumePolicy::AlwaysRestart)
}

/// Build app state over a file store rooted at `dir`, as a server restart
/// would.
pub fn file_state(dir: &Path, policy: ResumePolicy) -> AppState {
    build_state(Arc::new(FileStore::open(dir).unwrap()), policy)
}

/// Build the full app router. Uses the same route structure as `main.rs`.
pub fn build_test_app(state: &AppState) -> Router {
    routes::app(state.clone())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    state: &AppState,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(build_test_app(state), request).await
}

/// Send a POST request without a body and return the response.
pub async fn post_empty(state: &AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(build_test_app(state), request).await
}

/// Send a GET request and return the response.
pub async fn get_json(state: &AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(build_test_app(state), request).await
}

/// Apply one draft command through the API.
pub async fn command(state: &AppState, body: serde_json::Value) -> serde_json::Value {
    let (status, json) = post_json(state, "/api/v1/wizard/commands", &body).await;
    assert_eq!(status, StatusCode::OK, "command {body} failed: {json}");
    json
}

/// Fill every step with the canonical booking of creator "7".
pub async fn fill_every_step(state: &AppState) {
    let (status, _) = post_json(
        state,
        "/api/v1/wizard/start",
        &serde_json::json!({ "creator_id": "7" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    for body in [
        serde_json::json!({ "command": "set_objective", "objective": "Sales" }),
        serde_json::json!({ "command": "set_brief", "brief": "b".repeat(130) }),
        serde_json::json!({ "command": "set_link", "link": "https://example.com/post" }),
        serde_json::json!({ "command": "set_budget", "budget": 5000 }),
        serde_json::json!({ "command": "toggle_platform", "platform": "Instagram Reels" }),
    ] {
        command(state, body).await;
    }
}

/// Advance until the wizard stops moving and return the final step name.
pub async fn advance_until_stuck(state: &AppState) -> String {
    let mut step = String::new();
    loop {
        let (status, json) = post_empty(state, "/api/v1/wizard/advance").await;
        assert_eq!(status, StatusCode::OK);
        let next = json["current_step"].as_str().unwrap().to_owned();
        if next == step {
            return step;
        }
        step = next;
    }
}
