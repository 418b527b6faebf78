//! In-process stand-in for the HackMD API used by tests.
//!
//! Serves the subset of `/v1` the tools call, keeps notes in memory and counts
//! every request it receives (authorized or not).

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Map, Value, json};

use crate::config::HackMdConfig;
use crate::hackmd::HackMdClient;

pub(crate) const TEST_TOKEN: &str = "test-token";
pub(crate) const TEST_TEAM: &str = "my-team";

#[derive(Clone, Default)]
struct MockState {
    notes: Arc<Mutex<BTreeMap<String, Value>>>,
    hits: Arc<AtomicUsize>,
    next_id: Arc<AtomicUsize>,
}

pub(crate) struct MockHackMd {
    base_url: String,
    state: MockState,
}

impl MockHackMd {
    /// Bind to an ephemeral port and serve until the test runtime shuts down.
    pub(crate) async fn start() -> Self {
        init_crypto();
        let state = MockState::default();

        let api = Router::new()
            .route("/me", get(get_me))
            .route("/teams", get(get_teams))
            .route("/history", get(get_history))
            .route("/notes", get(list_notes).post(create_note))
            .route(
                "/notes/{id}",
                get(get_note).patch(update_note).delete(delete_note),
            )
            .route(
                "/teams/{team}/notes",
                get(list_team_notes).post(create_team_note),
            )
            .route(
                "/teams/{team}/notes/{id}",
                axum::routing::patch(update_team_note).delete(delete_team_note),
            )
            .route_layer(middleware::from_fn_with_state(state.clone(), require_token))
            .with_state(state.clone());

        let app = Router::new().nest("/v1", api);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/v1"),
            state,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of requests received so far.
    pub(crate) fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub(crate) fn config(&self) -> HackMdConfig {
        self.config_with_token(TEST_TOKEN)
    }

    pub(crate) fn config_with_token(&self, token: &str) -> HackMdConfig {
        HackMdConfig {
            api_token: token.to_string(),
            api_url: self.base_url.clone(),
        }
    }

    pub(crate) fn client(&self) -> HackMdClient {
        HackMdClient::new(&self.config()).unwrap()
    }

    /// Stored note, looked up by id regardless of owner.
    pub(crate) fn note(&self, id: &str) -> Option<Value> {
        self.state.notes.lock().unwrap().get(id).cloned()
    }
}

pub(crate) fn init_crypto() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

async fn require_token(State(state): State<MockState>, request: Request, next: Next) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let expected = format!("Bearer {TEST_TOKEN}");
    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str());

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        )
            .into_response();
    }
    next.run(request).await
}

async fn get_me() -> Json<Value> {
    Json(json!({
        "id": "user-1",
        "name": "Test User",
        "email": "test@example.com",
        "userPath": "test-user",
    }))
}

async fn get_teams() -> Json<Value> {
    Json(json!([{ "id": "team-1", "path": TEST_TEAM, "name": "My Team" }]))
}

async fn get_history() -> Json<Value> {
    Json(json!([{ "id": "read-1", "title": "Previously read" }]))
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Note not found" })),
    )
        .into_response()
}

fn insert_note(state: &MockState, team: Option<&str>, payload: Value) -> Value {
    let id = format!("note-{}", state.next_id.fetch_add(1, Ordering::SeqCst) + 1);

    let mut note = match payload {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    note.insert("id".to_string(), json!(id));
    note.insert("teamPath".to_string(), json!(team));

    let note = Value::Object(note);
    state.notes.lock().unwrap().insert(id, note.clone());
    note
}

fn notes_for(state: &MockState, team: Option<&str>) -> Vec<Value> {
    state
        .notes
        .lock()
        .unwrap()
        .values()
        .filter(|note| note["teamPath"].as_str() == team)
        .cloned()
        .collect()
}

fn patch_note(state: &MockState, team: Option<&str>, id: &str, payload: Value) -> Response {
    let mut notes = state.notes.lock().unwrap();
    let Some(Value::Object(note)) = notes.get_mut(id) else {
        return not_found();
    };
    if note.get("teamPath").and_then(Value::as_str) != team {
        return not_found();
    }
    if let Value::Object(fields) = payload {
        note.extend(fields);
    }
    StatusCode::ACCEPTED.into_response()
}

fn remove_note(state: &MockState, team: Option<&str>, id: &str) -> Response {
    let mut notes = state.notes.lock().unwrap();
    let owned = notes
        .get(id)
        .is_some_and(|note| note["teamPath"].as_str() == team);
    if !owned {
        return not_found();
    }
    notes.remove(id);
    StatusCode::NO_CONTENT.into_response()
}

async fn list_notes(State(state): State<MockState>) -> Json<Value> {
    Json(Value::Array(notes_for(&state, None)))
}

async fn create_note(State(state): State<MockState>, Json(payload): Json<Value>) -> Response {
    (StatusCode::CREATED, Json(insert_note(&state, None, payload))).into_response()
}

async fn get_note(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    match state.notes.lock().unwrap().get(&id) {
        Some(note) => Json(note.clone()).into_response(),
        None => not_found(),
    }
}

async fn update_note(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Response {
    patch_note(&state, None, &id, payload)
}

async fn delete_note(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    remove_note(&state, None, &id)
}

async fn list_team_notes(State(state): State<MockState>, Path(team): Path<String>) -> Json<Value> {
    Json(Value::Array(notes_for(&state, Some(&team))))
}

async fn create_team_note(
    State(state): State<MockState>,
    Path(team): Path<String>,
    Json(payload): Json<Value>,
) -> Response {
    (
        StatusCode::CREATED,
        Json(insert_note(&state, Some(&team), payload)),
    )
        .into_response()
}

async fn update_team_note(
    State(state): State<MockState>,
    Path((team, id)): Path<(String, String)>,
    Json(payload): Json<Value>,
) -> Response {
    patch_note(&state, Some(&team), &id, payload)
}

async fn delete_team_note(
    State(state): State<MockState>,
    Path((team, id)): Path<(String, String)>,
) -> Response {
    remove_note(&state, Some(&team), &id)
}
