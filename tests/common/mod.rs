#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Canned answer for one scientific name
#[derive(Clone)]
pub enum Canned {
    Json(Value),
    Status(StatusCode),
    Raw(&'static str),
}

/// Local stand-in for the WoRMS REST API
pub struct WormsStub {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    names: Arc<Mutex<Vec<String>>>,
}

impl WormsStub {
    /// Number of `AphiaRecordsByName` requests received
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Decoded names requested, in order
    pub fn requested_names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct StubState {
    responses: Arc<HashMap<String, Canned>>,
    hits: Arc<AtomicUsize>,
    names: Arc<Mutex<Vec<String>>>,
}

async fn records_by_name(
    State(state): State<StubState>,
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.names.lock().unwrap().push(name.clone());

    // Reject requests missing the exact-match and marine-only flags
    if params.get("like").map(String::as_str) != Some("false")
        || params.get("marine_only").map(String::as_str) != Some("true")
    {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match state.responses.get(&name) {
        Some(Canned::Json(value)) => axum::Json(value.clone()).into_response(),
        Some(Canned::Status(status)) => (*status).into_response(),
        Some(Canned::Raw(body)) => (StatusCode::OK, *body).into_response(),
        // WoRMS answers 204 with an empty body when nothing matches
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Spawn a stub on an ephemeral port answering from `responses`
pub async fn spawn_worms_stub(responses: HashMap<String, Canned>) -> WormsStub {
    let hits = Arc::new(AtomicUsize::new(0));
    let names = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        responses: Arc::new(responses),
        hits: hits.clone(),
        names: names.clone(),
    };

    let app = Router::new()
        .route("/AphiaRecordsByName/:name", get(records_by_name))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    WormsStub {
        base_url: format!("http://{}", addr),
        hits,
        names,
    }
}

/// Base URL of a port that was bound and released, so connections are refused
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway address");
    drop(listener);
    format!("http://{}", addr)
}

/// Upstream record fixture in WoRMS wire format
pub fn aphia_record(
    name: &str,
    authority: &str,
    class: &str,
    order: &str,
    family: &str,
) -> Value {
    json!({
        "AphiaID": 1,
        "scientificname": name,
        "authority": authority,
        "rank": "Species",
        "status": "accepted",
        "valid_name": name,
        "kingdom": "Animalia",
        "phylum": "Chordata",
        "class": class,
        "order": order,
        "family": family,
        "isMarine": 1
    })
}

pub fn thunnus_thynnus() -> Value {
    aphia_record("Thunnus thynnus", "Linnaeus, 1758", "Teleostei", "Scombriformes", "Scombridae")
}

/// Assert `text` appears in rendered HTML. Characters the HTML escaper
/// rewrites are skipped, so each run between them must appear verbatim.
pub fn assert_contains_text(html: &str, text: &str) {
    for part in text.split(|c: char| matches!(c, '<' | '>' | '&' | '"' | '\'' | '/')) {
        assert!(html.contains(part), "missing {:?} in rendered page", part);
    }
}
