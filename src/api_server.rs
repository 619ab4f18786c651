// Axum Server Module
//
// Purpose: serve the home page and one HTML page per ocean zone, each zone page
// enriched with a live WoRMS lookup. Lookup failures never surface here: a zone
// page renders with status 200 whether or not the upstream answered.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use askama::Template;

use std::sync::Arc;

use crate::assembler::PageAssembler;
use crate::config::ServerConfig;
use crate::lookup::WormsClient;
use crate::view_models::{HomePage, ZonePage};
use crate::web::{HomeTemplate, ZoneTemplate};
use crate::zones::Zone;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub assembler: Arc<PageAssembler>,
    pub public_dir: String,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing WoRMS client ({})...", config.worms_base_url);
        let client = WormsClient::new(config.worms_base_url.as_str())?;

        Ok(Self {
            assembler: Arc::new(PageAssembler::new(client)),
            public_dir: config.public_dir.clone(),
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Home
        .route("/", get(home_page))

        // Health check
        .route("/health", get(health_check))

        // Zone view model (JSON)
        .route("/api/zones/:zone", get(get_zone));

    // One HTML route per zone, all served by the same handler
    for zone in Zone::ALL {
        router = router.route(
            zone.path(),
            get(move |state: State<AppState>| zone_page(state, zone)),
        );
    }

    // Anything else: static assets (css, images)
    let assets = ServeDir::new(&state.public_dir);

    router
        .fallback_service(assets)
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip compression
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// GET / - Home page, no lookup
async fn home_page() -> Result<Html<String>, AppError> {
    let page = HomePage::new();
    let html = HomeTemplate::new(&page).render()?;
    Ok(Html(html))
}

/// GET /<zone> - Zone page
async fn zone_page(State(state): State<AppState>, zone: Zone) -> Result<Html<String>, AppError> {
    let page = state.assembler.assemble(zone).await;

    if page.species.is_none() {
        tracing::debug!("Rendering {} without species data", zone);
    }

    let html = ZoneTemplate::new(&page).render()?;
    Ok(Html(html))
}

/// GET /api/zones/:zone - Zone view model as JSON
async fn get_zone(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ZonePage>, AppError> {
    let zone: Zone = slug
        .parse()
        .map_err(|e: crate::zones::UnknownZone| AppError::NotFound(e.to_string()))?;

    Ok(Json(state.assembler.assemble(zone).await))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Template(String),
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Template(msg) => {
                tracing::error!("Template error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
