// ── HTTP routes ──
//
// Thin translation layer: query-parameter defaulting on the way in,
// status mapping and generic error bodies on the way out. Internal error
// detail is logged but never leaked to the client.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use pokedex_core::Explorer;

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub explorer: Explorer,
    /// Page size used when a request carries no usable `limit`.
    pub default_limit: u32,
}

/// Build the application router with permissive CORS, matching the
/// frontend's expectations during local development.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ping", get(ping))
        .route("/api/pokemon", get(list_pokemon))
        .route("/api/pokemon/{name}", get(get_pokemon))
        .layer(cors)
        .with_state(state)
}

// ── Handlers ─────────────────────────────────────────────────────────

/// Liveness probe.
async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Raw query parameters, kept as strings so unparseable values fall back
/// to defaults instead of producing a 400.
#[derive(Debug, Deserialize)]
struct ListParams {
    limit: Option<String>,
    offset: Option<String>,
}

async fn list_pokemon(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Response {
    // Absent, unparseable, or zero limit falls back to the configured
    // default; offset falls back to 0.
    let limit = params
        .limit
        .as_deref()
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|&l| l >= 1)
        .unwrap_or(state.default_limit);
    let offset = params
        .offset
        .as_deref()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(0);

    match state.explorer.list_page(limit, offset).await {
        Ok(page) => Json(page).into_response(),
        Err(err) => {
            error!("failed to fetch Pokémon list: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch Pokémon list" })),
            )
                .into_response()
        }
    }
}

async fn get_pokemon(State(state): State<Arc<AppState>>, Path(name): Path<String>) -> Response {
    match state.explorer.get_detail(&name).await {
        Ok(detail) => Json(detail).into_response(),
        Err(err) if err.is_not_found() => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Pokémon not found" })),
        )
            .into_response(),
        Err(err) => {
            error!("failed to fetch Pokémon details: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch Pokémon details" })),
            )
                .into_response()
        }
    }
}
