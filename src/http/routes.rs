//! Drop HTTP routes
//!
//! One handler per store operation. Handlers compute their result value
//! once and then pick a representation; only the listing negotiates
//! between HTML and JSON, the other operations always answer JSON.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::store::{DropId, DropStore};

use super::errors::{ApiError, ApiResult};
use super::render::{render_listing, DropListing};

// ==================
// Shared State
// ==================

/// State shared across handlers
pub struct AppState {
    pub store: DropStore,
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DropId,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: DropId,
}

// ==================
// Routes
// ==================

/// Create the drop routes
pub fn drop_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/drop", get(list_drops_handler).post(create_drop_handler))
        .route(
            "/drop/{id}",
            get(get_drop_handler).delete(delete_drop_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}

/// List the active drops
async fn list_drops_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let listing = DropListing {
        drops: state.store.list_active()?,
    };

    if wants_json(&headers) {
        Ok(Json(listing).into_response())
    } else {
        Ok(Html(render_listing(&listing)?).into_response())
    }
}

/// Return the stored payload of a drop
async fn get_drop_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<DropId>,
) -> ApiResult<Json<Value>> {
    Ok(Json(state.store.get(id)?))
}

/// Store a new drop from the request body
async fn create_drop_handler(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ApiResult<Json<CreatedResponse>> {
    let payload: Value =
        serde_json::from_str(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let id = state.store.create(&payload)?;
    Ok(Json(CreatedResponse { id }))
}

/// Soft-delete a drop; always succeeds
async fn delete_drop_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<DropId>,
) -> ApiResult<Json<DeletedResponse>> {
    let deleted = state.store.soft_delete(id)?;
    Ok(Json(DeletedResponse { deleted }))
}
