//! API route configuration.

use crate::api::handlers::{create_link_handler, resolve_link_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Create and resolve endpoints, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /links`         - Shorten a URL
/// - `GET  /links/{code}`  - Resolve a short code
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler))
        .route("/links/{code}", get(resolve_link_handler))
}
