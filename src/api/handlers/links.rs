//! Handlers for the create and resolve operations.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse, ResolveLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL, returning its existing code if it was shortened before.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://golang.org/" }
/// ```
///
/// # Response
///
/// ```json
/// { "code": "aZ3_k9QwE1" }
/// ```
///
/// # Errors
///
/// - 400 `invalid_input` if the body is not JSON, lacks `url`, or the URL is malformed
/// - 500 `request_processing_failed` on store failures
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<Json<CreateLinkResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let mapping = state.link_service.create(&payload.url).await?;

    Ok(Json(CreateLinkResponse { code: mapping.code }))
}

/// Resolves a short code to its URL.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Response
///
/// ```json
/// { "url": "https://golang.org/" }
/// ```
///
/// # Errors
///
/// - 400 `invalid_input` if the code is malformed
/// - 404 `not_found` if the code is not assigned
/// - 500 `request_processing_failed` on store failures
pub async fn resolve_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveLinkResponse>, AppError> {
    let mapping = state.link_service.resolve(&code).await?;

    Ok(Json(ResolveLinkResponse { url: mapping.url }))
}
