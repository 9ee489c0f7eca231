//! Handler for short URL redirect.

use std::borrow::Cow;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Stored URLs may lack a scheme (`example.com/path`). Those are sent as
/// `http://example.com/path`; the stored mapping itself is left as is.
///
/// # Errors
///
/// Same as [`crate::api::handlers::resolve_link_handler`].
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mapping = state.link_service.resolve(&code).await?;

    Ok(Redirect::temporary(&redirect_target(&mapping.url)))
}

/// Absolute `Location` value for a stored URL.
fn redirect_target(url: &str) -> Cow<'_, str> {
    let has_scheme = ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    });

    if has_scheme {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("http://{url}"))
    }
}
