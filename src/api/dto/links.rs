//! DTOs for the create and resolve endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,
}

/// Short code assigned to the requested URL.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub code: String,
}

/// URL a short code resolves to.
#[derive(Debug, Serialize)]
pub struct ResolveLinkResponse {
    pub url: String,
}
