//! Store contract for code/URL mappings.

use crate::domain::entities::{Mapping, NewMapping};
use async_trait::async_trait;
use thiserror::Error;

/// Outcome of a failed store call.
///
/// Insert failures are classified by which uniqueness constraint fired, so
/// the allocator can tell a generated-code collision apart from a lost
/// race on the URL without inspecting driver messages.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The candidate code is already assigned to another URL.
    #[error("short code is already taken")]
    CodeTaken,

    /// The URL was shortened by someone else since it was last looked up.
    #[error("url is already shortened")]
    UrlTaken,

    /// Anything else: connectivity, timeouts, unexpected constraint violations.
    #[error("store failure: {0}")]
    Backend(#[from] sqlx::Error),
}

/// Repository interface for the mapping table.
///
/// Each method is a single atomic store primitive. Implementations must not
/// cache results; every call observes the current committed state.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - in-process
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds the mapping for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, StoreError>;

    /// Finds the mapping for an exact URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<Mapping>, StoreError>;

    /// Inserts a mapping iff neither its code nor its URL exists yet.
    ///
    /// # Errors
    ///
    /// - [`StoreError::CodeTaken`] if the code is already present
    /// - [`StoreError::UrlTaken`] if the URL is already present
    /// - [`StoreError::Backend`] on any other failure
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
