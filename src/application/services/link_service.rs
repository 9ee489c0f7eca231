//! Short code allocation and resolution.

use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{MappingRepository, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::validator::Validator;
use serde_json::json;
use tracing::{debug, error, info, warn};

/// Service maintaining the one-to-one mapping between URLs and short codes.
///
/// Holds no mapping state of its own. Every decision is made against the
/// store, which serializes conflicting inserts through its uniqueness
/// constraints.
pub struct LinkService<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    validator: Arc<Validator>,
    codes: Arc<CodeGenerator>,
}

impl<R: MappingRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, validator: Arc<Validator>, codes: Arc<CodeGenerator>) -> Self {
        Self {
            repository,
            validator,
            codes,
        }
    }

    /// Returns the short code for `url`, allocating one if needed.
    ///
    /// # Idempotence
    ///
    /// A URL that is already stored gets its existing code back. When two
    /// callers shorten the same new URL at once, the store lets one insert
    /// win and the other caller returns the winner's code.
    ///
    /// # Code Generation
    ///
    /// Candidates are drawn at random. A candidate that collides with an
    /// existing code is discarded and a new one drawn, without a bound on
    /// attempts and without surfacing the collision.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL is malformed.
    /// Returns [`AppError::RequestProcessingFailed`] on store failures.
    pub async fn create(&self, url: &str) -> Result<Mapping, AppError> {
        if !self.validator.validate_url(url) {
            return Err(AppError::invalid_input(
                "Invalid URL format",
                json!({ "url": url }),
            ));
        }

        if let Some(existing) = self.lookup_url(url).await? {
            debug!(code = %existing.code, "URL already shortened");
            return Ok(existing);
        }

        loop {
            let code = self.codes.generate();

            match self.repository.insert(NewMapping::new(code, url)).await {
                Ok(mapping) => {
                    debug!(code = %mapping.code, "Allocated short code");
                    return Ok(mapping);
                }
                Err(StoreError::CodeTaken) => {
                    warn!("Generated short code collided, retrying");
                }
                Err(StoreError::UrlTaken) => return self.recover_lost_race(url).await,
                Err(StoreError::Backend(e)) => {
                    error!(error = %e, "Failed to insert mapping");
                    return Err(AppError::processing_failed());
                }
            }
        }
    }

    /// Returns the mapping for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the code is malformed.
    /// Returns [`AppError::NotFound`] if no URL is mapped to the code.
    /// Returns [`AppError::RequestProcessingFailed`] on store failures.
    pub async fn resolve(&self, code: &str) -> Result<Mapping, AppError> {
        if !self.validator.validate_code(code) {
            return Err(AppError::invalid_input(
                "Invalid short code format",
                json!({ "code": code }),
            ));
        }

        match self.repository.find_by_code(code).await {
            Ok(Some(mapping)) => Ok(mapping),
            Ok(None) => Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            )),
            Err(e) => {
                error!(error = %e, "Failed to look up short code");
                Err(AppError::processing_failed())
            }
        }
    }

    /// Checks that the underlying store is reachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.repository.ping().await
    }

    async fn lookup_url(&self, url: &str) -> Result<Option<Mapping>, AppError> {
        self.repository.find_by_url(url).await.map_err(|e| {
            error!(error = %e, "Failed to look up URL");
            AppError::processing_failed()
        })
    }

    /// Another request inserted `url` between our lookup and our insert.
    /// Its row is committed, so a fresh lookup returns the winning code.
    async fn recover_lost_race(&self, url: &str) -> Result<Mapping, AppError> {
        match self.lookup_url(url).await? {
            Some(winner) => {
                info!(code = %winner.code, "Concurrent create won, returning its code");
                Ok(winner)
            }
            None => {
                error!("URL reported as taken but no mapping was found");
                Err(AppError::processing_failed())
            }
        }
    }
}
