//! Classification of PostgreSQL errors into [`StoreError`] variants.

use crate::domain::repositories::StoreError;

/// Constraint guarding the `code` primary key.
pub const CODE_CONSTRAINT: &str = "links_pkey";

/// Constraint guarding URL uniqueness.
pub const URL_CONSTRAINT: &str = "links_url_key";

/// Maps an insert failure onto the constraint that caused it.
///
/// Only unique violations on the two known constraints are tagged; every
/// other error, including violations of constraints added later, stays a
/// [`StoreError::Backend`].
pub fn classify_insert_error(e: sqlx::Error) -> StoreError {
    let constraint = e
        .as_database_error()
        .filter(|db_err| db_err.is_unique_violation())
        .and_then(|db_err| db_err.constraint().map(str::to_owned));

    match constraint.as_deref() {
        Some(CODE_CONSTRAINT) => StoreError::CodeTaken,
        Some(URL_CONSTRAINT) => StoreError::UrlTaken,
        _ => StoreError::Backend(e),
    }
}
