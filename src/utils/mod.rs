//! Helpers for short code generation, input validation, and store error
//! classification.
//!
//! - [`code_generator`] - Seedable random short code source
//! - [`validator`] - URL and short code patterns
//! - [`db_error`] - PostgreSQL constraint violation classification

pub mod code_generator;
pub mod db_error;
pub mod validator;
