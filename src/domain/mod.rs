//! Domain layer containing the mapping entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Store trait and its tagged error type
//!
//! The domain layer has no dependencies on the HTTP layer. The store
//! contract is implemented in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
