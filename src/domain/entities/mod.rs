//! Core domain entities.
//!
//! - [`Mapping`] - A persisted code/URL pair
//! - [`NewMapping`] - A candidate pair about to be inserted

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
