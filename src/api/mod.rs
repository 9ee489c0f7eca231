//! HTTP layer exposing the create and resolve operations.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - API route composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
