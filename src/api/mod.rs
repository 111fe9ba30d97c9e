//! JSON API layer and HTTP middleware.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - JSON endpoint handlers
//! - [`middleware`] - Rate limiting and request tracing layers

pub mod dto;
pub mod handlers;
pub mod middleware;
