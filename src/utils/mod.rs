//! Utility functions shared across layers.
//!
//! - [`percent_encode`] - RFC 3986 percent-encoding

pub mod percent_encode;
