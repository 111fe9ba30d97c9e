//! Web dashboard layer for browser-based UI.
//!
//! Server-side rendered pages using Askama templates. Each request renders
//! one page top to bottom; nothing is kept between requests.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers, one per page
//! - [`routes`] - Page route configuration
//! - [`view`] - View models shared by templates

pub mod handlers;
pub mod routes;
pub mod view;
