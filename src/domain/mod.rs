//! Domain layer: identifiers, pages, static content and collaborator contracts.
//!
//! Nothing in this layer performs I/O. Collaborator traits
//! ([`backend::GeneBackend`], [`storage::ObjectStore`]) are implemented in
//! [`crate::infrastructure`].
//!
//! # Modules
//!
//! - [`identifiers`] - Gene/locus identifier normalization
//! - [`task`] - Start Task fields and query precedence
//! - [`page`] - The fixed set of dashboard pages
//! - [`assets`] - Storage objects shown by each page
//! - [`glossary`] - Glossary terms
//! - [`contact`] - Contact `mailto:` link
//! - [`backend`] - Gene backend contract
//! - [`storage`] - Object store contract

pub mod assets;
pub mod backend;
pub mod contact;
pub mod glossary;
pub mod identifiers;
pub mod page;
pub mod storage;
pub mod task;
