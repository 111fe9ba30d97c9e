//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Storage
//!
//! Dashboard assets live in one Cloud Storage bucket. URLs are signed with an
//! HMAC key belonging to the bucket's service account:
//!
//! ```bash
//! export GCS_HMAC_ACCESS_ID="GOOG1E..."
//! export GCS_HMAC_SECRET="..."
//! export GCS_BUCKET="chickpea-transcriptome"
//! ```
//!
//! Without credentials the dashboard still runs; every image and video shows
//! its "not found" fallback.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `GCS_BUCKET` - Asset bucket (default: `chickpea-transcriptome`)
//! - `GCS_ENDPOINT` - XML API endpoint (default: `https://storage.googleapis.com`)
//! - `BACKEND_URL` - Gene backend base URL (lookups disabled if unset)
//! - `CONTACT_EMAIL` - Address used by the About page contact link

use anyhow::{Context, Result};
use std::env;
use std::fmt;

pub const DEFAULT_BUCKET: &str = "chickpea-transcriptome";
pub const DEFAULT_STORAGE_ENDPOINT: &str = "https://storage.googleapis.com";
pub const DEFAULT_CONTACT_EMAIL: &str = "gopalkalwan56@gmaill.com";

/// HMAC key used to sign storage URLs.
///
/// Passed explicitly to the object store; never read from ambient state.
#[derive(Clone, PartialEq, Eq)]
pub struct StorageCredentials {
    pub access_id: String,
    pub secret: String,
}

impl fmt::Debug for StorageCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageCredentials")
            .field("access_id", &self.access_id)
            .field("secret", &"***")
            .finish()
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Bucket holding images, videos and the logo.
    pub storage_bucket: String,
    /// Cloud Storage XML API endpoint.
    pub storage_endpoint: String,
    /// `None` disables storage.
    pub storage_credentials: Option<StorageCredentials>,
    /// Gene backend base URL. `None` disables lookups.
    pub backend_url: Option<String>,
    pub contact_email: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if only one half of the storage HMAC key is set.
    pub fn from_env() -> Result<Self> {
        let storage_credentials =
            Self::load_storage_credentials().context("Failed to load storage credentials")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let storage_bucket = env::var("GCS_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.to_string());
        let storage_endpoint =
            env::var("GCS_ENDPOINT").unwrap_or_else(|_| DEFAULT_STORAGE_ENDPOINT.to_string());

        let backend_url = env::var("BACKEND_URL").ok().filter(|v| !v.trim().is_empty());

        let contact_email =
            env::var("CONTACT_EMAIL").unwrap_or_else(|_| DEFAULT_CONTACT_EMAIL.to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            storage_bucket,
            storage_endpoint,
            storage_credentials,
            backend_url,
            contact_email,
        })
    }

    /// Loads the HMAC key from `GCS_HMAC_ACCESS_ID` and `GCS_HMAC_SECRET`.
    ///
    /// Both or neither must be set. Returns `None` when neither is set.
    fn load_storage_credentials() -> Result<Option<StorageCredentials>> {
        let access_id = env::var("GCS_HMAC_ACCESS_ID").ok().filter(|v| !v.is_empty());
        let secret = env::var("GCS_HMAC_SECRET").ok().filter(|v| !v.is_empty());

        match (access_id, secret) {
            (Some(access_id), Some(secret)) => Ok(Some(StorageCredentials { access_id, secret })),
            (None, None) => Ok(None),
            (Some(_), None) => anyhow::bail!("GCS_HMAC_SECRET must be set with GCS_HMAC_ACCESS_ID"),
            (None, Some(_)) => anyhow::bail!("GCS_HMAC_ACCESS_ID must be set with GCS_HMAC_SECRET"),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `storage_bucket` is empty
    /// - `storage_endpoint` or `backend_url` is not an http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.storage_bucket.trim().is_empty() {
            anyhow::bail!("GCS_BUCKET must not be empty");
        }

        if !is_http_url(&self.storage_endpoint) {
            anyhow::bail!(
                "GCS_ENDPOINT must be an http(s) URL, got '{}'",
                self.storage_endpoint
            );
        }

        if let Some(ref backend_url) = self.backend_url
            && !is_http_url(backend_url)
        {
            anyhow::bail!("BACKEND_URL must be an http(s) URL, got '{}'", backend_url);
        }

        if !self.contact_email.contains('@') {
            anyhow::bail!(
                "CONTACT_EMAIL must be an e-mail address, got '{}'",
                self.contact_email
            );
        }

        Ok(())
    }

    /// Returns whether signed asset URLs can be issued.
    pub fn is_storage_enabled(&self) -> bool {
        self.storage_credentials.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        if let Some(ref creds) = self.storage_credentials {
            tracing::info!(
                "  Storage: {}/{} (key {})",
                self.storage_endpoint,
                self.storage_bucket,
                mask_access_id(&creds.access_id)
            );
        } else {
            tracing::info!("  Storage: disabled");
        }

        match self.backend_url {
            Some(ref url) => tracing::info!("  Backend: {}", url),
            None => tracing::info!("  Backend: disabled"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn is_http_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|u| (u.scheme() == "http" || u.scheme() == "https") && u.host_str().is_some())
        .unwrap_or(false)
}

/// Masks an HMAC access id for logging, keeping the first four characters.
///
/// - `GOOG1EABCDEFG` → `GOOG***`
fn mask_access_id(access_id: &str) -> String {
    let visible: String = access_id.chars().take(4).collect();
    format!("{}***", visible)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if variables are inconsistent or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
