//! Cloud Storage V4 URL signing with HMAC keys (`GOOG4-HMAC-SHA256`).
//!
//! Canonical request layout, credential scope and the HMAC key derivation
//! chain follow the Cloud Storage XML API signing process.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use std::time::Duration;
use url::Url;

use crate::config::StorageCredentials;
use crate::domain::storage::{SignedMethod, StorageError, StorageResult};
use crate::utils::percent_encode::{encode, encode_path};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "GOOG4-HMAC-SHA256";
const REGION: &str = "auto";
const SERVICE: &str = "storage";
const REQUEST_TYPE: &str = "goog4_request";

/// Longest lifetime Cloud Storage accepts for a V4 signed URL.
pub const MAX_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Signs object URLs for one bucket.
#[derive(Debug, Clone)]
pub struct V4Signer {
    credentials: StorageCredentials,
    base_url: String,
    host: String,
    bucket: String,
}

impl V4Signer {
    /// Creates a signer for `bucket` served from `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidRequest`] if `endpoint` is not an
    /// absolute http(s) URL with a host.
    pub fn new(
        credentials: StorageCredentials,
        endpoint: &str,
        bucket: &str,
    ) -> StorageResult<Self> {
        let parsed = Url::parse(endpoint)
            .map_err(|e| StorageError::InvalidRequest(format!("invalid endpoint: {e}")))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(StorageError::InvalidRequest(format!(
                "unsupported endpoint scheme: {}",
                parsed.scheme()
            )));
        }

        let host = match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(StorageError::InvalidRequest(
                    "endpoint has no host".to_string(),
                ));
            }
        };

        Ok(Self {
            credentials,
            base_url: format!("{}://{}", parsed.scheme(), host),
            host,
            bucket: bucket.to_string(),
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Signs `object_name` for `method`, valid for `ttl` from `now`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidRequest`] for an empty object name or a
    /// TTL outside `1s..=7d`, and [`StorageError::Credentials`] if the secret
    /// cannot key the HMAC.
    pub fn sign(
        &self,
        object_name: &str,
        method: SignedMethod,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> StorageResult<String> {
        if object_name.is_empty() {
            return Err(StorageError::InvalidRequest(
                "object name must not be empty".to_string(),
            ));
        }
        if ttl.as_secs() == 0 || ttl > MAX_TTL {
            return Err(StorageError::InvalidRequest(format!(
                "signed URL lifetime must be between 1s and {}s, got {}s",
                MAX_TTL.as_secs(),
                ttl.as_secs()
            )));
        }

        let datestamp = now.format("%Y%m%d").to_string();
        let timestamp = now.format("%Y%m%dT%H%M%SZ").to_string();
        let scope = format!("{datestamp}/{REGION}/{SERVICE}/{REQUEST_TYPE}");
        let credential = format!("{}/{}", self.credentials.access_id, scope);

        let canonical_uri = format!("/{}/{}", self.bucket, encode_path(object_name));

        // Already sorted by key.
        let query = [
            ("X-Goog-Algorithm", ALGORITHM.to_string()),
            ("X-Goog-Credential", credential),
            ("X-Goog-Date", timestamp.clone()),
            ("X-Goog-Expires", ttl.as_secs().to_string()),
            ("X-Goog-SignedHeaders", "host".to_string()),
        ];
        let canonical_query = query
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let canonical_headers = format!("host:{}\n", self.host);
        let canonical_request = [
            method.as_str(),
            canonical_uri.as_str(),
            canonical_query.as_str(),
            canonical_headers.as_str(),
            "host",
            "UNSIGNED-PAYLOAD",
        ]
        .join("\n");

        let string_to_sign = [
            ALGORITHM.to_string(),
            timestamp,
            scope,
            hex::encode(Sha256::digest(canonical_request.as_bytes())),
        ]
        .join("\n");

        let signature = self.signature(&datestamp, &string_to_sign)?;

        Ok(format!(
            "{}{}?{}&X-Goog-Signature={}",
            self.base_url, canonical_uri, canonical_query, signature
        ))
    }

    fn signature(&self, datestamp: &str, string_to_sign: &str) -> StorageResult<String> {
        let secret = format!("GOOG4{}", self.credentials.secret);
        let k_date = hmac(secret.as_bytes(), datestamp.as_bytes())?;
        let k_region = hmac(&k_date, REGION.as_bytes())?;
        let k_service = hmac(&k_region, SERVICE.as_bytes())?;
        let k_signing = hmac(&k_service, REQUEST_TYPE.as_bytes())?;
        Ok(hex::encode(hmac(&k_signing, string_to_sign.as_bytes())?))
    }
}

fn hmac(key: &[u8], data: &[u8]) -> StorageResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| StorageError::Credentials(format!("invalid HMAC key: {e}")))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}
