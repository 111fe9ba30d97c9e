//! HTTP client for a remote gene classification backend.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::backend::{GeneBackend, LookupResult};
use crate::utils::percent_encode::encode;

/// Errors raised while talking to the backend.
///
/// Lookups surface these as [`LookupResult::Failure`]; resolution calls log
/// them and report "not resolved".
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Backend request failed: {0}")]
    Transport(String),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Backend response could not be decoded: {0}")]
    Decode(String),
}

#[derive(Debug, Deserialize)]
struct LocusResponse {
    gene_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeneIds {
    Joined(String),
    List(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct LociResponse {
    gene_ids: Option<GeneIds>,
}

/// Gene backend reached over HTTP.
///
/// # Endpoints
///
/// - `GET {base}/genes/{id}` - lookup for one Gene ID
/// - `GET {base}/genes?ids={csv}` - lookup for several Gene IDs
/// - `GET {base}/loci/{id}` - `{"gene_id": "..."}`
/// - `GET {base}/loci?ids={csv}` - `{"gene_ids": "a,b"}` or `{"gene_ids": ["a", "b"]}`
///
/// No retries. Timeouts are the HTTP client's defaults.
pub struct HttpGeneBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGeneBackend {
    /// Creates a backend client rooted at `base_url`.
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn gene_url(&self, gene_id: &str) -> String {
        format!("{}/genes/{}", self.base_url, encode(gene_id))
    }

    fn locus_url(&self, locus_id: &str) -> String {
        format!("{}/loci/{}", self.base_url, encode(locus_id))
    }

    async fn get(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn lookup(&self, request: reqwest::RequestBuilder) -> LookupResult {
        let response = match self.get(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Gene lookup failed");
                return LookupResult::Failure(e.to_string());
            }
        };

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"));

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return LookupResult::Failure(BackendError::Decode(e.to_string()).to_string());
            }
        };

        decode_lookup_body(&body, is_json)
    }

    async fn resolve<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, BackendError> {
        self.get(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

/// Turns a successful response body into a lookup result.
fn decode_lookup_body(body: &str, is_json: bool) -> LookupResult {
    if body.trim().is_empty() {
        return LookupResult::Empty;
    }
    if !is_json {
        return LookupResult::Text(body.to_string());
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) => LookupResult::Empty,
        Ok(value) => LookupResult::Value(value),
        Err(e) => LookupResult::Failure(BackendError::Decode(e.to_string()).to_string()),
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[async_trait]
impl GeneBackend for HttpGeneBackend {
    async fn user_input_menu(&self, gene_id: &str) -> LookupResult {
        debug!(gene_id, "Looking up gene");
        self.lookup(self.client.get(self.gene_url(gene_id))).await
    }

    async fn multi_user_input_menu(&self, gene_ids_csv: &str) -> LookupResult {
        debug!(gene_ids = gene_ids_csv, "Looking up genes");
        let request = self
            .client
            .get(format!("{}/genes", self.base_url))
            .query(&[("ids", gene_ids_csv)]);
        self.lookup(request).await
    }

    async fn process_locid(&self, locus_id: &str) -> Option<String> {
        let request = self.client.get(self.locus_url(locus_id));
        match self.resolve::<LocusResponse>(request).await {
            Ok(body) => body.gene_id.and_then(non_empty),
            Err(e) => {
                warn!(locus_id, error = %e, "Locus resolution failed");
                None
            }
        }
    }

    async fn process_mlocid(&self, locus_ids_csv: &str) -> Option<String> {
        let request = self
            .client
            .get(format!("{}/loci", self.base_url))
            .query(&[("ids", locus_ids_csv)]);
        match self.resolve::<LociResponse>(request).await {
            Ok(body) => match body.gene_ids? {
                GeneIds::Joined(ids) => non_empty(ids),
                GeneIds::List(ids) => non_empty(ids.join(",")),
            },
            Err(e) => {
                warn!(locus_ids = locus_ids_csv, error = %e, "Locus resolution failed");
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_urls_are_encoded() {
        let backend = HttpGeneBackend::new("http://backend.local/api/");
        assert_eq!(
            backend.gene_url("Ca_00001"),
            "http://backend.local/api/genes/Ca_00001"
        );
        assert_eq!(
            backend.locus_url("LOC 1/2"),
            "http://backend.local/api/loci/LOC%201%2F2"
        );
    }

    #[test]
    fn test_decode_json_body() {
        assert_eq!(
            decode_lookup_body(r#"[{"gene": "Ca_1"}]"#, true),
            LookupResult::Value(json!([{"gene": "Ca_1"}]))
        );
        assert_eq!(decode_lookup_body("null", true), LookupResult::Empty);
        assert_eq!(decode_lookup_body("  ", true), LookupResult::Empty);
        assert!(matches!(
            decode_lookup_body("{not json", true),
            LookupResult::Failure(_)
        ));
    }

    #[test]
    fn test_decode_text_body() {
        assert_eq!(
            decode_lookup_body("Class: mRNA", false),
            LookupResult::Text("Class: mRNA".to_string())
        );
    }

    #[test]
    fn test_loci_response_shapes() {
        let joined: LociResponse = serde_json::from_str(r#"{"gene_ids": "Ca_1,Ca_2"}"#).unwrap();
        assert!(matches!(joined.gene_ids, Some(GeneIds::Joined(ref s)) if s == "Ca_1,Ca_2"));

        let list: LociResponse = serde_json::from_str(r#"{"gene_ids": ["Ca_1", "Ca_2"]}"#).unwrap();
        assert!(matches!(list.gene_ids, Some(GeneIds::List(ref v)) if v.len() == 2));
    }

    #[tokio::test]
    async fn test_unreachable_backend_reports_failure() {
        let backend = HttpGeneBackend::new("http://127.0.0.1:9");

        assert!(matches!(
            backend.user_input_menu("Ca_1").await,
            LookupResult::Failure(_)
        ));
        assert_eq!(backend.process_locid("LOC1").await, None);
    }
}
