//! Submission of enriched documents to YApi's open import endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;

use crate::error::ImportError;

/// Fixed request timeout, applied to the client for the life of the run.
const TIMEOUT: Duration = Duration::from_secs(20);

/// Envelope accepted by `POST /api/open/import_data`.
#[derive(Debug, Serialize)]
struct ImportRequest<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    json: &'a str,
    merge: &'a str,
    token: &'a str,
}

/// Blocking client for YApi's import API.
pub struct ImportClient {
    base_url: String,
    token: String,
    client: Client,
}

impl ImportClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ImportError> {
        let base_url = base_url.into();
        let client = Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        })
    }

    /// POST the serialized document in merge mode. The response body is not
    /// inspected; transport failures and non-success statuses are returned
    /// verbatim. No retry.
    pub fn submit(&self, document_json: &str) -> Result<(), ImportError> {
        let request = ImportRequest {
            kind: "swagger",
            json: document_json,
            merge: "merge",
            token: &self.token,
        };
        let body = serde_json::to_vec(&request)?;

        log::debug!("importing {} bytes into {}", body.len(), self.endpoint());
        self.client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .body(body)
            .send()?
            .error_for_status()?;
        Ok(())
    }

    fn endpoint(&self) -> String {
        format!("{}/api/open/import_data", self.base_url)
    }
}
