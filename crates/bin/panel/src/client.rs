//! HTTP client for the lumod JSON API.

use serde_json::json;

use lumo_domain::status::StatusSnapshot;

/// Client for the daemon's REST API.
///
/// Every command POSTs a fixed payload to a fixed endpoint; a non-success
/// HTTP status is an error. Response bodies of commands are ignored beyond
/// the implicit confirmation of success.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`
    /// (e.g. `http://127.0.0.1:8000`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch and decode the current status snapshot.
    ///
    /// # Errors
    ///
    /// Fails on connection errors, non-success HTTP status, or an
    /// undecodable body.
    pub async fn fetch_status(&self) -> Result<StatusSnapshot, reqwest::Error> {
        self.http
            .get(format!("{}/api/status", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Enable or disable automatic mode.
    ///
    /// # Errors
    ///
    /// Fails on connection errors or non-success HTTP status.
    pub async fn set_auto(&self, enabled: bool) -> Result<(), reqwest::Error> {
        self.post("/api/auto", &json!({ "enabled": enabled })).await
    }

    /// Switch the light directly. The daemon leaves auto mode as a result.
    ///
    /// # Errors
    ///
    /// Fails on connection errors or non-success HTTP status.
    pub async fn set_manual(&self, turn_on: bool) -> Result<(), reqwest::Error> {
        self.post("/api/manual", &json!({ "turn_on": turn_on }))
            .await
    }

    /// Update the darkness threshold.
    ///
    /// # Errors
    ///
    /// Fails on connection errors or non-success HTTP status.
    pub async fn set_threshold(&self, value: f64) -> Result<(), reqwest::Error> {
        self.post("/api/threshold", &json!({ "value": value }))
            .await
    }

    async fn post(&self, path: &str, payload: &serde_json::Value) -> Result<(), reqwest::Error> {
        self.http
            .post(format!("{}{path}", self.base_url))
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
