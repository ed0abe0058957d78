// client.rs
use crate::backend::endpoints::{AnalysisView, UploadKind, EVENTS_NEAR_CANCELLATIONS};
use crate::backend::models::UploadReply;
use crate::backend::{Backend, BackendError, QueryResult};
use crate::config::DashboardConfig;
use crate::filters::CorrelationQuery;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Instant;

const USER_AGENT: &str = concat!("mobilidade-dashboard/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed client for the analytics backend.
pub struct BackendClient {
    base_url: String,
    client: Client,
}

impl BackendClient {
    pub fn new(cfg: &DashboardConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(cfg.request_timeout)
            .build()
            .map_err(|e| BackendError::Config(e.to_string()))?;

        Ok(Self {
            base_url: cfg.backend_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl Backend for BackendClient {
    fn events_near_cancellations(
        &self,
        query: &CorrelationQuery,
    ) -> Result<QueryResult, BackendError> {
        let start = Instant::now();
        let resp = self
            .client
            .get(self.url(EVENTS_NEAR_CANCELLATIONS))
            .header(ACCEPT, "application/json")
            .query(&query.query_pairs())
            .send()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        tracing::debug!(status = %resp.status(), elapsed = ?start.elapsed(), "geo query answered");
        read_json(resp)
    }

    fn fetch_embed(&self, view: AnalysisView) -> Result<String, BackendError> {
        let resp = self
            .client
            .get(self.url(&view.endpoint()))
            .header(ACCEPT, "text/html")
            .send()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let text = resp
            .text()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        classify(status, text)
    }

    fn upload(
        &self,
        kind: UploadKind,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<String, BackendError> {
        let resp = self
            .client
            .post(self.url(kind.endpoint()))
            .header(CONTENT_TYPE, content_type)
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let reply: UploadReply = read_json(resp)?;
        Ok(reply
            .success
            .unwrap_or_else(|| kind.success_message().to_string()))
    }
}

fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, BackendError> {
    let status = resp.status().as_u16();
    let text = resp
        .text()
        .map_err(|e| BackendError::Network(e.to_string()))?;

    decode_json(status, text)
}

/// Decide the outcome of a finished response. A structured
/// `{"error": ...}` wins over the status code.
pub(crate) fn classify(status: u16, body: String) -> Result<String, BackendError> {
    if let Some(msg) = structured_error(&body) {
        return Err(BackendError::Api(msg));
    }

    if !(200..300).contains(&status) {
        return Err(BackendError::Status(status));
    }

    Ok(body)
}

pub(crate) fn decode_json<T: DeserializeOwned>(status: u16, body: String) -> Result<T, BackendError> {
    let body = classify(status, body)?;
    serde_json::from_str(&body).map_err(|e| BackendError::Decode(e.to_string()))
}

pub(crate) fn structured_error(body: &str) -> Option<String> {
    if !body.trim_start().starts_with('{') {
        return None;
    }

    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("error")
        .and_then(|e| e.as_str())
        .map(str::to_string)
}
