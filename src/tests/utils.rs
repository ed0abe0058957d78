use crate::backend::{AnalysisView, Backend, BackendError, QueryResult, UploadKind};
use crate::config::DashboardConfig;
use crate::filters::CorrelationQuery;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::collections::VecDeque;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Scripted stand-in for the analytics backend.
pub struct FakeBackend {
    geo_replies: Mutex<VecDeque<Result<QueryResult, BackendError>>>,
    embed_reply: Mutex<Result<String, BackendError>>,
    upload_reply: Mutex<Result<String, BackendError>>,
    pub geo_queries: Mutex<Vec<CorrelationQuery>>,
    pub embed_calls: AtomicUsize,
    pub uploads: Mutex<Vec<(UploadKind, String, usize)>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            geo_replies: Mutex::new(VecDeque::new()),
            embed_reply: Mutex::new(Err(BackendError::Network("not scripted".into()))),
            upload_reply: Mutex::new(Err(BackendError::Network("not scripted".into()))),
            geo_queries: Mutex::new(Vec::new()),
            embed_calls: AtomicUsize::new(0),
            uploads: Mutex::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn push_geo(&self, reply: Result<QueryResult, BackendError>) {
        self.geo_replies.lock().unwrap().push_back(reply);
    }

    pub fn set_embed(&self, reply: Result<String, BackendError>) {
        *self.embed_reply.lock().unwrap() = reply;
    }

    pub fn set_upload(&self, reply: Result<String, BackendError>) {
        *self.upload_reply.lock().unwrap() = reply;
    }

    pub fn geo_calls(&self) -> usize {
        self.geo_queries.lock().unwrap().len()
    }
}

impl Backend for Arc<FakeBackend> {
    fn events_near_cancellations(
        &self,
        query: &CorrelationQuery,
    ) -> Result<QueryResult, BackendError> {
        self.geo_queries.lock().unwrap().push(query.clone());
        self.geo_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Network("connection refused".into())))
    }

    fn fetch_embed(&self, _view: AnalysisView) -> Result<String, BackendError> {
        self.embed_calls.fetch_add(1, Ordering::SeqCst);
        self.embed_reply.lock().unwrap().clone()
    }

    fn upload(
        &self,
        kind: UploadKind,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<String, BackendError> {
        self.uploads
            .lock()
            .unwrap()
            .push((kind, content_type.to_string(), body.len()));
        self.upload_reply.lock().unwrap().clone()
    }
}

/// App state wired to a fresh fake backend.
pub fn test_state() -> (AppState, Arc<FakeBackend>) {
    let fake = Arc::new(FakeBackend::default());
    let state = AppState::new(DashboardConfig::default(), Box::new(fake.clone()));
    (state, fake)
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(path: &str, form: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

/// `n` correlation items, each with both locations set.
pub fn matches_json(n: usize) -> String {
    let items: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{
                    "cancel_id": "c{i}",
                    "cancel_address": "Rua {i}",
                    "cancel_bairro": "TIJUCA",
                    "event_address": "Av. Atlântica {i}",
                    "event_neighborhood": "COPACABANA",
                    "event_name": "Show {i}",
                    "distance_km": 1.23456,
                    "time_diff_min": 42.0,
                    "cancel_location": [-22.9{i}, -43.2],
                    "event_location": [-22.97, -43.18]
                }}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

pub fn matches(n: usize) -> QueryResult {
    serde_json::from_str(&matches_json(n)).unwrap()
}

pub fn fallback_two_events() -> QueryResult {
    serde_json::from_str(
        r#"{
            "message": "none nearby",
            "recent_events": [
                {"event_name": "Feira", "event_address": "Praça XV", "event_neighborhood": "CENTRO", "event_location": [-22.90, -43.17]},
                {"event_name": "Bloco", "event_address": "Rua B", "event_neighborhood": "BOTAFOGO", "event_location": [-22.95, -43.18]}
            ]
        }"#,
    )
    .unwrap()
}
