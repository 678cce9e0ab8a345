// ABOUTME: In-process stand-in for the Gemini generateContent endpoint
// ABOUTME: Serves a canned response on a loopback port and records every request it receives

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use serde_json::Value;
use tokio::{net::TcpListener, task::JoinHandle};

/// One request as seen by the fake upstream
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    /// Request body parsed as JSON
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("upstream request body is not JSON")
    }

    /// The single prompt text inside the generateContent envelope
    pub fn prompt_text(&self) -> String {
        self.json()["contents"][0]["parts"][0]["text"]
            .as_str()
            .expect("envelope carries no prompt text")
            .to_owned()
    }
}

#[derive(Clone)]
struct UpstreamState {
    status: StatusCode,
    content_type: &'static str,
    body: Arc<String>,
    delay: Option<Duration>,
    hits: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<RecordedRequest>>>,
}

/// Loopback HTTP server answering every request with one canned response
pub struct FakeUpstream {
    base_url: String,
    hits: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl FakeUpstream {
    /// Start a fake upstream answering with a JSON body
    pub async fn json(status: StatusCode, body: &Value) -> Self {
        Self::start(status, "application/json", body.to_string()).await
    }

    /// Start a fake upstream answering with an arbitrary body
    pub async fn start(status: StatusCode, content_type: &'static str, body: String) -> Self {
        Self::spawn(status, content_type, body, None).await
    }

    /// Start a fake upstream that holds every response for `delay`
    pub async fn delayed(delay: Duration, status: StatusCode, body: &Value) -> Self {
        Self::spawn(status, "application/json", body.to_string(), Some(delay)).await
    }

    async fn spawn(
        status: StatusCode,
        content_type: &'static str,
        body: String,
        delay: Option<Duration>,
    ) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(Mutex::new(None));
        let state = UpstreamState {
            status,
            content_type,
            body: Arc::new(body),
            delay,
            hits: Arc::clone(&hits),
            last: Arc::clone(&last),
        };

        let app = Router::new().fallback(record).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake upstream");
        let addr = listener.local_addr().expect("fake upstream address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake upstream crashed");
        });

        Self {
            base_url: format!("http://{addr}/v1beta"),
            hits,
            last,
            handle,
        }
    }

    /// Base URL to configure as `GEMINI_API_BASE_URL`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of requests received so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Most recent request received
    pub fn last_request(&self) -> RecordedRequest {
        self.last
            .lock()
            .expect("fake upstream lock poisoned")
            .clone()
            .expect("fake upstream received no request")
    }
}

impl Drop for FakeUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(
    State(state): State<UpstreamState>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last.lock().expect("fake upstream lock poisoned") = Some(RecordedRequest {
        path: uri.path().to_owned(),
        query: uri.query().map(str::to_owned),
        headers,
        body,
    });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    (
        state.status,
        [(header::CONTENT_TYPE, state.content_type)],
        state.body.as_str().to_owned(),
    )
}

/// Base URL of a loopback port with nothing listening on it
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway listener address");
    drop(listener);
    format!("http://{addr}/v1beta")
}

/// A provider success body carrying `text` in the first candidate
pub fn candidate_body(text: &str) -> Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}
