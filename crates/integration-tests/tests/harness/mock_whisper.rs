//! Mock Whisper backend for integration tests
//!
//! Implements the `/audio/transcriptions` endpoint of the OpenAI API
//! with canned responses, and records the form fields each request
//! carried so tests can assert on them.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// How the mock answers transcription requests
#[derive(Clone)]
enum Mode {
    /// Return a fixed transcript
    Canned(String),
    /// Return the uploaded bytes, interpreted as UTF-8, as the transcript
    EchoUpload,
    /// Fail with the given status code
    Fail(u16),
    /// Return a 200 whose body is not valid JSON
    Malformed,
}

/// Form fields and headers captured from one request
#[derive(Debug, Clone, Default)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub filename: Option<String>,
    pub file_content_type: Option<String>,
    pub file_len: usize,
    pub model: Option<String>,
    pub language: Option<String>,
    pub temperature: Option<String>,
    pub response_format: Option<String>,
}

struct MockState {
    mode: Mode,
    requests: Mutex<Vec<CapturedRequest>>,
}

/// Mock Whisper backend that returns predictable responses
pub struct MockWhisper {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockWhisper {
    /// Start a mock returning a fixed transcript
    pub async fn start_with_text(text: &str) -> anyhow::Result<Self> {
        Self::start_inner(Mode::Canned(text.to_owned())).await
    }

    /// Start a mock that echoes the uploaded bytes back as text
    pub async fn start_echoing() -> anyhow::Result<Self> {
        Self::start_inner(Mode::EchoUpload).await
    }

    /// Start a mock that fails every request with `status`
    pub async fn start_failing(status: u16) -> anyhow::Result<Self> {
        Self::start_inner(Mode::Fail(status)).await
    }

    /// Start a mock whose responses are not valid JSON
    pub async fn start_malformed() -> anyhow::Result<Self> {
        Self::start_inner(Mode::Malformed).await
    }

    async fn start_inner(mode: Mode) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            mode,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/audio/transcriptions", routing::post(handle_transcription))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a provider
    ///
    /// Includes `/v1` since the Whisper provider appends
    /// `/audio/transcriptions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of transcription requests received
    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    /// Copy of every captured request
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockWhisper {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_transcription(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let mut captured = CapturedRequest {
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        ..CapturedRequest::default()
    };
    let mut file_bytes = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name().unwrap_or("") {
            "file" => {
                captured.filename = field.file_name().map(str::to_owned);
                captured.file_content_type = field.content_type().map(str::to_owned);
                file_bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
                captured.file_len = file_bytes.len();
            }
            "model" => captured.model = field.text().await.ok(),
            "language" => captured.language = field.text().await.ok(),
            "temperature" => captured.temperature = field.text().await.ok(),
            "response_format" => captured.response_format = field.text().await.ok(),
            _ => {}
        }
    }

    let mode = state.mode.clone();
    state.requests.lock().unwrap().push(captured);

    match mode {
        Mode::Canned(text) => Json(serde_json::json!({ "text": text })).into_response(),
        Mode::EchoUpload => {
            let text = String::from_utf8_lossy(&file_bytes).into_owned();
            Json(serde_json::json!({ "text": text })).into_response()
        }
        Mode::Fail(status) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(serde_json::json!({
                "error": { "message": "mock provider failure", "type": "server_error" }
            })),
        )
            .into_response(),
        Mode::Malformed => (StatusCode::OK, "this is not json").into_response(),
    }
}
