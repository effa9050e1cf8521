#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod http_client;
mod provider;
mod request;
mod service;
mod spool;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    routing::post,
};

pub use error::{Result, SttError};
pub use service::TranscriptionService;
pub use types::{Transcript, TranscriptionOptions, Upload};
use request::ExtractUpload;

/// Body limit for audio uploads (32 MiB)
const BODY_LIMIT_BYTES: usize = 32 << 20;

/// Build the transcription service from configuration
///
/// # Errors
///
/// Returns an error if the service fails to initialize
pub fn build_service(config: &scribe_config::Config) -> anyhow::Result<Arc<TranscriptionService>> {
    let service = Arc::new(
        TranscriptionService::from_config(config)
            .map_err(|e| anyhow::anyhow!("Failed to initialize transcription service: {e}"))?,
    );
    Ok(service)
}

/// Create the endpoint router for transcription
pub fn endpoint_router() -> Router<Arc<TranscriptionService>> {
    Router::new()
        .route("/v1/audio/transcriptions", post(transcribe))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
}

/// Handle transcription requests
async fn transcribe(
    State(service): State<Arc<TranscriptionService>>,
    ExtractUpload(upload): ExtractUpload,
) -> Result<Json<Transcript>> {
    tracing::debug!(
        filename = %upload.filename,
        bytes = upload.bytes.len(),
        "transcription handler called"
    );

    let transcript = service.transcribe(upload).await?;

    tracing::debug!("transcription complete");

    Ok(Json(transcript))
}
