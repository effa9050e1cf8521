use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use scribe_core::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Errors that can occur while handling a transcription request
#[derive(Debug, Error)]
pub enum SttError {
    /// Client sent a malformed or invalid request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request body is not multipart form data
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// The transient audio spool file could not be written
    #[error("failed to spool upload: {0}")]
    Spool(#[source] std::io::Error),

    /// Network failure reaching the provider
    #[error("connection error: {0}")]
    Connection(String),

    /// Provider rejected the configured credentials
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider API returned an error status
    #[error("provider error ({status}): {message}")]
    ProviderApi { status: u16, message: String },

    /// Provider returned a response the service could not parse
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// Configuration error detected at startup
    #[error("configuration error: {0}")]
    Config(String),
}

impl HttpError for SttError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            Self::Connection(_) | Self::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            Self::ProviderApi { status, .. } => match *status {
                400 => StatusCode::BAD_REQUEST,
                401 => StatusCode::UNAUTHORIZED,
                403 => StatusCode::FORBIDDEN,
                429 => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::BAD_GATEWAY,
            },
            Self::Spool(_) | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) | Self::UnsupportedMediaType(_) => "invalid_request_error",
            Self::AuthenticationFailed(_) => "authentication_error",
            Self::Connection(_) | Self::ProviderApi { .. } | Self::MalformedResponse(_) => "api_error",
            Self::Spool(_) | Self::Config(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            // Local filesystem details stay out of API responses
            Self::Spool(_) => "failed to persist upload".to_string(),
            Self::Config(_) => "service misconfigured".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for SttError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = serde_json::json!({
            "error": {
                "message": self.client_message(),
                "type": self.error_type(),
                "code": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}
