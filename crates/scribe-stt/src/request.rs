use axum::extract::{FromRequest, Multipart, Request};

use crate::{error::SttError, types::Upload};

/// Extractor for the multipart upload carrying one `file` field
///
/// Rejects before any filesystem or network I/O happens: a missing or
/// empty `file` field never creates a spool file. Unknown form fields
/// are ignored. Rejections are `SttError` values so they render as the
/// same JSON error envelope as handler failures.
pub struct ExtractUpload(pub Upload);

impl<S> FromRequest<S> for ExtractUpload
where
    S: Send + Sync,
{
    type Rejection = SttError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = request
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("multipart/form-data") {
            return Err(SttError::UnsupportedMediaType(
                "expected 'Content-Type: multipart/form-data'".to_string(),
            ));
        }

        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| SttError::InvalidRequest(format!("failed to parse multipart form: {e}")))?;

        let mut upload: Option<Upload> = None;

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => {
                    return Err(SttError::InvalidRequest(format!("failed to read multipart field: {e}")));
                }
            };

            if field.name() != Some("file") {
                continue;
            }

            let filename = field.file_name().unwrap_or("audio.wav").to_string();
            let content_type = field.content_type().unwrap_or("audio/wav").to_string();

            let bytes = field
                .bytes()
                .await
                .map_err(|e| SttError::InvalidRequest(format!("failed to read audio data: {e}")))?
                .to_vec();

            upload = Some(Upload {
                bytes,
                filename,
                content_type,
            });
        }

        let upload = upload
            .ok_or_else(|| SttError::InvalidRequest("missing required 'file' field in multipart form".to_string()))?;

        if upload.bytes.is_empty() {
            return Err(SttError::InvalidRequest("empty 'file' field in multipart form".to_string()));
        }

        Ok(Self(upload))
    }
}
