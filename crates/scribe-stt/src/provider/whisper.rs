use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::SttError,
    http_client::http_client,
    spool::SpooledAudio,
    types::{Transcript, TranscriptionOptions},
};

use super::TranscriptionProvider;

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// OpenAI Whisper transcription provider
pub(crate) struct WhisperProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl WhisperProvider {
    pub fn new(api_key: SecretString, base_url: Option<String>) -> Self {
        let client = http_client();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string());

        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[derive(serde::Deserialize)]
struct WhisperResponse {
    text: String,
}

#[async_trait]
impl TranscriptionProvider for WhisperProvider {
    async fn transcribe(
        &self,
        audio: &SpooledAudio,
        options: &TranscriptionOptions,
    ) -> crate::error::Result<Transcript> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let bytes = audio.read().await?;

        tracing::debug!("Whisper transcription request: {} bytes, model={}", bytes.len(), options.model);

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes)
                    .file_name(audio.filename().to_string())
                    .mime_str(audio.content_type())
                    .map_err(|e| SttError::InvalidRequest(format!("Invalid content type: {e}")))?,
            )
            .text("model", options.model.clone())
            .text("language", options.language.clone())
            .text("temperature", options.temperature.to_string())
            .text("response_format", options.response_format.clone());

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Whisper request failed: {e}");
                SttError::Connection(format!("Failed to send request to Whisper: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Whisper API error ({status}): {error_text}");

            return Err(match status.as_u16() {
                401 => SttError::AuthenticationFailed(error_text),
                400 => SttError::InvalidRequest(error_text),
                _ => SttError::ProviderApi {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let result: WhisperResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Whisper response: {e}");
            SttError::MalformedResponse(e.to_string())
        })?;

        tracing::debug!("Whisper transcription complete");

        Ok(Transcript { text: result.text })
    }

    fn name(&self) -> &str {
        "whisper"
    }
}
