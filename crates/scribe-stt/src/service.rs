use std::path::PathBuf;

use secrecy::ExposeSecret;

use crate::{
    error::{Result, SttError},
    provider::{TranscriptionProvider, whisper::WhisperProvider},
    spool::SpooledAudio,
    types::{Transcript, TranscriptionOptions, Upload},
};

/// Transcription request handler
///
/// Owns the provider capability and the deployment-fixed options.
/// Stateless across requests; each call spools its own transient
/// audio file and releases it before returning.
pub struct TranscriptionService {
    provider: Box<dyn TranscriptionProvider>,
    options: TranscriptionOptions,
    spool_dir: Option<PathBuf>,
}

impl TranscriptionService {
    /// Build the service from configuration
    pub fn from_config(config: &scribe_config::Config) -> Result<Self> {
        let provider_config = &config.provider;

        if provider_config.api_key.expose_secret().is_empty() {
            return Err(SttError::Config("API key required for transcription provider".to_string()));
        }

        tracing::debug!(model = %provider_config.model, "initializing Whisper provider");

        let provider = Box::new(WhisperProvider::new(
            provider_config.api_key.clone(),
            provider_config.base_url.clone(),
        ));

        Ok(Self::new(
            provider,
            TranscriptionOptions::for_model(provider_config.model.clone()),
            provider_config.spool_dir.clone(),
        ))
    }

    fn new(
        provider: Box<dyn TranscriptionProvider>,
        options: TranscriptionOptions,
        spool_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            provider,
            options,
            spool_dir,
        }
    }

    /// Transcribe one upload
    ///
    /// Spools the upload to a transient file, calls the provider with
    /// it, and returns the transcript. The spool guard drops when this
    /// function returns, so the file is removed on success and on
    /// every failure path that created it.
    pub(crate) async fn transcribe(&self, upload: Upload) -> Result<Transcript> {
        let audio = SpooledAudio::write(upload, self.spool_dir.as_deref()).await?;

        self.provider.transcribe(&audio, &self.options).await
    }
}
