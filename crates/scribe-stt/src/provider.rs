pub(crate) mod whisper;

use async_trait::async_trait;

use crate::{
    spool::SpooledAudio,
    types::{Transcript, TranscriptionOptions},
};

/// Trait for transcription provider implementations
///
/// The service treats the provider as an opaque network capability
/// with a single operation; protocol and authentication details live
/// behind it.
#[async_trait]
pub(crate) trait TranscriptionProvider: Send + Sync {
    /// Transcribe a spooled audio resource to text
    async fn transcribe(&self, audio: &SpooledAudio, options: &TranscriptionOptions) -> crate::error::Result<Transcript>;

    /// Get the provider name
    fn name(&self) -> &str;
}
