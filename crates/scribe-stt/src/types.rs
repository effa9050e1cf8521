use serde::{Deserialize, Serialize};

/// Inbound audio upload, owned by one request for its duration
#[derive(Debug)]
pub struct Upload {
    /// Raw audio data
    pub bytes: Vec<u8>,
    /// Client-declared filename
    pub filename: String,
    /// Client-declared content type
    pub content_type: String,
}

/// Options sent with every provider request
///
/// Fixed at startup from configuration; no field varies per call.
/// Temperature 0 keeps provider decoding deterministic, and the JSON
/// response format pins the envelope shape the service parses.
#[derive(Debug, Clone)]
pub struct TranscriptionOptions {
    /// Model identifier (e.g. "whisper-1")
    pub model: String,
    /// Language hint (ISO 639-1)
    pub language: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Response format
    pub response_format: String,
}

impl TranscriptionOptions {
    /// Build the deployment-fixed options for a model
    pub fn for_model(model: String) -> Self {
        Self {
            model,
            language: "en".to_string(),
            temperature: 0.0,
            response_format: "json".to_string(),
        }
    }
}

/// Transcription result following the OpenAI Whisper API format
#[derive(Debug, Serialize, Deserialize)]
pub struct Transcript {
    /// Transcribed text
    pub text: String,
}
