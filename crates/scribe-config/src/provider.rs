use std::path::PathBuf;

use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for the transcription provider
///
/// The provider is configured once at process startup. Per-call
/// options (language, temperature, response format) are fixed by the
/// service and are not configurable per request.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// API key for the provider
    pub api_key: SecretString,
    /// Base URL override, defaults to the OpenAI API
    #[serde(default)]
    pub base_url: Option<String>,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Directory for transient audio spool files
    ///
    /// Defaults to the OS temp directory when unset.
    #[serde(default)]
    pub spool_dir: Option<PathBuf>,
}

fn default_model() -> String {
    "whisper-1".to_string()
}
