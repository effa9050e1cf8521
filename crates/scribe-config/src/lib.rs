#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
mod loader;
pub mod provider;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use health::HealthConfig;
pub use provider::ProviderConfig;
pub use server::ServerConfig;
pub use telemetry::TelemetryConfig;

/// Top-level Scribe configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Transcription provider configuration
    pub provider: ProviderConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
