//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use scribe_config::{Config, HealthConfig, ProviderConfig, ServerConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder pointing the provider at a mock backend
    pub fn new(provider_base_url: &str) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                provider: ProviderConfig {
                    api_key: SecretString::from("test-key"),
                    base_url: Some(provider_base_url.to_owned()),
                    model: "whisper-1".to_string(),
                    spool_dir: None,
                },
                telemetry: None,
            },
        }
    }

    /// Spool transient audio files under `dir`
    pub fn with_spool_dir(mut self, dir: &Path) -> Self {
        self.config.provider.spool_dir = Some(dir.to_path_buf());
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
