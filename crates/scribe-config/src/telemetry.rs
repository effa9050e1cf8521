use serde::Deserialize;

/// Logging configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Log filter directives (`tracing_subscriber::EnvFilter` syntax)
    ///
    /// `RUST_LOG` takes precedence when set; `"info"` is the fallback.
    #[serde(default)]
    pub log_filter: Option<String>,
}
