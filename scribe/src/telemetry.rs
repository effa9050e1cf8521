use scribe_config::TelemetryConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the configured filter applies,
/// falling back to `info`.
pub fn init(config: Option<&TelemetryConfig>) -> anyhow::Result<()> {
    let directives = config
        .and_then(|telemetry| telemetry.log_filter.as_deref())
        .unwrap_or("info");

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(directives))?;

    tracing_subscriber::fmt().with_env_filter(filter).init();

    Ok(())
}
