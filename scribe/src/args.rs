use std::path::PathBuf;

use clap::Parser;

/// Scribe audio transcription service
#[derive(Debug, Parser)]
#[command(name = "scribe", about = "HTTP relay from audio uploads to a speech-to-text provider")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "scribe.toml", env = "SCRIBE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "SCRIBE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
