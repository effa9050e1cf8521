use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the provider API key is empty, the spool
    /// directory does not exist, or the health path is not absolute
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.provider.api_key.expose_secret().is_empty() {
            anyhow::bail!("provider.api_key must not be empty");
        }

        // Router::route panics on paths without a leading slash
        if !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/': {}", self.server.health.path);
        }

        if let Some(ref spool_dir) = self.provider.spool_dir
            && !spool_dir.is_dir()
        {
            anyhow::bail!("provider.spool_dir is not a directory: {}", spool_dir.display());
        }

        Ok(())
    }
}
