mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from(&config_path).await?;
    apply_overrides(&mut config, |key| env::var(key).ok());
    config.validate()?;

    Ok(config)
}

/// Reads a YAML config file. A missing file yields the built-in defaults.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.ollama.model.trim().is_empty() {
            return Err(Error::config("ollama.model must not be empty"));
        }
        if self.ollama.timeout_secs == 0 {
            return Err(Error::config("ollama.timeout_secs must be greater than zero"));
        }
        if self.review.max_code_length == 0 {
            return Err(Error::config("review.max_code_length must be greater than zero"));
        }
        Ok(())
    }
}

fn apply_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(base_url) = lookup("OLLAMA_BASE_URL").filter(|v| !v.is_empty()) {
        debug!("OLLAMA_BASE_URL overrides configured base URL");
        config.ollama.base_url = base_url;
    }
    if let Some(model) = lookup("OLLAMA_MODEL").filter(|v| !v.is_empty()) {
        config.ollama.model = model;
    }
}
