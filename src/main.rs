use anyhow::{Context, Result};
use code_review_api::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// `RUST_LOG` wins over `server.logs.level`; only bare level names are accepted.
fn log_filter(configured: &str) -> Result<(String, EnvFilter)> {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| configured.to_string());

    level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })?;

    let filter = EnvFilter::try_new(&level)?;
    Ok((level, filter))
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()
        .await
        .context("Failed to load configuration")?;

    let (level, filter) = log_filter(&config.server.logs.level)?;
    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        log_level = %level,
        model = %config.ollama.model,
        "Starting code review API"
    );

    server::run(config).await?;

    Ok(())
}
