//! Logging setup (stderr, so stdout only carries command output)

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "hrdoc=info";

/// Initialize tracing
///
/// # Environment Variables
///
/// - `RUST_LOG`: filter directives (default: `hrdoc=info`)
/// - `HRDOC_LOG_FORMAT`: `json` for structured output, anything else for pretty
pub fn init_logging() -> Result<()> {
    let log_format = std::env::var("HRDOC_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("Failed to create env filter")?;

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install JSON subscriber")?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install subscriber")?;
        }
    }

    Ok(())
}
