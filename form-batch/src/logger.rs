//! Logging setup

use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Initialize console logging
///
/// # Arguments
/// * `level` - Default filter (e.g., "info", "form_batch=debug"); `RUST_LOG` takes precedence
/// * `json_format` - Emit JSON lines instead of human-readable output
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()?;

    Ok(())
}
