use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing and logging
///
/// This sets up:
/// - Structured JSON logging (for production)
/// - Console logging (for development)
/// - Environment-based log level filtering (RUST_LOG overrides config)
pub fn init_observability(service_name: &str, log_level: &str, log_format: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_filter(env_filter))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::debug!(service.name = service_name, "Observability initialized");

    Ok(())
}
