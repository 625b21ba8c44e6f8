use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with an env-filter. `RUST_LOG` wins when set;
/// otherwise the configured level applies. Events go to stderr so the
/// choreography's own output stays clean on stdout.
pub fn init_telemetry(log_level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::debug!("object-relay telemetry initialized");
    Ok(())
}
