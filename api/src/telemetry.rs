//! Tracing subscriber setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cs_shared::config::{LogFormat, LoggingConfig};

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let subscriber = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Pretty => subscriber.with(fmt::layer().with_target(true)).try_init()?,
        LogFormat::Json => subscriber
            .with(fmt::layer().json().with_current_span(true))
            .try_init()?,
    }

    Ok(())
}
