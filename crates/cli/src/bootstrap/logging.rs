use mockdns_domain::Config;
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init_logging(config: &Config) {
    let (level, known) = match config.logging.level.parse::<LevelFilter>() {
        Ok(level) => (level, true),
        Err(_) => (LevelFilter::INFO, false),
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();

    if !known {
        warn!(level = %config.logging.level, "Unknown log level, using info");
    }
}
