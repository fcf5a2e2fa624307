use ferrous_responder_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` directives win over the configured level when both are set.
pub fn init_logging(config: &Config) {
    let log_level = config
        .logging
        .level
        .parse()
        .unwrap_or(tracing::Level::INFO);

    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    if config.logging.json {
        subscriber.json().init();
    } else {
        subscriber.with_ansi(true).init();
    }

    info!("Logging initialized at level: {}", config.logging.level);
}
