use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Installs a stderr subscriber so log lines never mix with the game on stdout.
pub fn init_tracing(level: LevelFilter) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(format!("hangterm={level}")))
        .init();
}
