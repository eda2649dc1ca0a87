//! Logging setup using `tracing` and `tracing-subscriber`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Initializes the global subscriber.
///
/// `RUST_LOG` overrides the level when set; otherwise our crates log at
/// `level` and external crates stay at warn to reduce noise.
pub fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level
            .into_level()
            .map_or_else(|| "off".to_string(), |l| l.as_str().to_lowercase());
        EnvFilter::new(format!(
            "warn,board_cli={level},board_archive={level},board_convert={level},\
             board_infer={level},board_ingest={level},board_model={level}",
            level = level
        ))
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();
}
