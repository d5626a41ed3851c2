//! Logging setup
//!
//! Library code logs through `tracing`. On Android the events are forwarded
//! to the `log` facade and written to logcat by `android_logger`; elsewhere a
//! `tracing-subscriber` fmt layer writes them to stderr.

use std::sync::Once;

use crate::config::BridgeConfig;

static INIT: Once = Once::new();

/// Install the logger described by `config`. Only the first call has an effect.
pub fn init(config: &BridgeConfig) {
    INIT.call_once(|| {
        install(config);
        tracing::info!(level = %config.log_level, "akriti logging initialized");
    });
}

#[cfg(target_os = "android")]
fn install(config: &BridgeConfig) {
    let level = config
        .log_level
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Warn);

    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(level)
            .with_tag(config.log_tag.replace('\0', "")),
    );
}

#[cfg(not(target_os = "android"))]
fn install(config: &BridgeConfig) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Another subscriber may already be set by the host process
    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = BridgeConfig {
            log_level: "not a level [".to_string(),
            ..BridgeConfig::default()
        };
        init(&config);
        init(&BridgeConfig::default());
        assert!(INIT.is_completed());
    }
}
