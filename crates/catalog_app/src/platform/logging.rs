//! Logging initialization for the catalog binary.
//!
//! The terminal is used for the UI, so logs go to `catalog.log` unless the
//! config asks for terminal output.

use catalog_logging::{parse_level, LogDestination};
use log::LevelFilter;

use super::config::AppConfig;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Initialize the global logger from the config; `override_level` (from the
/// command line) wins over the configured level.
pub fn initialize(config: &AppConfig, override_level: Option<&str>) {
    let level = resolve_level(config, override_level);
    let destination: LogDestination = config.log_target.into();
    catalog_logging::initialize(destination, level, &config.log_file);
}

fn resolve_level(config: &AppConfig, override_level: Option<&str>) -> LevelFilter {
    override_level
        .or(config.log_level.as_deref())
        .and_then(parse_level)
        .unwrap_or(DEFAULT_LEVEL)
}
