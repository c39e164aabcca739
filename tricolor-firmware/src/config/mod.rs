//! Configuration loading
//!
//! The signal configuration is `signal.toml`, compiled into the image and
//! parsed once at boot with the core `no_std` parser.

use defmt::*;

use tricolor_core::config::{parse_config, SignalConfig};

/// Embedded configuration (compiled into firmware)
/// Edit signal.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../signal.toml");

/// Load the embedded configuration
///
/// build.rs runs the same parser on signal.toml and fails the build on any
/// error, so the fallback is not reached with a checked-in config.
pub fn load_config() -> SignalConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {}", e);
            warn!("Using built-in default configuration");
            SignalConfig::default()
        }
    }
}
