//! Configuration types
//!
//! Board-agnostic signal configuration, parsed from the `signal.toml`
//! embedded in the firmware image.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
