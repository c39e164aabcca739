//! RP2040-specific HAL for the traffic light firmware
//!
//! This crate binds RP2040 GPIO to the shared `tricolor-hal` traits:
//!
//! - Taking GPIO pins by number for config-driven setup
//! - Building signal outputs at their logical-off level

#![no_std]

pub mod output;
pub mod pins;

pub use output::{signal_output, SignalOutput};
pub use pins::{PinBank, PinError, GPIO_COUNT};
