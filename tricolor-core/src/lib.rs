//! Board-agnostic core logic for the traffic light firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Signal phases and the fixed red, yellow, green cycle
//! - Output lines with active-low support
//! - The sequencer that drives three lines through the cycle
//! - Run conditions bounding the otherwise endless loop
//! - Configuration types, validation and the `signal.toml` parser

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod sequencer;
pub mod signal;

#[cfg(test)]
mod testing;
