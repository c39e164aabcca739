//! Tricolor Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the sequencer is written against,
//! so the same signal logic runs on a board, on a host test, or on any chip
//! with an `embedded-hal` implementation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (tricolor-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tricolor-core (Sequencer, Phase)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tricolor-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ tricolor-hal- │       │  embedded-hal │
//! │    rp2040     │       │   adapters    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`delay::Delay`], [`delay::AsyncDelay`] - Millisecond waits

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use delay::{AsyncDelay, Delay, EhDelay};
pub use gpio::{EhOutput, OutputPin};
