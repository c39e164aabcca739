//! Signal sequencer
//!
//! Owns the three lamp lines and drives them through the fixed cycle,
//! holding each phase through an injected delay.

pub mod executor;
pub mod run;

pub use executor::Sequencer;
pub use run::{Cycles, Forever, RunCondition, RunFlag};
