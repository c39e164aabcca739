//! Signal phases and lamp outputs
//!
//! The signal is a three-state cycle. Transitions are unconditional and
//! time-triggered; exactly one lamp is lit in every phase.

pub mod events;
pub mod line;
pub mod phase;
pub mod timeline;

pub use events::Event;
pub use line::OutputLine;
pub use phase::{Color, Phase};
