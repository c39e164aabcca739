//! Signal events
//!
//! Events are the only inputs to the phase machine.

/// Events that drive phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// The current phase has been held for its full duration
    HoldElapsed,
    /// Sequencer (re)initialized; the cycle restarts at red
    Reset,
}
