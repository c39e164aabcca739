//! Embassy async tasks

pub mod signal;

pub use signal::{signal_task, SignalSequencer};
