//! Run conditions
//!
//! The sequencer loop is bounded by a condition checked before every
//! phase. On hardware the condition never stops; tests and controlled
//! shutdowns use the bounded ones.

use portable_atomic::{AtomicBool, Ordering};

use crate::signal::Phase;

/// Decides whether the sequencer keeps running
pub trait RunCondition {
    /// Called before each phase is applied
    ///
    /// `phase` is the phase about to be lit; `cycles` is the number of
    /// completed red, yellow, green cycles so far.
    fn keep_running(&mut self, phase: Phase, cycles: u32) -> bool;
}

impl<R: RunCondition + ?Sized> RunCondition for &mut R {
    fn keep_running(&mut self, phase: Phase, cycles: u32) -> bool {
        (**self).keep_running(phase, cycles)
    }
}

/// Never stops: the always-on signal
#[derive(Debug, Clone, Copy, Default)]
pub struct Forever;

impl RunCondition for Forever {
    fn keep_running(&mut self, _phase: Phase, _cycles: u32) -> bool {
        true
    }
}

/// Stops once the given number of full cycles has completed
#[derive(Debug, Clone, Copy)]
pub struct Cycles(pub u32);

impl RunCondition for Cycles {
    fn keep_running(&mut self, _phase: Phase, cycles: u32) -> bool {
        cycles < self.0
    }
}

/// Stop request that can live in a `static`
///
/// Only plain loads and stores are used, which `thumbv6m` supports
/// natively.
#[derive(Debug)]
pub struct RunFlag {
    running: AtomicBool,
}

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl RunFlag {
    /// Create a flag in the running state
    pub const fn new() -> Self {
        Self {
            running: AtomicBool::new(true),
        }
    }

    /// Request the sequencer to stop before its next phase
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Allow a stopped sequencer to be run again
    pub fn rearm(&self) {
        self.running.store(true, Ordering::Release);
    }

    /// Check if running is still allowed
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

impl RunCondition for &RunFlag {
    fn keep_running(&mut self, _phase: Phase, _cycles: u32) -> bool {
        self.is_running()
    }
}
