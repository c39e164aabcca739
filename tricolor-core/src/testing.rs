//! Test doubles for the signal hardware
//!
//! Pins share one lamp bus so a delay can observe all three lamps while
//! the sequencer owns them.

use core::cell::Cell;
use std::vec::Vec;

use tricolor_hal::{AsyncDelay, Delay, OutputPin};

use crate::signal::Color;

/// Electrical pin levels, shared between the pins and the delay
#[derive(Default)]
pub struct LampBus {
    levels: Cell<[bool; 3]>,
    /// Set if any single write left more than one lamp lit
    overlap: Cell<bool>,
    /// Active-low flags, so the bus can tell lit from high
    inverted: Cell<[bool; 3]>,
    writes: Cell<u32>,
}

impl LampBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bus where every lamp is active-low and starts dark (pins high)
    pub fn active_low() -> Self {
        let bus = Self::default();
        bus.inverted.set([true; 3]);
        bus.levels.set([true; 3]);
        bus
    }

    pub fn pin(&self, color: Color) -> MockPin<'_> {
        MockPin {
            bus: self,
            slot: slot(color),
        }
    }

    pub fn is_high(&self, color: Color) -> bool {
        self.levels.get()[slot(color)]
    }

    pub fn lit(&self) -> [bool; 3] {
        let levels = self.levels.get();
        let inverted = self.inverted.get();
        [
            levels[0] != inverted[0],
            levels[1] != inverted[1],
            levels[2] != inverted[2],
        ]
    }

    pub fn lit_count(&self) -> usize {
        self.lit().iter().filter(|&&l| l).count()
    }

    pub fn saw_overlap(&self) -> bool {
        self.overlap.get()
    }

    pub fn writes(&self) -> u32 {
        self.writes.get()
    }

    fn write(&self, slot: usize, high: bool) {
        let mut levels = self.levels.get();
        levels[slot] = high;
        self.levels.set(levels);
        self.writes.set(self.writes.get() + 1);
        if self.lit_count() > 1 {
            self.overlap.set(true);
        }
    }
}

fn slot(color: Color) -> usize {
    match color {
        Color::Red => 0,
        Color::Yellow => 1,
        Color::Green => 2,
    }
}

/// Mock GPIO pin writing into a [`LampBus`]
pub struct MockPin<'a> {
    bus: &'a LampBus,
    slot: usize,
}

impl OutputPin for MockPin<'_> {
    fn set_high(&mut self) {
        self.bus.write(self.slot, true);
    }

    fn set_low(&mut self) {
        self.bus.write(self.slot, false);
    }

    fn is_set_high(&self) -> bool {
        self.bus.levels.get()[self.slot]
    }
}

/// One recorded hold: when it started, how long, and which lamps were lit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hold {
    pub start_ms: u64,
    pub duration_ms: u32,
    pub lit: [bool; 3],
}

/// Virtual clock delay recording every hold
pub struct MockDelay<'a> {
    bus: &'a LampBus,
    now_ms: u64,
    holds: Vec<Hold>,
}

impl<'a> MockDelay<'a> {
    pub fn new(bus: &'a LampBus) -> Self {
        Self {
            bus,
            now_ms: 0,
            holds: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn holds(&self) -> &[Hold] {
        &self.holds
    }

    fn record(&mut self, ms: u32) {
        self.holds.push(Hold {
            start_ms: self.now_ms,
            duration_ms: ms,
            lit: self.bus.lit(),
        });
        self.now_ms += ms as u64;
    }
}

impl Delay for MockDelay<'_> {
    fn delay_ms(&mut self, ms: u32) {
        self.record(ms);
    }
}

impl AsyncDelay for MockDelay<'_> {
    async fn after_ms(&mut self, ms: u32) {
        self.record(ms);
    }
}
