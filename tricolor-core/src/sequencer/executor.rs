//! Sequencer execution
//!
//! One scheduling tick applies the current phase, holds it for the
//! configured duration, then advances. The run loops repeat the tick
//! while their run condition allows.

use tricolor_hal::{AsyncDelay, Delay, OutputPin};

use super::run::RunCondition;
use crate::config::SignalConfig;
use crate::signal::{Color, Event, OutputLine, Phase};

/// Traffic light sequencer
///
/// Owns the red, yellow and green lines and the delay used to hold each
/// phase. Exactly one line is lit after every [`Sequencer::apply`].
pub struct Sequencer<P, D> {
    red: OutputLine<P>,
    yellow: OutputLine<P>,
    green: OutputLine<P>,
    /// Phase applied by the next tick
    phase: Phase,
    /// Phase holds completed since initialization
    holds: u64,
    config: SignalConfig,
    delay: D,
}

impl<P: OutputPin, D> Sequencer<P, D> {
    /// Create a sequencer over three output pins
    ///
    /// Active-low handling comes from `config`; the pin numbers in it are
    /// informational here, since the pins are already bound.
    pub fn new(config: SignalConfig, red: P, yellow: P, green: P, delay: D) -> Self {
        Self {
            red: OutputLine::new(Color::Red, red, config.red.inverted),
            yellow: OutputLine::new(Color::Yellow, yellow, config.yellow.inverted),
            green: OutputLine::new(Color::Green, green, config.green.inverted),
            phase: Phase::default(),
            holds: 0,
            config,
            delay,
        }
    }

    /// Put every line in a known state and restart the cycle at red
    ///
    /// All lamps are switched off; the first tick lights red.
    pub fn initialize(&mut self) {
        for color in Color::ALL {
            self.line_mut(color).set_lit(false);
        }
        self.phase = self.phase.transition(Event::Reset);
        self.holds = 0;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Sequencer initialized: red={}, yellow={}, green={}, phase={}ms",
            self.config.red.pin,
            self.config.yellow.pin,
            self.config.green.pin,
            self.config.phase_ms
        );
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed red, yellow, green cycles, saturating at `u32::MAX`
    pub fn cycles(&self) -> u32 {
        u32::try_from(self.holds / Phase::COUNT as u64).unwrap_or(u32::MAX)
    }

    /// Time from initialization to the start of the current phase
    pub fn elapsed_ms(&self) -> u64 {
        self.holds * self.config.phase_ms as u64
    }

    /// Signal configuration
    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Line driving a lamp
    pub fn line(&self, color: Color) -> &OutputLine<P> {
        match color {
            Color::Red => &self.red,
            Color::Yellow => &self.yellow,
            Color::Green => &self.green,
        }
    }

    fn line_mut(&mut self, color: Color) -> &mut OutputLine<P> {
        match color {
            Color::Red => &mut self.red,
            Color::Yellow => &mut self.yellow,
            Color::Green => &mut self.green,
        }
    }

    /// Delay used to hold phases
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Drive the outputs for the current phase
    ///
    /// Lines going dark are written before the line coming on, so no write
    /// ever leaves two lamps lit.
    pub fn apply(&mut self) {
        let phase = self.phase;
        for color in Color::ALL {
            if !phase.lights(color) {
                self.line_mut(color).set_lit(false);
            }
        }
        self.line_mut(phase.color()).set_lit(true);
    }

    /// Move to the next phase after a completed hold
    pub fn advance(&mut self) -> Phase {
        self.phase = self.phase.transition(Event::HoldElapsed);
        self.holds += 1;

        #[cfg(feature = "defmt")]
        {
            defmt::debug!("Phase -> {}", self.phase);
            if self.phase == Phase::Red {
                defmt::info!("Cycle {} complete", self.cycles());
            }
        }

        self.phase
    }

    /// Switch every lamp off
    pub fn shutdown(&mut self) {
        for color in Color::ALL {
            self.line_mut(color).set_lit(false);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Sequencer stopped after {} cycles", self.cycles());
    }

    /// Release the pins and the delay
    pub fn release(self) -> (P, P, P, D) {
        (
            self.red.into_pin(),
            self.yellow.into_pin(),
            self.green.into_pin(),
            self.delay,
        )
    }
}

impl<P: OutputPin, D: Delay> Sequencer<P, D> {
    /// One scheduling tick with a blocking hold
    pub fn step(&mut self) -> Phase {
        self.apply();
        self.delay.delay_ms(self.config.phase_ms);
        self.advance()
    }

    /// Cycle the lamps until `cond` says stop, then switch them off
    ///
    /// With [`Forever`](super::Forever) this never returns.
    pub fn run<R: RunCondition>(&mut self, mut cond: R) {
        while cond.keep_running(self.phase, self.cycles()) {
            self.step();
        }
        self.shutdown();
    }
}

impl<P: OutputPin, D: AsyncDelay> Sequencer<P, D> {
    /// One scheduling tick with an async hold
    pub async fn step_async(&mut self) -> Phase {
        self.apply();
        self.delay.after_ms(self.config.phase_ms).await;
        self.advance()
    }

    /// Async equivalent of [`Sequencer::run`]
    pub async fn run_async<R: RunCondition>(&mut self, mut cond: R) {
        while cond.keep_running(self.phase, self.cycles()) {
            self.step_async().await;
        }
        self.shutdown();
    }
}
