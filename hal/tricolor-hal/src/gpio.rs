//! GPIO output abstraction
//!
//! Provides the digital output trait used by signal lines, and an adapter
//! for any `embedded-hal` 1.0 output pin.

/// Digital output pin
///
/// Implementations drive the electrical level only. Active-low handling
/// lives one layer up, in the signal line.
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently driven low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Adapter from an `embedded-hal` output pin
///
/// `embedded-hal` reads back the output level through `&mut self`, so the
/// adapter keeps its own copy of the last level written. Write errors are
/// discarded: on the supported chips they are `Infallible`.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P: embedded_hal::digital::OutputPin> EhOutput<P> {
    /// Wrap a pin whose current level is `initial_high`
    pub fn new(pin: P, initial_high: bool) -> Self {
        Self {
            pin,
            high: initial_high,
        }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::OutputPin> OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorType, OutputPin as EhOutputPin};

    /// Mock embedded-hal pin counting writes
    struct MockEhPin {
        high: bool,
        writes: u32,
    }

    impl ErrorType for MockEhPin {
        type Error = Infallible;
    }

    impl EhOutputPin for MockEhPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_eh_output_tracks_level() {
        let mut out = EhOutput::new(MockEhPin { high: false, writes: 0 }, false);
        assert!(out.is_set_low());

        out.set_high();
        assert!(out.is_set_high());

        out.set_state(false);
        assert!(out.is_set_low());

        let pin = out.into_inner();
        assert!(!pin.high);
        assert_eq!(pin.writes, 2);
    }

    #[test]
    fn test_initial_level_is_reported() {
        let out = EhOutput::new(MockEhPin { high: true, writes: 0 }, true);
        assert!(out.is_set_high());
    }
}
