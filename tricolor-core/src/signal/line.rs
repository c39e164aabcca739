//! Signal lamp output line
//!
//! Drives one lamp through a GPIO pin, either directly or via a transistor
//! or relay that inverts the level.

use tricolor_hal::OutputPin;

use super::phase::Color;

/// One lamp of the signal head
///
/// The line tracks the logical lamp state. For active-low wiring the pin
/// level is the inverse of the lamp state.
pub struct OutputLine<P> {
    color: Color,
    pin: P,
    /// If true, lamp ON = pin LOW
    inverted: bool,
    /// Current logical state (true = lamp lit)
    lit: bool,
}

impl<P: OutputPin> OutputLine<P> {
    /// Create a line for `color` on `pin`
    ///
    /// Nothing is written until [`OutputLine::set_lit`] is called; the
    /// sequencer switches every line off during initialization.
    pub fn new(color: Color, pin: P, inverted: bool) -> Self {
        let lit = pin.is_set_high() != inverted;
        Self {
            color,
            pin,
            inverted,
            lit,
        }
    }

    /// Switch the lamp on or off
    pub fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
        self.pin.set_state(lit != self.inverted);
    }

    /// Check if the lamp is lit
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Lamp color of this line
    pub fn color(&self) -> Color {
        self.color
    }

    /// Check if the line is active-low
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Electrical level currently driven on the pin
    pub fn is_pin_high(&self) -> bool {
        self.pin.is_set_high()
    }

    /// Release the underlying pin
    pub fn into_pin(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_line() {
        let mut line = OutputLine::new(Color::Red, MockPin { high: false }, false);
        assert!(!line.is_lit());

        line.set_lit(true);
        assert!(line.is_lit());
        assert!(line.is_pin_high());

        line.set_lit(false);
        assert!(!line.is_lit());
        assert!(!line.is_pin_high());
    }

    #[test]
    fn test_active_low_line() {
        // Pin starts high, which is "off" for an active-low lamp
        let mut line = OutputLine::new(Color::Green, MockPin { high: true }, true);
        assert!(!line.is_lit());

        line.set_lit(true);
        assert!(line.is_lit());
        assert!(!line.is_pin_high());

        line.set_lit(false);
        assert!(!line.is_lit());
        assert!(line.is_pin_high());
    }

    #[test]
    fn test_initial_state_follows_pin() {
        let line = OutputLine::new(Color::Yellow, MockPin { high: true }, false);
        assert!(line.is_lit());
        assert_eq!(line.color(), Color::Yellow);
        assert!(!line.is_inverted());
        assert!(line.into_pin().high);
    }
}
