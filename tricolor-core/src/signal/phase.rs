//! Phase definition
//!
//! Which lamp is lit is a pure function of the current phase.

use super::events::Event;

/// Signal lamp colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Yellow,
    Green,
}

impl Color {
    /// All colors, in lamp order
    pub const ALL: [Color; 3] = [Color::Red, Color::Yellow, Color::Green];
}

/// Signal phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Red lamp lit; initial phase
    #[default]
    Red,
    /// Yellow lamp lit
    Yellow,
    /// Green lamp lit
    Green,
}

impl Phase {
    /// Phases in cycle order
    pub const ALL: [Phase; 3] = [Phase::Red, Phase::Yellow, Phase::Green];

    /// Number of phases in one cycle
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this phase in the cycle (0-based)
    pub const fn index(self) -> usize {
        match self {
            Phase::Red => 0,
            Phase::Yellow => 1,
            Phase::Green => 2,
        }
    }

    /// Phase at a cycle position, wrapping past the end
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// The lamp lit during this phase
    pub const fn color(self) -> Color {
        match self {
            Phase::Red => Color::Red,
            Phase::Yellow => Color::Yellow,
            Phase::Green => Color::Green,
        }
    }

    /// Check whether `color` is lit during this phase
    pub fn lights(self, color: Color) -> bool {
        self.color() == color
    }

    /// The phase that follows this one
    pub const fn next(self) -> Self {
        match self {
            Phase::Red => Phase::Yellow,
            Phase::Yellow => Phase::Green,
            Phase::Green => Phase::Red,
        }
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: Event) -> Self {
        match event {
            Event::HoldElapsed => self.next(),
            Event::Reset => Phase::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_is_red() {
        assert_eq!(Phase::default(), Phase::Red);
    }

    #[test]
    fn test_cycle_order() {
        let yellow = Phase::Red.transition(Event::HoldElapsed);
        assert_eq!(yellow, Phase::Yellow);

        let green = yellow.transition(Event::HoldElapsed);
        assert_eq!(green, Phase::Green);

        let red = green.transition(Event::HoldElapsed);
        assert_eq!(red, Phase::Red);
    }

    #[test]
    fn test_reset_from_any_phase() {
        for phase in Phase::ALL {
            assert_eq!(phase.transition(Event::Reset), Phase::Red);
        }
    }

    #[test]
    fn test_exactly_one_color_per_phase() {
        for phase in Phase::ALL {
            let lit = Color::ALL.iter().filter(|&&c| phase.lights(c)).count();
            assert_eq!(lit, 1);
        }
    }

    #[test]
    fn test_index_round_trip() {
        for phase in Phase::ALL {
            assert_eq!(Phase::from_index(phase.index()), phase);
        }
        assert_eq!(Phase::from_index(3), Phase::Red);
        assert_eq!(Phase::from_index(7), Phase::Yellow);
    }

    #[test]
    fn test_no_phase_repeats_within_cycle() {
        let mut phase = Phase::Red;
        let mut seen = [false; Phase::COUNT];
        for _ in 0..Phase::COUNT {
            assert!(!seen[phase.index()]);
            seen[phase.index()] = true;
            phase = phase.next();
        }
        assert_eq!(phase, Phase::Red);
    }
}
