//! Signal configuration types

use core::fmt;

use crate::signal::Color;

/// Hold time of each phase
pub const DEFAULT_PHASE_MS: u32 = 2000;

/// Default red lamp pin
pub const DEFAULT_RED_PIN: u8 = 13;

/// Default yellow lamp pin
pub const DEFAULT_YELLOW_PIN: u8 = 12;

/// Default green lamp pin
pub const DEFAULT_GREEN_PIN: u8 = 11;

/// Highest usable GPIO number (RP2040 has GPIO0-29)
pub const MAX_PIN: u8 = 29;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Lamp is lit when the pin is low
    pub inverted: bool,
}

impl PinConfig {
    /// Create an active-high pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin number beyond [`MAX_PIN`]
    InvalidPin(u8),
    /// Two lamps assigned to the same pin
    DuplicatePin(u8),
    /// Phase duration of zero
    ZeroDuration,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPin(pin) => write!(f, "gpio{} is out of range", pin),
            ConfigError::DuplicatePin(pin) => write!(f, "gpio{} is assigned twice", pin),
            ConfigError::ZeroDuration => f.write_str("phase_ms must be greater than zero"),
        }
    }
}

/// Complete signal configuration
///
/// Passed to the sequencer at construction; nothing about the signal is
/// global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalConfig {
    /// Red lamp pin
    pub red: PinConfig,
    /// Yellow lamp pin
    pub yellow: PinConfig,
    /// Green lamp pin
    pub green: PinConfig,
    /// Hold time of each phase in milliseconds
    pub phase_ms: u32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            red: PinConfig::new(DEFAULT_RED_PIN),
            yellow: PinConfig::new(DEFAULT_YELLOW_PIN),
            green: PinConfig::new(DEFAULT_GREEN_PIN),
            phase_ms: DEFAULT_PHASE_MS,
        }
    }
}

impl SignalConfig {
    /// Pin config of a lamp
    pub fn pin(&self, color: Color) -> PinConfig {
        match color {
            Color::Red => self.red,
            Color::Yellow => self.yellow,
            Color::Green => self.green,
        }
    }

    /// Mutable pin config of a lamp
    pub fn pin_mut(&mut self, color: Color) -> &mut PinConfig {
        match color {
            Color::Red => &mut self.red,
            Color::Yellow => &mut self.yellow,
            Color::Green => &mut self.green,
        }
    }

    /// Check the configuration can drive real hardware
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phase_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }

        let pins = [self.red.pin, self.yellow.pin, self.green.pin];
        for (i, &pin) in pins.iter().enumerate() {
            if pin > MAX_PIN {
                return Err(ConfigError::InvalidPin(pin));
            }
            if pins[..i].contains(&pin) {
                return Err(ConfigError::DuplicatePin(pin));
            }
        }

        Ok(())
    }
}
