//! Minimal TOML parser for signal configuration
//!
//! Handles only the subset `signal.toml` uses. It does NOT support the full
//! TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer)
//! - `[signal]` and `[light.<color>]` / `[light <color>]` headers
//! - Comments (# ...), including trailing comments
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings
//! - Dotted keys outside section headers

use core::fmt;

use super::types::{ConfigError, PinConfig, SignalConfig};
use crate::signal::Color;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Unknown key, or key outside any section
    InvalidKey,
    /// Malformed line or value
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
    /// Parsed configuration failed validation
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(e: ConfigError) -> Self {
        ParseError::Invalid(e)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidSection => f.write_str("invalid section header"),
            ParseError::InvalidKey => f.write_str("unknown key"),
            ParseError::InvalidValue => f.write_str("invalid value"),
            ParseError::InvalidPin => f.write_str("invalid pin string"),
            ParseError::Invalid(e) => write!(f, "invalid configuration: {}", e),
        }
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Signal,
    Light(Color),
}

/// Parse TOML configuration into SignalConfig
///
/// Keys that are absent keep their defaults. The result is validated
/// before it is returned.
pub fn parse_config(input: &str) -> Result<SignalConfig, ParseError> {
    let mut config = SignalConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = strip_comment(line);
            if !header.ends_with(']') {
                return Err(ParseError::InvalidSection);
            }
            section = parse_section_header(&header[1..header.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;

        match section {
            Section::Root => return Err(ParseError::InvalidKey),
            Section::Signal => match key {
                "phase_ms" => config.phase_ms = parse_int(value)?,
                _ => return Err(ParseError::InvalidKey),
            },
            Section::Light(color) => match key {
                "pin" => *config.pin_mut(color) = parse_pin(value)?,
                _ => return Err(ParseError::InvalidKey),
            },
        }
    }

    config.validate()?;
    Ok(config)
}

/// Parse a section header (without brackets)
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    let header = header.trim();

    if header == "signal" {
        return Ok(Section::Signal);
    }

    // "light.red" or "light red"
    let (kind, name) = header
        .split_once('.')
        .or_else(|| header.split_once(char::is_whitespace))
        .ok_or(ParseError::InvalidSection)?;

    if kind.trim() != "light" {
        return Err(ParseError::InvalidSection);
    }

    let color = match name.trim() {
        "red" => Color::Red,
        "yellow" => Color::Yellow,
        "green" => Color::Green,
        _ => return Err(ParseError::InvalidSection),
    };

    Ok(Section::Light(color))
}

/// Remove a trailing comment that is not inside a string
fn strip_comment(s: &str) -> &str {
    let mut in_string = false;
    for (i, c) in s.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return s[..i].trim(),
            _ => {}
        }
    }
    s.trim()
}

/// Split a line into key and value
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = strip_comment(value);

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

/// Parse an integer value, allowing `_` between digits
fn parse_int(value: &str) -> Result<u32, ParseError> {
    let mut result: u32 = 0;
    let mut digits = 0;
    let mut after_digit = false;

    for c in value.chars() {
        if c == '_' {
            // Each underscore must sit between two digits
            if !after_digit {
                return Err(ParseError::InvalidValue);
            }
            after_digit = false;
            continue;
        }
        let digit = c.to_digit(10).ok_or(ParseError::InvalidValue)?;
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(ParseError::InvalidValue)?;
        digits += 1;
        after_digit = true;
    }

    if digits == 0 || !after_digit {
        return Err(ParseError::InvalidValue);
    }
    Ok(result)
}

/// Parse a pin string like "gpio13" or "!gpio13" (active-low)
fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let s = parse_string(value).trim();

    let (s, inverted) = match s.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (s, false),
    };

    let num = s.strip_prefix("gpio").ok_or(ParseError::InvalidPin)?;
    if num.is_empty() || !num.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPin);
    }
    let pin: u8 = num.parse().map_err(|_| ParseError::InvalidPin)?;

    Ok(PinConfig { pin, inverted })
}
