//! Signal outputs on RP2040 GPIO

use embassy_rp::gpio::{Level, Output};
use tricolor_core::config::PinConfig;
use tricolor_hal::EhOutput;

use crate::pins::{PinBank, PinError};

/// A signal lamp output on an RP2040 pin
pub type SignalOutput = EhOutput<Output<'static>>;

/// Configure a pin from the bank as a push-pull output
///
/// The pin starts at its logical-off level: low for active-high lamps,
/// high for active-low ones, so no lamp flashes before the first phase.
pub fn signal_output(bank: &mut PinBank, config: PinConfig) -> Result<SignalOutput, PinError> {
    let pin = bank.take(config.pin)?;
    let off = if config.inverted { Level::High } else { Level::Low };
    let output = Output::new(pin, off);
    Ok(EhOutput::new(output, config.inverted))
}
