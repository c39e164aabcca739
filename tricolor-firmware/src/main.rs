//! Tricolor - Traffic Light Firmware
//!
//! Main firmware binary for RP2040 boards driving a three-lamp signal
//! head. Lamp pins and phase timing come from `signal.toml`, embedded at
//! build time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use tricolor_core::config::SignalConfig;
use tricolor_core::sequencer::Sequencer;
use tricolor_core::signal::Color;
use tricolor_hal::EhDelay;
use tricolor_hal_rp2040::{signal_output, PinBank, PinError, SignalOutput};

mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tricolor firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();
    info!(
        "Signal config: red=gpio{}{}, yellow=gpio{}{}, green=gpio{}{}, phase={}ms",
        config.red.pin,
        active_low_marker(config.red.inverted),
        config.yellow.pin,
        active_low_marker(config.yellow.inverted),
        config.green.pin,
        active_low_marker(config.green.inverted),
        config.phase_ms
    );

    // Pin numbers are only known after parsing, so take them from a bank
    let mut bank = PinBank::from_peripherals(p);
    // A validated config has distinct, in-range pins, so this cannot fail
    let sequencer = unwrap!(build_sequencer(&mut bank, config));

    info!("Signal outputs initialized");

    spawner.spawn(tasks::signal_task(sequencer)).unwrap();

    info!("Signal task spawned, firmware running");

    // Main task has nothing else to do - all work happens in the signal task
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Claim the three lamp pins and wire up the sequencer
fn build_sequencer(
    bank: &mut PinBank,
    config: SignalConfig,
) -> Result<tasks::SignalSequencer, PinError> {
    let red: SignalOutput = signal_output(bank, config.pin(Color::Red))?;
    let yellow = signal_output(bank, config.pin(Color::Yellow))?;
    let green = signal_output(bank, config.pin(Color::Green))?;

    Ok(Sequencer::new(config, red, yellow, green, EhDelay(Delay)))
}

fn active_low_marker(inverted: bool) -> &'static str {
    if inverted {
        " (active-low)"
    } else {
        ""
    }
}
