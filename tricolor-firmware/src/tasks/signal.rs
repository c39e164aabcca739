//! Signal task
//!
//! Owns the sequencer and cycles the lamps for as long as the board is
//! powered. Holds are async, so the core sleeps between phase changes.

use defmt::*;
use embassy_time::Delay;

use tricolor_core::sequencer::{Forever, Sequencer};
use tricolor_hal::EhDelay;
use tricolor_hal_rp2040::SignalOutput;

/// Sequencer as wired on RP2040
pub type SignalSequencer = Sequencer<SignalOutput, EhDelay<Delay>>;

/// Signal task - runs the red, yellow, green cycle forever
#[embassy_executor::task]
pub async fn signal_task(mut sequencer: SignalSequencer) {
    info!("Signal task started");

    sequencer.initialize();
    sequencer.run_async(Forever).await;

    // Only reachable with a bounded run condition
    warn!("Signal task exited after {} cycles", sequencer.cycles());
}
