//! Signal timeline
//!
//! The schedule is fully determined by elapsed time since the first red
//! phase. These functions give the phase active at any instant, without
//! running the sequencer.

use super::phase::Phase;

/// Length of one full red, yellow, green cycle
pub const fn period_ms(phase_ms: u32) -> u64 {
    phase_ms as u64 * Phase::COUNT as u64
}

/// Number of phase holds completed at `elapsed_ms`
fn holds_completed(elapsed_ms: u64, phase_ms: u32) -> u64 {
    // A zero duration never passes validation; treat it as 1 ms here
    elapsed_ms / phase_ms.max(1) as u64
}

/// Phase active at `elapsed_ms`
pub fn phase_at(elapsed_ms: u64, phase_ms: u32) -> Phase {
    let holds = holds_completed(elapsed_ms, phase_ms);
    Phase::from_index((holds % Phase::COUNT as u64) as usize)
}

/// Number of complete cycles finished at `elapsed_ms`
pub fn cycle_at(elapsed_ms: u64, phase_ms: u32) -> u64 {
    holds_completed(elapsed_ms, phase_ms) / Phase::COUNT as u64
}

/// Time of the next phase change strictly after `elapsed_ms`
pub fn next_transition_ms(elapsed_ms: u64, phase_ms: u32) -> u64 {
    let phase_ms = phase_ms.max(1) as u64;
    (elapsed_ms / phase_ms + 1) * phase_ms
}
