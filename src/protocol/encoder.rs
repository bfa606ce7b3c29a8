//! Symbol encoder: frame + pass → timed pulse train.
//!
//! Produces the exact sequence of line levels and hold times for one pass,
//! independent of how it gets onto the wire.  The transmitter replays it
//! with a GPIO and a busy-wait; tests simply inspect it.
//!
//! ```text
//!  wake-up (first pass)   hw sync ×N         sw sync       56 data bits      silence
//!  ▔▔▔▔▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁   ▔▔▁▁▔▔▁▁ …   ▔▔▔▔▔▁      ▁▔ ▔▁ ▁▔ …       ▁▁▁▁▁▁▁▁
//! ```
//!
//! Data bits are inverted Manchester: 1 = LOW→HIGH, 0 = HIGH→LOW, each
//! half exactly one symbol.

use embedded_hal::digital::PinState;
use heapless::Vec;

use super::frame::{FRAME_BITS, Frame};
use super::timing::{
    FramePass, HW_SYNC_HALF_US, INTER_FRAME_SILENCE_US, MAX_SYNC_PULSES, SW_SYNC_HIGH_US,
    SW_SYNC_LOW_US, SYMBOL_US, WAKEUP_HIGH_US, WAKEUP_LOW_US,
};

/// Longest possible pass: wake-up, max sync, sw sync, data, silence.
pub const MAX_PULSES: usize = 2 + 2 * MAX_SYNC_PULSES as usize + 2 + 2 * FRAME_BITS + 1;

/// Drive the line to `level` and hold it for `duration_us`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub level: PinState,
    pub duration_us: u32,
}

impl Pulse {
    pub const fn high(duration_us: u32) -> Self {
        Self {
            level: PinState::High,
            duration_us,
        }
    }

    pub const fn low(duration_us: u32) -> Self {
        Self {
            level: PinState::Low,
            duration_us,
        }
    }
}

/// One pass worth of pulses.
pub type PulseTrain = Vec<Pulse, MAX_PULSES>;

/// Number of pulses [`encode`] emits for `pass`.
pub const fn pulse_count(pass: FramePass) -> usize {
    let wake = if pass.wake_up { 2 } else { 0 };
    let sync = if pass.sync_pulses > MAX_SYNC_PULSES {
        MAX_SYNC_PULSES
    } else {
        pass.sync_pulses
    };
    wake + 2 * sync as usize + 2 + 2 * FRAME_BITS + 1
}

/// Line-code `frame` for one pass.
///
/// Sync counts above [`MAX_SYNC_PULSES`] are clamped; no RTS pass uses more.
pub fn encode(frame: &Frame, pass: FramePass) -> PulseTrain {
    let mut train = PulseTrain::new();
    // Capacity covers the longest pass, so pushes cannot fail.
    let mut emit = |pulse: Pulse| {
        let _ = train.push(pulse);
    };

    if pass.wake_up {
        emit(Pulse::high(WAKEUP_HIGH_US));
        emit(Pulse::low(WAKEUP_LOW_US));
    }

    for _ in 0..pass.sync_pulses.min(MAX_SYNC_PULSES) {
        emit(Pulse::high(HW_SYNC_HALF_US));
        emit(Pulse::low(HW_SYNC_HALF_US));
    }

    emit(Pulse::high(SW_SYNC_HIGH_US));
    emit(Pulse::low(SW_SYNC_LOW_US));

    for bit in frame.bits() {
        if bit {
            emit(Pulse::low(SYMBOL_US));
            emit(Pulse::high(SYMBOL_US));
        } else {
            emit(Pulse::high(SYMBOL_US));
            emit(Pulse::low(SYMBOL_US));
        }
    }

    emit(Pulse::low(INTER_FRAME_SILENCE_US));

    train
}

/// Total air time of a pulse sequence.
pub fn total_duration_us(pulses: &[Pulse]) -> u64 {
    pulses.iter().map(|p| u64::from(p.duration_us)).sum()
}
