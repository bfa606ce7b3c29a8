//! RTS line timing and the per-command repetition plan.
//!
//! All durations are in microseconds and derive from the 604 µs symbol.
//! Receivers are tolerant of a few percent of jitter but not of a
//! different structure, so these are fixed, not configurable.

/// Fundamental timing unit: one half-bit.
pub const SYMBOL_US: u32 = 604;

/// Transceiver wake-up pulse, first pass only.
pub const WAKEUP_HIGH_US: u32 = 9415;
/// Silence following the wake-up pulse.
pub const WAKEUP_LOW_US: u32 = 89565;

/// Each hardware-sync half period (HIGH, then LOW).
pub const HW_SYNC_HALF_US: u32 = 4 * SYMBOL_US;

/// Software sync: long HIGH then one symbol LOW.
pub const SW_SYNC_HIGH_US: u32 = 4550;
pub const SW_SYNC_LOW_US: u32 = SYMBOL_US;

/// Line held LOW after the last data bit.
pub const INTER_FRAME_SILENCE_US: u32 = 30415;

/// Hardware-sync pulses preceding the first pass.
pub const FIRST_SYNC_PULSES: u8 = 2;
/// Hardware-sync pulses preceding each repeat.
pub const REPEAT_SYNC_PULSES: u8 = 7;
/// Largest sync count any pass uses; sizes the encoder's buffer.
pub const MAX_SYNC_PULSES: u8 = REPEAT_SYNC_PULSES;

/// How one transmission of the frame is preluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePass {
    /// Number of hardware-sync HIGH/LOW pairs.
    pub sync_pulses: u8,
    /// Emit the transceiver wake-up pulse and silence before syncing.
    pub wake_up: bool,
}

impl FramePass {
    /// The opening pass of a command: wake-up, then two sync pulses.
    pub const FIRST: Self = Self {
        sync_pulses: FIRST_SYNC_PULSES,
        wake_up: true,
    };

    /// Every following pass: seven sync pulses, no wake-up.
    pub const REPEAT: Self = Self {
        sync_pulses: REPEAT_SYNC_PULSES,
        wake_up: false,
    };
}

/// One user command = the same frame sent three times, unconditionally.
pub const TRANSMISSION_PLAN: [FramePass; 3] = [FramePass::FIRST, FramePass::REPEAT, FramePass::REPEAT];
