//! Somfy RTS protocol — pure logic, no I/O.
//!
//! ```text
//!  "up" ──▶ command::Command ──▶ frame::Frame ──▶ encoder::PulseTrain ×3
//!           (4-bit code)         (7 bytes,        (per timing::TRANSMISSION_PLAN)
//!                                 checksummed,
//!                                 obfuscated)
//! ```
//!
//! Everything here is deterministic and bit-exact; the only state in the
//! system (the rolling code) lives in [`crate::rolling_code`].

pub mod command;
pub mod encoder;
pub mod frame;
pub mod timing;

pub use command::Command;
pub use frame::{Frame, RemoteAddress};
pub use timing::{FramePass, TRANSMISSION_PLAN};
