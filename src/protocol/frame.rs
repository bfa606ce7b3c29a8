//! Somfy RTS frame construction.
//!
//! Frame layout (clear, before obfuscation):
//! ```text
//! ┌──────┬─────────────┬──────────────────┬──────────────────────┐
//! │ 0xA7 │ cmd │ cksum │ rolling code BE  │ remote address BE    │
//! │  [0] │    [1]      │      [2..4]      │       [4..7]         │
//! └──────┴─────────────┴──────────────────┴──────────────────────┘
//! ```
//!
//! The checksum nibble is chosen so that the XOR of all 14 nibbles of the
//! clear frame is zero.  Bytes 1..7 are then whitened with a cascading XOR
//! seeded by byte 0; receivers undo it before checking the nibbles.
//!
//! Only the low 16 bits of the 32-bit rolling code reach the wire.  That is
//! a property of the RTS protocol itself and receivers depend on it.

use core::fmt;

use super::command::Command;
use crate::error::{Error, Result};

/// Frame length in bytes.
pub const FRAME_LEN: usize = 7;

/// Frame length in bits.
pub const FRAME_BITS: usize = FRAME_LEN * 8;

/// Fixed first byte ("encryption key" in the RTS literature).
pub const KEY_BYTE: u8 = 0xA7;

/// Largest value a 24-bit remote address can take.
pub const MAX_REMOTE_ADDRESS: u32 = 0x00FF_FFFF;

// ---------------------------------------------------------------------------
// Remote address
// ---------------------------------------------------------------------------

/// 24-bit remote address identifying the paired receiver group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoteAddress(u32);

impl RemoteAddress {
    /// Wrap a raw address, rejecting anything wider than 24 bits.
    pub const fn new(raw: u32) -> Result<Self> {
        if raw > MAX_REMOTE_ADDRESS {
            return Err(Error::Config("remote address exceeds 24 bits"));
        }
        Ok(Self(raw))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Big-endian wire bytes.
    pub const fn to_be_bytes(self) -> [u8; 3] {
        let b = self.0.to_be_bytes();
        [b[1], b[2], b[3]]
    }
}

impl TryFrom<u32> for RemoteAddress {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self> {
        Self::new(raw)
    }
}

impl fmt::Display for RemoteAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06X}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Checksum and obfuscation
// ---------------------------------------------------------------------------

/// XOR of every high and low nibble in `bytes`, masked to 4 bits.
///
/// A well-formed clear frame yields 0 over all seven bytes.
pub fn nibble_checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, b| acc ^ b ^ (b >> 4)) & 0x0F
}

/// Cascade XOR, in place: `frame[i] ^= frame[i - 1]` for i in 1..7, where
/// `frame[i - 1]` has already been obfuscated in this pass.
pub fn obfuscate(frame: &mut [u8; FRAME_LEN]) {
    for i in 1..FRAME_LEN {
        frame[i] ^= frame[i - 1];
    }
}

/// Inverse of [`obfuscate`].  Walks backwards so every byte is XORed with
/// its still-obfuscated predecessor.
pub fn deobfuscate(frame: &mut [u8; FRAME_LEN]) {
    for i in (1..FRAME_LEN).rev() {
        frame[i] ^= frame[i - 1];
    }
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// A fully built, checksummed and obfuscated frame, ready for line coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    /// Build the frame for `command` at `rolling_code` and return it along
    /// with the rolling code the next frame must use.
    ///
    /// Pure: persisting the returned code is the caller's job and must
    /// complete before the frame is put on the air.
    pub fn build(address: RemoteAddress, rolling_code: u32, command: Command) -> (Self, u32) {
        let code = (rolling_code as u16).to_be_bytes();
        let addr = address.to_be_bytes();

        let mut bytes = [
            KEY_BYTE,
            command.nibble() << 4,
            code[0],
            code[1],
            addr[0],
            addr[1],
            addr[2],
        ];
        bytes[1] |= nibble_checksum(&bytes);
        obfuscate(&mut bytes);

        (Self(bytes), rolling_code.wrapping_add(1))
    }

    /// Wrap raw on-air bytes (e.g. a captured frame).
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// On-air (obfuscated) bytes.
    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// The de-obfuscated bytes a receiver would recover.
    pub fn clear_bytes(&self) -> [u8; FRAME_LEN] {
        let mut clear = self.0;
        deobfuscate(&mut clear);
        clear
    }

    /// Receiver-side check: the clear frame's nibbles XOR to zero.
    pub fn is_valid(&self) -> bool {
        nibble_checksum(&self.clear_bytes()) == 0
    }

    /// The command nibble, decoded.
    pub fn command(&self) -> Option<Command> {
        match self.clear_bytes()[1] >> 4 {
            0x1 => Some(Command::My),
            0x2 => Some(Command::Up),
            0x4 => Some(Command::Down),
            0x8 => Some(Command::Prog),
            _ => None,
        }
    }

    /// The 16 rolling-code bits carried on the wire.
    pub fn rolling_code(&self) -> u16 {
        let clear = self.clear_bytes();
        u16::from_be_bytes([clear[2], clear[3]])
    }

    /// All 56 bits, MSB of byte 0 first.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0
            .iter()
            .flat_map(|byte| (0..8).rev().map(move |bit| (byte >> bit) & 1 == 1))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}
