//! Command resolution: user token → 4-bit RTS command code.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

/// Somfy RTS command codes, carried in the upper nibble of frame byte 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    /// "My" favourite position, or stop while the motor is running.
    My = 0x1,
    Up = 0x2,
    Down = 0x4,
    /// Pairing / programming.
    Prog = 0x8,
}

impl Command {
    /// Resolve a human-readable token such as `"up"`, `"Down"` or `"PROG"`.
    ///
    /// Only the first character matters, compared case-insensitively.
    /// Anything unrecognised (including the empty string) resolves to
    /// [`Command::My`].
    pub fn resolve(token: &str) -> Self {
        match token.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('U') => Self::Up,
            Some('D') => Self::Down,
            Some('P') => Self::Prog,
            _ => Self::My,
        }
    }

    /// The 4-bit protocol value.
    pub const fn nibble(self) -> u8 {
        self as u8
    }
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::resolve(s))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::My => "MY",
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Prog => "PROG",
        };
        f.write_str(name)
    }
}
