//! Unified error types for the Somfy RTS firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! command path's error handling uniform. All variants are `Copy` so they
//! can be passed around without allocation.
//!
//! The protocol layer itself has no failure modes: unknown commands fall
//! back to MY and every frame field is fixed-width. Errors only come from
//! the collaborators (output pin, storage) and from configuration.

use core::fmt;

use embedded_hal::digital::ErrorKind;

use crate::app::ports::{ConfigError, StorageError};

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The RF data line could not be driven.
    Pin(ErrorKind),
    /// The persistent store rejected an operation.
    Storage(StorageError),
    /// Configuration or remote identity is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pin(kind) => write!(f, "pin: {kind}"),
            Self::Storage(e) => write!(f, "storage: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::ValidationFailed(msg) => Self::Config(msg),
            ConfigError::Corrupted => Self::Config("stored config is corrupted"),
            ConfigError::IoError => Self::Storage(StorageError::IoError),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::Pin(kind)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
