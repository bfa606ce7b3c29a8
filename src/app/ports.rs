//! Port traits — the hexagonal boundary between the remote and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SomfyRemote (domain)
//! ```
//!
//! Driven adapters (NVS, the RF data line) implement these traits.  The
//! [`SomfyRemote`](super::remote::SomfyRemote) consumes them via generics,
//! so the protocol core never touches hardware directly.

use crate::config::SystemConfig;
use crate::protocol::frame::Frame;
use crate::protocol::timing::FramePass;

// ───────────────────────────────────────────────────────────────
// Frame transmitter port (driven adapter: domain → radio)
// ───────────────────────────────────────────────────────────────

/// Emits one already-built frame as one timed pass on the RF data line.
///
/// The remote drives the fixed repetition contract by calling this once
/// per entry of [`TRANSMISSION_PLAN`](crate::protocol::timing::TRANSMISSION_PLAN);
/// implementations only know how to put a single pass on the air.
pub trait FrameTransmitter {
    fn transmit(&mut self, frame: &Frame, pass: FramePass) -> crate::error::Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists system configuration.
///
/// Implementations MUST validate before persisting.
pub trait ConfigPort {
    /// Load configuration from persistent storage.
    /// Returns [`SystemConfig::default()`] if no stored config exists.
    fn load(&self) -> Result<SystemConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &SystemConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Storage port (driven adapter: domain ↔ NVS / flash)
// ───────────────────────────────────────────────────────────────

/// Persistent key-value storage for rolling codes and configuration.
///
/// - Keys are namespaced to prevent collisions between subsystems.
/// - `write` MUST be durable before it returns: the value is committed and
///   survives a power loss.  The rolling code relies on this ordering.
///   The ESP-IDF NVS API guarantees it via `nvs_commit()`; in-memory
///   simulation achieves it trivially.
pub trait StoragePort {
    /// Read a value.  Returns the number of bytes written to `buf`.
    fn read(&self, namespace: &str, key: &str, buf: &mut [u8]) -> Result<usize, StorageError>;

    /// Write and commit a value atomically.
    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Check whether a key exists without reading it.
    fn exists(&self, namespace: &str, key: &str) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

/// Errors from [`StoragePort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Requested key does not exist.
    NotFound,
    /// Storage partition is full.
    Full,
    /// Generic I/O error.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "key not found"),
            Self::Full => write!(f, "storage full"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}
