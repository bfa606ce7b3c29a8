//! Somfy RTS remote firmware library.
//!
//! Exposes the protocol core and the remote for integration testing and
//! reuse. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod protocol;
pub mod rolling_code;

pub use app::remote::{RemoteIdentity, SomfyRemote};
pub use drivers::transmitter::Transmitter;
pub use error::{Error, Result};
pub use protocol::{Command, Frame, RemoteAddress};
