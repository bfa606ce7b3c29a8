//! Application core — the remote itself, zero direct I/O.
//!
//! [`remote::SomfyRemote`] ties the protocol layer to the rolling-code
//! store and the radio.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully
//! testable without a transceiver attached.  [`commands`] turns console
//! lines into RF commands or provisioning edits.

pub mod commands;
pub mod ports;
pub mod remote;
