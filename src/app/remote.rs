//! The emulated Somfy remote — the hexagonal core.
//!
//! [`SomfyRemote`] owns one remote identity and its rolling-code slot.
//! The radio is injected per call through [`FrameTransmitter`], so the
//! whole command path is testable with a recording mock.
//!
//! ```text
//!  send_command("up") ─▶ Command::resolve ─▶ Frame::build ─▶ persist(code+1)
//!                                                              │
//!                       FrameTransmitter ◀── FIRST, REPEAT, REPEAT
//! ```

use log::{debug, info, warn};

use crate::app::ports::{FrameTransmitter, StoragePort};
use crate::config::RemoteConfig;
use crate::error::Result;
use crate::protocol::command::Command;
use crate::protocol::frame::{Frame, RemoteAddress};
use crate::protocol::timing::TRANSMISSION_PLAN;
use crate::rolling_code::RollingCodeStore;

// ───────────────────────────────────────────────────────────────
// RemoteIdentity
// ───────────────────────────────────────────────────────────────

/// Who this remote is.  Fixed for the lifetime of a [`SomfyRemote`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteIdentity {
    pub name: String,
    pub address: RemoteAddress,
    pub slot: u8,
}

impl RemoteIdentity {
    pub fn new(name: impl Into<String>, address: RemoteAddress, slot: u8) -> Self {
        Self {
            name: name.into(),
            address,
            slot,
        }
    }

    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        Ok(Self::new(
            config.name.as_str(),
            RemoteAddress::new(config.address)?,
            config.slot,
        ))
    }
}

// ───────────────────────────────────────────────────────────────
// SomfyRemote
// ───────────────────────────────────────────────────────────────

pub struct SomfyRemote<S> {
    identity: RemoteIdentity,
    rolling_code: u32,
    store: RollingCodeStore<S>,
}

impl<S: StoragePort> SomfyRemote<S> {
    /// Bind `identity` to `storage` and load its rolling code (1 if the
    /// slot has never been written).
    pub fn new(identity: RemoteIdentity, storage: S) -> Self {
        let store = RollingCodeStore::new(storage, identity.slot);
        let rolling_code = store.load();
        info!(
            "remote '{}' ({}) slot {}: rolling code {}",
            identity.name, identity.address, identity.slot, rolling_code
        );
        Self {
            identity,
            rolling_code,
            store,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn address(&self) -> RemoteAddress {
        self.identity.address
    }

    pub fn slot(&self) -> u8 {
        self.identity.slot
    }

    /// Code the next frame will carry.
    pub fn rolling_code(&self) -> u32 {
        self.rolling_code
    }

    // ── Commands ──────────────────────────────────────────────

    /// Build the frame for `command` and durably advance the rolling code.
    ///
    /// The advanced code is committed before this returns, so before any
    /// RF leaves the board.  A failed commit is logged and the in-memory
    /// counter advances anyway.
    pub fn prepare_frame(&mut self, command: Command) -> Frame {
        let (frame, next) = Frame::build(self.identity.address, self.rolling_code, command);
        if let Err(e) = self.store.persist(next) {
            warn!(
                "remote '{}': rolling code {} not persisted ({})",
                self.identity.name, next, e
            );
        }
        self.rolling_code = next;
        frame
    }

    /// Send `command`: one frame, three passes per the RTS plan.
    ///
    /// A pin error aborts the remaining passes; the code is already spent.
    pub fn send(&mut self, command: Command, tx: &mut impl FrameTransmitter) -> Result<()> {
        let code = self.rolling_code;
        let frame = self.prepare_frame(command);

        for (i, pass) in TRANSMISSION_PLAN.iter().enumerate() {
            debug!(
                "pass {}: sync={} wake_up={}",
                i, pass.sync_pulses, pass.wake_up
            );
            tx.transmit(&frame, *pass)?;
        }

        info!(
            "remote '{}': {} sent, code {} [{}]",
            self.identity.name, command, code, frame
        );
        Ok(())
    }

    /// Resolve a free-form token ("up", "D", "prog", …) and send it.
    /// Unknown tokens send MY.
    pub fn send_command(&mut self, token: &str, tx: &mut impl FrameTransmitter) -> Result<()> {
        self.send(Command::resolve(token), tx)
    }

    /// Storage backend shared with the rest of the firmware (config).
    pub fn storage(&self) -> &S {
        self.store.storage()
    }

    /// Hand back the storage backend, consuming the remote.
    pub fn into_storage(self) -> S {
        self.store.into_storage()
    }
}
