//! Rolling-code persistence.
//!
//! Each remote owns one storage slot holding its 32-bit counter under the
//! "somfy" namespace, key `rc<slot>`, as 4 little-endian bytes.
//!
//! Load never fails: a missing key, a short or failed read, and a stored
//! zero all come back as [`INITIAL_ROLLING_CODE`].

use log::warn;

use crate::app::ports::{StorageError, StoragePort};

const ROLLING_CODE_NAMESPACE: &str = "somfy";

/// Counter value for a remote that has never transmitted.
pub const INITIAL_ROLLING_CODE: u32 = 1;

/// Durable counter for one remote identity.
pub struct RollingCodeStore<S> {
    storage: S,
    slot: u8,
    key: heapless::String<8>,
}

impl<S: StoragePort> RollingCodeStore<S> {
    pub fn new(storage: S, slot: u8) -> Self {
        Self {
            storage,
            slot,
            key: Self::slot_key(slot),
        }
    }

    /// Read the stored counter, or [`INITIAL_ROLLING_CODE`] if there is none.
    pub fn load(&self) -> u32 {
        let mut buf = [0u8; 4];
        match self.storage.read(ROLLING_CODE_NAMESPACE, &self.key, &mut buf) {
            Ok(4) => match u32::from_le_bytes(buf) {
                0 => INITIAL_ROLLING_CODE,
                code => code,
            },
            Ok(len) => {
                warn!(
                    "rolling code slot {}: {} byte value ignored, starting at {}",
                    self.slot, len, INITIAL_ROLLING_CODE
                );
                INITIAL_ROLLING_CODE
            }
            Err(StorageError::NotFound) => INITIAL_ROLLING_CODE,
            Err(e) => {
                warn!(
                    "rolling code slot {}: read failed ({}), starting at {}",
                    self.slot, e, INITIAL_ROLLING_CODE
                );
                INITIAL_ROLLING_CODE
            }
        }
    }

    /// Write and commit `value`.  Durable once this returns `Ok`.
    pub fn persist(&mut self, value: u32) -> Result<(), StorageError> {
        self.storage
            .write(ROLLING_CODE_NAMESPACE, &self.key, &value.to_le_bytes())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the backing store back (e.g. to rebuild the remote after a reboot).
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn slot_key(slot: u8) -> heapless::String<8> {
        let mut s = heapless::String::new();
        let _ = core::fmt::Write::write_fmt(&mut s, format_args!("rc{}", slot));
        s
    }
}
