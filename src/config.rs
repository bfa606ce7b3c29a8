//! System configuration parameters
//!
//! The transceiver pin assignment and the identity of the remote this
//! firmware emulates.  Persisted in NVS via [`ConfigPort`](crate::app::ports::ConfigPort).

use serde::{Deserialize, Serialize};

use crate::pins;
use crate::protocol::frame::MAX_REMOTE_ADDRESS;

/// Maximum remote display-name length in bytes.
pub const MAX_NAME_LEN: usize = 32;

/// Which GPIOs the CC1101 is wired to.  Passed into the transmitter at
/// construction; nothing reads pin numbers from global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioConfig {
    /// GDO0, reserved for the transceiver driver.
    pub gdo0_gpio: i32,
    /// GDO2, the RF data line.
    pub gdo2_gpio: i32,
}

impl RadioConfig {
    pub const fn esp32() -> Self {
        Self {
            gdo0_gpio: pins::ESP32_GDO0_GPIO,
            gdo2_gpio: pins::ESP32_GDO2_GPIO,
        }
    }

    pub const fn avr() -> Self {
        Self {
            gdo0_gpio: pins::AVR_GDO0_GPIO,
            gdo2_gpio: pins::AVR_GDO2_GPIO,
        }
    }
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self::esp32()
    }
}

/// The emulated remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Display name; never transmitted.
    pub name: heapless::String<MAX_NAME_LEN>,
    /// 24-bit address the receiver was paired with.
    pub address: u32,
    /// Rolling-code storage slot.
    pub slot: u8,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        let mut name = heapless::String::new();
        let _ = name.push_str("Somfy Remote");
        Self {
            name,
            address: 0x000001,
            slot: 0,
        }
    }
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SystemConfig {
    pub radio: RadioConfig,
    pub remote: RemoteConfig,
}

impl SystemConfig {
    /// Range-check every field.  The message names the offending field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(0..=pins::MAX_GPIO).contains(&self.radio.gdo0_gpio) {
            return Err("radio.gdo0_gpio must be 0–48");
        }
        if !(0..=pins::MAX_GPIO).contains(&self.radio.gdo2_gpio) {
            return Err("radio.gdo2_gpio must be 0–48");
        }
        if self.radio.gdo0_gpio == self.radio.gdo2_gpio {
            return Err("radio.gdo0_gpio and radio.gdo2_gpio must differ");
        }
        if self.remote.address > MAX_REMOTE_ADDRESS {
            return Err("remote.address must fit in 24 bits");
        }
        if self.remote.name.is_empty() {
            return Err("remote.name must not be empty");
        }
        Ok(())
    }
}
