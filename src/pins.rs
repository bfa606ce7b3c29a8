//! GPIO assignments for the CC1101 transceiver, per board family.
//!
//! The CC1101 runs in asynchronous serial mode: GDO2 carries the OOK data
//! the firmware bit-bangs, GDO0 is left to the transceiver driver.
//! These are defaults only; the live assignment is
//! [`RadioConfig`](crate::config::RadioConfig), loaded from NVS.

// ---------------------------------------------------------------------------
// ESP32 / ESP8266
// ---------------------------------------------------------------------------

pub const ESP32_GDO0_GPIO: i32 = 4;
/// RF data line.
pub const ESP32_GDO2_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// AVR (ATmega168 / ATmega328P)
// ---------------------------------------------------------------------------

pub const AVR_GDO0_GPIO: i32 = 2;
/// RF data line.
pub const AVR_GDO2_GPIO: i32 = 3;

/// Highest GPIO number on the ESP32-S3.
pub const MAX_GPIO: i32 = 48;
