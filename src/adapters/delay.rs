//! Busy-wait delay adapter.
//!
//! RTS timing is in the hundreds of microseconds, well below a FreeRTOS
//! tick, so every hold time is a blocking spin.
//!
//! - **`target_os = "espidf"`** — `esp_idf_hal::delay::Ets` (ROM
//!   `ets_delay_us`, microsecond resolution).
//! - **`not(target_os = "espidf")`** — spins on `std::time::Instant`.

use embedded_hal::delay::DelayNs;

#[derive(Debug, Default, Clone, Copy)]
pub struct BusyDelay;

impl BusyDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayNs for BusyDelay {
    fn delay_ns(&mut self, ns: u32) {
        busy_wait_ns(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        busy_wait_ns(u64::from(us) * 1_000);
    }
}

#[cfg(target_os = "espidf")]
fn busy_wait_ns(ns: u64) {
    let us = ns.div_ceil(1_000).min(u64::from(u32::MAX)) as u32;
    esp_idf_hal::delay::Ets::delay_us(us);
}

#[cfg(not(target_os = "espidf"))]
fn busy_wait_ns(ns: u64) {
    let deadline = std::time::Duration::from_nanos(ns);
    let start = std::time::Instant::now();
    while start.elapsed() < deadline {
        core::hint::spin_loop();
    }
}
