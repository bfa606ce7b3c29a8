//! GPIO output adapter for the RF data line.
//!
//! Implements `embedded_hal::digital::OutputPin` for a GPIO chosen at
//! runtime from [`RadioConfig`](crate::config::RadioConfig).
//!
//! - **`target_os = "espidf"`** — raw `gpio_set_level()` calls; the pin is
//!   reset and configured as a push-pull output on construction.
//! - **`not(target_os = "espidf")`** — tracks the level in memory so the
//!   firmware's wiring can be exercised on the host.

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, PinState};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

/// ESP-IDF error code from a failed GPIO call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioError(pub i32);

impl embedded_hal::digital::Error for GpioError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl core::fmt::Display for GpioError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "GPIO call failed (rc={})", self.0)
    }
}

/// A push-pull output, initially LOW.
pub struct EspGpioPin {
    gpio: i32,
    level: PinState,
}

impl EspGpioPin {
    /// Configure `gpio` as an output and drive it LOW.
    pub fn output(gpio: i32) -> Result<Self, GpioError> {
        #[cfg(target_os = "espidf")]
        {
            // SAFETY: plain register configuration on a pin this adapter
            // owns exclusively from here on.
            let ret = unsafe { gpio_reset_pin(gpio) };
            if ret != ESP_OK {
                return Err(GpioError(ret));
            }
            let ret = unsafe { gpio_set_direction(gpio, gpio_mode_t_GPIO_MODE_OUTPUT) };
            if ret != ESP_OK {
                return Err(GpioError(ret));
            }
            log::info!("gpio: GPIO{} configured as RF data output", gpio);
        }

        #[cfg(not(target_os = "espidf"))]
        log::info!("gpio(sim): GPIO{} as RF data output", gpio);

        let mut pin = Self {
            gpio,
            level: PinState::Low,
        };
        pin.write(PinState::Low)?;
        Ok(pin)
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Last level written.
    pub fn level(&self) -> PinState {
        self.level
    }

    fn write(&mut self, level: PinState) -> Result<(), GpioError> {
        #[cfg(target_os = "espidf")]
        {
            // SAFETY: see `output()`.
            let ret = unsafe { gpio_set_level(self.gpio, u32::from(level == PinState::High)) };
            if ret != ESP_OK {
                return Err(GpioError(ret));
            }
        }
        self.level = level;
        Ok(())
    }
}

impl ErrorType for EspGpioPin {
    type Error = GpioError;
}

impl OutputPin for EspGpioPin {
    fn set_low(&mut self) -> Result<(), GpioError> {
        self.write(PinState::Low)
    }

    fn set_high(&mut self) -> Result<(), GpioError> {
        self.write(PinState::High)
    }
}
