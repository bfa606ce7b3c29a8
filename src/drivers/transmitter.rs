//! RTS transmitter: replays encoded pulse trains on the CC1101 data line.
//!
//! Fully blocking.  Every hold time is a busy wait on the injected
//! [`DelayNs`]; nothing yields, and a pass always runs to completion
//! unless the pin itself reports an error.
//!
//! ## Dual-target design
//!
//! Generic over `embedded-hal` traits.  On ESP-IDF the firmware plugs in
//! [`EspGpioPin`](crate::adapters::gpio::EspGpioPin) and
//! [`BusyDelay`](crate::adapters::delay::BusyDelay); tests plug in a
//! recording pin and a zero-time delay.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, OutputPin, PinState};
use log::{trace, warn};

use crate::app::ports::FrameTransmitter;
use crate::error::{Error, Result};
use crate::protocol::encoder::{self, Pulse};
use crate::protocol::frame::Frame;
use crate::protocol::timing::FramePass;

pub struct Transmitter<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Transmitter<P, D> {
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    /// Put an arbitrary pulse sequence on the line.
    ///
    /// If a write fails the line is dropped LOW (best effort) before the
    /// original error is returned, so the carrier is never left keyed.
    pub fn play(&mut self, pulses: &[Pulse]) -> Result<()> {
        for pulse in pulses {
            if let Err(e) = self.pin.set_state(pulse.level) {
                let err = Error::from(e.kind());
                if self.idle().is_err() {
                    warn!("tx: RF data line could not be returned LOW");
                }
                return Err(err);
            }
            self.delay.delay_us(pulse.duration_us);
        }
        Ok(())
    }

    /// Force the line LOW (idle carrier off).
    pub fn idle(&mut self) -> Result<()> {
        self.pin
            .set_state(PinState::Low)
            .map_err(|e| Error::from(e.kind()))
    }

    /// Release the pin and delay.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

impl<P: OutputPin, D: DelayNs> FrameTransmitter for Transmitter<P, D> {
    fn transmit(&mut self, frame: &Frame, pass: FramePass) -> Result<()> {
        let train = encoder::encode(frame, pass);
        trace!(
            "tx pass: {} pulses, {} us",
            train.len(),
            encoder::total_duration_us(&train)
        );
        self.play(&train)
    }
}
