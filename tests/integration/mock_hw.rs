//! Mock hardware for integration tests.
//!
//! `MockPin` and `MockDelay` share one `LineLog`, so a test sees the exact
//! interleaving of level writes and hold times the transmitter produced,
//! just like a logic analyser on GDO2.

use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin, PinState};
use somfy_rts::app::ports::{FrameTransmitter, StorageError, StoragePort};
use somfy_rts::protocol::timing::FramePass;
use somfy_rts::Frame;

// ── Line log ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    Set(PinState),
    WaitUs(u32),
}

pub type LineLog = Rc<RefCell<Vec<LineEvent>>>;

pub fn line_log() -> LineLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Pair every level write with the hold time that followed it.
pub fn pulses(log: &LineLog) -> Vec<(PinState, u32)> {
    let events = log.borrow();
    let mut out = Vec::new();
    let mut iter = events.iter();
    while let Some(event) = iter.next() {
        if let LineEvent::Set(level) = event {
            match iter.next() {
                Some(LineEvent::WaitUs(us)) => out.push((*level, *us)),
                other => panic!("level write not followed by a wait: {:?}", other),
            }
        }
    }
    out
}

// ── MockPin / MockDelay ───────────────────────────────────────

pub struct MockPin {
    log: LineLog,
}

impl MockPin {
    pub fn new(log: &LineLog) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(LineEvent::Set(PinState::Low));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(LineEvent::Set(PinState::High));
        Ok(())
    }
}

/// Records waits instead of spending them.
pub struct MockDelay {
    log: LineLog,
}

impl MockDelay {
    pub fn new(log: &LineLog) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log
            .borrow_mut()
            .push(LineEvent::WaitUs(ns.div_ceil(1_000)));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(LineEvent::WaitUs(us));
    }
}

// ── RecordingTx ───────────────────────────────────────────────

/// Frame transmitter that only remembers what it was asked to send.
#[derive(Default)]
pub struct RecordingTx {
    pub sent: Vec<(Frame, FramePass)>,
}

impl FrameTransmitter for RecordingTx {
    fn transmit(&mut self, frame: &Frame, pass: FramePass) -> somfy_rts::Result<()> {
        self.sent.push((*frame, pass));
        Ok(())
    }
}

// ── MockNvs ───────────────────────────────────────────────────

/// In-memory NVS.  `Clone` stands in for "the flash survived a reboot".
#[derive(Default, Clone)]
pub struct MockNvs {
    store: HashMap<String, Vec<u8>>,
    pub writes: usize,
}

impl MockNvs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MockNvs {
    fn read(&self, namespace: &str, key: &str, buf: &mut [u8]) -> Result<usize, StorageError> {
        match self.store.get(&format!("{}::{}", namespace, key)) {
            Some(v) => {
                let n = v.len().min(buf.len());
                buf[..n].copy_from_slice(&v[..n]);
                Ok(n)
            }
            None => Err(StorageError::NotFound),
        }
    }

    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError> {
        self.writes += 1;
        self.store
            .insert(format!("{}::{}", namespace, key), data.to_vec());
        Ok(())
    }

    fn exists(&self, namespace: &str, key: &str) -> bool {
        self.store
            .contains_key(&format!("{}::{}", namespace, key))
    }
}
