//! Radio drivers.

pub mod transmitter;
