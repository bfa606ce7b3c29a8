//! Fuzz target: `Command::resolve` + `Frame::build` + `encoder::encode`
//!
//! Splits arbitrary bytes into an address, a rolling code and a command
//! token, builds the frame and line-codes it.  Nothing may panic, every
//! frame must pass the receiver checksum, and the Manchester data section
//! must decode back to the on-air bytes.
//!
//! cargo fuzz run fuzz_frame_builder

#![no_main]

use libfuzzer_sys::fuzz_target;
use somfy_rts::protocol::encoder::{self, Pulse};
use somfy_rts::protocol::timing::{FramePass, SYMBOL_US};
use somfy_rts::{Command, Frame, RemoteAddress};

fuzz_target!(|data: &[u8]| {
    if data.len() < 7 {
        return;
    }

    let address = u32::from_be_bytes([0, data[0], data[1], data[2]]);
    let code = u32::from_le_bytes([data[3], data[4], data[5], data[6]]);
    let token = String::from_utf8_lossy(&data[7..]);

    let Ok(address) = RemoteAddress::new(address) else {
        panic!("24-bit address rejected");
    };
    let command = Command::resolve(&token);
    let (frame, next) = Frame::build(address, code, command);

    assert!(frame.is_valid(), "built frame fails checksum");
    assert_eq!(frame.command(), Some(command));
    assert_eq!(next, code.wrapping_add(1));

    // Sync counts past the RTS maximum must clamp, not overflow.
    let pass = FramePass {
        sync_pulses: data[0],
        wake_up: data[1] & 1 == 1,
    };
    let train = encoder::encode(&frame, pass);
    assert_eq!(train.len(), encoder::pulse_count(pass));

    let start = train.len() - 1 - 112;
    let mut bytes = [0u8; 7];
    for (i, halves) in train[start..start + 112].chunks(2).enumerate() {
        let bit = u8::from(halves[0] == Pulse::low(SYMBOL_US));
        bytes[i / 8] |= bit << (7 - i % 8);
    }
    assert_eq!(&bytes, frame.as_bytes());
});

