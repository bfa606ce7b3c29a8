//! What actually reaches the GDO2 line for one command.

use embedded_hal::digital::PinState;
use somfy_rts::protocol::encoder;
use somfy_rts::protocol::timing::{
    FramePass, HW_SYNC_HALF_US, INTER_FRAME_SILENCE_US, SW_SYNC_HIGH_US, SW_SYNC_LOW_US,
    SYMBOL_US, TRANSMISSION_PLAN, WAKEUP_HIGH_US, WAKEUP_LOW_US,
};
use somfy_rts::{Command, RemoteAddress, RemoteIdentity, SomfyRemote, Transmitter};

use crate::mock_hw::{line_log, pulses, LineEvent, MockDelay, MockNvs, MockPin};

const REFERENCE_FRAME: [u8; 7] = [0xA7, 0x8E, 0x8E, 0x8F, 0x9D, 0xA9, 0xFF];

fn send_up() -> Vec<(PinState, u32)> {
    let log = line_log();
    let mut tx = Transmitter::new(MockPin::new(&log), MockDelay::new(&log));
    let identity = RemoteIdentity::new("test", RemoteAddress::new(0x123456).unwrap(), 0);
    let mut remote = SomfyRemote::new(identity, MockNvs::new());

    remote.send(Command::Up, &mut tx).expect("send");
    pulses(&log)
}

/// Split the line trace into its three passes.
fn passes(line: &[(PinState, u32)]) -> Vec<&[(PinState, u32)]> {
    let mut out = Vec::new();
    let mut rest = line;
    for pass in TRANSMISSION_PLAN {
        let (head, tail) = rest.split_at(encoder::pulse_count(pass));
        out.push(head);
        rest = tail;
    }
    assert!(rest.is_empty());
    out
}

/// Recover the on-air bytes from the Manchester halves of one pass.
fn decode_data(pass: FramePass, trace: &[(PinState, u32)]) -> [u8; 7] {
    let wake = if pass.wake_up { 2 } else { 0 };
    let start = wake + 2 * pass.sync_pulses as usize + 2;
    let data = &trace[start..start + 112];

    let mut bytes = [0u8; 7];
    for (i, halves) in data.chunks(2).enumerate() {
        let bit = match (halves[0].0, halves[1].0) {
            (PinState::Low, PinState::High) => 1,
            (PinState::High, PinState::Low) => 0,
            other => panic!("bit {} is not Manchester coded: {:?}", i, other),
        };
        bytes[i / 8] |= bit << (7 - i % 8);
    }
    bytes
}

#[test]
fn one_command_is_379_level_writes() {
    let log = line_log();
    let mut tx = Transmitter::new(MockPin::new(&log), MockDelay::new(&log));
    let identity = RemoteIdentity::new("test", RemoteAddress::new(0x123456).unwrap(), 0);
    let mut remote = SomfyRemote::new(identity, MockNvs::new());

    remote.send(Command::Up, &mut tx).expect("send");

    let writes = log
        .borrow()
        .iter()
        .filter(|e| matches!(e, LineEvent::Set(_)))
        .count();
    assert_eq!(writes, 379);

    let line = pulses(&log);
    let split = passes(&line);
    assert_eq!(split[0].len(), 121);
    assert_eq!(split[1].len(), 129);
    assert_eq!(split[2].len(), 129);
}

#[test]
fn first_pass_prelude_and_silence() {
    let line = send_up();
    let first = passes(&line)[0];

    assert_eq!(first[0], (PinState::High, WAKEUP_HIGH_US));
    assert_eq!(first[1], (PinState::Low, WAKEUP_LOW_US));
    for pair in first[2..6].chunks(2) {
        assert_eq!(pair[0], (PinState::High, HW_SYNC_HALF_US));
        assert_eq!(pair[1], (PinState::Low, HW_SYNC_HALF_US));
    }
    assert_eq!(first[6], (PinState::High, SW_SYNC_HIGH_US));
    assert_eq!(first[7], (PinState::Low, SW_SYNC_LOW_US));
    assert_eq!(
        *first.last().unwrap(),
        (PinState::Low, INTER_FRAME_SILENCE_US)
    );
}

#[test]
fn repeat_passes_skip_wake_up() {
    let line = send_up();
    for repeat in &passes(&line)[1..] {
        for pair in repeat[..14].chunks(2) {
            assert_eq!(pair[0], (PinState::High, HW_SYNC_HALF_US));
            assert_eq!(pair[1], (PinState::Low, HW_SYNC_HALF_US));
        }
        assert_eq!(repeat[14], (PinState::High, SW_SYNC_HIGH_US));
        assert_eq!(repeat[15], (PinState::Low, SW_SYNC_LOW_US));
    }
}

#[test]
fn data_halves_are_one_symbol() {
    let line = send_up();
    for (pass, trace) in TRANSMISSION_PLAN.iter().zip(passes(&line)) {
        let wake = if pass.wake_up { 2 } else { 0 };
        let start = wake + 2 * pass.sync_pulses as usize + 2;
        assert!(trace[start..start + 112]
            .iter()
            .all(|(_, us)| *us == SYMBOL_US));
    }
}

#[test]
fn every_pass_decodes_to_reference_frame() {
    let line = send_up();
    for (pass, trace) in TRANSMISSION_PLAN.iter().zip(passes(&line)) {
        assert_eq!(decode_data(*pass, trace), REFERENCE_FRAME);
    }
}

#[test]
fn air_time_matches_encoder() {
    let line = send_up();
    let on_line: u64 = line.iter().map(|(_, us)| u64::from(*us)).sum();

    let frame = somfy_rts::Frame::from_bytes(REFERENCE_FRAME);
    let expected: u64 = TRANSMISSION_PLAN
        .iter()
        .map(|p| encoder::total_duration_us(&encoder::encode(&frame, *p)))
        .sum();
    assert_eq!(on_line, expected);
}
