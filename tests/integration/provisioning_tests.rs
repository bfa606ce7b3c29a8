//! Console provisioning against the host NVS backend, following the same
//! steps as the firmware's console loop.

use somfy_rts::adapters::nvs::NvsAdapter;
use somfy_rts::app::commands::{self, ConfigEdit, ConsoleCommand};
use somfy_rts::app::ports::ConfigPort;
use somfy_rts::config::SystemConfig;
use somfy_rts::{Command, Error, RemoteIdentity, SomfyRemote};

use crate::mock_hw::RecordingTx;

struct Console {
    config: SystemConfig,
    remote: SomfyRemote<NvsAdapter>,
    tx: RecordingTx,
}

impl Console {
    fn boot(nvs: NvsAdapter) -> Self {
        let config = nvs.load().expect("config");
        let identity = RemoteIdentity::from_config(&config.remote).expect("identity");
        Self {
            config,
            remote: SomfyRemote::new(identity, nvs),
            tx: RecordingTx::default(),
        }
    }

    fn line(mut self, line: &str) -> (Self, somfy_rts::Result<()>) {
        let result = match ConsoleCommand::parse(line) {
            Ok(ConsoleCommand::Send(command)) => self.remote.send(command, &mut self.tx),
            Ok(ConsoleCommand::Provision(edit)) => {
                match commands::provision(self.remote.storage(), &self.config, edit) {
                    Ok((next, identity)) => {
                        self.config = next;
                        self.remote = SomfyRemote::new(identity, self.remote.into_storage());
                        Ok(())
                    }
                    Err(e) => Err(e),
                }
            }
            Err(e) => Err(e),
        };
        (self, result)
    }

    fn reboot(self) -> Self {
        Self::boot(self.remote.into_storage())
    }
}

fn run(console: Console, line: &str) -> Console {
    let (console, result) = console.line(line);
    result.unwrap_or_else(|e| panic!("'{}': {}", line, e));
    console
}

#[test]
fn unprovisioned_board_emulates_default_remote() {
    let console = Console::boot(NvsAdapter::new().unwrap());
    assert_eq!(console.config, SystemConfig::default());
    assert_eq!(console.remote.address().get(), 0x000001);
    assert_eq!(console.remote.slot(), 0);
}

#[test]
fn address_change_is_persisted_and_used_on_air() {
    let mut console = Console::boot(NvsAdapter::new().unwrap());
    console = run(console, "addr 0x123456");
    console = run(console, "up");

    let (frame, _) = console.tx.sent[0];
    assert_eq!(frame.as_bytes(), &[0xA7, 0x8E, 0x8E, 0x8F, 0x9D, 0xA9, 0xFF]);

    let console = console.reboot();
    assert_eq!(console.config.remote.address, 0x123456);
    assert_eq!(console.remote.address().get(), 0x123456);
    assert_eq!(console.remote.rolling_code(), 2);
}

#[test]
fn slot_change_switches_rolling_code_counter() {
    let mut console = Console::boot(NvsAdapter::new().unwrap());
    console = run(console, "down");
    console = run(console, "down");
    assert_eq!(console.remote.rolling_code(), 3);

    console = run(console, "slot 5");
    assert_eq!(console.remote.slot(), 5);
    assert_eq!(console.remote.rolling_code(), 1);

    // Slot 0 kept its counter.
    console = run(console, "slot 0");
    assert_eq!(console.remote.rolling_code(), 3);
}

#[test]
fn name_change_survives_reboot() {
    let console = Console::boot(NvsAdapter::new().unwrap());
    let console = run(console, "name Living room").reboot();
    assert_eq!(console.remote.name(), "Living room");
}

#[test]
fn rejected_edit_changes_nothing() {
    let console = Console::boot(NvsAdapter::new().unwrap());
    let (console, result) = console.line("addr 1000000");
    assert!(matches!(result, Err(Error::Config(_))));
    assert_eq!(console.remote.address().get(), 0x000001);

    let console = console.reboot();
    assert_eq!(console.config, SystemConfig::default());
}

#[test]
fn provision_validates_before_saving() {
    let nvs = NvsAdapter::new().unwrap();
    let mut bad = SystemConfig::default();
    bad.radio.gdo0_gpio = bad.radio.gdo2_gpio;

    let err = commands::provision(&nvs, &bad, ConfigEdit::Slot(1)).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert_eq!(nvs.load().unwrap(), SystemConfig::default());
}

#[test]
fn command_tokens_still_resolve_through_console() {
    let console = Console::boot(NvsAdapter::new().unwrap());
    let console = run(console, "PROG");
    let (frame, _) = console.tx.sent[0];
    assert_eq!(frame.command(), Some(Command::Prog));
}
