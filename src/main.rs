//! Somfy RTS Firmware — Main Entry Point
//!
//! Emulates one Somfy RTS remote.  Command tokens (`UP`, `DOWN`, `MY`,
//! `PROG`, or any prefix) arrive line-by-line on the UART console, as do
//! the provisioning lines `addr <hex>`, `slot <n>` and `name <text>`.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                   │
//! │   NvsAdapter          EspGpioPin + BusyDelay               │
//! │   (Config+Storage)    (Transmitter: FrameTransmitter)      │
//! │  ─────────────────── Port Trait Boundary ───────────────   │
//! │   ┌──────────────────────────────────────────────────┐     │
//! │   │  SomfyRemote  (Command · Frame · rolling code)   │     │
//! │   └──────────────────────────────────────────────────┘     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The CC1101 is expected to be in asynchronous OOK transmit mode at
//! 433.42 MHz with GDO2 as its data input; its register setup belongs to
//! the transceiver driver, not to this firmware.
#![deny(unused_must_use)]

use std::io::BufRead;

use anyhow::{Context, Result, anyhow};
use log::{error, info, warn};

use somfy_rts::adapters::delay::BusyDelay;
use somfy_rts::adapters::gpio::EspGpioPin;
use somfy_rts::adapters::nvs::NvsAdapter;
use somfy_rts::app::commands::{self, ConsoleCommand};
use somfy_rts::app::ports::ConfigPort;
use somfy_rts::config::SystemConfig;
use somfy_rts::{RemoteIdentity, SomfyRemote, Transmitter};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Somfy RTS remote v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Storage + config ───────────────────────────────────
    // No NVS, no rolling code: refuse to run.
    let nvs = NvsAdapter::new().map_err(|e| anyhow!("NVS init failed: {e}"))?;
    let mut config = match nvs.load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("NVS config load failed ({}), using defaults", e);
            SystemConfig::default()
        }
    };
    info!(
        "Radio: GDO0=GPIO{} GDO2=GPIO{}",
        config.radio.gdo0_gpio, config.radio.gdo2_gpio
    );

    // ── 3. Radio data line ────────────────────────────────────
    let pin = EspGpioPin::output(config.radio.gdo2_gpio)
        .map_err(|e| anyhow!("RF data pin init failed: {e}"))?;
    let mut tx = Transmitter::new(pin, BusyDelay::new());
    tx.idle().context("RF data pin idle")?;

    // ── 4. Remote ─────────────────────────────────────────────
    let identity = RemoteIdentity::from_config(&config.remote).context("remote config")?;
    let mut remote = SomfyRemote::new(identity, nvs);
    info!(
        "Ready as '{}' ({}): send UP, DOWN, MY or PROG",
        remote.name(),
        remote.address()
    );

    // ── 5. Command loop ───────────────────────────────────────
    for line in std::io::stdin().lock().lines() {
        let line = line.context("console read")?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        match ConsoleCommand::parse(token) {
            Ok(ConsoleCommand::Send(command)) => {
                if let Err(e) = remote.send(command, &mut tx) {
                    error!("'{}': {}", token, e);
                }
            }
            Ok(ConsoleCommand::Provision(edit)) => {
                match commands::provision(remote.storage(), &config, edit) {
                    Ok((next, identity)) => {
                        config = next;
                        remote = SomfyRemote::new(identity, remote.into_storage());
                    }
                    Err(e) => error!("'{}': {}", token, e),
                }
            }
            Err(e) => error!("'{}': {}", token, e),
        }
    }

    Ok(())
}
