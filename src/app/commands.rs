//! Inbound console lines.
//!
//! A line is either an RF command token (`up`, `D`, `prog`, anything else
//! means MY) or a provisioning edit of the emulated remote:
//!
//! ```text
//! addr <hex>     24-bit remote address, optional 0x prefix
//! slot <n>       rolling-code storage slot, 0–255
//! name <text>    display name, rest of the line
//! ```
//!
//! A keyword without an argument is just another command token.

use log::info;

use crate::app::ports::ConfigPort;
use crate::app::remote::RemoteIdentity;
use crate::config::{MAX_NAME_LEN, SystemConfig};
use crate::error::{Error, Result};
use crate::protocol::command::Command;

/// One parsed console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand<'a> {
    /// Transmit this command.
    Send(Command),
    /// Change the emulated remote and persist the new config.
    Provision(ConfigEdit<'a>),
}

/// A single-field change to [`RemoteConfig`](crate::config::RemoteConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigEdit<'a> {
    Address(u32),
    Slot(u8),
    Name(&'a str),
}

impl<'a> ConsoleCommand<'a> {
    /// Parse a trimmed, non-empty console line.
    pub fn parse(line: &'a str) -> Result<Self> {
        let Some((keyword, arg)) = line.split_once(char::is_whitespace) else {
            return Ok(Self::Send(Command::resolve(line)));
        };
        let arg = arg.trim();

        let edit = match keyword.to_ascii_lowercase().as_str() {
            "addr" => {
                let digits = arg
                    .strip_prefix("0x")
                    .or_else(|| arg.strip_prefix("0X"))
                    .unwrap_or(arg);
                let address = u32::from_str_radix(digits, 16)
                    .map_err(|_| Error::Config("addr takes a hex address"))?;
                ConfigEdit::Address(address)
            }
            "slot" => {
                let slot = arg
                    .parse()
                    .map_err(|_| Error::Config("slot takes a number 0-255"))?;
                ConfigEdit::Slot(slot)
            }
            "name" => ConfigEdit::Name(arg),
            _ => return Ok(Self::Send(Command::resolve(line))),
        };
        Ok(Self::Provision(edit))
    }
}

impl ConfigEdit<'_> {
    /// Apply to `config` in place.  Range checks are left to
    /// [`SystemConfig::validate`].
    pub fn apply(&self, config: &mut SystemConfig) -> Result<()> {
        match *self {
            Self::Address(address) => config.remote.address = address,
            Self::Slot(slot) => config.remote.slot = slot,
            Self::Name(name) => {
                if name.len() > MAX_NAME_LEN {
                    return Err(Error::Config("remote.name is longer than 32 bytes"));
                }
                config.remote.name.clear();
                config
                    .remote
                    .name
                    .push_str(name)
                    .map_err(|()| Error::Config("remote.name is longer than 32 bytes"))?;
            }
        }
        Ok(())
    }
}

/// Apply `edit` on top of `current`, validate and persist the result.
///
/// Returns the new config together with the identity the remote must be
/// rebuilt with.  On any error nothing is written and `current` stays in
/// effect.
pub fn provision(
    store: &impl ConfigPort,
    current: &SystemConfig,
    edit: ConfigEdit<'_>,
) -> Result<(SystemConfig, RemoteIdentity)> {
    let mut next = current.clone();
    edit.apply(&mut next)?;
    let identity = RemoteIdentity::from_config(&next.remote)?;
    store.save(&next)?;
    info!(
        "provisioned remote '{}' ({}) slot {}",
        identity.name, identity.address, identity.slot
    );
    Ok((next, identity))
}
