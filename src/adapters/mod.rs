//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter | Implements               | Connects to               |
//! |---------|--------------------------|---------------------------|
//! | `delay` | `embedded_hal` DelayNs   | ROM busy-wait / host spin |
//! | `gpio`  | `embedded_hal` OutputPin | CC1101 GDO2 data line     |
//! | `nvs`   | ConfigPort               | NVS / in-memory store     |
//! |         | StoragePort              |                           |

pub mod delay;
pub mod gpio;
pub mod nvs;
