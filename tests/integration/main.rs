//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters.  All tests run on the host with no transceiver
//! attached.

mod line_coding_tests;
mod mock_hw;
mod provisioning_tests;
