//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock register handles. All tests run on the host with no real
//! hardware required.

mod dispatch_tests;
mod mock_hw;
mod ramp_tests;
