//! Ledramp: table-driven multi-stage LED ramp core.
//!
//! Maps an abstract brightness level to per-stage duty values and a shared
//! PWM period, applies that mapping to the hardware, and steps the output
//! gradually between levels. Hardware is reached only through the
//! [`output::PwmOutput`] and [`drivers::aux_rgb::AuxPort`] handles, so
//! everything here runs unchanged on the host under test.
//!
//! ```text
//!   UI / policy ──▶ Ramp ──▶ Channel ──▶ MultiStage ──▶ PwmOutput
//!                               │                  (duty, top, restart)
//!                               └──▶ AuxRgb ──▶ AuxPort
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unused_must_use)]

pub mod adapters;
pub mod boards;
pub mod channel;
pub mod config;
pub mod drivers;
pub mod output;
pub mod ramp;
pub mod table;

mod error;

pub use error::{Error, Result, TableError};
pub use drivers::multistage::Step;
