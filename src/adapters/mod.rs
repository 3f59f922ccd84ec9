//! Adapters that wrap or stand in for the register handles.

pub mod log_output;
