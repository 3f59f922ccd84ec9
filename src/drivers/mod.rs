//! Channel implementations and hardware-facing register handles.

pub mod aux_rgb;
pub mod hal_pwm;
pub mod multistage;
