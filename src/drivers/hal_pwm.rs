//! [`PwmOutput`] over `embedded-hal` PWM pins.
//!
//! HAL PWM channels run at a fixed frequency and do not expose the timer
//! period, so dynamic PWM is emulated by scaling: each stage is written as
//! `duty / top` of the pin's own maximum. The ratio stays correct; the
//! extra low-end resolution of a real variable period is lost, which is
//! acceptable for boards whose tables are fixed-period anyway.
//!
//! Pin errors are logged and dropped. The ramp core has no failure path,
//! and a missed compare write is corrected by the next one.

use embedded_hal::pwm::SetDutyCycle;
use log::{debug, warn};

use crate::output::PwmOutput;

pub struct HalStages<P: SetDutyCycle, const N: usize> {
    pins: [P; N],
    duty: [u16; N],
    top: u16,
}

impl<P: SetDutyCycle, const N: usize> HalStages<P, N> {
    /// Take ownership of one pin per stage. `top` is the initial period.
    pub fn new(pins: [P; N], top: u16) -> Self {
        Self {
            pins,
            duty: [0; N],
            top,
        }
    }

    pub fn pins(&self) -> &[P; N] {
        &self.pins
    }

    fn write(&mut self, stage: usize) {
        let pin = &mut self.pins[stage];
        let scaled = scale(self.duty[stage], self.top, pin.max_duty_cycle());
        if let Err(e) = pin.set_duty_cycle(scaled) {
            warn!("hal_pwm: stage {} write failed: {:?}", stage, e);
        }
    }

    fn rewrite_all(&mut self) {
        for stage in 0..N {
            self.write(stage);
        }
    }
}

impl<P: SetDutyCycle, const N: usize> PwmOutput for HalStages<P, N> {
    fn set_duty(&mut self, stage: usize, duty: u16) {
        if stage >= N {
            warn!("hal_pwm: no pin for stage {}", stage);
            return;
        }
        self.duty[stage] = duty;
        self.write(stage);
    }

    fn set_top(&mut self, top: u16) {
        if top != self.top {
            self.top = top;
            self.rewrite_all();
        }
    }

    fn restart(&mut self, top: u16) {
        debug!("hal_pwm: counter restart not available, period {} only", top);
        self.set_top(top);
    }
}

/// `duty / top` of `max`, saturating at `max`.
fn scale(duty: u16, top: u16, max: u16) -> u16 {
    if top == 0 {
        return 0;
    }
    let scaled = u32::from(duty) * u32::from(max) / u32::from(top);
    scaled.min(u32::from(max)) as u16
}
