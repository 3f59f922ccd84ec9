//! Output registers: the shadow state and the hardware handle.
//!
//! The core never names timer registers. It writes through a
//! [`PwmOutput`] handle injected at construction, and keeps an
//! [`OutputState`] shadow of what it last wrote so the gradual stepper can
//! compare live values against the table without reading hardware back.
//!
//! Compare and period registers are assumed double-buffered: a write lands
//! at the next period boundary, so a set of writes issued within one call
//! is seen by the counter as one update.

use crate::table::MAX_STAGES;

/// Duty per stage plus the shared period.
///
/// Used both for the live shadow of the hardware and for a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputState {
    duty: [u16; MAX_STAGES],
    stages: usize,
    top: u16,
}

impl OutputState {
    /// All stages dark with the given period.
    pub fn off(stages: usize, top: u16) -> Self {
        Self {
            duty: [0; MAX_STAGES],
            stages: stages.min(MAX_STAGES),
            top,
        }
    }

    pub fn duty(&self, stage: usize) -> u16 {
        self.duties()[stage]
    }

    pub fn duties(&self) -> &[u16] {
        &self.duty[..self.stages]
    }

    pub fn top(&self) -> u16 {
        self.top
    }

    pub fn stages(&self) -> usize {
        self.stages
    }

    /// Every stage at zero duty.
    pub fn is_dark(&self) -> bool {
        self.duties().iter().all(|d| *d == 0)
    }

    pub(crate) fn set_duty(&mut self, stage: usize, duty: u16) {
        self.duty[..self.stages][stage] = duty;
    }

    pub(crate) fn set_top(&mut self, top: u16) {
        self.top = top;
    }
}

/// Register handle for one timer driving several stages off a shared period.
///
/// Implementations are expected to be infallible from the caller's point of
/// view; a HAL that can fail should log and carry on.
pub trait PwmOutput {
    /// Write the compare value for `stage`.
    fn set_duty(&mut self, stage: usize, duty: u16);

    /// Write the shared period while the counter keeps running.
    fn set_top(&mut self, top: u16);

    /// Write the shared period and reset the counter to zero as one
    /// operation, so the first pulse after power-on is a full one.
    fn restart(&mut self, top: u16);
}

impl<T: PwmOutput + ?Sized> PwmOutput for &mut T {
    fn set_duty(&mut self, stage: usize, duty: u16) {
        (**self).set_duty(stage, duty);
    }

    fn set_top(&mut self, top: u16) {
        (**self).set_top(top);
    }

    fn restart(&mut self, top: u16) {
        (**self).restart(top);
    }
}
