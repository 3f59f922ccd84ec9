//! Logging register-handle decorator.
//!
//! Wraps any [`PwmOutput`] and writes every register access to the `log`
//! facade before forwarding it. Useful on a bench build with a serial
//! logger attached; on a release build with logging compiled out it is a
//! plain pass-through.

use log::{debug, trace};

use crate::output::PwmOutput;

/// Adapter that logs every register write, then forwards it.
pub struct LoggingOutput<O: PwmOutput> {
    inner: O,
    writes: u32,
}

impl<O: PwmOutput> LoggingOutput<O> {
    pub fn new(inner: O) -> Self {
        Self { inner, writes: 0 }
    }

    /// Register accesses forwarded so far.
    pub fn writes(&self) -> u32 {
        self.writes
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: PwmOutput> PwmOutput for LoggingOutput<O> {
    fn set_duty(&mut self, stage: usize, duty: u16) {
        trace!("PWM | stage={} duty={}", stage, duty);
        self.writes = self.writes.wrapping_add(1);
        self.inner.set_duty(stage, duty);
    }

    fn set_top(&mut self, top: u16) {
        trace!("PWM | top={}", top);
        self.writes = self.writes.wrapping_add(1);
        self.inner.set_top(top);
    }

    fn restart(&mut self, top: u16) {
        debug!("PWM | restart top={}", top);
        self.writes = self.writes.wrapping_add(1);
        self.inner.restart(top);
    }
}
