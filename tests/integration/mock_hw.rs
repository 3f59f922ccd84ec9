//! Mock register handles for integration tests.
//!
//! Records every register access so tests can assert on the full write
//! history without touching a real timer.

use ledramp::drivers::aux_rgb::{AuxPort, AuxPower};
use ledramp::output::PwmOutput;
use ledramp::table::MAX_STAGES;

// ── Register call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegCall {
    Duty { stage: usize, duty: u16 },
    Top(u16),
    Restart(u16),
}

// ── MockTimer ─────────────────────────────────────────────────

/// A timer with `MAX_STAGES` compare registers and one period register.
pub struct MockTimer {
    pub calls: Vec<RegCall>,
    pub duty: [u16; MAX_STAGES],
    pub top: u16,
}

#[allow(dead_code)]
impl MockTimer {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            duty: [0; MAX_STAGES],
            top: 0,
        }
    }

    pub fn restarts(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RegCall::Restart(_)))
            .count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Default for MockTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl PwmOutput for MockTimer {
    fn set_duty(&mut self, stage: usize, duty: u16) {
        self.duty[stage] = duty;
        self.calls.push(RegCall::Duty { stage, duty });
    }

    fn set_top(&mut self, top: u16) {
        self.top = top;
        self.calls.push(RegCall::Top(top));
    }

    fn restart(&mut self, top: u16) {
        self.top = top;
        self.calls.push(RegCall::Restart(top));
    }
}

// ── MockAux ───────────────────────────────────────────────────

#[derive(Default)]
pub struct MockAux {
    pub rgb: (AuxPower, AuxPower, AuxPower),
    pub writes: u32,
}

impl AuxPort for MockAux {
    fn set_rgb(&mut self, r: AuxPower, g: AuxPower, b: AuxPower) {
        self.rgb = (r, g, b);
        self.writes += 1;
    }
}
