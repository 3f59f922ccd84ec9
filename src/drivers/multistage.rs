//! Table-driven multi-stage emitter driver.
//!
//! Drives N power stages (linear regulators and a direct-drive FET) off one
//! timer whose period changes with level. Two entry points:
//!
//! - [`MultiStage::apply`] jumps straight to a table row.
//! - [`MultiStage::adjust`] walks the live registers one unit per call
//!   toward a row, so a linear regulator never sees a current step it
//!   cannot absorb.
//!
//! ## Cold start
//!
//! Resuming PWM mid-period after being off gives an inconsistent first
//! pulse, so turning on from level 0 restarts the counter together with
//! the period write. While running, the counter is left alone; restarting
//! it on every adjustment would flicker.
//!
//! ## Stacked hand-off
//!
//! A [`Policy::Stacked`] stage sits below a brighter one. When ramping up
//! it jumps to full the moment its row saturates it, and when ramping down
//! it stays full until the stage above has come down to its own target.
//! The brighter stage therefore never runs without the lower one full, and
//! the crossover shows neither a dip nor a spike.
//!
//! The period is committed only on the call where every duty matches the
//! row. Until then the previous period stays live.

use log::{debug, trace};

use crate::boards::{Board, Policy};
use crate::channel::Channel;
use crate::output::{OutputState, PwmOutput};
use crate::table::Level;

/// Result of one gradual step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Output matches the requested row; further steps write nothing.
    Done,
    /// More steps are needed.
    Pending,
}

impl Step {
    pub fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

pub struct MultiStage<O: PwmOutput> {
    board: Board,
    out: O,
    live: OutputState,
    actual: Level,
}

impl<O: PwmOutput> MultiStage<O> {
    /// Bind a board to its register handle. Output state starts off with
    /// the board's level-0 period; nothing is written until the first call.
    pub fn new(board: Board, out: O) -> Self {
        let live = OutputState::off(board.stages().len(), board.table().top(0));
        Self {
            board,
            out,
            live,
            actual: 0,
        }
    }

    /// Write the table row for `level` to every stage and the period.
    pub fn apply(&mut self, level: Level) {
        let table = self.board.table();
        let level = table.clamp(level);
        let row = table.row(level);

        for (stage, &duty) in row.duties().iter().enumerate() {
            self.out.set_duty(stage, duty);
        }
        if self.actual == 0 || level == 0 {
            debug!("multistage: restart at level {} (top {})", level, row.top());
            self.out.restart(row.top());
        } else {
            self.out.set_top(row.top());
        }

        self.live = row;
        self.actual = level;
    }

    /// Turn every stage off and restart the counter.
    pub fn off(&mut self) {
        self.apply(0);
    }

    /// Move the live registers one step toward the row for `level`.
    ///
    /// Coming up from fully off is never gradual: the first nonzero level
    /// is applied directly so the counter restart happens with it.
    pub fn adjust(&mut self, level: Level) -> Step {
        let table = self.board.table();
        let level = table.clamp(level);
        let wanted = table.row(level);

        if self.actual == 0 && level != 0 && self.live.is_dark() {
            self.apply(level);
            return Step::Done;
        }

        let stages = self.board.stages();
        for stage in 0..stages.len() {
            let live = self.live.duty(stage);
            let target = wanted.duty(stage);
            let next = match stages[stage].policy {
                Policy::Simple => toward(live, target),
                Policy::Stacked { full } => {
                    let upper_busy = stage + 1 < stages.len()
                        && self.live.duty(stage + 1) > wanted.duty(stage + 1);
                    if target == full {
                        full
                    } else if live == full && upper_busy {
                        live
                    } else {
                        toward(live, target)
                    }
                }
            };
            if next != live {
                trace!("multistage: stage {} {} -> {}", stage, live, next);
                self.out.set_duty(stage, next);
                self.live.set_duty(stage, next);
            }
        }

        if self.live.duties() != wanted.duties() {
            return Step::Pending;
        }
        if self.live.top() != wanted.top() {
            trace!("multistage: top {} -> {}", self.live.top(), wanted.top());
            self.out.set_top(wanted.top());
            self.live.set_top(wanted.top());
        }
        self.actual = level;
        Step::Done
    }

    /// Shadow of what was last written to the registers.
    pub fn state(&self) -> &OutputState {
        &self.live
    }

    /// Last level the output fully represents.
    pub fn actual_level(&self) -> Level {
        self.actual
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn output(&self) -> &O {
        &self.out
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.out
    }
}

impl<O: PwmOutput> Channel for MultiStage<O> {
    fn set_level(&mut self, level: Level) {
        self.apply(level);
    }

    fn gradual_tick(&mut self, level: Level) -> bool {
        self.adjust(level).is_done()
    }

    fn level(&self) -> Level {
        self.actual
    }
}

/// One unit toward `target`, never past it.
fn toward(live: u16, target: u16) -> u16 {
    match live.cmp(&target) {
        core::cmp::Ordering::Less => live + 1,
        core::cmp::Ordering::Greater => live - 1,
        core::cmp::Ordering::Equal => live,
    }
}
