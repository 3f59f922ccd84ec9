//! Gradual ramp driver.
//!
//! Walks any [`Channel`] toward a target level one table index at a time.
//! Each call to [`Ramp::step`] picks the next waypoint (the current level
//! moved one index toward the target) and asks the channel to take one
//! gradual tick toward it; once the channel reports the waypoint reached,
//! the ramp level advances.
//!
//! The target is never stored. Changing it between ticks simply redirects
//! the next waypoint from wherever the output is now, so there is nothing
//! to cancel.
//!
//! The ramp's own level is only a cache. Every step starts from
//! [`Channel::level`], so a channel switched off or set directly between
//! ticks is picked up from where it really is.

use log::warn;

use crate::boards::RAMP_SIZE;
use crate::channel::Channel;
use crate::config::RampConfig;
use crate::drivers::multistage::Step;
use crate::table::Level;

/// External scheduler tick counter.
pub type TickIndex = u32;

pub struct Ramp {
    level: Level,
    ceiling: Level,
    every: u8,
    settled_at: Option<Level>,
}

impl Ramp {
    /// `ceiling` is the channel's highest level, usually the table's ramp size.
    /// It is capped at [`RAMP_SIZE`].
    pub fn new(config: &RampConfig, ceiling: Level) -> Self {
        let ceiling = if ceiling > RAMP_SIZE {
            warn!("ramp: ceiling {} above ramp size {}, capped", ceiling, RAMP_SIZE);
            RAMP_SIZE
        } else {
            ceiling
        };
        Self {
            level: 0,
            ceiling,
            every: config.gradual_every_ticks.max(1),
            settled_at: Some(0),
        }
    }

    /// Level the channel fully represented after the last call.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Jump straight to `level`.
    pub fn set_level<C: Channel + ?Sized>(&mut self, channel: &mut C, level: Level) {
        let level = self.clamp(level);
        channel.set_level(level);
        self.level = channel.level();
        self.settled_at = Some(level);
    }

    /// One scheduler tick of a gradual transition toward `target`.
    ///
    /// Only every `gradual_every_ticks`-th tick moves the output; the others
    /// report whether the last real step already settled on `target`.
    pub fn step<C: Channel + ?Sized>(&mut self, channel: &mut C, target: Level, tick: TickIndex) -> Step {
        let target = self.clamp(target);
        self.level = channel.level();
        if tick % TickIndex::from(self.every) != 0 {
            return if self.settled_at == Some(target) && self.level == target {
                Step::Done
            } else {
                Step::Pending
            };
        }

        let waypoint = match self.level.cmp(&target) {
            core::cmp::Ordering::Less => self.level + 1,
            core::cmp::Ordering::Greater => self.level - 1,
            core::cmp::Ordering::Equal => self.level,
        };
        let reached = channel.gradual_tick(waypoint);
        if reached {
            self.level = channel.level();
        }

        if reached && self.level == target {
            self.settled_at = Some(target);
            Step::Done
        } else {
            self.settled_at = None;
            Step::Pending
        }
    }

    fn clamp(&self, level: Level) -> Level {
        if level > self.ceiling {
            warn!("ramp: level {} above ceiling {}, clamped", level, self.ceiling);
            self.ceiling
        } else {
            level
        }
    }
}
