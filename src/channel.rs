//! Channel capability and dispatch.
//!
//! Every light source the UI can point a level at, whether it is the main
//! emitter stack or a coloured aux LED, is reduced to two operations:
//! jump to a level, or take one gradual step toward a level. The
//! [`ChannelSet`] holds a fixed table of such channels with one active
//! member, so the outer loop never needs to know what it is driving.

use heapless::Vec;
use log::info;

use crate::error::{Error, Result};
use crate::table::Level;

/// Something that can display a brightness level.
pub trait Channel {
    /// Show `level` immediately.
    fn set_level(&mut self, level: Level);

    /// Take one gradual step toward `level`. Returns `true` once the
    /// output matches `level` exactly; further calls are then no-ops.
    fn gradual_tick(&mut self, level: Level) -> bool;

    /// Last level the output fully represents.
    fn level(&self) -> Level;
}

impl<C: Channel + ?Sized> Channel for &mut C {
    fn set_level(&mut self, level: Level) {
        (**self).set_level(level);
    }

    fn gradual_tick(&mut self, level: Level) -> bool {
        (**self).gradual_tick(level)
    }

    fn level(&self) -> Level {
        (**self).level()
    }
}

/// Fixed-capacity table of channels with one active member.
///
/// The set is itself a [`Channel`] that forwards to the active member.
pub struct ChannelSet<'a, const N: usize> {
    channels: Vec<&'a mut dyn Channel, N>,
    active: usize,
    level: Level,
}

impl<'a, const N: usize> ChannelSet<'a, N> {
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
            active: 0,
            level: 0,
        }
    }

    /// Append a channel; returns its index.
    pub fn push(&mut self, channel: &'a mut dyn Channel) -> Result<usize> {
        self.channels
            .push(channel)
            .map_err(|_| Error::ChannelSetFull)?;
        Ok(self.channels.len() - 1)
    }

    /// Switch the active channel. The old channel goes dark and the new one
    /// picks up the current level immediately.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.channels.len() {
            return Err(Error::NoSuchChannel(index));
        }
        if index == self.active {
            return Ok(());
        }
        let level = match self.channels.get_mut(self.active) {
            Some(old) => {
                let level = old.level();
                old.set_level(0);
                level
            }
            None => self.level,
        };
        self.level = level;
        self.active = index;
        self.channels[index].set_level(level);
        info!("channel: switched to {} at level {}", index, level);
        Ok(())
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl<const N: usize> Default for ChannelSet<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Channel for ChannelSet<'_, N> {
    fn set_level(&mut self, level: Level) {
        self.level = level;
        if let Some(ch) = self.channels.get_mut(self.active) {
            ch.set_level(level);
        }
    }

    fn gradual_tick(&mut self, level: Level) -> bool {
        let Some(ch) = self.channels.get_mut(self.active) else {
            self.level = level;
            return true;
        };
        let done = ch.gradual_tick(level);
        if done {
            self.level = level;
        }
        done
    }

    fn level(&self) -> Level {
        self.channels.get(self.active).map_or(self.level, |ch| ch.level())
    }
}
