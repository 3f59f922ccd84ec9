//! Compiled-in board variants.
//!
//! A [`Board`] binds a level table to the stage topology it drives: how
//! many stages share the timer, what each one is called, and which
//! gradual-adjust [`Policy`] it uses. The variant is chosen once at startup
//! from [`RampConfig::board`](crate::config::RampConfig) and never changes.

mod fw3a;
mod fw3a_2ch;
mod fwaa;

use heapless::Vec;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::table::{LevelTable, MAX_STAGES};

/// Ramp length shared by every bundled board.
pub const RAMP_SIZE: u8 = 150;

/// Period used in the fixed-frequency upper range, and at level 0.
pub const TOP_INIT: u16 = 255;

/// Identifies a bundled board variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardId {
    /// FW3A: 1x7135 + 7x7135 + FET, dynamic PWM.
    Fw3a,
    /// FW3A 2-channel, main ramp: 1x7135 + FET, dynamic PWM.
    Fw3a2chFet,
    /// FW3A 2-channel, alternate ramp: 7x7135 alone, dynamic PWM.
    Fw3a2chLinear,
    /// FWAA: 1x7135 + FET, fixed 8-bit period.
    Fwaa,
}

/// How the gradual stepper moves one stage toward its table value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// One unit per tick, straight at the target.
    Simple,
    /// The stage saturates at `full` while the next stage up carries the
    /// rest of the power. It jumps to `full` when its row saturates it and
    /// holds at `full` until the next stage has come down to its target.
    Stacked { full: u16 },
}

/// One power stage on the shared timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub name: &'static str,
    pub policy: Policy,
}

impl Stage {
    pub const fn new(name: &'static str, policy: Policy) -> Self {
        Self { name, policy }
    }
}

/// A level table plus the stages it drives.
#[derive(Debug, Clone)]
pub struct Board {
    id: BoardId,
    table: LevelTable,
    stages: Vec<Stage, MAX_STAGES>,
}

impl Board {
    /// Pair a table with its stage descriptors, one per column.
    pub fn new(id: BoardId, table: LevelTable, stages: &[Stage]) -> Result<Self> {
        if stages.len() != table.stages() {
            return Err(Error::Config("stage descriptors do not match table columns"));
        }
        if stages
            .iter()
            .any(|s| matches!(s.policy, Policy::Stacked { full: 0 }))
        {
            return Err(Error::Config("stacked stage needs a nonzero full value"));
        }
        let stages = Vec::from_slice(stages)
            .map_err(|()| Error::Config("too many stage descriptors"))?;
        Ok(Self { id, table, stages })
    }

    /// Load a bundled variant.
    pub fn from_id(id: BoardId) -> Result<Self> {
        let board = match id {
            BoardId::Fw3a => fw3a::board(),
            BoardId::Fw3a2chFet => fw3a_2ch::fet_board(),
            BoardId::Fw3a2chLinear => fw3a_2ch::linear_board(),
            BoardId::Fwaa => fwaa::board(),
        }?;
        info!(
            "board: {:?} loaded, {} stages, {}",
            id,
            board.stages.len(),
            if board.table.is_dynamic() { "dynamic PWM" } else { "fixed period" }
        );
        Ok(board)
    }

    pub fn id(&self) -> BoardId {
        self.id
    }

    pub fn table(&self) -> &LevelTable {
        &self.table
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }
}
