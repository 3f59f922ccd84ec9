//! Brightness level tables.
//!
//! A [`LevelTable`] is a set of index-aligned columns, one per power stage,
//! plus the shared PWM period ("top") for every level. Row `L` is the
//! complete hardware picture for brightness level `L`; row 0 is off.
//!
//! ```text
//!  level │ stage 0 │ stage 1 │ stage 2 │  top
//! ───────┼─────────┼─────────┼─────────┼──────
//!      0 │    0    │    0    │    0    │  255
//!      1 │    1    │    0    │    0    │ 4096
//!     .. │   ..    │   ..    │   ..    │   ..
//!    150 │    0    │    0    │  255    │  255
//! ```
//!
//! Tables come from an offline generator and are compiled in. Only their
//! shape is validated here; a non-monotonic curve is the generator's bug
//! and shows up as a visible brightness step, not as an error.

use heapless::Vec;
use log::warn;

use crate::error::TableError;
use crate::output::OutputState;

/// Abstract brightness index. 0 is off, the table's ramp size is maximum.
pub type Level = u8;

/// Upper bound on power stages sharing one period.
pub const MAX_STAGES: usize = 4;

/// Largest period the timer counter can hold (14-bit usable range).
pub const MAX_TOP: u16 = 16383;

/// One stage's duty values, indexed by level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// 8-bit duty values (linear regulators and FETs on an 8-bit top).
    Narrow(&'static [u8]),
    /// Duty values as wide as the period register.
    Wide(&'static [u16]),
}

impl Column {
    fn len(&self) -> usize {
        match self {
            Self::Narrow(v) => v.len(),
            Self::Wide(v) => v.len(),
        }
    }

    /// Duty value at `level`. The level must already be in range.
    pub fn get(&self, level: Level) -> u16 {
        let i = usize::from(level);
        match self {
            Self::Narrow(v) => u16::from(v[i]),
            Self::Wide(v) => v[i],
        }
    }
}

/// The shared period source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tops {
    /// Plain fixed-frequency PWM.
    Fixed(u16),
    /// Dynamic PWM: a period for every level.
    PerLevel(&'static [u16]),
}

impl Tops {
    pub fn get(&self, level: Level) -> u16 {
        match self {
            Self::Fixed(top) => *top,
            Self::PerLevel(v) => v[usize::from(level)],
        }
    }
}

/// Validated, immutable level table.
#[derive(Debug, Clone)]
pub struct LevelTable {
    ramp_size: Level,
    columns: Vec<Column, MAX_STAGES>,
    tops: Tops,
}

impl LevelTable {
    /// Build a table for levels `0..=ramp_size`.
    ///
    /// Every column must hold exactly `ramp_size + 1` entries, level 0 must
    /// be dark on every stage, and every period must be in `1..=MAX_TOP`.
    pub fn new(ramp_size: Level, columns: &[Column], tops: Tops) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::NoStages);
        }
        if columns.len() > MAX_STAGES {
            return Err(TableError::TooManyStages(columns.len()));
        }
        if ramp_size == 0 {
            return Err(TableError::EmptyRamp);
        }

        let expected = usize::from(ramp_size) + 1;
        for (stage, column) in columns.iter().enumerate() {
            if column.len() != expected {
                return Err(TableError::ColumnLength {
                    stage,
                    len: column.len(),
                    expected,
                });
            }
            if column.get(0) != 0 {
                return Err(TableError::OffRowLit { stage });
            }
        }

        if let Tops::PerLevel(v) = tops {
            if v.len() != expected {
                return Err(TableError::TopsLength {
                    len: v.len(),
                    expected,
                });
            }
        }
        for level in 0..=ramp_size {
            match tops.get(level) {
                0 => return Err(TableError::ZeroTop { level }),
                top if top > MAX_TOP => return Err(TableError::TopTooLarge { level, top }),
                _ => {}
            }
        }

        let stored = Vec::from_slice(columns).map_err(|()| TableError::TooManyStages(columns.len()))?;

        Ok(Self {
            ramp_size,
            columns: stored,
            tops,
        })
    }

    /// Highest valid level.
    pub fn ramp_size(&self) -> Level {
        self.ramp_size
    }

    /// Number of power stages.
    pub fn stages(&self) -> usize {
        self.columns.len()
    }

    /// Pull an out-of-range level back to the ramp ceiling.
    pub fn clamp(&self, level: Level) -> Level {
        if level > self.ramp_size {
            warn!("table: level {} above ramp size {}, clamped", level, self.ramp_size);
            self.ramp_size
        } else {
            level
        }
    }

    /// Duty for one stage at an in-range level.
    pub fn duty(&self, stage: usize, level: Level) -> u16 {
        self.columns[stage].get(level)
    }

    /// Shared period at an in-range level.
    pub fn top(&self, level: Level) -> u16 {
        self.tops.get(level)
    }

    /// Whether the period changes with level.
    pub fn is_dynamic(&self) -> bool {
        matches!(self.tops, Tops::PerLevel(_))
    }

    /// The complete output picture for `level` (clamped).
    pub fn row(&self, level: Level) -> OutputState {
        let level = self.clamp(level);
        let mut row = OutputState::off(self.stages(), self.top(level));
        for stage in 0..self.stages() {
            row.set_duty(stage, self.duty(stage, level));
        }
        row
    }
}
