//! Unified error types for the ramp core.
//!
//! Nothing on the per-tick path can fail: level lookups are clamped and
//! register writes are fire-and-forget. Errors only arise while a board,
//! table, configuration, or channel set is being assembled at startup.
//! All variants are `Copy` so they can be returned from `no_std` code
//! without allocation.

use core::fmt;

use crate::table::Level;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible construction step funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A level table has the wrong shape.
    Table(TableError),
    /// Configuration is invalid or does not match the selected board.
    Config(&'static str),
    /// A channel set has no room for another channel.
    ChannelSetFull,
    /// A channel index does not exist in the channel set.
    NoSuchChannel(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table(e) => write!(f, "table: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::ChannelSetFull => write!(f, "channel set full"),
            Self::NoSuchChannel(i) => write!(f, "no channel at index {i}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Table errors
// ---------------------------------------------------------------------------

/// Shape violations detected when a [`LevelTable`](crate::table::LevelTable)
/// is built. Monotonicity is deliberately not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The table has no stage columns.
    NoStages,
    /// More stage columns than [`MAX_STAGES`](crate::table::MAX_STAGES).
    TooManyStages(usize),
    /// A ramp needs at least one lit level.
    EmptyRamp,
    /// A stage column is not index-aligned with the ramp.
    ColumnLength { stage: usize, len: usize, expected: usize },
    /// The period column is not index-aligned with the ramp.
    TopsLength { len: usize, expected: usize },
    /// Level 0 must leave every stage dark.
    OffRowLit { stage: usize },
    /// A period of zero would stop the counter.
    ZeroTop { level: Level },
    /// A period beyond the counter range.
    TopTooLarge { level: Level, top: u16 },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStages => write!(f, "no stage columns"),
            Self::TooManyStages(n) => write!(f, "{n} stage columns exceed the limit"),
            Self::EmptyRamp => write!(f, "ramp has no lit levels"),
            Self::ColumnLength { stage, len, expected } => {
                write!(f, "stage {stage} has {len} entries, expected {expected}")
            }
            Self::TopsLength { len, expected } => {
                write!(f, "period column has {len} entries, expected {expected}")
            }
            Self::OffRowLit { stage } => write!(f, "stage {stage} is lit at level 0"),
            Self::ZeroTop { level } => write!(f, "zero period at level {level}"),
            Self::TopTooLarge { level, top } => write!(f, "period {top} at level {level} out of range"),
        }
    }
}

impl From<TableError> for Error {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
