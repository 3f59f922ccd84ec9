//! Ramp configuration
//!
//! Selects the board variant and paces the gradual engine. Bound once at
//! startup; nothing here is consulted per register write.

use serde::{Deserialize, Serialize};

use crate::boards::{BoardId, RAMP_SIZE};
use crate::error::{Error, Result};
use crate::table::Level;

/// Core ramp configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RampConfig {
    /// Board variant (level table + stage topology)
    pub board: BoardId,
    /// Step the gradual engine on every Nth scheduler tick (1 = every tick)
    pub gradual_every_ticks: u8,
    /// Level at which aux indicator channels switch from low to high
    pub aux_high_level: Level,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            board: BoardId::Fw3a,
            gradual_every_ticks: 1,
            aux_high_level: RAMP_SIZE / 2,
        }
    }
}

impl RampConfig {
    /// Reject values that would stall the engine or never light an indicator.
    pub fn validate(&self) -> Result<()> {
        if self.gradual_every_ticks == 0 {
            return Err(Error::Config("gradual_every_ticks must be at least 1"));
        }
        if self.aux_high_level == 0 {
            return Err(Error::Config("aux_high_level must be above 0"));
        }
        Ok(())
    }
}
