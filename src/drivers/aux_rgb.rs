//! RGB aux indicator driver.
//!
//! Three small LEDs (R/G/B) behind the optic, each switched between off,
//! a weak pull-up glow, and full drive. As a [`Channel`] an aux colour
//! shows level 0 as off, anything below the configured threshold as
//! low, and the rest as high. There is no gradual behaviour: a tick always
//! lands immediately.

use crate::channel::Channel;
use crate::table::Level;

/// Drive strength of one aux LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuxPower {
    #[default]
    Off,
    Low,
    High,
}

/// Register handle for the three aux LEDs.
pub trait AuxPort {
    fn set_rgb(&mut self, r: AuxPower, g: AuxPower, b: AuxPower);
}

/// Aux colours, as on/off masks over (R, G, B).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxColour {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    White,
}

impl AuxColour {
    fn mask(self) -> (bool, bool, bool) {
        match self {
            Self::Red => (true, false, false),
            Self::Yellow => (true, true, false),
            Self::Green => (false, true, false),
            Self::Cyan => (false, true, true),
            Self::Blue => (false, false, true),
            Self::Purple => (true, false, true),
            Self::White => (true, true, true),
        }
    }
}

pub struct AuxRgb<P: AuxPort> {
    port: P,
    colour: AuxColour,
    high_from: Level,
    current: AuxPower,
    level: Level,
}

impl<P: AuxPort> AuxRgb<P> {
    /// `high_from` is the first level shown at full drive.
    pub fn new(port: P, colour: AuxColour, high_from: Level) -> Self {
        Self {
            port,
            colour,
            high_from,
            current: AuxPower::Off,
            level: 0,
        }
    }

    fn power_for(&self, level: Level) -> AuxPower {
        match level {
            0 => AuxPower::Off,
            l if l < self.high_from => AuxPower::Low,
            _ => AuxPower::High,
        }
    }

    fn show(&mut self, power: AuxPower) {
        let (r, g, b) = self.colour.mask();
        let pick = |on: bool| if on { power } else { AuxPower::Off };
        self.port.set_rgb(pick(r), pick(g), pick(b));
        self.current = power;
    }

    pub fn power(&self) -> AuxPower {
        self.current
    }

    pub fn colour(&self) -> AuxColour {
        self.colour
    }

    pub fn port(&self) -> &P {
        &self.port
    }
}

impl<P: AuxPort> Channel for AuxRgb<P> {
    fn set_level(&mut self, level: Level) {
        let power = self.power_for(level);
        self.show(power);
        self.level = level;
    }

    fn gradual_tick(&mut self, level: Level) -> bool {
        let power = self.power_for(level);
        if power != self.current {
            self.show(power);
        }
        self.level = level;
        true
    }

    fn level(&self) -> Level {
        self.level
    }
}
