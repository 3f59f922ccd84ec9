//! Channel set dispatch over a main emitter and an aux indicator.

use ledramp::boards::{Board, BoardId};
use ledramp::channel::{Channel, ChannelSet};
use ledramp::config::RampConfig;
use ledramp::drivers::aux_rgb::{AuxColour, AuxPower, AuxRgb};
use ledramp::drivers::multistage::MultiStage;
use ledramp::ramp::Ramp;
use ledramp::{Error, Step};

use super::mock_hw::{MockAux, MockTimer};

fn main_channel() -> MultiStage<MockTimer> {
    MultiStage::new(Board::from_id(BoardId::Fw3a).unwrap(), MockTimer::new())
}

#[test]
fn ramp_drives_whichever_channel_is_active() {
    let config = RampConfig::default();
    let mut main = main_channel();
    let mut aux = AuxRgb::new(MockAux::default(), AuxColour::Green, config.aux_high_level);
    {
        let mut set: ChannelSet<'_, 2> = ChannelSet::new();
        set.push(&mut main).unwrap();
        set.push(&mut aux).unwrap();

        let mut ramp = Ramp::new(&config, 150);
        ramp.set_level(&mut set, 30);
        set.select(1).unwrap();

        let mut tick = 0;
        while ramp.step(&mut set, 100, tick) == Step::Pending {
            tick += 1;
        }
        assert_eq!(set.level(), 100);
    }
    assert!(main.state().is_dark());
    assert_eq!(aux.power(), AuxPower::High);
    assert_eq!(aux.port().rgb, (AuxPower::Off, AuxPower::High, AuxPower::Off));
}

#[test]
fn switching_back_restores_level_on_main() {
    let mut main = main_channel();
    let mut aux = AuxRgb::new(MockAux::default(), AuxColour::Blue, 75);
    {
        let mut set: ChannelSet<'_, 2> = ChannelSet::new();
        set.push(&mut main).unwrap();
        set.push(&mut aux).unwrap();
        set.select(1).unwrap();
        set.set_level(10);
        set.select(0).unwrap();
    }
    assert_eq!(aux.power(), AuxPower::Off);
    assert_eq!(main.actual_level(), 10);
    assert_eq!(main.output().restarts(), 2);
}

#[test]
fn select_out_of_range_leaves_state_alone() {
    let mut main = main_channel();
    let mut set: ChannelSet<'_, 1> = ChannelSet::new();
    set.push(&mut main).unwrap();
    set.set_level(50);
    assert_eq!(set.select(4), Err(Error::NoSuchChannel(4)));
    assert_eq!(set.active(), 0);
    assert_eq!(set.level(), 50);
}

#[test]
fn ramp_continues_from_the_newly_selected_channel() {
    let mut main = main_channel();
    let mut aux = AuxRgb::new(MockAux::default(), AuxColour::Red, 75);
    {
        let mut set: ChannelSet<'_, 2> = ChannelSet::new();
        set.push(&mut main).unwrap();
        set.push(&mut aux).unwrap();
        let mut ramp = Ramp::new(&RampConfig::default(), 150);
        ramp.set_level(&mut set, 40);
        set.select(1).unwrap();
        assert_eq!(set.level(), 40);

        // Aux switched off directly, bypassing the ramp.
        set.set_level(0);
        assert_eq!(ramp.step(&mut set, 41, 0), Step::Pending);
        assert_eq!(ramp.level(), 1);
        assert_eq!(set.level(), 1);
    }
    assert!(main.state().is_dark());
    assert_eq!(aux.power(), AuxPower::Low);
}
