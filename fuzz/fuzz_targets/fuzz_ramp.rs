//! Fuzz target: `Ramp::step` over `MultiStage`
//!
//! Treats the input as a stream of (op, level, tick) triples mixing
//! immediate sets, gradual steps and turn-offs on a board picked by the
//! first byte. The engine must never panic, never write a duty above the
//! table's full scale, never move the actual level more than one index per
//! step even after the output was switched off underneath it, and always
//! settle on the exact row once left alone.
//!
//! cargo fuzz run fuzz_ramp

#![no_main]

use ledramp::boards::{Board, BoardId, RAMP_SIZE};
use ledramp::config::RampConfig;
use ledramp::drivers::multistage::MultiStage;
use ledramp::output::PwmOutput;
use ledramp::ramp::Ramp;
use ledramp::Step;
use libfuzzer_sys::fuzz_target;

struct Sink {
    max_duty: u16,
}

impl PwmOutput for Sink {
    fn set_duty(&mut self, _stage: usize, duty: u16) {
        self.max_duty = self.max_duty.max(duty);
    }

    fn set_top(&mut self, top: u16) {
        assert!(top > 0, "zero period written");
    }

    fn restart(&mut self, top: u16) {
        assert!(top > 0, "zero period written");
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&pick, ops)) = data.split_first() else {
        return;
    };
    let id = match pick % 4 {
        0 => BoardId::Fw3a,
        1 => BoardId::Fw3a2chFet,
        2 => BoardId::Fw3a2chLinear,
        _ => BoardId::Fwaa,
    };
    let config = RampConfig {
        board: id,
        gradual_every_ticks: (pick >> 2) % 4 + 1,
        ..RampConfig::default()
    };
    let Ok(board) = Board::from_id(id) else {
        return;
    };
    let mut ms = MultiStage::new(board, Sink { max_duty: 0 });
    let mut ramp = Ramp::new(&config, RAMP_SIZE);

    let mut target = 0;
    for chunk in ops.chunks_exact(3) {
        let (op, level, tick) = (chunk[0], chunk[1], u32::from(chunk[2]));
        match op % 8 {
            0 => ramp.set_level(&mut ms, level),
            1 => ms.off(),
            _ => {
                target = level;
                let before = ms.actual_level();
                let _ = ramp.step(&mut ms, target, tick);
                let after = ms.actual_level();
                assert!(before.abs_diff(after) <= 1, "level jumped {} -> {}", before, after);
                assert_eq!(ramp.level(), after, "ramp lost track of the output");
            }
        }
    }
    assert!(ms.output().max_duty <= 255, "duty past full scale");

    // Left alone, the engine settles on the last target.
    let target = target.min(RAMP_SIZE);
    let mut tick = 0u32;
    while ramp.step(&mut ms, target, tick) == Step::Pending {
        tick += 1;
        assert!(tick < 1_000_000, "never settled");
    }
    assert_eq!(*ms.state(), ms.board().table().row(target));
});
