//! Ramp driver walking real boards between levels.

use ledramp::boards::{Board, BoardId, RAMP_SIZE};
use ledramp::config::RampConfig;
use ledramp::drivers::multistage::MultiStage;
use ledramp::ramp::{Ramp, TickIndex};
use ledramp::table::Level;
use ledramp::Step;

use super::mock_hw::MockTimer;

fn setup(id: BoardId, every: u8) -> (Ramp, MultiStage<MockTimer>) {
    let config = RampConfig {
        board: id,
        gradual_every_ticks: every,
        ..RampConfig::default()
    };
    let board = Board::from_id(config.board).unwrap();
    let ceiling = board.table().ramp_size();
    (Ramp::new(&config, ceiling), MultiStage::new(board, MockTimer::new()))
}

/// Tick until `Done`; returns (ticks, waypoint advances).
fn run_to(ramp: &mut Ramp, ms: &mut MultiStage<MockTimer>, target: Level, tick: &mut TickIndex) -> (u32, u32) {
    let mut ticks = 0;
    let mut advances = 0;
    loop {
        let before = ramp.level();
        let step = ramp.step(ms, target, *tick);
        *tick += 1;
        ticks += 1;
        if ramp.level() != before {
            advances += 1;
        }
        if step == Step::Done {
            return (ticks, advances);
        }
        assert!(ticks < 500_000, "ramp to {} never settled", target);
    }
}

// ── Convergence ───────────────────────────────────────────────

#[test]
fn full_sweep_lands_on_exact_rows() {
    for id in [BoardId::Fw3a, BoardId::Fw3a2chFet, BoardId::Fw3a2chLinear, BoardId::Fwaa] {
        let (mut ramp, mut ms) = setup(id, 1);
        let mut tick = 0;

        let (_, up) = run_to(&mut ramp, &mut ms, RAMP_SIZE, &mut tick);
        assert_eq!(up, u32::from(RAMP_SIZE));
        assert_eq!(*ms.state(), ms.board().table().row(RAMP_SIZE));

        let (_, down) = run_to(&mut ramp, &mut ms, 0, &mut tick);
        assert_eq!(down, u32::from(RAMP_SIZE));
        assert!(ms.state().is_dark());
        assert_eq!(ms.actual_level(), 0);
    }
}

#[test]
fn gradual_rise_from_off_restarts_once() {
    let (mut ramp, mut ms) = setup(BoardId::Fw3a, 1);
    let mut tick = 0;
    run_to(&mut ramp, &mut ms, 60, &mut tick);
    assert_eq!(ms.output().restarts(), 1);
    assert_eq!(ms.output().top, ms.board().table().top(60));
}

#[test]
fn pacing_stretches_the_transition() {
    let (mut fast, mut a) = setup(BoardId::Fw3a2chLinear, 1);
    let (mut slow, mut b) = setup(BoardId::Fw3a2chLinear, 3);
    let (mut t1, mut t2) = (0, 0);
    fast.set_level(&mut a, 20);
    slow.set_level(&mut b, 20);
    let (fast_ticks, _) = run_to(&mut fast, &mut a, 25, &mut t1);
    let (slow_ticks, _) = run_to(&mut slow, &mut b, 25, &mut t2);
    assert!(slow_ticks > fast_ticks * 2, "{} vs {}", slow_ticks, fast_ticks);
    assert_eq!(a.state(), b.state());
}

// ── Retargeting ───────────────────────────────────────────────

#[test]
fn retarget_mid_transition_settles_on_new_target() {
    let (mut ramp, mut ms) = setup(BoardId::Fw3a2chFet, 1);
    ramp.set_level(&mut ms, 70);
    let mut tick = 0;
    for _ in 0..200 {
        ramp.step(&mut ms, 120, tick);
        tick += 1;
    }
    assert!(ramp.level() > 70);
    run_to(&mut ramp, &mut ms, 75, &mut tick);
    assert_eq!(ramp.level(), 75);
    assert_eq!(*ms.state(), ms.board().table().row(75));
}

#[test]
fn settled_ramp_writes_nothing() {
    let (mut ramp, mut ms) = setup(BoardId::Fwaa, 1);
    ramp.set_level(&mut ms, 42);
    ms.output_mut().clear();
    for tick in 0..10 {
        assert_eq!(ramp.step(&mut ms, 42, tick), Step::Done);
    }
    assert!(ms.output().calls.is_empty());
}

#[test]
fn target_beyond_table_is_clamped() {
    let (mut ramp, mut ms) = setup(BoardId::Fw3a2chLinear, 1);
    ramp.set_level(&mut ms, RAMP_SIZE - 1);
    let mut tick = 0;
    run_to(&mut ramp, &mut ms, Level::MAX, &mut tick);
    assert_eq!(ramp.level(), RAMP_SIZE);
    assert_eq!(*ms.state(), ms.board().table().row(RAMP_SIZE));
}

// ── Resync with the live output ───────────────────────────────

#[test]
fn rise_after_direct_off_starts_from_the_bottom() {
    let (mut ramp, mut ms) = setup(BoardId::Fw3a, 1);
    ramp.set_level(&mut ms, RAMP_SIZE);
    ms.off();
    ms.output_mut().clear();

    assert_eq!(ramp.step(&mut ms, 10, 0), Step::Pending);
    assert_eq!(ms.actual_level(), 1);
    assert_eq!(ramp.level(), 1);
    assert_eq!(*ms.state(), ms.board().table().row(1));
    assert_eq!(ms.output().restarts(), 1);

    let mut tick = 1;
    run_to(&mut ramp, &mut ms, 10, &mut tick);
    assert_eq!(*ms.state(), ms.board().table().row(10));
}

#[test]
fn idle_tick_after_direct_off_is_pending() {
    let (mut ramp, mut ms) = setup(BoardId::Fw3a, 4);
    ramp.set_level(&mut ms, 100);
    assert_eq!(ramp.step(&mut ms, 100, 0), Step::Done);
    ms.off();
    assert_eq!(ramp.step(&mut ms, 100, 1), Step::Pending);
    assert!(ms.state().is_dark());
}

#[test]
fn direct_apply_redirects_the_walk() {
    let (mut ramp, mut ms) = setup(BoardId::Fw3a2chFet, 1);
    ramp.set_level(&mut ms, 20);
    ms.apply(90);
    assert_eq!(ramp.step(&mut ms, 85, 0), Step::Pending);
    assert!(ramp.level() == 90 || ramp.level() == 89, "walk restarted from {}", ramp.level());
    let mut tick = 1;
    let (_, advances) = run_to(&mut ramp, &mut ms, 85, &mut tick);
    assert!(advances <= 5);
    assert_eq!(*ms.state(), ms.board().table().row(85));
}

#[test]
fn oversized_ceiling_stops_at_the_table_end() {
    let board = Board::from_id(BoardId::Fwaa).unwrap();
    let mut ms = MultiStage::new(board, MockTimer::new());
    let mut ramp = Ramp::new(&RampConfig::default(), Level::MAX);
    let mut tick = 0;
    let (_, advances) = run_to(&mut ramp, &mut ms, Level::MAX, &mut tick);
    assert_eq!(advances, u32::from(RAMP_SIZE));
    assert_eq!(ramp.level(), RAMP_SIZE);
}
