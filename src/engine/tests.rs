use std::time::Duration;

use proptest::prelude::*;

use super::*;

fn mins(m: u64) -> Duration {
    Duration::from_secs(m * 60)
}

fn engine() -> PomodoroEngine {
    PomodoroEngine::new(SessionPlan::default())
}

fn assert_invariants(e: &PomodoroEngine) {
    let s = e.state();
    let plan = e.plan();

    let stopped = s.status == RunStatus::Stopped;
    let idle = s.mode == Mode::Idle;
    assert_eq!(stopped, idle, "{s:?}");
    assert_eq!(idle, s.session == 0, "{s:?}");
    assert!(s.session <= plan.total_sessions(), "{s:?}");

    assert!(s.phase_remaining <= s.phase_total, "{s:?}");
    match s.mode {
        Mode::Focus => {
            assert_eq!(s.phase_total, plan.focus_duration());
            assert_eq!(s.completed_focus + 1, s.session, "{s:?}");
            assert!(!s.phase_remaining.is_zero());
        }
        Mode::Break => {
            assert_eq!(s.phase_total, plan.break_duration());
            assert_eq!(s.completed_focus, s.session, "{s:?}");
            assert!(!s.phase_remaining.is_zero());
        }
        Mode::Idle => assert_eq!(s.completed_focus, 0),
    }
}

#[test]
fn new_engine_is_idle() {
    let e = engine();
    let s = e.state();
    assert_eq!(s.mode, Mode::Idle);
    assert_eq!(s.status, RunStatus::Stopped);
    assert_eq!(s.session, 0);
    assert_eq!(s.phase_remaining, mins(25));
    assert_invariants(&e);
}

#[test]
fn plan_rejects_zero_values() {
    assert_eq!(
        SessionPlan::new(Duration::ZERO, mins(5), 3),
        Err(crate::error::PlanError::ZeroFocus)
    );
    assert_eq!(
        SessionPlan::new(mins(25), Duration::ZERO, 3),
        Err(crate::error::PlanError::ZeroBreak)
    );
    assert_eq!(
        SessionPlan::new(mins(25), mins(5), 0),
        Err(crate::error::PlanError::ZeroSessions)
    );
    assert_eq!(SessionPlan::default().focus_minutes(), 25);
}

#[test]
fn start_enters_focus_and_reports_order() {
    let mut e = engine();
    let events = e.start();
    assert_eq!(events, vec![Transition::Entered(Mode::Focus), Transition::Started]);
    let s = e.state();
    assert_eq!((s.mode, s.status, s.session), (Mode::Focus, RunStatus::Running, 1));
    assert_eq!(s.phase_remaining, mins(25));
}

#[test]
fn start_outside_idle_only_unpauses() {
    let mut e = engine();
    e.start();
    assert!(e.start().is_empty());
    e.pause();
    assert_eq!(e.start(), vec![Transition::Resumed]);
    assert_eq!(e.status(), RunStatus::Running);
}

#[test]
fn pause_and_resume_are_noops_in_the_wrong_state() {
    let mut e = engine();
    assert!(e.pause().is_empty());
    assert!(e.resume().is_empty());
    e.start();
    assert!(e.resume().is_empty());
    assert_eq!(e.pause(), vec![Transition::Paused]);
    assert!(e.pause().is_empty());
    assert_eq!(e.resume(), vec![Transition::Resumed]);
}

#[test]
fn paused_engine_ignores_ticks() {
    let mut e = engine();
    e.start();
    e.tick(mins(3));
    e.pause();
    let before = e.state();
    assert!(e.tick(mins(60)).is_empty());
    assert_eq!(e.state(), before);
}

#[test]
fn tick_zero_changes_nothing() {
    let mut e = engine();
    e.start();
    e.tick(mins(7));
    let before = e.state();
    assert!(e.tick(Duration::ZERO).is_empty());
    assert_eq!(e.state(), before);
}

#[test]
fn exact_expiry_counts_as_expired() {
    let mut e = engine();
    e.start();
    let events = e.tick(mins(25));
    assert_eq!(
        events,
        vec![
            Transition::Completed {
                mode: Mode::Focus,
                session: 1
            },
            Transition::Entered(Mode::Break),
        ]
    );
    assert_eq!(e.state().phase_remaining, mins(5));
}

#[test]
fn full_cycle_returns_to_idle() {
    let mut e = engine();
    e.start();

    let events = e.tick(mins(25));
    assert!(events.contains(&Transition::Completed {
        mode: Mode::Focus,
        session: 1
    }));
    let s = e.state();
    assert_eq!((s.mode, s.session, s.completed_focus), (Mode::Break, 1, 1));

    e.tick(mins(5));
    let s = e.state();
    assert_eq!((s.mode, s.session), (Mode::Focus, 2));

    let mut focus_completions = 1;
    let mut all = Vec::new();
    for d in [mins(25), mins(5), mins(25)] {
        all.extend(e.tick(d));
    }
    focus_completions += all
        .iter()
        .filter(|t| matches!(t, Transition::Completed { mode: Mode::Focus, .. }))
        .count();
    assert_eq!(e.state().completed_focus, 3);
    assert_eq!(e.state().session, 3);

    let last = e.tick(mins(5));
    assert_eq!(last, vec![Transition::CycleCompleted]);
    assert_eq!(focus_completions, 3);

    let s = e.state();
    assert_eq!((s.mode, s.status, s.session), (Mode::Idle, RunStatus::Stopped, 0));
    assert_eq!(s.completed_focus, 0);
    assert_invariants(&e);
}

#[test]
fn one_large_tick_yields_chronological_events() {
    let mut e = engine();
    e.start();
    let events = e.tick(mins(25 + 5 + 10));
    assert_eq!(
        events,
        vec![
            Transition::Completed {
                mode: Mode::Focus,
                session: 1
            },
            Transition::Entered(Mode::Break),
            Transition::Completed {
                mode: Mode::Break,
                session: 1
            },
            Transition::Entered(Mode::Focus),
        ]
    );
    assert_eq!(e.state().phase_remaining, mins(15));
    assert_eq!(e.state().session, 2);
}

#[test]
fn overflow_past_cycle_end_is_discarded() {
    let mut e = engine();
    e.start();
    let events = e.tick(mins(3 * 30 + 100));
    assert_eq!(events.last(), Some(&Transition::CycleCompleted));
    assert_eq!(e.mode(), Mode::Idle);
    assert_eq!(e.state().phase_remaining, mins(25));
}

#[test]
fn skip_from_paused_keeps_paused() {
    let mut e = engine();
    e.start();
    e.tick(mins(10));
    e.pause();
    let events = e.skip();
    assert_eq!(events[1], Transition::Entered(Mode::Break));
    let s = e.state();
    assert_eq!((s.mode, s.status), (Mode::Break, RunStatus::Paused));
    assert_eq!(s.phase_remaining, mins(5));
}

#[test]
fn skip_while_idle_does_nothing() {
    let mut e = engine();
    assert!(e.skip().is_empty());
    assert_eq!(e.mode(), Mode::Idle);
}

#[test]
fn skip_through_last_break_completes_cycle() {
    let mut e = PomodoroEngine::new(SessionPlan::new(mins(25), mins(5), 1).unwrap());
    e.start();
    e.skip();
    assert_eq!(e.skip(), vec![Transition::CycleCompleted]);
    assert_eq!(e.status(), RunStatus::Stopped);
}

#[test]
fn reset_session_mid_focus_rewinds_only_the_phase() {
    let mut e = engine();
    e.start();
    e.tick(mins(12));
    assert_eq!(e.reset_session(), vec![Transition::SessionRestarted]);
    let s = e.state();
    assert_eq!(s.phase_remaining, mins(25));
    assert_eq!(s.completed_focus, 0);
    assert_eq!(s.session, 1);
    assert_eq!(s.status, RunStatus::Running);
}

#[test]
fn reset_session_preserves_completed_count() {
    let mut e = engine();
    e.start();
    e.tick(mins(25 + 5 + 25 + 2));
    assert_eq!(e.state().completed_focus, 2);
    e.reset_session();
    assert_eq!(e.state().completed_focus, 2);
    assert_eq!(e.state().phase_remaining, mins(5));
}

#[test]
fn reset_session_when_idle_emits_nothing() {
    let mut e = engine();
    assert!(e.reset_session().is_empty());
}

#[test]
fn reset_cycle_is_idempotent() {
    let mut e = engine();
    e.start();
    e.tick(mins(31));
    e.reset_cycle();
    let once = e.state();
    assert_eq!(e.reset_cycle(), vec![Transition::CycleReset]);
    assert_eq!(e.state(), once);
    assert_eq!(once, PomodoroEngine::default().state());
}

#[test]
fn progress_and_clock_text() {
    let mut e = engine();
    assert_eq!(e.state().progress(), 0.0);
    e.start();
    e.tick(Duration::from_secs(5 * 60 + 30));
    let s = e.state();
    assert_eq!(s.remaining_mmss(), "19:30");
    assert!((s.progress() - 0.22).abs() < 1e-9);
}

#[derive(Debug, Clone)]
enum Op {
    Start,
    Pause,
    Resume,
    ResetSession,
    ResetCycle,
    Skip,
    Tick(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Start),
        Just(Op::Pause),
        Just(Op::Resume),
        Just(Op::ResetSession),
        Just(Op::ResetCycle),
        Just(Op::Skip),
        (0u64..400).prop_map(Op::Tick),
    ]
}

fn small_engine() -> PomodoroEngine {
    PomodoroEngine::new(
        SessionPlan::new(Duration::from_secs(60), Duration::from_secs(20), 2).unwrap(),
    )
}

fn apply(e: &mut PomodoroEngine, op: &Op) -> Vec<Transition> {
    match op {
        Op::Start => e.start(),
        Op::Pause => e.pause(),
        Op::Resume => e.resume(),
        Op::ResetSession => e.reset_session(),
        Op::ResetCycle => e.reset_cycle(),
        Op::Skip => e.skip(),
        Op::Tick(secs) => e.tick(Duration::from_secs(*secs)),
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_every_command(ops in prop::collection::vec(op(), 0..60)) {
        let mut e = small_engine();
        assert_invariants(&e);
        for op in &ops {
            apply(&mut e, op);
            assert_invariants(&e);
        }
    }

    #[test]
    fn ticks_are_additive(
        ops in prop::collection::vec(op(), 0..20),
        d1 in 0u64..10_000,
        d2 in 0u64..10_000,
    ) {
        let mut whole = small_engine();
        for op in &ops {
            apply(&mut whole, op);
        }
        let mut split = whole.clone();

        let once = whole.tick(Duration::from_millis(d1 + d2));
        let mut twice = split.tick(Duration::from_millis(d1));
        twice.extend(split.tick(Duration::from_millis(d2)));

        prop_assert_eq!(whole.state(), split.state());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn tick_zero_is_a_noop(ops in prop::collection::vec(op(), 0..30)) {
        let mut e = small_engine();
        for op in &ops {
            apply(&mut e, op);
        }
        let before = e.state();
        prop_assert!(e.tick(Duration::ZERO).is_empty());
        prop_assert_eq!(e.state(), before);
    }
}
