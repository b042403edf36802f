//! Engine data types: `Mode`, `RunStatus`, `SessionPlan`, `EngineState` and
//! the `Transition` events the engine emits.

use std::time::Duration;

use crate::error::PlanError;

/// Which kind of phase the engine is in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Focus,
    Break,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Idle => "IDLE",
            Mode::Focus => "FOCUS",
            Mode::Break => "BREAK",
        }
    }
}

/// Whether time is advancing.
///
/// `Stopped` only coexists with `Mode::Idle`; `Running` and `Paused` only with
/// `Focus` or `Break`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Stopped,
    Running,
    Paused,
}

impl RunStatus {
    pub fn label(self) -> &'static str {
        match self {
            RunStatus::Stopped => "Idle",
            RunStatus::Running => "Running",
            RunStatus::Paused => "Paused",
        }
    }
}

/// Immutable cycle configuration: N focus phases, each followed by a break.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionPlan {
    focus: Duration,
    brk: Duration,
    total_sessions: u32,
}

impl SessionPlan {
    pub fn new(focus: Duration, brk: Duration, total_sessions: u32) -> Result<Self, PlanError> {
        if focus.is_zero() {
            return Err(PlanError::ZeroFocus);
        }
        if brk.is_zero() {
            return Err(PlanError::ZeroBreak);
        }
        if total_sessions == 0 {
            return Err(PlanError::ZeroSessions);
        }
        Ok(Self {
            focus,
            brk,
            total_sessions,
        })
    }

    pub fn focus_duration(&self) -> Duration {
        self.focus
    }

    pub fn break_duration(&self) -> Duration {
        self.brk
    }

    pub fn total_sessions(&self) -> u32 {
        self.total_sessions
    }

    /// Whole minutes credited to the statistics for one completed focus phase.
    pub fn focus_minutes(&self) -> u64 {
        self.focus.as_secs() / 60
    }
}

impl Default for SessionPlan {
    fn default() -> Self {
        Self {
            focus: Duration::from_secs(25 * 60),
            brk: Duration::from_secs(5 * 60),
            total_sessions: 3,
        }
    }
}

/// Snapshot of the engine's mutable core.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EngineState {
    pub mode: Mode,
    pub status: RunStatus,
    /// `0` while idle, otherwise the 1-based focus/break pair in progress.
    pub session: u32,
    pub phase_total: Duration,
    pub phase_remaining: Duration,
    pub completed_focus: u32,
}

impl EngineState {
    pub(super) fn idle(plan: &SessionPlan) -> Self {
        Self {
            mode: Mode::Idle,
            status: RunStatus::Stopped,
            session: 0,
            phase_total: plan.focus_duration(),
            phase_remaining: plan.focus_duration(),
            completed_focus: 0,
        }
    }

    /// `true` when time is advancing inside a focus phase.
    pub fn is_focusing(&self) -> bool {
        self.mode == Mode::Focus && self.status == RunStatus::Running
    }

    /// Fraction of the current phase already elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.mode == Mode::Idle || self.phase_total.is_zero() {
            return 0.0;
        }
        let elapsed = self.phase_total.saturating_sub(self.phase_remaining);
        (elapsed.as_secs_f64() / self.phase_total.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Remaining time as `MM:SS`.
    pub fn remaining_mmss(&self) -> String {
        let secs = self.phase_remaining.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

/// Events emitted by the engine, in chronological order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Idle -> Focus via `start`.
    Started,
    /// A phase of the given mode began.
    Entered(Mode),
    /// A phase ran out (or was skipped) during the given session.
    Completed { mode: Mode, session: u32 },
    Paused,
    Resumed,
    SessionRestarted,
    CycleReset,
    /// The last break of the cycle ended; the engine is idle again.
    CycleCompleted,
}
