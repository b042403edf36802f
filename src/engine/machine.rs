use std::time::Duration;

use super::model::{EngineState, Mode, RunStatus, SessionPlan, Transition};

/// Mode + run-status state machine driven by commands and time deltas.
///
/// The engine performs no I/O and never fails: commands issued in a state
/// where they make no sense are silent no-ops that return no transitions.
#[derive(Debug, Clone)]
pub struct PomodoroEngine {
    plan: SessionPlan,
    state: EngineState,
}

impl PomodoroEngine {
    pub fn new(plan: SessionPlan) -> Self {
        Self {
            plan,
            state: EngineState::idle(&plan),
        }
    }

    pub fn plan(&self) -> &SessionPlan {
        &self.plan
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn status(&self) -> RunStatus {
        self.state.status
    }

    /// Begin a cycle from idle. Outside idle this only un-pauses.
    pub fn start(&mut self) -> Vec<Transition> {
        match self.state.status {
            RunStatus::Stopped => {
                self.state.mode = Mode::Focus;
                self.state.session = 1;
                self.state.phase_total = self.plan.focus_duration();
                self.state.phase_remaining = self.plan.focus_duration();
                self.state.status = RunStatus::Running;
                vec![Transition::Entered(Mode::Focus), Transition::Started]
            }
            RunStatus::Paused => self.resume(),
            RunStatus::Running => Vec::new(),
        }
    }

    pub fn pause(&mut self) -> Vec<Transition> {
        if self.state.status != RunStatus::Running {
            return Vec::new();
        }
        self.state.status = RunStatus::Paused;
        vec![Transition::Paused]
    }

    pub fn resume(&mut self) -> Vec<Transition> {
        if self.state.status != RunStatus::Paused {
            return Vec::new();
        }
        self.state.status = RunStatus::Running;
        vec![Transition::Resumed]
    }

    /// Rewind the current phase to its full length without touching counters.
    pub fn reset_session(&mut self) -> Vec<Transition> {
        if self.state.mode == Mode::Idle {
            return Vec::new();
        }
        self.state.phase_remaining = self.state.phase_total;
        vec![Transition::SessionRestarted]
    }

    /// Return to idle and forget all progress in the cycle.
    pub fn reset_cycle(&mut self) -> Vec<Transition> {
        self.state = EngineState::idle(&self.plan);
        vec![Transition::CycleReset]
    }

    /// End the current phase immediately, keeping the run status.
    pub fn skip(&mut self) -> Vec<Transition> {
        let mut out = Vec::new();
        if matches!(self.state.status, RunStatus::Running | RunStatus::Paused) {
            self.expire(&mut out);
        }
        out
    }

    /// Advance time by `delta`, carrying any overflow into following phases.
    pub fn tick(&mut self, delta: Duration) -> Vec<Transition> {
        let mut out = Vec::new();
        let mut left = delta;
        // A phase whose remaining time reaches exactly zero counts as expired.
        while self.state.status == RunStatus::Running && left >= self.state.phase_remaining {
            left -= self.state.phase_remaining;
            self.state.phase_remaining = Duration::ZERO;
            self.expire(&mut out);
        }
        if self.state.status == RunStatus::Running {
            self.state.phase_remaining -= left;
        }
        out
    }

    fn expire(&mut self, out: &mut Vec<Transition>) {
        match self.state.mode {
            Mode::Focus => {
                self.state.completed_focus += 1;
                self.state.mode = Mode::Break;
                self.state.phase_total = self.plan.break_duration();
                self.state.phase_remaining = self.plan.break_duration();
                out.push(Transition::Completed {
                    mode: Mode::Focus,
                    session: self.state.session,
                });
                out.push(Transition::Entered(Mode::Break));
            }
            Mode::Break if self.state.session >= self.plan.total_sessions() => {
                self.state = EngineState::idle(&self.plan);
                out.push(Transition::CycleCompleted);
            }
            Mode::Break => {
                let finished = self.state.session;
                self.state.session += 1;
                self.state.mode = Mode::Focus;
                self.state.phase_total = self.plan.focus_duration();
                self.state.phase_remaining = self.plan.focus_duration();
                out.push(Transition::Completed {
                    mode: Mode::Break,
                    session: finished,
                });
                out.push(Transition::Entered(Mode::Focus));
            }
            Mode::Idle => {}
        }
    }
}

impl Default for PomodoroEngine {
    fn default() -> Self {
        Self::new(SessionPlan::default())
    }
}
