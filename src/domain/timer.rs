use std::time::Instant;
use uuid::Uuid;

/// Stopwatch phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchPhase {
    Idle,
    Running,
}

/// Result of a completed run, to be fed into the task store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accrual {
    pub task_id: Uuid,
    pub seconds: u64,
}

/// Manual stopwatch scoped to one selected task.
///
/// The visible counter is a display value recomputed from the start
/// instant on every tick; it is distinct from the task's accumulated
/// `time_spent` and is thrown away when a run is abandoned without an
/// explicit stop.
#[derive(Debug)]
pub struct Stopwatch {
    phase: StopwatchPhase,
    selected: Option<Uuid>,
    started_at: Option<Instant>,
    display_secs: u64,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            phase: StopwatchPhase::Idle,
            selected: None,
            started_at: None,
            display_secs: 0,
        }
    }

    pub fn phase(&self) -> StopwatchPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == StopwatchPhase::Running
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    /// Change the selected task. Ignored while a run is in progress so
    /// the accrual target cannot change mid-run.
    pub fn select(&mut self, id: Option<Uuid>) {
        if self.phase == StopwatchPhase::Idle {
            self.selected = id;
        }
    }

    /// Start a run. No-op without a selection or while already running.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        if self.phase != StopwatchPhase::Idle || self.selected.is_none() {
            return;
        }
        self.phase = StopwatchPhase::Running;
        self.started_at = Some(now);
        self.display_secs = 0;
    }

    /// Stop the run and hand back the elapsed whole seconds for the
    /// selected task. Returns None (and changes nothing) when no run is
    /// in progress. The visible counter resets to 0.
    pub fn stop(&mut self) -> Option<Accrual> {
        self.stop_at(Instant::now())
    }

    pub fn stop_at(&mut self, now: Instant) -> Option<Accrual> {
        if self.phase != StopwatchPhase::Running {
            return None;
        }
        let task_id = self.selected?;
        let started = self.started_at.take()?;

        self.phase = StopwatchPhase::Idle;
        self.display_secs = 0;

        let seconds = now.saturating_duration_since(started).as_secs();
        Some(Accrual { task_id, seconds })
    }

    /// Clear the visible counter. Only honored while Idle; never touches
    /// accumulated task time.
    pub fn reset(&mut self) {
        if self.phase == StopwatchPhase::Idle {
            self.display_secs = 0;
        }
    }

    /// Discard an in-progress run without accruing, used when the timer
    /// view is torn down.
    pub fn abandon(&mut self) {
        self.phase = StopwatchPhase::Idle;
        self.started_at = None;
        self.display_secs = 0;
    }

    /// Refresh the visible counter from the start instant. Does nothing
    /// unless a run is in progress.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self.phase != StopwatchPhase::Running {
            return;
        }
        if let Some(started) = self.started_at {
            self.display_secs = now.saturating_duration_since(started).as_secs();
        }
    }

    pub fn display_secs(&self) -> u64 {
        self.display_secs
    }

    /// Visible counter as HH:MM:SS
    pub fn display_formatted(&self) -> String {
        let hours = self.display_secs / 3600;
        let minutes = (self.display_secs % 3600) / 60;
        let seconds = self.display_secs % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}
