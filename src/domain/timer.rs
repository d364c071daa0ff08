/// Countdown state for the step under the cursor.
///
/// One countdown exists at a time and it belongs to the current step:
/// moving the cursor or rebuilding the walk resets it to `Idle`.
/// Reaching zero freezes the display at "0:00" rather than returning
/// to `Idle`, so the cook sees that the countdown ran out until they
/// move on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskTimer {
    #[default]
    Idle,
    Running {
        remaining: u32,
    },
    Paused {
        remaining: u32,
    },
}

impl TaskTimer {
    /// Begin a countdown. Only valid from `Idle`; an existing
    /// countdown is never restarted, matching the UI that offers
    /// "start" only before a timer exists for the step.
    pub fn start(&mut self, duration_secs: u32) {
        if matches!(self, TaskTimer::Idle) {
            *self = TaskTimer::Running {
                remaining: duration_secs,
            };
        }
    }

    /// Flip between running and paused without touching the
    /// remaining time. No-op from `Idle`.
    pub fn toggle(&mut self) {
        *self = match *self {
            TaskTimer::Running { remaining } => TaskTimer::Paused { remaining },
            TaskTimer::Paused { remaining } => TaskTimer::Running { remaining },
            TaskTimer::Idle => TaskTimer::Idle,
        };
    }

    /// One elapsed second of wall clock. Counts down only while
    /// running, floored at zero.
    pub fn tick(&mut self) {
        if let TaskTimer::Running { remaining } = self {
            *remaining = remaining.saturating_sub(1);
        }
    }

    /// Discard the countdown
    pub fn reset(&mut self) {
        *self = TaskTimer::Idle;
    }

    /// Remaining seconds, if a countdown exists
    pub fn remaining(&self) -> Option<u32> {
        match self {
            TaskTimer::Idle => None,
            TaskTimer::Running { remaining } | TaskTimer::Paused { remaining } => {
                Some(*remaining)
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, TaskTimer::Idle)
    }

    pub fn is_running(&self) -> bool {
        matches!(self, TaskTimer::Running { .. })
    }

    /// Clock text for the countdown, if one exists
    pub fn display(&self) -> Option<String> {
        self.remaining().map(format_clock)
    }
}

/// Format seconds as "m:ss" ("0:00", "1:05", "10:00")
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
