use crate::domain::{
    flatten_phase, task_at, task_at_mut, FlatStep, Phase, Task, TaskTimer,
};

/// Navigation position within the flattened step walk.
///
/// Advancing is deliberately uncapped: the position may run past the
/// last step, in which case there is simply no current task. Going
/// past the end and stepping back is how the cook finishes a phase
/// and reviews the final step. Retreating saturates at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepCursor {
    position: usize,
}

impl StepCursor {
    pub fn position(&self) -> usize {
        self.position
    }

    /// Index of the current step, when the position is in range
    pub fn current(&self, len: usize) -> Option<usize> {
        (self.position < len).then_some(self.position)
    }

    /// Move forward. Returns whether the position changed, which for
    /// advance is always: there is no upper clamp.
    pub fn advance(&mut self) -> bool {
        self.position += 1;
        true
    }

    /// Move backward, saturating at zero. Returns whether the
    /// position changed.
    pub fn retreat(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}

/// Whether the navigation buttons would do anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub at_start: bool,
    pub at_end: bool,
}

/// One phase-viewing session: the phase, its flattened walk, the
/// cursor, and the countdown for the step under the cursor.
///
/// The walk is derived exactly once per phase change through
/// [`CookSession::rebuild`]; nothing here recomputes it per render.
#[derive(Debug, Default)]
pub struct CookSession {
    phase: Option<Phase>,
    steps: Vec<FlatStep>,
    cursor: StepCursor,
    timer: TaskTimer,
}

impl CookSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the session at a different phase (or at nothing, which
    /// behaves like an empty phase). Re-derives the walk, puts the
    /// cursor back on the first step, and discards any countdown; a
    /// timer never survives the phase it was started in.
    pub fn rebuild(&mut self, phase: Option<Phase>) {
        self.steps = phase.as_ref().map(flatten_phase).unwrap_or_default();
        self.phase = phase;
        self.cursor.reset();
        self.timer.reset();
    }

    pub fn phase(&self) -> Option<&Phase> {
        self.phase.as_ref()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// The walk row under the cursor, if the cursor is in range
    pub fn current_step(&self) -> Option<FlatStep> {
        self.cursor
            .current(self.steps.len())
            .map(|i| self.steps[i])
    }

    /// The task under the cursor. Absence is a normal state (empty
    /// phase, or the cursor walked past the end), not an error.
    pub fn current_task(&self) -> Option<&Task> {
        let step = self.current_step()?;
        task_at(self.phase.as_ref()?, step.origin)
    }

    /// Move to the next step, discarding the countdown
    pub fn advance(&mut self) {
        if self.cursor.advance() {
            self.timer.reset();
        }
    }

    /// Move to the previous step. The countdown is discarded only
    /// when the position actually changes; retreating at the first
    /// step leaves everything alone.
    pub fn retreat(&mut self) {
        if self.cursor.retreat() {
            self.timer.reset();
        }
    }

    pub fn cursor_state(&self) -> CursorState {
        CursorState {
            at_start: self.cursor.position() == 0,
            at_end: self.current_step().is_none(),
        }
    }

    /// Start the countdown from the current task's timer duration.
    /// No-op when the task has no duration or a countdown already
    /// exists.
    pub fn start_timer(&mut self) {
        if let Some(duration) = self.current_task().and_then(|t| t.timer_duration) {
            self.timer.start(duration);
        }
    }

    pub fn toggle_timer(&mut self) {
        self.timer.toggle();
    }

    /// One elapsed second of wall clock, forwarded to the countdown
    pub fn tick_timer(&mut self) {
        self.timer.tick();
    }

    pub fn timer(&self) -> TaskTimer {
        self.timer
    }

    /// Clock text for the active countdown, if any
    pub fn timer_display(&self) -> Option<String> {
        self.timer.display()
    }

    /// Flip the completed flag of the task under the cursor through
    /// its origin in the phase structure. Returns the new flag, or
    /// `None` when there is no current task.
    pub fn toggle_completed(&mut self) -> Option<bool> {
        let step = self.current_step()?;
        let task = task_at_mut(self.phase.as_mut()?, step.origin)?;
        task.completed = !task.completed;
        Some(task.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::{ParallelGroup, ParallelTask, Section};
    use pretty_assertions::assert_eq;

    fn step(instruction: &str, timer: Option<u32>) -> Task {
        Task {
            time: "00:00".to_string(),
            instruction: instruction.to_string(),
            completed: false,
            priority: Default::default(),
            timer_duration: timer,
            media_url: None,
            ingredient_usage: Vec::new(),
        }
    }

    fn two_step_phase() -> Phase {
        Phase {
            phase_number: "1".to_string(),
            phase_name: "Test".to_string(),
            start_time: "00:00".to_string(),
            end_time: "00:30".to_string(),
            sections: vec![Section {
                section_name: "A".to_string(),
                tasks: vec![step("first", Some(120)), step("second", None)],
            }],
            parallel_groups: Vec::new(),
        }
    }

    #[test]
    fn test_cursor_retreat_saturates_at_zero() {
        let mut cursor = StepCursor::default();
        assert!(!cursor.retreat());
        assert_eq!(cursor.position(), 0);

        cursor.advance();
        assert!(cursor.retreat());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_cursor_advance_is_uncapped() {
        let mut cursor = StepCursor::default();
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.current(2), None);
    }

    #[test]
    fn test_navigation_scenario() {
        let mut session = CookSession::new();
        session.rebuild(Some(two_step_phase()));

        assert_eq!(session.step_count(), 2);
        assert_eq!(session.current_task().unwrap().instruction, "first");

        session.advance();
        assert_eq!(session.position(), 1);
        assert_eq!(session.current_task().unwrap().instruction, "second");

        session.advance();
        assert_eq!(session.position(), 2);
        assert!(session.current_task().is_none());

        // Past the end stays harmless
        session.advance();
        assert!(session.current_task().is_none());

        session.retreat();
        session.retreat();
        assert_eq!(session.current_task().unwrap().instruction, "second");
    }

    #[test]
    fn test_cursor_state_mirrors_nav_buttons() {
        let mut session = CookSession::new();
        session.rebuild(Some(two_step_phase()));

        assert_eq!(
            session.cursor_state(),
            CursorState { at_start: true, at_end: false }
        );

        session.advance();
        assert_eq!(
            session.cursor_state(),
            CursorState { at_start: false, at_end: false }
        );

        session.advance();
        assert_eq!(
            session.cursor_state(),
            CursorState { at_start: false, at_end: true }
        );
    }

    #[test]
    fn test_empty_session_is_at_start_and_end() {
        let session = CookSession::new();
        assert_eq!(session.step_count(), 0);
        assert!(session.current_task().is_none());
        assert_eq!(
            session.cursor_state(),
            CursorState { at_start: true, at_end: true }
        );
    }

    #[test]
    fn test_moving_discards_countdown() {
        let mut session = CookSession::new();
        session.rebuild(Some(two_step_phase()));

        session.start_timer();
        assert_eq!(session.timer_display().as_deref(), Some("2:00"));

        session.advance();
        assert!(session.timer().is_idle());
        assert_eq!(session.timer_display(), None);
    }

    #[test]
    fn test_retreat_at_start_keeps_countdown() {
        let mut session = CookSession::new();
        session.rebuild(Some(two_step_phase()));

        session.start_timer();
        session.retreat();
        assert!(session.timer().is_running());
    }

    #[test]
    fn test_rebuild_resets_cursor_and_timer() {
        let mut session = CookSession::new();
        session.rebuild(Some(two_step_phase()));
        session.advance();
        session.retreat();
        session.start_timer();

        session.rebuild(Some(two_step_phase()));
        assert_eq!(session.position(), 0);
        assert!(session.timer().is_idle());

        session.rebuild(None);
        assert_eq!(session.step_count(), 0);
        assert!(session.current_task().is_none());
    }

    #[test]
    fn test_start_timer_needs_a_duration() {
        let mut session = CookSession::new();
        session.rebuild(Some(two_step_phase()));

        session.advance();
        session.start_timer();
        assert!(session.timer().is_idle());
    }

    #[test]
    fn test_countdown_runs_down_and_freezes() {
        let mut session = CookSession::new();
        session.rebuild(Some(two_step_phase()));

        session.start_timer();
        for _ in 0..120 {
            session.tick_timer();
        }
        assert_eq!(session.timer_display().as_deref(), Some("0:00"));
        session.tick_timer();
        assert_eq!(session.timer_display().as_deref(), Some("0:00"));
        assert!(session.timer().is_running());
    }

    #[test]
    fn test_toggle_completed_through_parallel_origin() {
        let phase = Phase {
            phase_number: "2".to_string(),
            phase_name: "Cuissons".to_string(),
            start_time: "00:30".to_string(),
            end_time: "01:00".to_string(),
            sections: Vec::new(),
            parallel_groups: vec![ParallelGroup {
                group_name: "Feux".to_string(),
                tasks: vec![ParallelTask {
                    sub_phase: "Four".to_string(),
                    start_time: "00:30".to_string(),
                    end_time: "00:50".to_string(),
                    tasks: vec![step("enfourner", None)],
                }],
            }],
        };

        let mut session = CookSession::new();
        session.rebuild(Some(phase));

        assert_eq!(session.toggle_completed(), Some(true));
        assert!(session.current_task().unwrap().completed);
        assert_eq!(session.toggle_completed(), Some(false));

        session.advance();
        assert_eq!(session.toggle_completed(), None);
    }
}
