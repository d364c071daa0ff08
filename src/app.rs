use crate::domain::{Phase, UiMode, WeeklyPlan};
use crate::session::CookSession;
use crate::store::{PlanStore, Settings};
use crate::ticker::TIMER_TICK;
use chrono::{DateTime, Local};
use std::time::Instant;

/// Main application state
pub struct AppState {
    pub plan: WeeklyPlan,
    /// Plan provider the cooking session fetches phases through
    store: Box<dyn PlanStore>,
    /// The active phase-viewing session (empty until a phase is entered)
    pub session: CookSession,
    pub ui_mode: UiMode,
    /// Picker selection in the plan's phase list
    pub phase_index: usize,
    pub use_emoji: bool,
    /// When the current cooking session was entered
    pub started_at: Option<DateTime<Local>>,
    /// Baseline for converting wall clock into whole countdown seconds
    last_timer_tick: Instant,
}

impl AppState {
    pub fn new(plan: WeeklyPlan, store: Box<dyn PlanStore>, settings: &Settings) -> Self {
        Self {
            plan,
            store,
            session: CookSession::new(),
            ui_mode: UiMode::PhasePicker,
            phase_index: 0,
            use_emoji: settings.use_emoji,
            started_at: None,
            last_timer_tick: Instant::now(),
        }
    }

    pub fn phases(&self) -> &[Phase] {
        &self.plan.batch_cooking_plan.phases
    }

    /// The phase currently highlighted in the picker
    pub fn selected_phase(&self) -> Option<&Phase> {
        self.phases().get(self.phase_index)
    }

    /// Move picker selection up
    pub fn picker_up(&mut self) {
        if self.phase_index > 0 {
            self.phase_index -= 1;
        }
    }

    /// Move picker selection down
    pub fn picker_down(&mut self) {
        if self.phase_index + 1 < self.phases().len() {
            self.phase_index += 1;
        }
    }

    /// Enter cooking mode on the highlighted phase, fetching it
    /// through the plan provider. This is the one place the walk is
    /// rebuilt: phase identity changed. A fetch failure renders like
    /// an empty phase (nothing navigable) rather than an error.
    pub fn enter_selected_phase(&mut self) {
        let Some(number) = self.selected_phase().map(|p| p.phase_number.clone()) else {
            return;
        };
        let phase = self.store.fetch_phase(None, &number).unwrap_or(None);
        self.session.rebuild(phase);
        self.ui_mode = UiMode::Cooking;
        self.started_at = Some(Local::now());
        self.last_timer_tick = Instant::now();
    }

    /// Back to the picker. Tears the session down so no countdown
    /// outlives the phase it belonged to.
    pub fn leave_phase(&mut self) {
        self.session.rebuild(None);
        self.ui_mode = UiMode::PhasePicker;
        self.started_at = None;
    }

    /// Space bar: start a countdown if the step has none yet,
    /// otherwise pause/resume the existing one.
    pub fn start_or_toggle_timer(&mut self) {
        if self.session.timer().is_idle() {
            self.session.start_timer();
        } else {
            self.session.toggle_timer();
        }
        // Fresh baseline so the first counted second is a full one
        self.last_timer_tick = Instant::now();
    }

    /// Drive the countdown from the event loop. Converts elapsed wall
    /// clock into whole seconds; the loop polls faster than once a
    /// second, so at most one tick fires per pass in practice.
    pub fn tick(&mut self) {
        if !self.session.timer().is_running() {
            // Nothing counting down; keep the baseline fresh so a
            // later resume does not replay idle seconds.
            self.last_timer_tick = Instant::now();
            return;
        }

        while self.last_timer_tick.elapsed() >= TIMER_TICK {
            self.last_timer_tick += TIMER_TICK;
            self.session.tick_timer();
        }
    }
}
