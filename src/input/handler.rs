use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::PhasePicker => handle_picker_mode(app, key),
        UiMode::Cooking => handle_cooking_mode(app, key),
    }
}

/// Handle keys in the phase picker
fn handle_picker_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.picker_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.picker_down();
            Ok(false)
        }
        KeyCode::Enter => {
            app.enter_selected_phase();
            Ok(false)
        }
        KeyCode::Char('q') | KeyCode::Esc => Ok(true),
        _ => Ok(false),
    }
}

/// Handle keys in cooking mode
fn handle_cooking_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Step navigation
        KeyCode::Left | KeyCode::Char('h') => {
            app.session.retreat();
            Ok(false)
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.session.advance();
            Ok(false)
        }

        // Countdown: start, then pause/resume
        KeyCode::Char(' ') => {
            app.start_or_toggle_timer();
            Ok(false)
        }

        // Mark the step done/undone
        KeyCode::Char('c') => {
            app.session.toggle_completed();
            Ok(false)
        }

        // Back to the picker
        KeyCode::Esc => {
            app.leave_phase();
            Ok(false)
        }

        KeyCode::Char('q') => Ok(true),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{starter_plan, MemoryPlanStore, Settings};
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn test_app() -> AppState {
        let plan = starter_plan();
        let store = Box::new(MemoryPlanStore { plan: plan.clone() });
        AppState::new(plan, store, &Settings::default())
    }

    #[test]
    fn test_picker_enter_starts_cooking() {
        let mut app = test_app();
        let quit = handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert!(!quit);
        assert_eq!(app.ui_mode, UiMode::Cooking);
    }

    #[test]
    fn test_q_quits_from_both_modes() {
        let mut app = test_app();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))).unwrap());

        let mut app = test_app();
        app.enter_selected_phase();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn test_arrows_move_the_cursor() {
        let mut app = test_app();
        app.enter_selected_phase();

        handle_key(&mut app, press(KeyCode::Right)).unwrap();
        assert_eq!(app.session.position(), 1);

        handle_key(&mut app, press(KeyCode::Left)).unwrap();
        assert_eq!(app.session.position(), 0);

        // Retreat saturates at the first step
        handle_key(&mut app, press(KeyCode::Left)).unwrap();
        assert_eq!(app.session.position(), 0);
    }

    #[test]
    fn test_escape_returns_to_picker() {
        let mut app = test_app();
        app.enter_selected_phase();
        let quit = handle_key(&mut app, press(KeyCode::Esc)).unwrap();
        assert!(!quit);
        assert_eq!(app.ui_mode, UiMode::PhasePicker);
    }

    #[test]
    fn test_c_toggles_completion() {
        let mut app = test_app();
        app.enter_selected_phase();

        handle_key(&mut app, press(KeyCode::Char('c'))).unwrap();
        assert!(app.session.current_task().unwrap().completed);
    }
}
