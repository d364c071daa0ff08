pub mod keybindings;
pub mod layout;
pub mod phase_pane;
pub mod step_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use keybindings::render_keybindings;
use layout::create_layout;
use phase_pane::render_phase_pane;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use step_pane::render_step_pane;
use styles::{border_style, hint_style, time_label_style, title_style};

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area, app.ui_mode);
    render_header(f, app, layout.header_area);

    match app.ui_mode {
        UiMode::PhasePicker => render_phase_pane(f, app, layout.body_area),
        UiMode::Cooking => render_step_pane(f, app, layout.body_area),
    }
}

/// Header line: plan summary in the picker, phase summary while cooking
fn render_header(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let line = match app.ui_mode {
        UiMode::PhasePicker => {
            let plan = &app.plan;
            let mut spans = vec![Span::styled(
                format!("Week of {} ", plan.week_start),
                title_style(),
            )];
            let total = &plan.batch_cooking_plan.total_duration;
            if !total.is_empty() {
                spans.push(Span::styled(format!("· {} total ", total), hint_style()));
            }
            spans.push(Span::styled(
                format!(
                    "· {} phases",
                    plan.batch_cooking_plan.phases.len()
                ),
                hint_style(),
            ));
            Line::from(spans)
        }
        UiMode::Cooking => {
            let mut spans = Vec::new();
            if let Some(phase) = app.session.phase() {
                spans.push(Span::styled(phase.phase_name.clone(), title_style()));
                spans.push(Span::raw("  "));
                spans.push(Span::styled(phase.time_span(), time_label_style()));
            }
            if app.session.step_count() > 0 {
                let shown = (app.session.position() + 1).min(app.session.step_count());
                spans.push(Span::styled(
                    format!("  · step {}/{}", shown, app.session.step_count()),
                    hint_style(),
                ));
            }
            if let Some(clock) = app.session.timer_display() {
                spans.push(Span::styled(format!("  · ⏲ {}", clock), time_label_style()));
            }
            if let Some(started) = app.started_at {
                spans.push(Span::styled(
                    format!("  · cooking since {}", started.format("%H:%M")),
                    hint_style(),
                ));
            }
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style()),
    );
    f.render_widget(paragraph, area);
}
