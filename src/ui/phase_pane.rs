use crate::app::AppState;
use crate::domain::flatten_phase;
use crate::ui::styles::{border_style, default_style, selected_style, time_label_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the phase picker list
pub fn render_phase_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .phases()
        .iter()
        .enumerate()
        .map(|(idx, phase)| {
            let step_count = flatten_phase(phase).len();
            let steps_label = if step_count == 1 {
                "1 step".to_string()
            } else {
                format!("{} steps", step_count)
            };

            let style = if idx == app.phase_index {
                selected_style()
            } else {
                default_style()
            };

            let line = Line::from(vec![
                Span::styled(
                    format!(" {}. {} ", phase.phase_number, phase.phase_name),
                    style,
                ),
                Span::styled(format!("({}) ", phase.time_span()), time_label_style()),
                Span::raw(steps_label),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Phases ", title_style())),
    );

    f.render_widget(list, area);
}
