use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect, mode: UiMode) {
    let hints = match mode {
        UiMode::PhasePicker => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("Enter cook   "),
            Span::raw("q quit"),
        ]),
        UiMode::Cooking => Line::from(vec![
            Span::raw(" ←/→ step   "),
            Span::raw("Space timer   "),
            Span::raw("c done   "),
            Span::raw("Esc phases   "),
            Span::raw("q quit"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
