use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightGreen)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Clock-label style for step times ("00:20")
pub fn time_label_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Active countdown style
pub fn timer_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Countdown that ran out (frozen at 0:00)
pub fn timer_done_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Paused countdown style
pub fn timer_paused_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// High-priority step warning style
pub fn priority_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Completed step style
pub fn completed_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Ingredient reference style
pub fn ingredient_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Media link style
pub fn media_style() -> Style {
    Style::default().fg(Color::Blue)
}
