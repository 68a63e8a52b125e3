use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Header title style
pub fn header_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Border style for the focused input line
pub fn focused_border_style() -> Style {
    Style::default().fg(Color::LightCyan)
}

/// Keybinding hints and secondary text
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Pending checkbox glyph
pub fn pending_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Completed task style (struck through)
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Completed checkbox glyph
pub fn check_style() -> Style {
    Style::default().fg(Color::Green)
}
