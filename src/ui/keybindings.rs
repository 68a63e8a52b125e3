use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints for the given focus mode
pub fn hints(mode: UiMode) -> Line<'static> {
    match mode {
        UiMode::Editing => Line::from(vec![
            Span::raw(" Enter add   "),
            Span::raw("Ctrl+U clear   "),
            Span::raw("Esc/Tab list   "),
            Span::raw("Ctrl+C quit"),
        ]),
        UiMode::Normal => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("Space toggle   "),
            Span::raw("d delete   "),
            Span::raw("a add   "),
            Span::raw("q quit"),
        ]),
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let paragraph = Paragraph::new(hints(mode)).style(hint_style());
    f.render_widget(paragraph, area);
}
