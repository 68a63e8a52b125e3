use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, focused_border_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Add a new task…";

/// Render the new-task input line
pub fn render_input_line(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.ui_mode == UiMode::Editing;

    let mut spans = vec![Span::raw("+ ")];
    if app.input.is_empty() && !focused {
        spans.push(Span::styled(PLACEHOLDER, hint_style()));
    } else {
        spans.push(Span::raw(app.input.as_str()));
    }
    if focused {
        spans.push(Span::styled("█", title_style())); // Cursor
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            focused_border_style()
        } else {
            border_style()
        });

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
