use crate::app::AppState;
use crate::ui::styles::{header_style, hint_style};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the "Today" header with the pending-count message
pub fn render_header_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let date = Local::now().format("%a %b %d");

    let lines = vec![
        Line::from(vec![
            Span::styled(" Today", header_style()),
            Span::styled(format!("  {}", date), hint_style()),
        ]),
        Line::from(Span::styled(format!(" {}", app.pending_message()), hint_style())),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
