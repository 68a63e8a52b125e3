use crate::app::AppState;
use crate::domain::{flatten_tasks, status_glyph, created_label, Section, Task, UiMode};
use crate::ui::styles::{
    border_style, check_style, default_style, done_style, hint_style, pending_style,
    selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the pending or completed sublist
///
/// Rows are taken from the flattened list so the highlight lines up with
/// `AppState::selected_index` across both sections. The list is rendered
/// with a `ListState` so it scrolls to keep the selected row visible.
pub fn render_list_pane(f: &mut Frame, app: &AppState, section: Section, area: Rect) {
    let show_selection = app.ui_mode == UiMode::Normal;

    let rows: Vec<_> = flatten_tasks(&app.tasks)
        .into_iter()
        .filter(|row| row.section == section)
        .collect();

    let selected = if show_selection {
        rows.iter().position(|row| row.index == app.selected_index)
    } else {
        None
    };

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(create_task_line(&app.tasks[row.task_index])).style(default_style()))
        .collect();

    let title = format!(" {} ({}) ", section.title(), items.len());

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        )
        .highlight_style(selected_style());

    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut state);
}

/// Create a single line for a task
/// Format: ○ Buy milk  14:05
fn create_task_line(task: &Task) -> Line<'static> {
    let (glyph_style, text_style) = if task.completed {
        (check_style(), done_style())
    } else {
        (pending_style(), default_style())
    };

    Line::from(vec![
        Span::styled(format!("{} ", status_glyph(task)), glyph_style),
        Span::styled(task.text.clone(), text_style),
        Span::styled(format!("  {}", created_label(task)), hint_style()),
    ])
}
