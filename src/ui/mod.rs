pub mod header_pane;
pub mod input_line;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod plain;
pub mod styles;

use crate::app::AppState;
use crate::domain::{split_tasks, Section};
use header_pane::render_header_pane;
use input_line::render_input_line;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let (_, completed) = split_tasks(&app.tasks);
    let layout = create_layout(size, completed.len());

    render_keybindings(f, app.ui_mode, layout.keybindings_area);
    render_header_pane(f, app, layout.header_area);
    render_input_line(f, app, layout.input_area);
    render_list_pane(f, app, Section::Pending, layout.pending_area);

    // Completed list only when something is completed
    if let Some(completed_area) = layout.completed_area {
        render_list_pane(f, app, Section::Completed, completed_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_empty_list() {
        let app = AppState::load(Box::new(MemoryStore::new()));
        let screen = render_to_string(&app);

        assert!(screen.contains("Today"));
        assert!(screen.contains("All done"));
        assert!(screen.contains("Pending (0)"));
        assert!(!screen.contains("Completed"));
    }

    #[test]
    fn test_render_pending_and_completed() {
        let mut app = AppState::load(Box::new(MemoryStore::new()));
        app.add_task("Buy milk").unwrap();
        app.add_task("Call mom").unwrap();
        app.add_task("Pay rent").unwrap();
        let id = app.tasks[2].id.clone();
        app.toggle_task(&id).unwrap();

        let screen = render_to_string(&app);

        assert!(screen.contains("2 tasks remaining"));
        assert!(screen.contains("Pending (2)"));
        assert!(screen.contains("Completed (1)"));
        assert!(screen.contains("Call mom"));
        assert!(screen.contains("Buy milk"));
    }

    #[test]
    fn test_render_singular_message() {
        let mut app = AppState::load(Box::new(MemoryStore::new()));
        app.add_task("Buy milk").unwrap();

        let screen = render_to_string(&app);
        assert!(screen.contains("1 task remaining"));
    }

    #[test]
    fn test_render_scrolls_to_last_completed() {
        let mut app = AppState::load(Box::new(MemoryStore::new()));
        for i in 0..12 {
            app.add_task(&format!("done{:02}", i)).unwrap();
        }
        let ids: Vec<String> = app.tasks.iter().map(|t| t.id.clone()).collect();
        for id in &ids {
            app.toggle_task(id).unwrap();
        }

        app.focus_list();
        for _ in 0..20 {
            app.move_selection_down();
        }
        assert_eq!(app.selected_index, 11);
        // Newest first, so the last row is the first task added
        assert_eq!(app.selected_task_id(), Some(app.tasks[11].id.clone()));

        let screen = render_to_string(&app);
        assert!(screen.contains("Completed (12)"));
        assert!(screen.contains("done00"));
    }

    #[test]
    fn test_render_scrolls_to_last_pending() {
        let mut app = AppState::load(Box::new(MemoryStore::new()));
        for i in 0..40 {
            app.add_task(&format!("task{:02}", i)).unwrap();
        }

        let screen = render_to_string(&app);
        assert!(screen.contains("task39"));
        assert!(!screen.contains("task00"));

        app.focus_list();
        app.selected_index = 39;
        let screen = render_to_string(&app);
        assert!(screen.contains("task00"));
    }
}
