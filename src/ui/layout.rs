use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub input_area: Rect,
    pub pending_area: Rect,
    pub completed_area: Option<Rect>,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Header: title and pending message (2 rows)
/// - Input line (3 rows, bordered)
/// - Pending list, then the completed list when there is anything completed
pub fn create_layout(area: Rect, completed_count: usize) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(2), // Header
            Constraint::Length(3), // Input
            Constraint::Min(0),    // Lists
        ])
        .split(area);

    let lists_area = main_chunks[3];

    let (pending_area, completed_area) = if completed_count > 0 {
        // Completed list gets its rows plus borders, capped at 40% of the space
        let max_completed = (lists_area.height as usize * 40 / 100).max(3);
        let completed_height = (completed_count + 2).min(max_completed) as u16;

        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(completed_height),
            ])
            .split(lists_area);
        (split[0], Some(split[1]))
    } else {
        (lists_area, None)
    };

    MainLayout {
        keybindings_area: main_chunks[0],
        header_area: main_chunks[1],
        input_area: main_chunks[2],
        pending_area,
        completed_area,
    }
}
