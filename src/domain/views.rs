use super::enums::Section;
use super::task::Task;

/// A flattened row for rendering the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    /// Index in the flattened list
    pub index: usize,
    /// Sublist this row belongs to
    pub section: Section,
    /// Index into the tasks array
    pub task_index: usize,
}

/// Split tasks into pending and completed, preserving list order within each
pub fn split_tasks(tasks: &[Task]) -> (Vec<&Task>, Vec<&Task>) {
    tasks.iter().partition(|t| !t.completed)
}

/// Flatten the list into render order: every pending task, then every completed one
pub fn flatten_tasks(tasks: &[Task]) -> Vec<FlatRow> {
    let pending = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.completed);
    let completed = tasks.iter().enumerate().filter(|(_, t)| t.completed);

    pending
        .chain(completed)
        .enumerate()
        .map(|(index, (task_index, task))| FlatRow {
            index,
            section: Section::of(task.completed),
            task_index,
        })
        .collect()
}

/// Number of tasks not yet completed
pub fn pending_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

/// Header message for the given number of pending tasks
pub fn pending_message(count: usize) -> String {
    match count {
        0 => "All done — enjoy your day ✨".to_string(),
        1 => "1 task remaining".to_string(),
        n => format!("{} tasks remaining", n),
    }
}

/// Checkbox glyph for a task
pub fn status_glyph(task: &Task) -> &'static str {
    if task.completed {
        "✓"
    } else {
        "○"
    }
}

/// Short creation label: "HH:MM" for today, "Mon DD" otherwise
pub fn created_label(task: &Task) -> String {
    match task.created_local() {
        Some(created) => {
            let today = chrono::Local::now().date_naive();
            if created.date_naive() == today {
                created.format("%H:%M").to_string()
            } else {
                created.format("%b %d").to_string()
            }
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_task(text: &str, completed: bool) -> Task {
        let mut task = Task::new(text).unwrap();
        task.completed = completed;
        task
    }

    #[test]
    fn test_split_tasks_preserves_order() {
        let tasks = vec![
            create_test_task("a", false),
            create_test_task("b", true),
            create_test_task("c", false),
            create_test_task("d", true),
        ];

        let (pending, completed) = split_tasks(&tasks);
        let pending: Vec<&str> = pending.iter().map(|t| t.text.as_str()).collect();
        let completed: Vec<&str> = completed.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(pending, vec!["a", "c"]);
        assert_eq!(completed, vec!["b", "d"]);
    }

    #[test]
    fn test_flatten_tasks_pending_first() {
        let tasks = vec![
            create_test_task("a", true),
            create_test_task("b", false),
            create_test_task("c", true),
        ];

        let rows = flatten_tasks(&tasks);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            FlatRow { index: 0, section: Section::Pending, task_index: 1 }
        );
        assert_eq!(
            rows[1],
            FlatRow { index: 1, section: Section::Completed, task_index: 0 }
        );
        assert_eq!(
            rows[2],
            FlatRow { index: 2, section: Section::Completed, task_index: 2 }
        );
    }

    #[test]
    fn test_flatten_tasks_empty() {
        assert!(flatten_tasks(&[]).is_empty());
    }

    #[test]
    fn test_pending_count() {
        let tasks = vec![
            create_test_task("a", false),
            create_test_task("b", true),
            create_test_task("c", false),
        ];
        assert_eq!(pending_count(&tasks), 2);
    }

    #[test]
    fn test_pending_message() {
        assert!(pending_message(0).starts_with("All done"));
        assert_eq!(pending_message(1), "1 task remaining");
        assert_eq!(pending_message(2), "2 tasks remaining");
        assert_eq!(pending_message(11), "11 tasks remaining");
    }

    #[test]
    fn test_status_glyph() {
        assert_eq!(status_glyph(&create_test_task("a", false)), "○");
        assert_eq!(status_glyph(&create_test_task("a", true)), "✓");
    }

    #[test]
    fn test_created_label_today() {
        let task = create_test_task("a", false);
        let label = created_label(&task);
        assert_eq!(label.len(), 5);
        assert_eq!(label.chars().nth(2), Some(':'));
    }
}
