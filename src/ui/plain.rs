use crate::domain::{pending_message, split_tasks, status_glyph, Task};

/// Render the task list as plain text for non-interactive output
pub fn format_plain(tasks: &[Task]) -> String {
    let (pending, completed) = split_tasks(tasks);
    let task_line = |task: &Task| format!("  {} {}", status_glyph(task), task.text);

    let mut lines = vec!["Today".to_string(), pending_message(pending.len())];

    if !pending.is_empty() {
        lines.push(String::new());
        lines.extend(pending.iter().map(|t| task_line(*t)));
    }

    if !completed.is_empty() {
        lines.push(String::new());
        lines.push("Completed".to_string());
        lines.extend(completed.iter().map(|t| task_line(*t)));
    }

    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_plain_empty() {
        let out = format_plain(&[]);
        assert_eq!(out, "Today\nAll done — enjoy your day ✨\n");
    }

    #[test]
    fn test_format_plain_sections() {
        let mut rent = Task::new("Pay rent").unwrap();
        rent.completed = true;
        let tasks = vec![Task::new("Call mom").unwrap(), rent, Task::new("Buy milk").unwrap()];

        let out = format_plain(&tasks);
        assert_eq!(
            out,
            "Today\n2 tasks remaining\n\n  ○ Call mom\n  ○ Buy milk\n\nCompleted\n  ✓ Pay rent\n"
        );
    }

    #[test]
    fn test_format_plain_only_completed() {
        let mut task = Task::new("Pay rent").unwrap();
        task.completed = true;

        let out = format_plain(&[task]);
        assert_eq!(
            out,
            "Today\nAll done — enjoy your day ✨\n\nCompleted\n  ✓ Pay rent\n"
        );
    }
}
