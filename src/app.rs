use crate::domain::{flatten_tasks, pending_count, pending_message, Task, UiMode};
use crate::persistence::{load_or_default, TaskStore};
use anyhow::Result;

/// Main application state
///
/// Owns the task list together with the store it is persisted to. Every
/// operation that changes the list writes the full list back before
/// returning.
pub struct AppState {
    pub tasks: Vec<Task>,
    pub input: String,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    store: Box<dyn TaskStore>,
}

impl AppState {
    /// Load the task list from `store`, starting empty if nothing usable is stored
    pub fn load(store: Box<dyn TaskStore>) -> Self {
        let tasks = load_or_default(&*store);

        Self {
            tasks,
            input: String::new(),
            selected_index: 0,
            ui_mode: UiMode::Editing,
            store,
        }
    }

    /// Write the full task list to the store
    pub fn save(&mut self) -> Result<()> {
        if let Err(e) = self.store.save(&self.tasks) {
            log::error!("failed to save task list: {}", e);
            return Err(e.into());
        }
        Ok(())
    }

    /// Prepend a new task. Returns false (and changes nothing) for blank text.
    pub fn add_task(&mut self, text: &str) -> Result<bool> {
        let Some(task) = Task::new(text) else {
            return Ok(false);
        };

        log::debug!("add task id={}", task.id);
        self.tasks.insert(0, task);
        self.save()?;
        Ok(true)
    }

    /// Flip the completed flag of the task with `id`. Returns false if no such task.
    pub fn toggle_task(&mut self, id: &str) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };

        task.toggle();
        log::debug!("toggle task id={} completed={}", id, task.completed);
        self.save()?;
        Ok(true)
    }

    /// Remove the task with `id`. Returns false if no such task.
    pub fn delete_task(&mut self, id: &str) -> Result<bool> {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };

        self.tasks.remove(pos);
        log::debug!("delete task id={}", id);
        self.clamp_selection();
        self.save()?;
        Ok(true)
    }

    /// Header message for the current pending count
    pub fn pending_message(&self) -> String {
        pending_message(pending_count(&self.tasks))
    }

    /// Submit the input line as a new task
    ///
    /// On success the line is cleared and focus returns to the input.
    pub fn submit_input(&mut self) -> Result<()> {
        let text = self.input.clone();
        if self.add_task(&text)? {
            self.input.clear();
            self.ui_mode = UiMode::Editing;
        }
        Ok(())
    }

    /// Append a character to the input line
    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Delete the last character of the input line
    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Clear the input line
    pub fn input_clear(&mut self) {
        self.input.clear();
    }

    /// Give focus to the input line
    pub fn focus_input(&mut self) {
        self.ui_mode = UiMode::Editing;
    }

    /// Give focus to the task list
    pub fn focus_list(&mut self) {
        self.ui_mode = UiMode::Normal;
        self.clamp_selection();
    }

    /// Id of the task under the selection, in render order
    pub fn selected_task_id(&self) -> Option<String> {
        let rows = flatten_tasks(&self.tasks);
        rows.get(self.selected_index)
            .map(|row| self.tasks[row.task_index].id.clone())
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    /// Toggle the selected task, keeping it selected in its new section
    pub fn toggle_selected(&mut self) -> Result<()> {
        if let Some(id) = self.selected_task_id() {
            self.toggle_task(&id)?;
            if let Some(row) = flatten_tasks(&self.tasks)
                .iter()
                .find(|row| self.tasks[row.task_index].id == id)
            {
                self.selected_index = row.index;
            }
        }
        Ok(())
    }

    /// Delete the selected task
    pub fn delete_selected(&mut self) -> Result<()> {
        if let Some(id) = self.selected_task_id() {
            self.delete_task(&id)?;
        }
        Ok(())
    }

    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len() - 1;
        }
    }
}
