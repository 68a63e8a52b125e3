/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Navigating the task list
    Normal,
    /// Typing into the new-task input line
    Editing,
}

/// Sublist a task is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Pending,
    Completed,
}

impl Section {
    /// Section a task with the given completed flag belongs to
    pub fn of(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::Pending
        }
    }

    /// Heading shown above the sublist
    pub fn title(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}
