use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry
///
/// Serialized with camelCase field names so the stored list reads
/// `{"id", "text", "completed", "createdAt"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier (a v4 UUID for tasks created here)
    pub id: String,
    /// Task text, already trimmed
    pub text: String,
    /// Whether the task has been completed
    pub completed: bool,
    /// Creation time in milliseconds since the Unix epoch
    pub created_at: i64,
}

impl Task {
    /// Create a new pending task stamped with the current time.
    ///
    /// Returns `None` when `text` is empty or whitespace-only.
    pub fn new(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            completed: false,
            created_at: Utc::now().timestamp_millis(),
        })
    }

    /// Flip the completed flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Creation time in local time, if the stored timestamp is representable
    pub fn created_local(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.created_at).single()
    }
}
