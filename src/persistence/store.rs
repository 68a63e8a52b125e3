use crate::domain::Task;
use crate::persistence::files::{atomic_write, read_file};
#[cfg(test)]
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
#[cfg(test)]
use std::rc::Rc;
use thiserror::Error;

/// Errors raised by a task store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0:#}")]
    Io(anyhow::Error),
    #[error("stored task list is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Backing storage for the task list
///
/// The whole list is the unit of persistence: `save` overwrites whatever
/// was stored before.
pub trait TaskStore {
    /// Read the raw serialized list, `None` if nothing has been stored yet
    fn read_raw(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored list with `raw`
    fn write_raw(&mut self, raw: &str) -> Result<(), StoreError>;

    /// Load and parse the stored list
    fn load(&self) -> Result<Option<Vec<Task>>, StoreError> {
        match self.read_raw()? {
            Some(raw) => Ok(Some(deserialize_tasks(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store the full list
    fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        let raw = serialize_tasks(tasks)?;
        self.write_raw(&raw)
    }
}

/// Serialize a task list to its stored JSON form
pub fn serialize_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tasks)
}

/// Parse a stored JSON task list
pub fn deserialize_tasks(raw: &str) -> Result<Vec<Task>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Load the stored list, falling back to an empty list when it is absent or unreadable
pub fn load_or_default(store: &dyn TaskStore) -> Vec<Task> {
    match store.load() {
        Ok(Some(tasks)) => {
            log::info!("loaded {} tasks", tasks.len());
            tasks
        }
        Ok(None) => {
            log::info!("no stored task list, starting empty");
            Vec::new()
        }
        Err(e) => {
            log::warn!("ignoring stored task list: {}", e);
            Vec::new()
        }
    }
}

/// Task store backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for FileStore {
    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        read_file(&self.path).map_err(StoreError::Io)
    }

    fn write_raw(&mut self, raw: &str) -> Result<(), StoreError> {
        atomic_write(&self.path, raw).map_err(StoreError::Io)
    }
}

/// In-memory task store
///
/// Clones share the same backing slot, so a test can keep a handle and
/// inspect what the app wrote.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
    writes: Rc<Cell<usize>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw content
    pub fn with_raw(raw: &str) -> Self {
        let store = Self::default();
        *store.slot.borrow_mut() = Some(raw.to_string());
        store
    }

    /// Current raw content
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Number of writes performed
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl TaskStore for MemoryStore {
    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.borrow().clone())
    }

    fn write_raw(&mut self, raw: &str) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(raw.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
