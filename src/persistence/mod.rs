pub mod files;
pub mod store;

pub use files::{ensure_dir, get_data_dir, init_local_data_dir, log_dir, tasks_file};
pub use store::{load_or_default, FileStore, TaskStore};

#[cfg(test)]
pub use store::{deserialize_tasks, MemoryStore};
