pub mod enums;
pub mod task;
pub mod views;

pub use enums::{Section, UiMode};
pub use task::Task;
pub use views::{
    created_label, flatten_tasks, pending_count, pending_message, split_tasks, status_glyph,
};
