mod enums;
mod task;
mod views;

pub use enums::{TaskStatus, UiMode};
pub use task::{Task, TaskDraft, ValidTask, ValidationError, DATE_FORMAT};
pub use views::{matches_query, visible_rows};
