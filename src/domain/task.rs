use super::enums::TaskStatus;
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Date format used by the form's date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation failure for a submitted form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingField,
    #[error("Invalid {field} date (expected YYYY-MM-DD).")]
    InvalidDate { field: &'static str },
    #[error("End date must be after the start date.")]
    EndNotAfterStart,
}

/// A task row: the id-keyed record the table is rendered from
#[derive(Debug, Clone)]
pub struct Task {
    /// Unique ID for internal references
    pub id: Uuid,
    /// Task name
    pub name: String,
    /// Free-text subtasks, in entry order
    pub subtasks: Vec<String>,
    /// First day of the task's window
    pub start_date: NaiveDate,
    /// Last day of the task's window (always after start_date)
    pub end_date: NaiveDate,
    /// Current status
    pub status: TaskStatus,
}

impl Task {
    pub fn new(
        name: String,
        subtasks: Vec<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: TaskStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            subtasks,
            start_date,
            end_date,
            status,
        }
    }

    /// Subtasks column text, joined by ", "
    pub fn subtasks_joined(&self) -> String {
        self.subtasks.join(", ")
    }

    /// Start column text
    pub fn start_display(&self) -> String {
        self.start_date.format(DATE_FORMAT).to_string()
    }

    /// End column text
    pub fn end_display(&self) -> String {
        self.end_date.format(DATE_FORMAT).to_string()
    }
}

/// Raw form field values, validated into a `Task` at submit time.
/// Dates arrive as text because the form edits them as text.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub name: String,
    pub subtasks: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub status: Option<TaskStatus>,
}

impl TaskDraft {
    /// Validate the draft. Blank subtask entries are dropped; every other
    /// failure aborts with no partial result.
    pub fn validate(&self) -> Result<ValidTask, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() || self.start_date.trim().is_empty() || self.end_date.trim().is_empty() {
            return Err(ValidationError::MissingField);
        }
        let status = self.status.ok_or(ValidationError::MissingField)?;

        let start_date = NaiveDate::parse_from_str(self.start_date.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate { field: "start" })?;
        let end_date = NaiveDate::parse_from_str(self.end_date.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate { field: "end" })?;

        if end_date <= start_date {
            return Err(ValidationError::EndNotAfterStart);
        }

        let subtasks: Vec<String> = self
            .subtasks
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(ValidTask {
            name: name.to_string(),
            subtasks,
            start_date,
            end_date,
            status,
        })
    }
}

/// A draft that passed validation, ready to build or overwrite a task
#[derive(Debug, Clone)]
pub struct ValidTask {
    pub name: String,
    pub subtasks: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TaskStatus,
}

impl ValidTask {
    /// Build a new task with a fresh id
    pub fn into_task(self) -> Task {
        Task::new(self.name, self.subtasks, self.start_date, self.end_date, self.status)
    }

    /// Overwrite an existing task's fields in place, keeping its id
    pub fn apply_to(self, task: &mut Task) {
        task.name = self.name;
        task.subtasks = self.subtasks;
        task.start_date = self.start_date;
        task.end_date = self.end_date;
        task.status = self.status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(name: &str, start: &str, end: &str) -> TaskDraft {
        TaskDraft {
            name: name.to_string(),
            subtasks: vec![String::new()],
            start_date: start.to_string(),
            end_date: end.to_string(),
            status: Some(TaskStatus::Complete),
        }
    }

    #[test]
    fn test_validate_success() {
        let mut d = draft("Draft report", "2025-01-01", "2025-01-05");
        d.subtasks = vec!["outline".to_string(), "write".to_string()];
        let valid = d.validate().unwrap();

        let task = valid.into_task();
        assert_eq!(task.name, "Draft report");
        assert_eq!(task.subtasks_joined(), "outline, write");
        assert_eq!(task.start_display(), "2025-01-01");
        assert_eq!(task.end_display(), "2025-01-05");
        assert_eq!(task.status, TaskStatus::Complete);
    }

    #[test]
    fn test_validate_missing_name() {
        let d = draft("   ", "2025-01-01", "2025-01-05");
        assert_eq!(d.validate().unwrap_err(), ValidationError::MissingField);
    }

    #[test]
    fn test_validate_missing_dates() {
        assert_eq!(
            draft("Task", "", "2025-01-05").validate().unwrap_err(),
            ValidationError::MissingField
        );
        assert_eq!(
            draft("Task", "2025-01-01", "").validate().unwrap_err(),
            ValidationError::MissingField
        );
    }

    #[test]
    fn test_validate_missing_status() {
        let mut d = draft("Task", "2025-01-01", "2025-01-05");
        d.status = None;
        assert_eq!(d.validate().unwrap_err(), ValidationError::MissingField);
    }

    #[test]
    fn test_validate_unparseable_date() {
        assert_eq!(
            draft("Task", "01/01/2025", "2025-01-05").validate().unwrap_err(),
            ValidationError::InvalidDate { field: "start" }
        );
        assert_eq!(
            draft("Task", "2025-01-01", "soon").validate().unwrap_err(),
            ValidationError::InvalidDate { field: "end" }
        );
    }

    #[test]
    fn test_validate_end_not_after_start() {
        assert_eq!(
            draft("Task", "2025-01-05", "2025-01-01").validate().unwrap_err(),
            ValidationError::EndNotAfterStart
        );
        // Equal dates are rejected too
        assert_eq!(
            draft("Task", "2025-01-05", "2025-01-05").validate().unwrap_err(),
            ValidationError::EndNotAfterStart
        );
    }

    #[test]
    fn test_validate_drops_blank_subtasks() {
        let mut d = draft("Task", "2025-01-01", "2025-01-05");
        d.subtasks = vec!["".to_string(), "  ".to_string(), "real".to_string()];
        let valid = d.validate().unwrap();
        assert_eq!(valid.subtasks, vec!["real".to_string()]);
    }

    #[test]
    fn test_apply_to_keeps_id() {
        let original = draft("Before", "2025-01-01", "2025-01-05")
            .validate()
            .unwrap()
            .into_task();
        let id = original.id;

        let mut task = original;
        draft("After", "2025-02-01", "2025-02-10")
            .validate()
            .unwrap()
            .apply_to(&mut task);

        assert_eq!(task.id, id);
        assert_eq!(task.name, "After");
        assert_eq!(task.start_display(), "2025-02-01");
    }
}
