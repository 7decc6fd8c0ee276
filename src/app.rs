use crate::domain::{visible_rows, Task, TaskDraft, TaskStatus, UiMode, DATE_FORMAT};
use chrono::NaiveDate;
use uuid::Uuid;

/// Field focus order inside the task form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    StartDate,
    EndDate,
    Status,
    /// One of the dynamic subtask inputs
    Subtask(usize),
}

/// Input form state for adding or editing a task
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub status: TaskStatus,
    /// One entry per subtask input; always at least one
    pub subtasks: Vec<String>,
    pub field: FormField,
    /// Some(id) while overwriting an existing task (Save), None for Add
    pub editing: Option<Uuid>,
    /// Inline validation error from the last submit attempt
    pub error: Option<String>,
}

impl TaskForm {
    /// Empty form in Add mode, one subtask input present by default
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            status: TaskStatus::InProgress,
            subtasks: vec![String::new()],
            field: FormField::Name,
            editing: None,
            error: None,
        }
    }

    /// Form pre-filled from an existing task, in Save mode
    pub fn for_task(task: &Task) -> Self {
        let subtasks = if task.subtasks.is_empty() {
            vec![String::new()]
        } else {
            task.subtasks.clone()
        };
        Self {
            name: task.name.clone(),
            start_date: task.start_date.format(DATE_FORMAT).to_string(),
            end_date: task.end_date.format(DATE_FORMAT).to_string(),
            status: task.status,
            subtasks,
            field: FormField::Name,
            editing: Some(task.id),
            error: None,
        }
    }

    /// Whether the submit action reads "Save" instead of "Add"
    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// Mutable access to the text of the focused field, if it is text
    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Name => Some(&mut self.name),
            FormField::StartDate => Some(&mut self.start_date),
            FormField::EndDate => Some(&mut self.end_date),
            FormField::Status => None,
            FormField::Subtask(idx) => self.subtasks.get_mut(idx),
        }
    }

    /// Move focus to the next field (wraps past the last subtask input)
    pub fn next_field(&mut self) {
        self.field = match self.field {
            FormField::Name => FormField::StartDate,
            FormField::StartDate => FormField::EndDate,
            FormField::EndDate => FormField::Status,
            FormField::Status => FormField::Subtask(0),
            FormField::Subtask(idx) => {
                if idx + 1 < self.subtasks.len() {
                    FormField::Subtask(idx + 1)
                } else {
                    FormField::Name
                }
            }
        };
    }

    /// Move focus to the previous field
    pub fn prev_field(&mut self) {
        self.field = match self.field {
            FormField::Name => FormField::Subtask(self.subtasks.len() - 1),
            FormField::StartDate => FormField::Name,
            FormField::EndDate => FormField::StartDate,
            FormField::Status => FormField::EndDate,
            FormField::Subtask(0) => FormField::Status,
            FormField::Subtask(idx) => FormField::Subtask(idx - 1),
        };
    }

    /// Append another subtask input and focus it (the source's "+" button)
    pub fn add_subtask_input(&mut self) {
        self.subtasks.push(String::new());
        self.field = FormField::Subtask(self.subtasks.len() - 1);
    }

    /// Recompute the status from the date fields once both parse.
    /// The user can still cycle the status afterwards; the last edit wins.
    fn refresh_status_from_dates(&mut self, today: NaiveDate) {
        let start = NaiveDate::parse_from_str(self.start_date.trim(), DATE_FORMAT);
        let end = NaiveDate::parse_from_str(self.end_date.trim(), DATE_FORMAT);
        if let (Ok(start), Ok(end)) = (start, end) {
            self.status = TaskStatus::derive(start, end, today);
        }
    }

    /// Snapshot the form's field values for validation
    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            name: self.name.clone(),
            subtasks: self.subtasks.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            status: Some(self.status),
        }
    }
}

/// Pending delete confirmation
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub task_id: Uuid,
    pub task_name: String,
}

/// Main application state
pub struct AppState {
    /// The task collection, in display order. This is the source of truth;
    /// the rendered table is derived from it through the search filter.
    pub tasks: Vec<Task>,
    /// Selection index into the visible (filtered) rows
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub search_query: String,
    pub form: Option<TaskForm>,
    pub confirm: Option<ConfirmState>,
    pub use_emoji: bool,
    /// Today's date, fixed at startup; injected in tests
    pub today: NaiveDate,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, use_emoji: bool) -> Self {
        Self::with_today(tasks, use_emoji, chrono::Local::now().date_naive())
    }

    pub fn with_today(tasks: Vec<Task>, use_emoji: bool, today: NaiveDate) -> Self {
        Self {
            tasks,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            search_query: String::new(),
            form: None,
            confirm: None,
            use_emoji,
            today,
        }
    }

    /// Indices of the rows currently visible under the search query
    pub fn visible(&self) -> Vec<usize> {
        visible_rows(&self.tasks, &self.search_query)
    }

    /// The task under the selection cursor, if any row is visible
    pub fn selected_task(&self) -> Option<&Task> {
        let visible = self.visible();
        let idx = *visible.get(self.selected_index)?;
        self.tasks.get(idx)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        let visible = self.visible();
        if self.selected_index + 1 < visible.len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the visible rows after a filter or removal
    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Open the form empty, in Add mode
    pub fn start_add_task(&mut self) {
        self.form = Some(TaskForm::empty());
        self.ui_mode = UiMode::Form;
    }

    /// Open the form pre-filled from the selected row, in Save mode
    pub fn start_edit_task(&mut self) {
        if let Some(task) = self.selected_task() {
            self.form = Some(TaskForm::for_task(task));
            self.ui_mode = UiMode::Form;
        }
    }

    /// Add a character to the focused form field. Date edits re-derive the
    /// status field.
    pub fn form_add_char(&mut self, c: char) {
        let today = self.today;
        if let Some(form) = &mut self.form {
            let is_date = matches!(form.field, FormField::StartDate | FormField::EndDate);
            if let Some(text) = form.focused_text_mut() {
                text.push(c);
            }
            if is_date {
                form.refresh_status_from_dates(today);
            }
        }
    }

    /// Backspace in the focused form field
    pub fn form_backspace(&mut self) {
        let today = self.today;
        if let Some(form) = &mut self.form {
            let is_date = matches!(form.field, FormField::StartDate | FormField::EndDate);
            if let Some(text) = form.focused_text_mut() {
                text.pop();
            }
            if is_date {
                form.refresh_status_from_dates(today);
            }
        }
    }

    /// Cycle the status field forward or backward (only when focused)
    pub fn form_cycle_status(&mut self, forward: bool) {
        if let Some(form) = &mut self.form {
            if form.field == FormField::Status {
                form.status = if forward { form.status.next() } else { form.status.prev() };
            }
        }
    }

    pub fn form_next_field(&mut self) {
        if let Some(form) = &mut self.form {
            form.next_field();
        }
    }

    pub fn form_prev_field(&mut self) {
        if let Some(form) = &mut self.form {
            form.prev_field();
        }
    }

    pub fn form_add_subtask_input(&mut self) {
        if let Some(form) = &mut self.form {
            form.add_subtask_input();
        }
    }

    /// Submit the form: validate, then append a new task or overwrite the
    /// edit target. On failure the error is shown inline and nothing
    /// mutates; the form stays open for correction.
    pub fn submit_form(&mut self) {
        let Some(form) = &mut self.form else {
            return;
        };

        match form.draft().validate() {
            Ok(valid) => {
                match form.editing {
                    Some(id) => {
                        if let Some(task) =
                            self.tasks.iter_mut().find(|t| t.id == id)
                        {
                            valid.apply_to(task);
                        }
                    }
                    None => {
                        self.tasks.push(valid.into_task());
                    }
                }
                self.form = None;
                self.ui_mode = UiMode::Normal;
                self.clamp_selection();
            }
            Err(err) => {
                form.error = Some(err.to_string());
            }
        }
    }

    /// Cancel the form without mutating state
    pub fn cancel_form(&mut self) {
        self.form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Ask for confirmation before deleting the selected row
    pub fn request_delete(&mut self) {
        if let Some(task) = self.selected_task() {
            self.confirm = Some(ConfirmState {
                task_id: task.id,
                task_name: task.name.clone(),
            });
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    /// Confirmation accepted: remove exactly the confirmed task
    pub fn confirm_delete(&mut self) {
        if let Some(confirm) = self.confirm.take() {
            self.tasks.retain(|t| t.id != confirm.task_id);
            self.ui_mode = UiMode::Normal;
            self.clamp_selection();
        }
    }

    /// Confirmation declined: collection unchanged
    pub fn cancel_delete(&mut self) {
        self.confirm = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Focus the search field
    pub fn start_search(&mut self) {
        self.ui_mode = UiMode::Search;
    }

    /// Leave the search field; the query keeps filtering the table
    pub fn end_search(&mut self) {
        self.ui_mode = UiMode::Normal;
        self.clamp_selection();
    }

    /// Append to the search query; the filter applies immediately
    pub fn search_add_char(&mut self, c: char) {
        self.search_query.push(c);
        self.clamp_selection();
    }

    /// Backspace in the search query
    pub fn search_backspace(&mut self) {
        self.search_query.pop();
        self.clamp_selection();
    }

    /// Clear the query, restoring all rows to visible
    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.clamp_selection();
    }
}
