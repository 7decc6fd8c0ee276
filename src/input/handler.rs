use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Form => handle_form_mode(app, key),
        UiMode::ConfirmDelete => handle_confirm_mode(app, key),
        UiMode::Search => handle_search_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Add task (opens the form empty)
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Edit selected task (opens the form pre-filled)
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_task();
            Ok(false)
        }

        // Delete selected task (asks for confirmation first)
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.request_delete();
            Ok(false)
        }

        // Focus the search field
        KeyCode::Char('/') => {
            app.start_search();
            Ok(false)
        }

        // Clear an active search filter
        KeyCode::Esc => {
            app.clear_search();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the task form is open
fn handle_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit (Add or Save, depending on edit mode)
        KeyCode::Enter => {
            app.submit_form();
            Ok(false)
        }

        // Cancel without mutating anything
        KeyCode::Esc => {
            app.cancel_form();
            Ok(false)
        }

        // Field focus
        KeyCode::Tab | KeyCode::Down => {
            app.form_next_field();
            Ok(false)
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form_prev_field();
            Ok(false)
        }

        // Cycle the status field
        KeyCode::Right => {
            app.form_cycle_status(true);
            Ok(false)
        }
        KeyCode::Left => {
            app.form_cycle_status(false);
            Ok(false)
        }

        // Append another subtask input
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_add_subtask_input();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.form_backspace();
            Ok(false)
        }

        // Add character (Ctrl-modified chars are reserved)
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the delete confirmation modal
fn handle_confirm_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Yes, delete the task
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.confirm_delete();
            Ok(false)
        }

        // No, keep it
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_delete();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys while the search field is focused; the filter applies on
/// every keystroke
fn handle_search_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.end_search();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.search_backspace();
            Ok(false)
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Task, TaskStatus};
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_app() -> AppState {
        let task = Task::new(
            "Test task".to_string(),
            vec!["step one".to_string()],
            date(2025, 1, 1),
            date(2025, 1, 5),
            TaskStatus::Complete,
        );
        AppState::with_today(vec![task], true, date(2025, 6, 15))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(should_quit);
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app();
        app.tasks.push(Task::new(
            "Second".to_string(),
            Vec::new(),
            date(2025, 2, 1),
            date(2025, 2, 5),
            TaskStatus::InProgress,
        ));

        assert_eq!(app.selected_index, 0);
        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index, 1);
        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index, 1); // Clamped at the last row
        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_handle_add_task_through_form() {
        let mut app = create_test_app();
        let initial_count = app.tasks.len();

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Form);
        assert!(app.form.is_some());

        type_text(&mut app, "New task");
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "2025-03-01");
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "2025-03-10");

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.tasks.len(), initial_count + 1);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.form.is_none());
        assert_eq!(app.tasks.last().unwrap().name, "New task");
    }

    #[test]
    fn test_handle_invalid_submit_keeps_form_open() {
        let mut app = create_test_app();
        let initial_count = app.tasks.len();

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        type_text(&mut app, "No dates");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.tasks.len(), initial_count);
        assert_eq!(app.ui_mode, UiMode::Form);
        assert!(app.form.as_ref().unwrap().error.is_some());
    }

    #[test]
    fn test_handle_subtask_input_key() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.form.as_ref().unwrap().subtasks.len(), 1);

        handle_key(&mut app, ctrl('n')).unwrap();
        assert_eq!(app.form.as_ref().unwrap().subtasks.len(), 2);

        // Focus landed on the new input; typed chars go there
        type_text(&mut app, "details");
        assert_eq!(app.form.as_ref().unwrap().subtasks[1], "details");
    }

    #[test]
    fn test_handle_edit_prefills_form() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();

        let form = app.form.as_ref().unwrap();
        assert!(form.is_edit());
        assert_eq!(form.name, "Test task");
        assert_eq!(form.subtasks, vec!["step one".to_string()]);
    }

    #[test]
    fn test_handle_delete_confirmation_flow() {
        let mut app = create_test_app();
        let initial_count = app.tasks.len();

        // Declined: nothing changes
        handle_key(&mut app, key(KeyCode::Char('d'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);
        handle_key(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.tasks.len(), initial_count);
        assert_eq!(app.ui_mode, UiMode::Normal);

        // Accepted: exactly one row removed
        handle_key(&mut app, key(KeyCode::Delete)).unwrap();
        handle_key(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert_eq!(app.tasks.len(), initial_count - 1);
    }

    #[test]
    fn test_handle_search_filters_per_keystroke() {
        let mut app = create_test_app();
        app.tasks.push(Task::new(
            "Another".to_string(),
            Vec::new(),
            date(2025, 2, 1),
            date(2025, 2, 5),
            TaskStatus::InProgress,
        ));

        handle_key(&mut app, key(KeyCode::Char('/'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Search);

        type_text(&mut app, "test");
        assert_eq!(app.visible().len(), 1);

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
        // Query persists after leaving the field
        assert_eq!(app.visible().len(), 1);

        // Esc in normal mode clears the filter
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.visible().len(), 2);
    }

    #[test]
    fn test_form_esc_cancels_without_mutation() {
        let mut app = create_test_app();
        let initial_count = app.tasks.len();

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        type_text(&mut app, "Abandoned");
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();

        assert_eq!(app.tasks.len(), initial_count);
        assert!(app.form.is_none());
    }
}
