use crate::app::AppState;
use crate::domain::{Task, TaskStatus};
use crate::ui::styles::{
    border_style, complete_style, default_style, due_passed_style, header_style,
    in_progress_style, selected_style, title_style,
};
use ratatui::{
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Cell texts for one task row: Name | Subtasks | Start | End | Status
pub fn row_cells(task: &Task) -> [String; 5] {
    [
        task.name.clone(),
        task.subtasks_joined(),
        task.start_display(),
        task.end_display(),
        task.status.label().to_string(),
    ]
}

fn status_style(status: TaskStatus) -> ratatui::style::Style {
    match status {
        TaskStatus::InProgress => in_progress_style(),
        TaskStatus::DuePassed => due_passed_style(),
        TaskStatus::Complete => complete_style(),
    }
}

/// Render the task table: the derived view over the filtered collection
pub fn render_table_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let visible = app.visible();

    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(row_idx, &task_idx)| {
            let task = &app.tasks[task_idx];
            let cells = row_cells(task);
            let [name, subtasks, start, end, status] = cells;

            let row_style = if row_idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };

            Row::new(vec![
                Cell::from(name),
                Cell::from(subtasks),
                Cell::from(start),
                Cell::from(end),
                Cell::from(status).style(if row_idx == app.selected_index {
                    selected_style()
                } else {
                    status_style(task.status)
                }),
            ])
            .style(row_style)
        })
        .collect();

    let header = Row::new(vec!["Name", "Subtasks", "Start", "End", "Status"])
        .style(header_style())
        .bottom_margin(1);

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(30),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(13),
    ];

    let title = format!(" Tasks ({}) ", app.tasks.len());
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(table, area);
}
