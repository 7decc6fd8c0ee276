use crate::app::{AppState, FormField, TaskForm};
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn field_line(label: &str, value: &str, focused: bool) -> Vec<Line<'static>> {
    let label_text = if focused {
        format!("{} (editing)", label)
    } else {
        label.to_string()
    };

    let mut value_spans = vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
    ];
    if focused {
        value_spans.push(Span::styled("█", modal_title_style())); // Cursor
    }

    vec![Line::raw(label_text), Line::from(value_spans)]
}

fn status_line(form: &TaskForm) -> Vec<Line<'static>> {
    let focused = form.field == FormField::Status;
    let label = if focused {
        "Status: (←/→ to change)"
    } else {
        "Status:"
    };

    let value = if focused {
        format!("◀ {} ▶", form.status.label())
    } else {
        form.status.label().to_string()
    };

    vec![
        Line::raw(label),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(value, modal_title_style()),
        ]),
    ]
}

/// Render the task form as a centered modal
pub fn render_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.form {
        // Base rows plus two per subtask input
        let height = (16 + form.subtasks.len() * 2).min(area.height as usize) as u16;
        let modal_area = create_modal_area(area, height);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));

        lines.extend(field_line("Name:", &form.name, form.field == FormField::Name));
        lines.extend(field_line(
            "Start date (YYYY-MM-DD):",
            &form.start_date,
            form.field == FormField::StartDate,
        ));
        lines.extend(field_line(
            "End date (YYYY-MM-DD):",
            &form.end_date,
            form.field == FormField::EndDate,
        ));
        lines.extend(status_line(form));

        for (idx, subtask) in form.subtasks.iter().enumerate() {
            lines.extend(field_line(
                &format!("Subtask {}:", idx + 1),
                subtask,
                form.field == FormField::Subtask(idx),
            ));
        }

        lines.push(Line::raw(""));
        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(error.clone(), error_style())));
            lines.push(Line::raw(""));
        }

        let submit = if form.is_edit() { "Save" } else { "Add" };
        lines.push(Line::raw(format!(
            "Tab next field  ·  Ctrl-n more subtasks  ·  Enter {}  ·  Esc cancel",
            submit
        )));

        let title = if form.is_edit() { " Edit Task " } else { " Add Task " };
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
