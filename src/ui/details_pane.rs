use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected task
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let mut lines = Vec::new();

    if let Some(task) = app.selected_task() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(task.name.clone(), title_style())));
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!(
            "{} → {}",
            task.start_display(),
            task.end_display()
        )));
        lines.push(Line::raw(task.status.badge(app.use_emoji).to_string()));
        lines.push(Line::raw(""));

        if task.subtasks.is_empty() {
            lines.push(Line::from(Span::styled("No subtasks", hint_style())));
        } else {
            lines.push(Line::from(Span::styled("Subtasks:", default_style())));
            for subtask in &task.subtasks {
                lines.push(Line::raw(format!("  • {}", subtask)));
            }
        }
    } else if app.tasks.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "No tasks yet — press 'a' to add one",
            hint_style(),
        )));
    } else {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "No rows match the search",
            hint_style(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Details ", title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
