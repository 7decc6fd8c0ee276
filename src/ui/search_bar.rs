use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, default_style, search_active_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the search field; filtering applies on every keystroke
pub fn render_search_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.ui_mode == UiMode::Search;

    let mut spans = vec![Span::raw("> ")];
    if focused {
        spans.push(Span::styled(app.search_query.clone(), search_active_style()));
        spans.push(Span::styled("█", search_active_style()));
    } else {
        spans.push(Span::styled(app.search_query.clone(), default_style()));
    }

    let title = if app.search_query.is_empty() {
        " Search (name or status) ".to_string()
    } else {
        format!(
            " Search — {} of {} rows shown ",
            app.visible().len(),
            app.tasks.len()
        )
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused { search_active_style() } else { border_style() })
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}
