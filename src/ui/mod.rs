pub mod details_pane;
pub mod form_pane;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod search_bar;
pub mod styles;
pub mod table_pane;

use crate::app::AppState;
use details_pane::render_details_pane;
use form_pane::render_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_confirm_modal;
use ratatui::Frame;
use search_bar::render_search_bar;
use table_pane::render_table_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_search_bar(f, app, layout.search_area);
    render_table_pane(f, app, layout.table_area);
    render_details_pane(f, app, layout.details_area);

    // Render the form modal if open
    if app.form.is_some() {
        render_form(f, app, size);
    }

    // Render the delete confirmation if pending
    if app.confirm.is_some() {
        render_confirm_modal(f, app, size);
    }
}
