use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub search_area: Rect,
    pub table_area: Rect,
    pub details_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Search bar (3 rows, bordered)
/// - Main area: Table (70%) | Details (30%)
pub fn create_layout(area: Rect) -> MainLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(70), // Task table
            Constraint::Percentage(30), // Details pane
        ])
        .split(vertical[2]);

    MainLayout {
        keybindings_area: vertical[0],
        search_area: vertical[1],
        table_area: horizontal[0],
        details_area: horizontal[1],
    }
}

/// Create centered modal area (for the form and confirmation modals)
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(height),
            Constraint::Percentage(20),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.search_area.height, 3);
        assert!(layout.table_area.height > 0);
        assert!(layout.details_area.height > 0);
        assert!(layout.table_area.width > layout.details_area.width);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area, 16);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 16);
    }
}
