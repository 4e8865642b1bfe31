use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
/// Rows taken by one product card, borders included.
pub const CARD_HEIGHT: u16 = 5;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Rect of the given size centered in `area`, clipped to it.
pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

/// First grid row to draw so that `selected_row` stays on screen.
pub fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    (selected_row + 1).saturating_sub(visible_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_full_height() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, HEADER_HEIGHT);
        assert_eq!(footer.height, FOOTER_HEIGHT);
        assert_eq!(body.height, 24 - HEADER_HEIGHT - FOOTER_HEIGHT);
        assert_eq!(body.y, HEADER_HEIGHT);
    }

    #[test]
    fn centered_rect_is_clipped() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect_by_size(40, 4, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 4);
        assert_eq!(rect.y, 3);
    }

    #[test]
    fn scroll_keeps_selection_visible() {
        assert_eq!(first_visible_row(0, 3), 0);
        assert_eq!(first_visible_row(2, 3), 0);
        assert_eq!(first_visible_row(5, 3), 3);
        assert_eq!(first_visible_row(4, 0), 4);
    }
}
