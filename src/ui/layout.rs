use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::HEADER_HEIGHT;

/// Split the screen into header, page body and help bar.
///
/// A hidden header gives its rows to the body.
pub fn create_layout_with_help(area: Rect, header_hidden: bool) -> (Rect, Rect, Rect) {
    let header_rows = if header_hidden { 0 } else { HEADER_HEIGHT };
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_rows),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    (vertical[0], vertical[1], vertical[2])
}

/// Center a box of at most `width` x `height` inside `area`, keeping a margin
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_takes_fixed_rows() {
        let (header, body, help) = create_layout_with_help(Rect::new(0, 0, 80, 24), false);
        assert_eq!(header.height, HEADER_HEIGHT);
        assert_eq!(body.height, 24 - HEADER_HEIGHT - 1);
        assert_eq!(help.y, 23);
    }

    #[test]
    fn hidden_header_gives_rows_to_body() {
        let (header, body, _) = create_layout_with_help(Rect::new(0, 0, 80, 24), true);
        assert_eq!(header.height, 0);
        assert_eq!(body.y, 0);
        assert_eq!(body.height, 23);
    }

    #[test]
    fn centered_box_fits_inside_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered(area, 100, 100);
        assert_eq!(rect, Rect::new(2, 1, 36, 8));
    }
}
