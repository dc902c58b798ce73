use ratatui::prelude::*;

/// Split a screen into header, body and footer rows.
///
/// Returns `(header, body, footer)`.
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> (Rect, Rect, Rect) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .areas(area);
    (header, body, footer)
}

/// A rectangle of the given percentages centered inside `area`.
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y.min(100)) / 2),
        Constraint::Percentage(percent_y.min(100)),
        Constraint::Percentage((100 - percent_y.min(100)) / 2),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x.min(100)) / 2),
        Constraint::Percentage(percent_x.min(100)),
        Constraint::Percentage((100 - percent_x.min(100)) / 2),
    ])
    .areas(middle);
    center
}

/// A column at most `max_width` wide, horizontally centered in `area`.
///
/// Forms read badly when stretched across a wide terminal.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_heights() {
        let (header, body, footer) = create_standard_layout(Rect::new(0, 0, 80, 24), 5, 2);
        assert_eq!(header.height, 5);
        assert_eq!(footer.height, 2);
        assert_eq!(body.height, 17);
        assert_eq!(footer.bottom(), 24);
    }

    #[test]
    fn test_center_popup_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = center_popup(area, 60, 40);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn test_centered_column() {
        let col = centered_column(Rect::new(0, 0, 100, 10), 40);
        assert_eq!((col.x, col.width), (30, 40));
        let col = centered_column(Rect::new(5, 0, 20, 10), 40);
        assert_eq!((col.x, col.width), (5, 20));
    }
}
