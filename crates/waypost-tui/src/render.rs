//! Off-screen rendering to plain text.
//!
//! Used by `waypost render` and by rendering tests.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use waypost_engine::Layout;

use crate::theme::{IconSet, Theme};
use crate::timeline::TimelineWidget;

/// Convert a buffer to a string, one line per row with trailing spaces
/// trimmed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render a layout `width` columns wide, as tall as it needs to be.
pub fn render_to_string(
    layout: &Layout<'_>,
    theme: &Theme,
    icons: &IconSet,
    width: u16,
    with_border: bool,
) -> String {
    let widget = TimelineWidget::new(layout, theme, icons).with_border(with_border);
    let height = u16::try_from(widget.content_height(width)).unwrap_or(u16::MAX);
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    widget.render(area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", Style::default());
        buffer.set_string(0, 1, "World", Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\nWorld\n");
    }
}
