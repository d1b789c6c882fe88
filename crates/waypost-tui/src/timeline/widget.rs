//! Timeline widget for rendering resolved layouts.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use waypost_engine::Layout;

use super::rows::{plan_rows, Geometry, Row, RowStyle};
use crate::text::visual_width;
use crate::theme::{BorderSet, IconSet, Theme};

/// Vertical timeline widget.
pub struct TimelineWidget<'a> {
    layout: &'a Layout<'a>,
    theme: &'a Theme,
    icons: &'a IconSet,
    /// Whether to render with a border (default: true).
    with_border: bool,
    title: Option<&'a str>,
    /// Rows skipped from the top.
    scroll: usize,
    spinner_frame: Option<usize>,
}

impl<'a> TimelineWidget<'a> {
    /// Create a new timeline widget.
    pub fn new(layout: &'a Layout<'a>, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            layout,
            theme,
            icons,
            with_border: true,
            title: None,
            scroll: 0,
            spinner_frame: None,
        }
    }

    /// Set whether to render with a border.
    #[must_use]
    pub fn with_border(mut self, border: bool) -> Self {
        self.with_border = border;
        self
    }

    /// Set the border title.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Skip the first `rows` rows.
    #[must_use]
    pub fn scroll(mut self, rows: usize) -> Self {
        self.scroll = rows;
        self
    }

    /// Animate the ghost entry's dot with the given spinner frame.
    #[must_use]
    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = Some(frame);
        self
    }

    fn row_style(&self) -> RowStyle<'a> {
        RowStyle {
            theme: self.theme,
            icons: self.icons,
            spinner_frame: self.spinner_frame,
        }
    }

    fn rows(&self, width: u16) -> Vec<Row> {
        let geometry = Geometry::new(width, &self.layout.container);
        plan_rows(self.layout, geometry, self.row_style())
    }

    /// Rows needed to show the whole timeline `width` columns wide, border
    /// included.
    pub fn content_height(&self, width: u16) -> usize {
        let frame = if self.with_border { 2 } else { 0 };
        let rows = if self.layout.is_empty() {
            1
        } else {
            self.rows(width.saturating_sub(frame)).len()
        };
        rows + usize::from(frame)
    }

    fn render_row(row: &Row, geometry: Geometry, area: Rect, y: u16, buf: &mut Buffer) {
        let rail_width = geometry.width.saturating_sub(geometry.rail_col);
        buf.set_span(area.x + geometry.rail_col, y, &row.rail, rail_width);

        if let Some(span) = &row.before {
            let region = geometry.before_width();
            let width = u16::try_from(visual_width(&span.content)).unwrap_or(region);
            let x = area.x + region.saturating_sub(width);
            buf.set_span(x, y, span, region);
        }

        if let Some(span) = &row.after {
            let region = geometry.after_width();
            if region > 0 {
                buf.set_span(area.x + geometry.after_start(), y, span, region);
            }
        }
    }
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Determine inner area based on border setting
        let inner = if self.with_border {
            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_set(BorderSet::new(self.icons.mode()).normal())
                .border_style(Style::default().fg(self.theme.border))
                .style(Style::default().bg(self.theme.base));
            if let Some(title) = self.title {
                block = block
                    .title(format!(" {title} "))
                    .title_style(Style::default().fg(self.theme.text));
            }

            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Empty state
        if self.layout.is_empty() {
            let empty_msg = Line::from(vec![Span::styled(
                "No entries",
                Style::default().fg(self.theme.muted),
            )]);
            let para = Paragraph::new(empty_msg);
            para.render(
                Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1),
                buf,
            );
            return;
        }

        let geometry = Geometry::new(inner.width, &self.layout.container);
        let rows = plan_rows(self.layout, geometry, self.row_style());

        for (offset, row) in rows
            .iter()
            .skip(self.scroll)
            .take(usize::from(inner.height))
            .enumerate()
        {
            let y = inner.y + u16::try_from(offset).unwrap_or(u16::MAX);
            Self::render_row(row, geometry, inner, y, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::buffer_to_string;
    use crate::theme::IconMode;
    use waypost_engine::{resolve, Entry, TimelineConfig};

    fn render(layout: &Layout<'_>, width: u16, border: bool) -> String {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let widget = TimelineWidget::new(layout, &theme, &icons).with_border(border);
        let height = u16::try_from(widget.content_height(width)).unwrap();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_empty_state() {
        let items: Vec<Option<Entry>> = vec![None];
        let config = TimelineConfig::default();
        let layout = resolve(&items, &config);

        assert_eq!(render(&layout, 20, false), "No entries");
    }

    #[test]
    fn test_scroll_skips_rows() {
        let items = vec![Some(Entry::new("one")), Some(Entry::new("two"))];
        let config = TimelineConfig::default();
        let layout = resolve(&items, &config);
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);

        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        TimelineWidget::new(&layout, &theme, &icons)
            .with_border(false)
            .scroll(2)
            .render(area, &mut buf);
        assert_eq!(buffer_to_string(&buf), "o two");
    }

    #[test]
    fn test_content_height() {
        let items = vec![Some(Entry::new("one")), Some(Entry::new("two"))];
        let config = TimelineConfig::default();
        let layout = resolve(&items, &config);
        let theme = Theme::default();
        let icons = IconSet::default();

        let widget = TimelineWidget::new(&layout, &theme, &icons);
        assert_eq!(widget.content_height(20), 5);
        let widget = widget.with_border(false);
        assert_eq!(widget.content_height(20), 3);
    }
}
