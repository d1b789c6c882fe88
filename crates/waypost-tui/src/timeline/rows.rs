//! Row planning for the timeline widget.
//!
//! Turns a resolved [`Layout`] into terminal rows: the glyph on the rail plus
//! the text placed before and after it. Planning is separate from drawing so
//! the widget can measure and scroll without touching a buffer.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use waypost_engine::{Connector, Container, EntryView, Layout, RailPlacement, Side};

use crate::text::{truncate_to_width, wrap_text};
use crate::theme::{IconSet, Theme};

/// Columns between the rail and the text on either side.
pub const GUTTER: u16 = 2;

/// Which side of the rail a piece of text sits on, in screen columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Left of the rail; text is right-aligned toward it.
    Before,
    /// Right of the rail; text is left-aligned from it.
    After,
}

impl Region {
    fn flip(self) -> Self {
        match self {
            Self::Before => Self::After,
            Self::After => Self::Before,
        }
    }
}

/// Region that holds an entry's content.
pub fn content_region(container: &Container<'_>, side: Side) -> Region {
    let region = match (container.rail(), side) {
        (RailPlacement::End, _) | (RailPlacement::Center, Side::Right) => Region::Before,
        _ => Region::After,
    };
    if container.rtl {
        region.flip()
    } else {
        region
    }
}

/// Horizontal geometry of the rail inside the timeline area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u16,
    pub rail_col: u16,
}

impl Geometry {
    /// Place the rail for a container in an area `width` columns wide.
    pub fn new(width: u16, container: &Container<'_>) -> Self {
        let placement = match (container.rail(), container.rtl) {
            (RailPlacement::Start, true) => RailPlacement::End,
            (RailPlacement::End, true) => RailPlacement::Start,
            (placement, _) => placement,
        };
        let rail_col = match placement {
            RailPlacement::Start => 0,
            RailPlacement::Center => width / 2,
            RailPlacement::End => width.saturating_sub(1),
        };
        Self { width, rail_col }
    }

    /// Columns available left of the rail.
    pub fn before_width(&self) -> u16 {
        self.rail_col.saturating_sub(GUTTER - 1)
    }

    /// First column right of the rail.
    pub fn after_start(&self) -> u16 {
        self.rail_col + GUTTER
    }

    /// Columns available right of the rail.
    pub fn after_width(&self) -> u16 {
        self.width.saturating_sub(self.after_start())
    }

    /// Columns available in a region.
    pub fn region_width(&self, region: Region) -> u16 {
        match region {
            Region::Before => self.before_width(),
            Region::After => self.after_width(),
        }
    }
}

/// One terminal row of the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub rail: Span<'static>,
    pub before: Option<Span<'static>>,
    pub after: Option<Span<'static>>,
}

impl Row {
    fn new(rail: Span<'static>) -> Self {
        Self {
            rail,
            before: None,
            after: None,
        }
    }

    fn place(&mut self, region: Region, span: Span<'static>) {
        match region {
            Region::Before => self.before = Some(span),
            Region::After => self.after = Some(span),
        }
    }
}

/// Glyph and style inputs for planning.
#[derive(Debug, Clone, Copy)]
pub struct RowStyle<'a> {
    pub theme: &'a Theme,
    pub icons: &'a IconSet,
    /// Spinner frame for the ghost entry's dot; `None` uses the static glyph.
    pub spinner_frame: Option<usize>,
}

impl RowStyle<'_> {
    fn dot(&self, view: &EntryView<'_>) -> Span<'static> {
        let entry = &view.entry;
        let glyph = match (entry.custom_dot(), entry.pending, self.spinner_frame) {
            (Some(dot), _, _) => dot.to_string(),
            (None, true, Some(frame)) => {
                let frames = self.icons.spinner_frames();
                frames[frame % frames.len()].to_string()
            }
            (None, true, None) => self.icons.pending().to_string(),
            (None, false, _) => self.icons.dot().to_string(),
        };
        Span::styled(glyph, Style::default().fg(self.theme.dot_color(&entry.color)))
    }

    fn connector(&self, connector: Connector) -> Span<'static> {
        let glyph = match connector {
            Connector::Solid => self.icons.connector_solid(),
            Connector::Dotted => self.icons.connector_dotted(),
            Connector::Hidden => "",
        };
        Span::styled(glyph, Style::default().fg(self.theme.rail))
    }

    fn content(&self, view: &EntryView<'_>) -> Style {
        if view.entry.pending {
            Style::default()
                .fg(self.theme.muted)
                .add_modifier(Modifier::ITALIC)
        } else {
            Style::default().fg(self.theme.text)
        }
    }

    fn label(&self) -> Style {
        Style::default().fg(self.theme.subtext)
    }
}

fn fit_lines(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width);
    wrap_text(text, width)
        .into_iter()
        .map(|line| truncate_to_width(&line, width))
        .collect()
}

/// Plan every row of a layout.
///
/// Each entry gets one row per wrapped content (or label) line, the first
/// carrying its dot, followed by a spacer row that continues its connector.
/// The final entry has no spacer.
pub fn plan_rows(layout: &Layout<'_>, geometry: Geometry, style: RowStyle<'_>) -> Vec<Row> {
    let mut rows = Vec::new();
    let count = layout.views.len();

    for (position, view) in layout.views.iter().enumerate() {
        let region = content_region(&layout.container, view.side);
        let label_region = region.flip();

        let content = fit_lines(&view.entry.content, geometry.region_width(region));
        let label = match view.entry.label.as_deref() {
            Some(label) if !label.is_empty() => {
                fit_lines(label, geometry.region_width(label_region))
            }
            _ => Vec::new(),
        };
        let height = content.len().max(label.len()).max(1);
        let content_style = style.content(view);

        for line in 0..height {
            let rail = if line == 0 {
                style.dot(view)
            } else {
                style.connector(view.connector)
            };
            let mut row = Row::new(rail);
            if let Some(text) = content.get(line).filter(|text| !text.is_empty()) {
                row.place(region, Span::styled(text.clone(), content_style));
            }
            if let Some(text) = label.get(line).filter(|text| !text.is_empty()) {
                row.place(label_region, Span::styled(text.clone(), style.label()));
            }
            rows.push(row);
        }

        if position + 1 < count {
            rows.push(Row::new(style.connector(view.connector)));
        }
    }

    rows
}
