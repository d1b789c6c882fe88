//! waypost-tui: Terminal rendering for vertical timelines
//!
//! This crate provides the ratatui layer for waypost, including:
//! - Theme palettes, dot/connector glyphs and borders
//! - The [`TimelineWidget`] drawing resolved layouts
//! - Plain-text rendering for non-interactive output
//! - An interactive viewer

pub mod render;
pub mod text;
pub mod theme;
pub mod timeline;
pub mod viewer;

pub use render::{buffer_to_string, render_to_string};
pub use theme::{BorderSet, IconMode, IconSet, Theme};
pub use timeline::TimelineWidget;
pub use viewer::{run_viewer, UiConfig, ViewerApp};
pub use waypost_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use waypost_engine::TimelineDocument;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Open the interactive viewer on a document, optionally with a theme other
/// than the default.
///
/// Sets up the terminal, runs the viewer loop, and restores the terminal on
/// exit.
pub fn run_viewer_tui(
    document: TimelineDocument,
    ui_config: &UiConfig,
    theme: Option<Theme>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ViewerApp::new(document, ui_config);
    if let Some(theme) = theme {
        app.theme = theme;
    }
    let result = run_viewer(&mut terminal, &mut app);

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result.map_err(Into::into)
}

#[cfg(test)]
mod snapshot_tests {
    use super::*;
    use insta::assert_snapshot;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
    use waypost_engine::{resolve, Entry, Mode, Position, TimelineConfig};

    fn render(items: &[Option<Entry>], config: &TimelineConfig, width: u16) -> String {
        let layout = resolve(items, config);
        let icons = IconSet::new(IconMode::Ascii);
        render_to_string(&layout, &Theme::default(), &icons, width, false)
    }

    #[test]
    fn test_snapshot_default_layout() {
        let items = vec![
            Some(Entry::new("Create a services site")),
            Some(Entry::new("Solve network problems")),
        ];
        let result = render(&items, &TimelineConfig::default(), 30);
        assert_snapshot!("default_layout", result);
    }

    #[test]
    fn test_snapshot_pending_layout() {
        let items = vec![Some(Entry::new("one")), Some(Entry::new("two"))];
        let config = TimelineConfig::default().pending("Recording...");
        assert_snapshot!("pending_layout", render(&items, &config, 20));
    }

    #[test]
    fn test_snapshot_reversed_pending_layout() {
        let items = vec![Some(Entry::new("A")), Some(Entry::new("B"))];
        let config = TimelineConfig::default()
            .mode(Mode::Left)
            .reverse(true)
            .pending("soon");
        assert_snapshot!("reversed_pending_layout", render(&items, &config, 20));
    }

    #[test]
    fn test_snapshot_right_mode_layout() {
        let items = vec![Some(Entry::new("one")), Some(Entry::new("two"))];
        let config = TimelineConfig::default().mode(Mode::Right);
        assert_snapshot!("right_mode_layout", render(&items, &config, 10));
    }

    #[test]
    fn test_snapshot_alternate_layout() {
        let items = vec![
            Some(Entry::new("one")),
            Some(Entry::new("two")),
            Some(Entry::new("six").position(Position::Left)),
        ];
        let config = TimelineConfig::default().mode(Mode::Alternate);
        assert_snapshot!("alternate_layout", render(&items, &config, 11));
    }

    #[test]
    fn test_snapshot_label_layout() {
        let items = vec![Some(Entry::new("open").label("09:00"))];
        let result = render(&items, &TimelineConfig::default(), 15);
        assert_snapshot!("label_layout", result);
    }

    #[test]
    fn test_snapshot_border_and_title() {
        let items = vec![Some(Entry::new("one"))];
        let config = TimelineConfig::default();
        let layout = resolve(&items, &config);
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);

        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        TimelineWidget::new(&layout, &theme, &icons)
            .title("Log")
            .render(area, &mut buf);
        assert_snapshot!("border_and_title", buffer_to_string(&buf));
    }

    #[test]
    fn test_snapshot_unicode_glyphs() {
        let items = vec![Some(Entry::new("A")), Some(Entry::new("B"))];
        let config = TimelineConfig::default();
        let layout = resolve(&items, &config);
        let icons = IconSet::new(IconMode::Unicode);
        let result = render_to_string(&layout, &Theme::default(), &icons, 20, false);
        assert_snapshot!("unicode_glyphs", result);
    }
}
