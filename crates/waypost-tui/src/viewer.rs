//! Interactive timeline viewer.
//!
//! Shows a [`TimelineDocument`] full screen and lets the user flip its
//! container configuration live:
//! - `m` cycles the mode (none, left, right, alternate)
//! - `r` toggles reverse, `p` toggles the pending entry
//! - arrows / `j` `k` scroll, `g` `G` jump, `q` / `Esc` quit

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
#[cfg(test)]
use crossterm::event::KeyModifiers;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Layout as Split, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::debug;
use waypost_engine::{Mode, Pending, TimelineDocument};

use crate::theme::{IconMode, IconSet, Theme};
use crate::timeline::TimelineWidget;

/// UI configuration (from environment or command line).
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Icon mode (Nerd, Unicode, or ASCII).
    pub icons: IconMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl UiConfig {
    /// Create config from environment, respecting `NO_COLOR`.
    pub fn from_env() -> Self {
        let icons = if std::env::var("NO_COLOR").is_ok() {
            IconMode::Ascii
        } else {
            IconMode::Nerd
        };
        Self { icons }
    }
}

/// Viewer state.
#[derive(Debug)]
pub struct ViewerApp {
    pub document: TimelineDocument,
    pub theme: Theme,
    pub icons: IconSet,
    /// Rows scrolled past.
    pub scroll: usize,
    /// Render tick, drives the pending spinner.
    pub tick: usize,
    pub should_quit: bool,
    /// Pending setting restored when `p` turns the entry back on.
    saved_pending: Pending,
}

impl ViewerApp {
    /// Create a viewer for a document.
    pub fn new(document: TimelineDocument, ui_config: &UiConfig) -> Self {
        let saved_pending = match &document.config.pending {
            Pending::Off => Pending::On,
            pending => pending.clone(),
        };
        Self {
            document,
            theme: Theme::default(),
            icons: IconSet::new(ui_config.icons),
            scroll: 0,
            tick: 0,
            should_quit: false,
            saved_pending,
        }
    }

    /// Handle keyboard input.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let config = &mut self.document.config;
        match key.code {
            KeyCode::Char('m') => {
                config.mode = Mode::cycle(config.mode);
                debug!(mode = ?config.mode, "viewer mode changed");
            }
            KeyCode::Char('r') => {
                config.reverse = !config.reverse;
            }
            KeyCode::Char('p') => {
                if config.pending.is_active() {
                    self.saved_pending = std::mem::take(&mut config.pending);
                } else {
                    config.pending = self.saved_pending.clone();
                }
            }

            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.scroll = usize::MAX;
            }

            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }

            _ => {}
        }
    }

    /// One-line summary of the current configuration.
    pub fn status_line(&self) -> String {
        let config = &self.document.config;
        let mode = config.mode.map_or("none", Mode::as_str);
        let on_off = |flag: bool| if flag { "on" } else { "off" };
        format!(
            " mode: {mode}  reverse: {}  pending: {}   [m]ode [r]everse [p]ending [q]uit",
            on_off(config.reverse),
            on_off(config.pending.is_active()),
        )
    }

    /// Draw the viewer into a frame.
    pub fn render(&mut self, frame: &mut Frame<'_>) {
        let [body, footer] =
            Split::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
        self.render_body(body, frame);

        let status = Line::from(vec![Span::styled(
            self.status_line(),
            Style::default().fg(self.theme.muted),
        )]);
        frame.render_widget(Paragraph::new(status), footer);
    }

    fn render_body(&mut self, area: Rect, frame: &mut Frame<'_>) {
        let layout = self.document.resolve();
        let widget = TimelineWidget::new(&layout, &self.theme, &self.icons)
            .title("Timeline")
            .spinner_frame(self.tick);

        let max_scroll = widget
            .content_height(area.width)
            .saturating_sub(usize::from(area.height));
        self.scroll = self.scroll.min(max_scroll);

        frame.render_widget(widget.scroll(self.scroll), area);
    }
}

/// Run the viewer main loop.
pub fn run_viewer<B: Backend>(terminal: &mut Terminal<B>, app: &mut ViewerApp) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.tick = app.tick.wrapping_add(1);

        // Handle events (100ms poll keeps the spinner moving)
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key_event(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
