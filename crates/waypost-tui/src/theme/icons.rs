//! Glyph sets for Nerd Fonts, Unicode, and ASCII fallback.

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font icons (default, richest experience).
    #[default]
    Nerd,
    /// Standard Unicode symbols (wide compatibility).
    Unicode,
    /// ASCII-only fallback (maximum compatibility, also used with `NO_COLOR`).
    Ascii,
}

/// Icon set based on configured mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    // === Dots ===

    /// Default entry dot.
    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰝦",
            IconMode::Unicode => "○",
            IconMode::Ascii => "o",
        }
    }

    /// Dot of the pending ghost entry.
    pub fn pending(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰦖",
            IconMode::Unicode => "◌",
            IconMode::Ascii => "~",
        }
    }

    // === Connectors ===

    pub fn connector_solid(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "│",
            IconMode::Ascii => "|",
        }
    }

    pub fn connector_dotted(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "┊",
            IconMode::Ascii => ":",
        }
    }

    // === Spinner Frames (for animation) ===

    pub fn spinner_frames(&self) -> &'static [&'static str] {
        match self.mode {
            IconMode::Nerd => &["󰪞", "󰪟", "󰪠", "󰪡", "󰪢", "󰪣"],
            IconMode::Unicode => &["◐", "◓", "◑", "◒"],
            IconMode::Ascii => &["|", "/", "-", "\\"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nerd() {
        let icons = IconSet::default();
        assert_eq!(icons.mode(), IconMode::Nerd);
    }

    #[test]
    fn test_unicode_icons() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.dot(), "○");
        assert_eq!(icons.connector_solid(), "│");
        assert_eq!(icons.connector_dotted(), "┊");
    }

    #[test]
    fn test_ascii_icons_are_ascii() {
        let icons = IconSet::new(IconMode::Ascii);
        for glyph in [
            icons.dot(),
            icons.pending(),
            icons.connector_solid(),
            icons.connector_dotted(),
        ] {
            assert!(glyph.is_ascii(), "{glyph} is not ASCII");
        }
        assert_ne!(icons.dot(), icons.pending());
    }

    #[test]
    fn test_spinner_frames_count() {
        let nerd = IconSet::new(IconMode::Nerd);
        let unicode = IconSet::new(IconMode::Unicode);
        let ascii = IconSet::new(IconMode::Ascii);

        assert_eq!(nerd.spinner_frames().len(), 6);
        assert_eq!(unicode.spinner_frames().len(), 4);
        assert_eq!(ascii.spinner_frames().len(), 4);
    }
}
