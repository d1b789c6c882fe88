//! Border sets for Unicode and ASCII fallback.

use ratatui::symbols::border;

use super::icons::IconMode;

/// `+--+` border for terminals without box drawing characters.
const ASCII: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Border set based on icon mode.
#[derive(Debug, Clone)]
pub struct BorderSet {
    mode: IconMode,
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl BorderSet {
    /// Create a new border set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Timeline frame border: rounded for Unicode, `+--+` for ASCII.
    pub fn normal(&self) -> border::Set {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => border::ROUNDED,
            IconMode::Ascii => ASCII,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nerd_mode() {
        let borders = BorderSet::default();
        assert_eq!(borders.mode(), IconMode::Nerd);
    }

    #[test]
    fn test_unicode_borders() {
        let borders = BorderSet::new(IconMode::Unicode);
        assert_eq!(borders.normal().top_left, "╭");
    }

    #[test]
    fn test_ascii_borders() {
        let normal = BorderSet::new(IconMode::Ascii).normal();
        assert_eq!(normal.top_left, "+");
        assert_eq!(normal.horizontal_top, "-");
        assert_eq!(normal.vertical_left, "|");
    }
}
