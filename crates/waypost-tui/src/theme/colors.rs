//! Catppuccin color palettes for timeline rendering.

use std::str::FromStr;

use ratatui::style::Color;
use waypost_engine::DotColor;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Dot presets
    pub blue: Color,
    pub red: Color,
    pub green: Color,
    pub gray: Color,

    // Lines
    pub rail: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46), // #1e1e2e

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            blue: Color::Rgb(137, 180, 250),  // #89b4fa
            red: Color::Rgb(243, 139, 168),   // #f38ba8
            green: Color::Rgb(166, 227, 161), // #a6e3a1
            gray: Color::Rgb(147, 153, 178),  // #9399b2 (overlay2)

            rail: Color::Rgb(88, 91, 112),  // #585b70 (surface2)
            border: Color::Rgb(69, 71, 90), // #45475a
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245), // #eff1f5

            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            blue: Color::Rgb(30, 102, 245),   // #1e66f5
            red: Color::Rgb(210, 15, 57),     // #d20f39
            green: Color::Rgb(64, 160, 43),   // #40a02b
            gray: Color::Rgb(124, 127, 147),  // #7c7f93 (overlay2)

            rail: Color::Rgb(172, 176, 190),   // #acb0be (surface2)
            border: Color::Rgb(188, 192, 204), // #bcc0cc
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            blue: Color::LightBlue,
            red: Color::LightRed,
            green: Color::LightGreen,
            gray: Color::Gray,

            rail: Color::White,
            border: Color::White,
        }
    }

    /// Look up a theme by name (`mocha`, `latte`, `high-contrast`).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mocha" | "dark" => Some(Self::mocha()),
            "latte" | "light" => Some(Self::latte()),
            "high-contrast" | "high_contrast" | "contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    /// Color of an entry's dot. Unparseable custom colors fall back to blue.
    pub fn dot_color(&self, color: &DotColor) -> Color {
        match color {
            DotColor::Blue => self.blue,
            DotColor::Red => self.red,
            DotColor::Green => self.green,
            DotColor::Gray => self.gray,
            DotColor::Custom(raw) => Color::from_str(raw.trim()).unwrap_or(self.blue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mocha_theme_creates() {
        let theme = Theme::mocha();
        assert!(matches!(theme.base, Color::Rgb(30, 30, 46)));
    }

    #[test]
    fn test_latte_theme_creates() {
        let theme = Theme::latte();
        assert!(matches!(theme.base, Color::Rgb(239, 241, 245)));
    }

    #[test]
    fn test_high_contrast_theme_creates() {
        let theme = Theme::high_contrast();
        assert!(matches!(theme.base, Color::Black));
    }

    #[test]
    fn test_by_name() {
        assert!(matches!(
            Theme::by_name("LATTE").map(|t| t.base),
            Some(Color::Rgb(239, 241, 245))
        ));
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn test_dot_color_presets() {
        let theme = Theme::mocha();
        assert_eq!(theme.dot_color(&DotColor::Blue), theme.blue);
        assert_eq!(theme.dot_color(&DotColor::Red), theme.red);
        assert_eq!(theme.dot_color(&DotColor::Green), theme.green);
        assert_eq!(theme.dot_color(&DotColor::Gray), theme.gray);
    }

    #[test]
    fn test_dot_color_custom() {
        let theme = Theme::mocha();
        assert_eq!(
            theme.dot_color(&DotColor::Custom("#ff8800".into())),
            Color::Rgb(255, 136, 0)
        );
        assert_eq!(
            theme.dot_color(&DotColor::Custom("magenta".into())),
            Color::Magenta
        );
        assert_eq!(
            theme.dot_color(&DotColor::Custom("not a color".into())),
            theme.blue
        );
    }
}
