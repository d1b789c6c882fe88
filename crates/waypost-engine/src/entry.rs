//! Timeline entry model.
//!
//! An [`Entry`] is one row of a timeline: its content, an optional label shown
//! on the opposite side of the rail, an optional side override, and the look
//! of its dot.

use serde::{Deserialize, Serialize};

/// Explicit side override for a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Left,
    Right,
}

/// Dot color for an entry.
///
/// The four presets map onto theme colors. Anything else is kept verbatim as
/// [`DotColor::Custom`] and interpreted by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DotColor {
    #[default]
    Blue,
    Red,
    Green,
    Gray,
    /// Any other color string (`"#ff8800"`, `"magenta"`, ...).
    Custom(String),
}

impl DotColor {
    /// Name of the preset, or `None` for custom colors.
    pub fn preset_name(&self) -> Option<&'static str> {
        match self {
            Self::Blue => Some("blue"),
            Self::Red => Some("red"),
            Self::Green => Some("green"),
            Self::Gray => Some("gray"),
            Self::Custom(_) => None,
        }
    }
}

impl From<String> for DotColor {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "blue" => Self::Blue,
            "red" => Self::Red,
            "green" => Self::Green,
            "gray" | "grey" => Self::Gray,
            _ => Self::Custom(value),
        }
    }
}

impl From<&str> for DotColor {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<DotColor> for String {
    fn from(value: DotColor) -> Self {
        match value {
            DotColor::Custom(color) => color,
            preset => preset.preset_name().unwrap_or("blue").to_string(),
        }
    }
}

/// One timeline row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    /// Free-form content; newlines start new lines.
    pub content: String,

    /// Label rendered on the opposite side of the rail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Side override, honored in alternate mode and (for `right`) with no mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Dot color.
    pub color: DotColor,

    /// Custom dot glyph replacing the default marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot: Option<String>,

    /// Whether this is the in-progress ghost entry.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub pending: bool,

    /// User class merged into the entry's resolved classes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Entry {
    /// Create an entry with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the side override.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the dot color.
    #[must_use]
    pub fn color(mut self, color: impl Into<DotColor>) -> Self {
        self.color = color.into();
        self
    }

    /// Set a custom dot glyph.
    #[must_use]
    pub fn dot(mut self, dot: impl Into<String>) -> Self {
        self.dot = Some(dot.into());
        self
    }

    /// Set the user class.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Whether the entry carries a non-empty label.
    pub fn has_label(&self) -> bool {
        self.label.as_deref().is_some_and(|label| !label.is_empty())
    }

    /// Custom dot glyph. An empty glyph counts as unset.
    pub fn custom_dot(&self) -> Option<&str> {
        self.dot.as_deref().filter(|dot| !dot.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let entry = Entry::new("Deploy")
            .label("2024-03-01")
            .position(Position::Right)
            .color("red")
            .dot("*")
            .class_name("deploy");

        assert_eq!(entry.content, "Deploy");
        assert_eq!(entry.label.as_deref(), Some("2024-03-01"));
        assert_eq!(entry.position, Some(Position::Right));
        assert_eq!(entry.color, DotColor::Red);
        assert_eq!(entry.dot.as_deref(), Some("*"));
        assert_eq!(entry.class_name.as_deref(), Some("deploy"));
        assert!(!entry.pending);
    }

    #[test]
    fn test_has_label_ignores_empty() {
        assert!(!Entry::new("a").has_label());
        assert!(!Entry::new("a").label("").has_label());
        assert!(Entry::new("a").label("x").has_label());
    }

    #[test]
    fn test_dot_color_presets() {
        assert_eq!(DotColor::from("Green"), DotColor::Green);
        assert_eq!(DotColor::from("grey"), DotColor::Gray);
        assert_eq!(DotColor::from(""), DotColor::Blue);
        assert_eq!(
            DotColor::from("#00ccff"),
            DotColor::Custom("#00ccff".into())
        );
        assert_eq!(DotColor::Custom("x".into()).preset_name(), None);
    }

    #[test]
    fn test_entry_json() {
        let entry: Entry =
            serde_json::from_str(r#"{"content":"Ship","color":"gray","position":"left"}"#)
                .unwrap();
        assert_eq!(entry.color, DotColor::Gray);
        assert_eq!(entry.position, Some(Position::Left));

        let json = serde_json::to_value(Entry::new("Ship").color("#123456")).unwrap();
        assert_eq!(json["color"], "#123456");
        assert!(json.get("pending").is_none());
        assert!(json.get("label").is_none());
    }

    #[test]
    fn test_custom_dot() {
        assert_eq!(Entry::new("a").dot("*").custom_dot(), Some("*"));
        assert_eq!(Entry::new("a").dot("").custom_dot(), None);
        assert_eq!(Entry::new("a").custom_dot(), None);
    }
}
