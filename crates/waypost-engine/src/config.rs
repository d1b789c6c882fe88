//! Configuration types for a timeline.
//!
//! [`TimelineConfig`] carries everything the layout resolver needs besides
//! the entries themselves: the layout mode, the reverse flag and the pending
//! ghost entry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// Layout mode for the whole timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Every entry on the left side of the rail.
    Left,
    /// Every entry on the right side of the rail.
    Right,
    /// Entries alternate sides, honoring explicit positions.
    Alternate,
}

impl Mode {
    /// Parse a mode name. Unknown names yield `None` (no mode).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "alternate" => Some(Self::Alternate),
            _ => None,
        }
    }

    /// Mode name as used in class names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Alternate => "alternate",
        }
    }

    /// Next mode in the cycle none -> left -> right -> alternate -> none.
    pub fn cycle(mode: Option<Self>) -> Option<Self> {
        match mode {
            None => Some(Self::Left),
            Some(Self::Left) => Some(Self::Right),
            Some(Self::Right) => Some(Self::Alternate),
            Some(Self::Alternate) => None,
        }
    }
}

/// Pending ghost entry configuration.
///
/// In JSON this is `false`/`null` (off), `true` (ghost without content) or a
/// string (ghost showing that text; an empty string counts as off).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Pending {
    #[default]
    Off,
    On,
    Content(String),
}

impl Pending {
    /// Whether a ghost entry should be appended.
    pub fn is_active(&self) -> bool {
        match self {
            Self::Off => false,
            Self::On => true,
            Self::Content(text) => !text.is_empty(),
        }
    }

    /// Text shown inside the ghost entry.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Content(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

impl From<bool> for Pending {
    fn from(value: bool) -> Self {
        if value {
            Self::On
        } else {
            Self::Off
        }
    }
}

impl From<&str> for Pending {
    fn from(value: &str) -> Self {
        Self::Content(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPending {
    Flag(bool),
    Text(String),
}

impl<'de> Deserialize<'de> for Pending {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawPending>::deserialize(deserializer)? {
            None | Some(RawPending::Flag(false)) => Self::Off,
            Some(RawPending::Flag(true)) => Self::On,
            Some(RawPending::Text(text)) if text.is_empty() => Self::Off,
            Some(RawPending::Text(text)) => Self::Content(text),
        })
    }
}

impl Serialize for Pending {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Off => serializer.serialize_bool(false),
            Self::On => serializer.serialize_bool(true),
            Self::Content(text) => serializer.serialize_str(text),
        }
    }
}

/// Timeline container configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Layout mode; unknown names deserialize as no mode.
    #[serde(
        deserialize_with = "deserialize_mode",
        skip_serializing_if = "Option::is_none"
    )]
    pub mode: Option<Mode>,

    /// Reverse the whole sequence, ghost entry included.
    pub reverse: bool,

    /// Trailing in-progress ghost entry.
    pub pending: Pending,

    /// Dot glyph for the ghost entry (defaults to the spinner icon).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_dot: Option<String>,

    /// User class appended to the container classes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Right-to-left direction.
    pub rtl: bool,
}

impl TimelineConfig {
    /// Set the mode.
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the reverse flag.
    #[must_use]
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Set the pending ghost entry.
    #[must_use]
    pub fn pending(mut self, pending: impl Into<Pending>) -> Self {
        self.pending = pending.into();
        self
    }

    /// Set the ghost entry's dot glyph.
    #[must_use]
    pub fn pending_dot(mut self, dot: impl Into<String>) -> Self {
        self.pending_dot = Some(dot.into());
        self
    }

    /// Set the right-to-left flag.
    #[must_use]
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }
}

fn deserialize_mode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Mode>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let mode = match &raw {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::String(name)) => Mode::parse(name),
        Some(_) => None,
    };
    if mode.is_none() {
        if let Some(raw) = raw.filter(|raw| raw.as_str() != Some("")) {
            debug!(mode = %raw, "unknown timeline mode, using default layout");
        }
    }
    Ok(mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TimelineConfig::default();
        assert_eq!(config.mode, None);
        assert!(!config.reverse);
        assert_eq!(config.pending, Pending::Off);
        assert!(!config.rtl);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse("alternate"), Some(Mode::Alternate));
        assert_eq!(Mode::parse(" Right "), Some(Mode::Right));
        assert_eq!(Mode::parse("diagonal"), None);
        assert_eq!(Mode::parse(""), None);
    }

    #[test]
    fn test_mode_cycle_wraps() {
        let mut mode = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            mode = Mode::cycle(mode);
            seen.push(mode);
        }
        assert_eq!(
            seen,
            vec![Some(Mode::Left), Some(Mode::Right), Some(Mode::Alternate), None]
        );
    }

    #[test]
    fn test_unknown_mode_falls_through() {
        let config: TimelineConfig = serde_json::from_str(r#"{"mode":"zigzag"}"#).unwrap();
        assert_eq!(config.mode, None);

        let config: TimelineConfig = serde_json::from_str(r#"{"mode":null}"#).unwrap();
        assert_eq!(config.mode, None);

        let config: TimelineConfig = serde_json::from_str(r#"{"mode":"alternate"}"#).unwrap();
        assert_eq!(config.mode, Some(Mode::Alternate));
    }

    #[test]
    fn test_non_string_mode_falls_through() {
        for json in [r#"{"mode":true}"#, r#"{"mode":3}"#, r#"{"mode":["left"]}"#] {
            let config: TimelineConfig = serde_json::from_str(json).unwrap();
            assert_eq!(config.mode, None, "{json}");
        }
    }

    #[test]
    fn test_pending_json_forms() {
        let parse = |json: &str| -> Pending {
            serde_json::from_str::<TimelineConfig>(json).unwrap().pending
        };
        assert_eq!(parse(r#"{"pending":true}"#), Pending::On);
        assert_eq!(parse(r#"{"pending":false}"#), Pending::Off);
        assert_eq!(parse(r#"{"pending":null}"#), Pending::Off);
        assert_eq!(parse(r#"{"pending":""}"#), Pending::Off);
        assert_eq!(
            parse(r#"{"pending":"Recording..."}"#),
            Pending::Content("Recording...".into())
        );
    }

    #[test]
    fn test_pending_activity() {
        assert!(!Pending::Off.is_active());
        assert!(Pending::On.is_active());
        assert!(Pending::from("x").is_active());
        assert!(!Pending::Content(String::new()).is_active());
        assert_eq!(Pending::On.content(), None);
        assert_eq!(Pending::from("x").content(), Some("x"));
    }

    #[test]
    fn test_config_serialize_roundtrip() {
        let config = TimelineConfig::default()
            .mode(Mode::Right)
            .reverse(true)
            .pending("Waiting");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: TimelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
