//! Timeline documents.
//!
//! A document is a JSON object holding the container configuration next to
//! an `items` array:
//!
//! ```json
//! { "mode": "alternate", "pending": "Recording...", "items": [
//!     "Create a services site",
//!     { "content": "Solve initial network problems", "color": "red" },
//!     null
//! ] }
//! ```
//!
//! Items may be full entry objects or plain strings. `null`, `false`, `0` and
//! `""` are falsy and are skipped by the layout resolver.

use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::TimelineConfig;
use crate::entry::Entry;
use crate::layout::{resolve, Layout};

/// A timeline configuration together with its entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineDocument {
    #[serde(flatten)]
    pub config: TimelineConfig,

    /// Entry slots; `None` marks a falsy item.
    #[serde(default, deserialize_with = "deserialize_items")]
    pub items: Vec<Option<Entry>>,
}

impl TimelineDocument {
    /// Create a document from a configuration and entries.
    pub fn new(config: TimelineConfig, items: Vec<Option<Entry>>) -> Self {
        Self { config, items }
    }

    /// Parse a document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(DocumentError::Parse)
    }

    /// Load a document from a file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(DocumentError::Io)?;
        let document = Self::from_json_str(&content).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "failed to parse timeline document");
        })?;
        debug!(
            path = %path.display(),
            items = document.items.len(),
            "loaded timeline document"
        );
        Ok(document)
    }

    /// Save the document to a file.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let content = serde_json::to_string_pretty(self).map_err(DocumentError::Serialize)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(DocumentError::Io)?;
            }
        }
        std::fs::write(path, content).map_err(DocumentError::Io)
    }

    /// Resolve the layout of this document.
    pub fn resolve(&self) -> Layout<'_> {
        resolve(&self.items, &self.config)
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn deserialize_items<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Option<Entry>>, D::Error> {
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    raw.into_iter()
        .map(|value| match value {
            value if is_falsy(&value) => Ok(None),
            Value::String(content) => Ok(Some(Entry::new(content))),
            value => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
        })
        .collect()
}

/// Errors that can occur loading or saving documents.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// I/O error reading or writing a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing document JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing a document to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
