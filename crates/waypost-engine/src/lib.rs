//! waypost-engine: Headless layout engine for vertical timelines
//!
//! This crate provides the renderer-independent core of waypost, including:
//! - Entry and container configuration types
//! - The layout resolver (sides, "last" marker, connectors)
//! - Class-name rendering for resolved layouts
//! - JSON timeline documents

pub mod classes;
pub mod config;
pub mod document;
pub mod entry;
pub mod layout;

// Re-export commonly used types
pub use classes::{ClassNames, ClassReport, EntryClasses, DEFAULT_PREFIX};
pub use config::{Mode, Pending, TimelineConfig};
pub use document::{DocumentError, TimelineDocument};
pub use entry::{DotColor, Entry, Position};
pub use layout::{
    last_index, pending_entry, resolve, side_for, Connector, Container, EntryView, Layout,
    RailPlacement, Side,
};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
