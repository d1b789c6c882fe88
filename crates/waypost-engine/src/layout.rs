//! Layout resolver.
//!
//! Turns caller entries plus a [`TimelineConfig`] into a [`Layout`]: the final
//! display sequence with the side, "last" marker and connector of every entry.
//! Resolution is pure; entries are borrowed and never modified.

use std::borrow::Cow;

use tracing::debug;

use crate::config::{Mode, TimelineConfig};
use crate::entry::{Entry, Position};

/// Resolved side of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    /// No side class; renders as left.
    Unset,
}

impl Side {
    /// Whether the entry renders on the right side.
    pub fn is_right(self) -> bool {
        self == Self::Right
    }
}

/// Connector line drawn below an entry's dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    Solid,
    /// Leads into (or out of) the pending ghost entry.
    Dotted,
    Hidden,
}

/// Where the rail sits inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailPlacement {
    Start,
    Center,
    End,
}

/// Container-level flags of a resolved layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container<'a> {
    pub mode: Option<Mode>,
    pub reverse: bool,
    pub pending: bool,
    /// Some entry carries a label; overrides mode classing.
    pub has_label: bool,
    pub rtl: bool,
    pub class_name: Option<&'a str>,
}

impl Container<'_> {
    /// Mode used for container classing (`None` in label layout).
    pub fn mode_class(&self) -> Option<Mode> {
        if self.has_label {
            None
        } else {
            self.mode
        }
    }

    /// Rail placement implied by the container classes.
    pub fn rail(&self) -> RailPlacement {
        if self.has_label {
            return RailPlacement::Center;
        }
        match self.mode {
            Some(Mode::Alternate) => RailPlacement::Center,
            Some(Mode::Right) => RailPlacement::End,
            Some(Mode::Left) | None => RailPlacement::Start,
        }
    }
}

/// One entry at its final display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView<'a> {
    /// Caller entry, or the owned ghost entry.
    pub entry: Cow<'a, Entry>,
    pub index: usize,
    pub side: Side,
    pub is_last: bool,
    pub connector: Connector,
}

/// Result of resolving a timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<'a> {
    pub container: Container<'a>,
    pub views: Vec<EntryView<'a>>,
}

impl Layout<'_> {
    /// Number of entries in the final sequence.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether nothing is left to render.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Index of the entry carrying the "last" marker, if any.
    pub fn last_index(&self) -> Option<usize> {
        self.views.iter().position(|view| view.is_last)
    }
}

/// Build the ghost entry for the current configuration.
pub fn pending_entry(config: &TimelineConfig) -> Option<Entry> {
    if !config.pending.is_active() {
        return None;
    }
    Some(Entry {
        content: config.pending.content().unwrap_or_default().to_string(),
        dot: config.pending_dot.clone().filter(|dot| !dot.is_empty()),
        pending: true,
        ..Entry::default()
    })
}

/// Resolve side for an entry at its final index.
pub fn side_for(entry: &Entry, index: usize, mode: Option<Mode>) -> Side {
    match mode {
        Some(Mode::Alternate) => match entry.position {
            Some(Position::Right) => Side::Right,
            Some(Position::Left) => Side::Left,
            None if index % 2 == 0 => Side::Left,
            None => Side::Right,
        },
        Some(Mode::Left) => Side::Left,
        Some(Mode::Right) => Side::Right,
        None => {
            if entry.position == Some(Position::Right) {
                Side::Right
            } else {
                Side::Unset
            }
        }
    }
}

/// Index that receives the "last" marker in a sequence of `count` entries.
///
/// An unreversed timeline with a ghost entry marks the entry before the ghost.
pub fn last_index(count: usize, reverse: bool, pending: bool) -> Option<usize> {
    if !reverse && pending {
        count.checked_sub(2)
    } else {
        count.checked_sub(1)
    }
}

fn connector_for(entry: &Entry, is_last: bool, reverse: bool, pending: bool) -> Connector {
    if entry.pending {
        return if reverse {
            Connector::Dotted
        } else {
            Connector::Hidden
        };
    }
    if is_last {
        return if pending && !reverse {
            Connector::Dotted
        } else {
            Connector::Hidden
        };
    }
    Connector::Solid
}

/// Resolve the layout of `entries` under `config`.
///
/// `None` slots are falsy entries: they are dropped before any index is
/// assigned.
pub fn resolve<'a>(entries: &'a [Option<Entry>], config: &'a TimelineConfig) -> Layout<'a> {
    let mut sequence: Vec<Cow<'a, Entry>> = entries.iter().flatten().map(Cow::Borrowed).collect();
    sequence.extend(pending_entry(config).map(Cow::Owned));
    if config.reverse {
        sequence.reverse();
    }

    let pending = config.pending.is_active();
    let last = last_index(sequence.len(), config.reverse, pending);
    let has_label = sequence.iter().any(|entry| entry.has_label());

    let views: Vec<EntryView<'a>> = sequence
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let is_last = last == Some(index);
            EntryView {
                side: side_for(&entry, index, config.mode),
                connector: connector_for(&entry, is_last, config.reverse, pending),
                entry,
                index,
                is_last,
            }
        })
        .collect();

    debug!(
        entries = views.len(),
        skipped = entries.len() - entries.iter().flatten().count(),
        reverse = config.reverse,
        pending,
        has_label,
        "resolved timeline layout"
    );

    Layout {
        container: Container {
            mode: config.mode,
            reverse: config.reverse,
            pending,
            has_label,
            rtl: config.rtl,
            class_name: config.class_name.as_deref(),
        },
        views,
    }
}
