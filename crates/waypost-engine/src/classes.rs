//! Class-name rendering for resolved layouts.
//!
//! The resolver works with enums and flags; this module turns them into the
//! prefixed class strings consumed by stylesheet-driven renderers and by the
//! `waypost classes` command.

use serde::Serialize;

use crate::layout::{Container, EntryView, Layout, Side};

/// Default class prefix.
pub const DEFAULT_PREFIX: &str = "waypost-timeline";

/// Class names of one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryClasses {
    pub index: usize,
    pub content: String,
    pub item: String,
    pub head: String,
}

/// Class names of a whole layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassReport {
    pub container: String,
    pub entries: Vec<EntryClasses>,
}

/// Prefixed class-name builder.
#[derive(Debug, Clone)]
pub struct ClassNames {
    prefix: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl ClassNames {
    /// Create a builder with a custom prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Container classes.
    pub fn container(&self, container: &Container<'_>) -> String {
        let p = &self.prefix;
        join([
            Some(p.clone()),
            container.pending.then(|| format!("{p}-pending")),
            container.reverse.then(|| format!("{p}-reverse")),
            container
                .mode_class()
                .map(|mode| format!("{p}-{}", mode.as_str())),
            container.has_label.then(|| format!("{p}-label")),
            container.rtl.then(|| format!("{p}-rtl")),
            container.class_name.map(str::to_string),
        ])
    }

    /// Item classes: base, pending, user class, then the resolved tags.
    pub fn item(&self, view: &EntryView<'_>) -> String {
        let p = &self.prefix;
        let side = match view.side {
            Side::Left => Some(format!("{p}-item-left")),
            Side::Right => Some(format!("{p}-item-right")),
            Side::Unset => None,
        };
        join([
            Some(format!("{p}-item")),
            view.entry.pending.then(|| format!("{p}-item-pending")),
            view.entry.class_name.clone(),
            view.is_last.then(|| format!("{p}-item-last")),
            side,
        ])
    }

    /// Dot head classes.
    pub fn head(&self, view: &EntryView<'_>) -> String {
        let p = &self.prefix;
        join([
            Some(format!("{p}-item-head")),
            view.entry
                .color
                .preset_name()
                .map(|color| format!("{p}-item-head-{color}")),
            view.entry
                .custom_dot()
                .map(|_| format!("{p}-item-head-custom")),
        ])
    }

    /// Classes for every part of a layout.
    pub fn report(&self, layout: &Layout<'_>) -> ClassReport {
        ClassReport {
            container: self.container(&layout.container),
            entries: layout
                .views
                .iter()
                .map(|view| EntryClasses {
                    index: view.index,
                    content: view.entry.content.clone(),
                    item: self.item(view),
                    head: self.head(view),
                })
                .collect(),
        }
    }
}

fn join<const N: usize>(tokens: [Option<String>; N]) -> String {
    tokens
        .into_iter()
        .flatten()
        .filter(|token| !token.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
