//! Timeline rendering.
//!
//! This module provides:
//! - [`plan_rows`] - Lay a resolved timeline out into terminal rows
//! - [`TimelineWidget`] - Widget drawing those rows into a buffer

mod rows;
mod widget;

pub use rows::{content_region, plan_rows, Geometry, Region, Row, RowStyle, GUTTER};
pub use widget::TimelineWidget;
