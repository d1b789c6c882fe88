//! Text measuring and wrapping utilities.
//!
//! This module provides:
//! - [`visual_width`], [`truncate_to_width`] - Unicode-aware width helpers
//! - [`wrap_text`] - Wrap content to a column width

mod width;
mod wrap;

pub use width::{truncate_to_width, visual_width};
pub use wrap::wrap_text;
