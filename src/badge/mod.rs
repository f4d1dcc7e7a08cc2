//! Badge Module
//!
//! Renders download counts as Shields-style SVG badges.

mod color;
mod format;
mod svg;

pub use color::{resolve_color, DEFAULT_COLOR};
pub use format::format_count;
pub use svg::{box_width, escape_xml, render_badge, BADGE_HEIGHT};

use crate::models::Metric;

/// Maximum label length in characters
pub const MAX_LABEL_LENGTH: usize = 50;

/// Resolves the badge label: the trimmed caller label capped at
/// [`MAX_LABEL_LENGTH`] characters, or the metric's default.
pub fn resolve_label(raw: Option<&str>, metric: Metric) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(label) => label.chars().take(MAX_LABEL_LENGTH).collect(),
        None => metric.default_label().to_string(),
    }
}
