//! Display formatting for dates and previews.

use time::OffsetDateTime;
use time::macros::format_description;

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Characters of an excerpt shown on a dashboard row.
pub const EXCERPT_PREVIEW_CHARS: usize = 50;
/// Technologies shown on a dashboard row.
pub const TECH_PREVIEW_COUNT: usize = 2;

/// Long US-style date, e.g. `March 4, 2025`.
#[must_use]
pub fn format_date(at: OffsetDateTime) -> String {
    let fmt = format_description!("[month repr:long] [day padding:none], [year]");
    at.format(fmt).unwrap_or_default()
}

/// First [`EXCERPT_PREVIEW_CHARS`] characters followed by an ellipsis.
#[must_use]
pub fn excerpt_preview(excerpt: &str) -> String {
    let head: String = excerpt.chars().take(EXCERPT_PREVIEW_CHARS).collect();
    format!("{head}...")
}

/// Leading technologies joined for a compact row.
#[must_use]
pub fn tech_preview(technologies: &[String]) -> String {
    technologies
        .iter()
        .take(TECH_PREVIEW_COUNT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
