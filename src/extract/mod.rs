//! Signal extractors.
//!
//! Each submodule produces one typed category of information about the
//! page. The layout, SEO, tracker, accessibility, and security extractors
//! are pure functions over the captured snapshot; the technology and
//! performance extractors additionally query the live page, and the
//! pipeline degrades them to defaults (with a report warning) when those
//! queries fail.

pub mod a11y;
pub mod layout;
pub mod perf;
pub mod security;
pub mod seo;
pub mod tech;
pub mod trackers;

#[cfg(test)]
mod tests;

use scraper::ElementRef;

/// All extractor outputs, handed to the report assembler in one piece.
#[derive(Debug, Clone)]
pub struct ExtractedSignals {
    pub tech_stack: Vec<String>,
    pub trackers: Vec<String>,
    pub layout: layout::LayoutSignals,
    pub seo: seo::SeoSignals,
    pub performance: perf::PerformanceMetrics,
    pub accessibility: Vec<String>,
    pub security: Vec<security::SecurityFinding>,
}

/// Collects an element's text with whitespace collapsed to single spaces.
pub(crate) fn collapsed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// An image counts as missing alt text when the attribute is absent or
/// whitespace-only.
pub(crate) fn missing_alt(element: ElementRef<'_>) -> bool {
    element
        .value()
        .attr("alt")
        .map(|alt| alt.trim().is_empty())
        .unwrap_or(true)
}
