use crate::extract::ExtractedSignals;
use crate::extract::layout::LayoutSignals;
use crate::extract::perf::PerformanceMetrics;
use crate::extract::security::SecurityFinding;
use crate::extract::seo::SeoSignals;
use crate::score::ScoreResult;
use chrono::Utc;
use serde::Serialize;
use std::time::Duration;

/// The complete diagnostic report for one analyzed page.
///
/// Immutable once assembled; owned by the caller. Screenshot bytes are
/// carried as a raw buffer and skipped during JSON serialization — the
/// boundary layer decides how to encode them for transport.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub url: String,
    #[serde(skip)]
    pub screenshot: Vec<u8>,
    pub tech_stack: Vec<String>,
    pub trackers: Vec<String>,
    pub layout: LayoutSignals,
    pub seo: SeoSignals,
    pub performance: PerformanceMetrics,
    pub accessibility: Vec<String>,
    pub security: Vec<SecurityFinding>,
    pub score: ScoreResult,
    pub analyzed_at: String,
    pub analysis_time_ms: u64,
    /// Degradation notes from extractors that could not complete
    pub warnings: Vec<String>,
}

/// Combines all signal outputs, the score, and timing metadata into one
/// report value. Pure construction, no side effects.
pub fn assemble(
    url: String,
    screenshot: Vec<u8>,
    signals: ExtractedSignals,
    score: ScoreResult,
    elapsed: Duration,
    warnings: Vec<String>,
) -> AnalysisReport {
    AnalysisReport {
        url,
        screenshot,
        tech_stack: signals.tech_stack,
        trackers: signals.trackers,
        layout: signals.layout,
        seo: signals.seo,
        performance: signals.performance,
        accessibility: signals.accessibility,
        security: signals.security,
        score,
        analyzed_at: Utc::now().to_rfc3339(),
        analysis_time_ms: elapsed.as_millis() as u64,
        warnings,
    }
}
