use thiserror::Error;

/// Errors surfaced by the analysis pipeline.
///
/// All three kinds are fatal for the request but never for the process;
/// retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No WebDriver endpoint could be reached or a browser session could
    /// not be created.
    #[error("browser unavailable: {0}")]
    BrowserUnavailable(String),

    /// Every load strategy timed out or errored for the given URL.
    #[error("navigation failed for {url}: {reason}")]
    NavigationFailed { url: String, reason: String },

    /// The page snapshot could not be captured.
    #[error("extraction failed: {0}")]
    ExtractionFailure(String),
}
