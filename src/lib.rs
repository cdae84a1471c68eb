//! Browser-driven page analysis.
//!
//! Fetches a live web page through a WebDriver-controlled browser,
//! extracts structural and content signals from the rendered document,
//! and produces a scored diagnostic report: technology stack, trackers,
//! layout, SEO, performance, accessibility, and security.

// Re-export modules
pub mod config;
pub mod error;
pub mod extract;
pub mod navigate;
mod pipeline;
pub mod report;
pub mod score;
pub mod session;
pub mod snapshot;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::AnalyzerConfig;
pub use error::AnalysisError;
pub use report::AnalysisReport;
pub use score::ScoreResult;

use session::SessionManager;
use std::path::Path;

/// One analysis request, created per incoming call
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub target_url: String,
    /// Shortens navigation timeouts and the settle delay, trading
    /// completeness for latency
    pub quick: bool,
}

/// Entry point for page analysis.
///
/// Owns the long-lived browser session state; construct one `Analyzer`
/// and reuse it across requests. Each `analyze` call drives an isolated
/// page context through the pipeline and closes it before returning.
pub struct Analyzer {
    session: SessionManager,
}

impl Analyzer {
    /// Create an analyzer with default configuration
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer from the given configuration
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            session: SessionManager::new(config),
        }
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let config = AnalyzerConfig::from_file(path)?;
        Ok(Self::with_config(config))
    }

    /// Override the WebDriver endpoint
    pub fn with_webdriver_url(self, url: impl Into<String>) -> Self {
        let mut config = self.session.config().clone();
        config.webdriver_url = url.into();
        Self::with_config(config)
    }

    /// Override the maximum number of concurrently open page sessions
    pub fn with_max_concurrency(self, max_concurrency: usize) -> Self {
        let mut config = self.session.config().clone();
        config.max_concurrency = max_concurrency.max(1);
        Self::with_config(config)
    }

    /// Analyze a single page and return its diagnostic report.
    pub async fn analyze(
        &self,
        target_url: &str,
        quick: bool,
    ) -> Result<AnalysisReport, AnalysisError> {
        let request = AnalysisRequest {
            target_url: target_url.to_string(),
            quick,
        };
        pipeline::run(&self.session, &request).await
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
