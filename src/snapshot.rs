use crate::error::AnalysisError;
use fantoccini::Client;

/// The rendered document plus screenshot, captured once per request.
///
/// Every snapshot-based extractor reads from this value; nothing re-queries
/// the live page after capture except the technology and performance
/// extractors, which need runtime browser APIs.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub html: String,
    pub screenshot: Vec<u8>,
}

/// Captures the page snapshot after navigation settles.
///
/// An unobtainable page source aborts the request (every extractor needs
/// the document); a failed screenshot degrades to empty bytes plus a
/// warning, since a report without an image is still useful.
pub async fn capture(
    client: &Client,
    warnings: &mut Vec<String>,
) -> Result<PageSnapshot, AnalysisError> {
    let html = client
        .source()
        .await
        .map_err(|err| AnalysisError::ExtractionFailure(format!("page source: {err}")))?;

    let screenshot = match client.screenshot().await {
        Ok(bytes) => bytes,
        Err(err) => {
            ::log::warn!("screenshot capture failed: {}", err);
            warnings.push(format!("screenshot unavailable: {err}"));
            Vec::new()
        }
    };

    ::log::debug!(
        "captured snapshot: {} bytes of markup, {} bytes of screenshot",
        html.len(),
        screenshot.len()
    );

    Ok(PageSnapshot { html, screenshot })
}
