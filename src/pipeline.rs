use crate::AnalysisRequest;
use crate::error::AnalysisError;
use crate::extract::{ExtractedSignals, a11y, layout, perf, security, seo, tech, trackers};
use crate::navigate::{self, NavigationBudget, PageProbe};
use crate::report::{self, AnalysisReport};
use crate::score;
use crate::session::SessionManager;
use crate::snapshot;
use crate::utils::normalize_url;
use fantoccini::Client;
use scraper::Html;
use std::time::Instant;

/// Runs one analysis request through the full pipeline.
///
/// The page context is closed on every exit path before the result is
/// returned, so a failed request never leaks a browser session.
pub(crate) async fn run(
    session: &SessionManager,
    request: &AnalysisRequest,
) -> Result<AnalysisReport, AnalysisError> {
    let started = Instant::now();
    let url = normalize_url(&request.target_url);
    ::log::info!("analyzing {} (quick: {})", url, request.quick);

    let page = session.acquire().await?;
    let result = analyze_page(page.client(), &url, request.quick, started).await;
    page.close().await;

    match &result {
        Ok(report) => ::log::info!(
            "analysis of {} finished in {}ms (score {})",
            url,
            report.analysis_time_ms,
            report.score.score
        ),
        Err(err) => ::log::error!("analysis of {} failed: {}", url, err),
    }

    result
}

async fn analyze_page(
    client: &Client,
    url: &str,
    quick: bool,
    started: Instant,
) -> Result<AnalysisReport, AnalysisError> {
    let budget = NavigationBudget::for_mode(quick);
    let mut probe = PageProbe::new(client);
    let outcome = navigate::drive(&mut probe, url, budget).await?;
    ::log::debug!(
        "navigation settled via {} in {}ms",
        outcome.strategy.label(),
        outcome.elapsed_ms
    );

    let mut warnings = Vec::new();
    let snapshot = snapshot::capture(client, &mut warnings).await?;

    // The two live-query extractors run concurrently; their failures
    // degrade to defaults instead of aborting the report.
    let (tech_result, perf_result) =
        tokio::join!(tech::detect(client, &snapshot.html), perf::extract(client));

    let tech_stack = match tech_result {
        Ok(stack) => stack,
        Err(reason) => {
            ::log::warn!("technology detection degraded for {}: {}", url, reason);
            warnings.push(format!("technology detection degraded: {reason}"));
            tech::detect_offline(&snapshot.html)
        }
    };
    let performance = match perf_result {
        Ok(metrics) => metrics,
        Err(reason) => {
            ::log::warn!("performance metrics unavailable for {}: {}", url, reason);
            warnings.push(format!("performance metrics unavailable: {reason}"));
            perf::PerformanceMetrics::default()
        }
    };

    // The remaining extractors are pure functions over the snapshot and
    // share no mutable state.
    let doc = Html::parse_document(&snapshot.html);
    let layout = layout::extract(&doc);
    let seo = seo::extract(&doc);
    let accessibility = a11y::check(&doc);
    let security = security::check(&doc, &snapshot.html);
    let trackers = trackers::detect(&snapshot.html);

    let score = score::score_seo(&seo, &layout);

    let signals = ExtractedSignals {
        tech_stack,
        trackers,
        layout,
        seo,
        performance,
        accessibility,
        security,
    };

    Ok(report::assemble(
        url.to_string(),
        snapshot.screenshot,
        signals,
        score,
        started.elapsed(),
        warnings,
    ))
}
