use clap::Parser;
use page_audit::Analyzer;
use page_audit::config::AnalyzerConfig;
use page_audit::utils::sanitize_filename;
use std::path::PathBuf;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting page analysis for: {}", args.url);

    println!("Note: page analysis requires a WebDriver server (e.g. ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    let config = AnalyzerConfig {
        webdriver_url: args.webdriver_url.clone(),
        max_concurrency: args.concurrency.max(1),
        user_agent: None,
    };
    let analyzer = Analyzer::with_config(config);

    let started = std::time::Instant::now();
    let report = match analyzer.analyze(&args.url, args.quick).await {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Analysis failed: {}", e);
            eprintln!("Analysis failed: {e}");
            std::process::exit(1);
        }
    };

    ::log::info!(
        "Analysis complete for {} in {:.2} seconds",
        report.url,
        started.elapsed().as_secs_f64()
    );

    // Persist the screenshot; the report JSON itself carries no image bytes
    if !args.no_screenshot && !report.screenshot.is_empty() {
        let path = args
            .screenshot
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.png", sanitize_filename(&report.url))));
        match std::fs::write(&path, &report.screenshot) {
            Ok(()) => ::log::info!("Screenshot written to {}", path.display()),
            Err(e) => ::log::warn!("Failed to write screenshot to {}: {}", path.display(), e),
        }
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(e) => {
            ::log::error!("Failed to serialize report: {}", e);
            std::process::exit(1);
        }
    }
}
