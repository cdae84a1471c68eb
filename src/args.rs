use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-audit")]
#[command(about = "Analyzes a live web page and produces a scored diagnostic report")]
#[command(version)]
pub struct Args {
    /// URL of the page to analyze
    pub url: String,

    /// Shorten navigation timeouts and the settle delay
    #[arg(short, long)]
    pub quick: bool,

    /// WebDriver endpoint (e.g. ChromeDriver)
    #[arg(long, default_value = "http://localhost:4444")]
    pub webdriver_url: String,

    /// Maximum number of concurrently open page sessions
    #[arg(short, long, default_value_t = 4)]
    pub concurrency: usize,

    /// Write the captured screenshot to this file (default: derived from the URL)
    #[arg(long)]
    pub screenshot: Option<PathBuf>,

    /// Skip writing the screenshot file
    #[arg(long)]
    pub no_screenshot: bool,

    /// Pretty-print the report JSON
    #[arg(long)]
    pub pretty: bool,
}
