use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use fantoccini::{Client, ClientBuilder};
use tokio::sync::{Mutex, Semaphore, SemaphorePermit};

/// Endpoints probed when the configured WebDriver URL is unreachable
const FALLBACK_ENDPOINTS: &[&str] = &[
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4444", // Selenium / geckodriver default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Process-wide owner of the browser backend.
///
/// Holds the resolved WebDriver endpoint (probed once, under a lock, so
/// concurrent first use cannot race duplicate probes) and a semaphore
/// bounding the number of simultaneously open page sessions. Page contexts
/// themselves are never pooled: each request gets a fresh session and
/// closes it unconditionally.
pub struct SessionManager {
    config: AnalyzerConfig,
    endpoint: Mutex<Option<String>>,
    permits: Semaphore,
}

impl SessionManager {
    pub fn new(mut config: AnalyzerConfig) -> Self {
        // Environment override, useful when the driver runs in a sidecar
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        let permits = Semaphore::new(config.max_concurrency.max(1));
        Self {
            config,
            endpoint: Mutex::new(None),
            permits,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Opens a fresh page context, waiting for an admission permit if the
    /// concurrency cap is saturated.
    pub async fn acquire(&self) -> Result<PageContext<'_>, AnalysisError> {
        let permit = self.permits.acquire().await.map_err(|_| {
            AnalysisError::BrowserUnavailable("session manager shut down".to_string())
        })?;

        let client = self.connect().await?;
        Ok(PageContext {
            client,
            _permit: permit,
        })
    }

    async fn connect(&self) -> Result<Client, AnalysisError> {
        // Fast path: an endpoint that already accepted a session
        let cached = self.endpoint.lock().await.clone();
        if let Some(endpoint) = cached {
            match self.new_session(&endpoint).await {
                Ok(client) => return Ok(client),
                Err(err) => {
                    ::log::warn!("WebDriver endpoint {} rejected session: {}", endpoint, err);
                    let mut resolved = self.endpoint.lock().await;
                    if resolved.as_deref() == Some(endpoint.as_str()) {
                        *resolved = None;
                    }
                }
            }
        }

        self.resolve_and_connect().await
    }

    /// Probes the configured endpoint and the fallback list under the
    /// resolution lock; the first endpoint that accepts a session is
    /// cached for subsequent requests.
    async fn resolve_and_connect(&self) -> Result<Client, AnalysisError> {
        let mut resolved = self.endpoint.lock().await;

        // Another request may have resolved while we waited on the lock
        if let Some(endpoint) = resolved.as_deref() {
            if let Ok(client) = self.new_session(endpoint).await {
                return Ok(client);
            }
        }

        let configured = self.config.webdriver_url.as_str();
        let mut candidates = vec![configured];
        for endpoint in FALLBACK_ENDPOINTS.iter().copied() {
            // Skip if it's the same as the configured endpoint
            if !endpoint.eq_ignore_ascii_case(configured) {
                candidates.push(endpoint);
            }
        }

        for endpoint in candidates {
            match self.new_session(endpoint).await {
                Ok(client) => {
                    if endpoint != configured {
                        ::log::info!("using fallback WebDriver endpoint {}", endpoint);
                    }
                    *resolved = Some(endpoint.to_string());
                    return Ok(client);
                }
                Err(err) => {
                    ::log::debug!("WebDriver endpoint {} unavailable: {}", endpoint, err);
                }
            }
        }

        ::log::error!(
            "no WebDriver endpoint reachable; tried {} and {} fallbacks",
            configured,
            FALLBACK_ENDPOINTS.len()
        );
        Err(AnalysisError::BrowserUnavailable(format!(
            "no WebDriver endpoint reachable (configured: {configured})"
        )))
    }

    async fn new_session(
        &self,
        endpoint: &str,
    ) -> Result<Client, fantoccini::error::NewSessionError> {
        ClientBuilder::native()
            .capabilities(browser_capabilities(self.config.user_agent.as_deref()))
            .connect(endpoint)
            .await
    }
}

/// Fixed capabilities for every page session: headless with sandboxing
/// disabled (containerized execution) and a fixed viewport.
fn browser_capabilities(user_agent: Option<&str>) -> serde_json::Map<String, serde_json::Value> {
    let mut args = vec![
        "--headless=new".to_string(),
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--disable-gpu".to_string(),
        "--window-size=1280,800".to_string(),
    ];
    if let Some(user_agent) = user_agent {
        args.push(format!("--user-agent={user_agent}"));
    }

    let mut capabilities = serde_json::Map::new();
    capabilities.insert(
        "goog:chromeOptions".to_string(),
        serde_json::json!({ "args": args }),
    );
    capabilities
}

/// One isolated browser page, owned by a single analysis request.
pub struct PageContext<'a> {
    client: Client,
    _permit: SemaphorePermit<'a>,
}

impl PageContext<'_> {
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Closes the underlying session. Runs on every pipeline exit path;
    /// close failures are logged rather than propagated because the
    /// request outcome is already decided by then.
    pub async fn close(self) {
        let Self { client, _permit } = self;
        if let Err(err) = client.close().await {
            ::log::warn!("failed to close page session: {}", err);
        }
    }
}
