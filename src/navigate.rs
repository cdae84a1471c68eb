use crate::error::AnalysisError;
use fantoccini::Client;
use serde::Serialize;
use std::time::{Duration, Instant};
use tokio::time::{sleep, timeout};

/// Interval between readiness polls while a strategy waits on the page.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Consecutive polls with an unchanged resource count before the network
/// is considered idle (2 polls = 500ms of quiescence).
const IDLE_STABLE_POLLS: u32 = 2;

/// A criterion for declaring a page load complete, ordered strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadStrategy {
    /// Load event fired and the resource count has stopped growing
    NetworkIdle,
    /// DOM is parsed, subresources may still be loading
    DomContentLoaded,
    /// The browser's load event fired
    Load,
}

impl LoadStrategy {
    /// Fallback order: strictest completion signal first, cheapest last.
    pub const CASCADE: [LoadStrategy; 3] = [
        LoadStrategy::NetworkIdle,
        LoadStrategy::DomContentLoaded,
        LoadStrategy::Load,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LoadStrategy::NetworkIdle => "network-idle",
            LoadStrategy::DomContentLoaded => "dom-content-loaded",
            LoadStrategy::Load => "load",
        }
    }
}

/// Per-mode time budget for the navigation cascade.
///
/// Each strategy gets the full `attempt` budget independently, so the
/// worst case is three times the nominal timeout. `settle` is the fixed
/// wait after a successful attempt that lets late dynamic content render
/// before the snapshot is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationBudget {
    pub attempt: Duration,
    pub settle: Duration,
}

impl NavigationBudget {
    pub fn for_mode(quick: bool) -> Self {
        if quick {
            Self {
                attempt: Duration::from_secs(30),
                settle: Duration::from_secs(1),
            }
        } else {
            Self {
                attempt: Duration::from_secs(60),
                settle: Duration::from_secs(3),
            }
        }
    }
}

/// How a successful navigation completed.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavigationOutcome {
    pub strategy: LoadStrategy,
    pub elapsed_ms: u64,
}

/// Seam between the cascade logic and the browser, so the strategy
/// ordering and timeout behavior are testable without a WebDriver.
pub(crate) trait LoadProbe {
    /// Drive one navigation attempt to completion under the given
    /// strategy. The caller bounds the attempt with a timeout; a probe may
    /// poll indefinitely.
    async fn attempt(&mut self, url: &str, strategy: LoadStrategy) -> Result<(), String>;
}

/// Runs the load-strategy cascade against one page.
///
/// The first strategy to complete within the budget wins; a timeout or
/// navigation error advances to the next. All three failing surfaces
/// `NavigationFailed` carrying the attempted URL.
pub(crate) async fn drive<P: LoadProbe>(
    probe: &mut P,
    url: &str,
    budget: NavigationBudget,
) -> Result<NavigationOutcome, AnalysisError> {
    let started = Instant::now();
    let mut last_failure = String::new();

    for strategy in LoadStrategy::CASCADE {
        ::log::debug!("navigating to {} via {}", url, strategy.label());

        match timeout(budget.attempt, probe.attempt(url, strategy)).await {
            Ok(Ok(())) => {
                ::log::info!("navigation to {} settled via {}", url, strategy.label());
                sleep(budget.settle).await;
                return Ok(NavigationOutcome {
                    strategy,
                    elapsed_ms: started.elapsed().as_millis() as u64,
                });
            }
            Ok(Err(reason)) => {
                ::log::warn!("{} attempt failed for {}: {}", strategy.label(), url, reason);
                last_failure = reason;
            }
            Err(_) => {
                ::log::warn!(
                    "{} attempt timed out for {} after {:?}",
                    strategy.label(),
                    url,
                    budget.attempt
                );
                last_failure = format!(
                    "{} timed out after {}s",
                    strategy.label(),
                    budget.attempt.as_secs()
                );
            }
        }
    }

    Err(AnalysisError::NavigationFailed {
        url: url.to_string(),
        reason: last_failure,
    })
}

/// `LoadProbe` backed by a live fantoccini client.
pub(crate) struct PageProbe<'a> {
    client: &'a Client,
}

impl<'a> PageProbe<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    async fn ready_state(&self) -> Result<String, String> {
        let value = self
            .client
            .execute("return document.readyState;", vec![])
            .await
            .map_err(|err| format!("readyState query: {err}"))?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    async fn resource_count(&self) -> Result<i64, String> {
        let value = self
            .client
            .execute(
                "return performance.getEntriesByType('resource').length;",
                vec![],
            )
            .await
            .map_err(|err| format!("resource timing query: {err}"))?;
        Ok(value.as_i64().unwrap_or(0))
    }

    async fn wait_for_load(&self) -> Result<(), String> {
        loop {
            if self.ready_state().await? == "complete" {
                return Ok(());
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn wait_for_dom_content(&self) -> Result<(), String> {
        loop {
            if self.ready_state().await? != "loading" {
                return Ok(());
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    /// Idle means the load event has fired and no new resource-timing
    /// entries appeared across consecutive polls. Sites with persistent
    /// polling never satisfy this; the outer timeout cuts the wait and the
    /// cascade falls back to a cheaper signal.
    async fn wait_for_network_idle(&self) -> Result<(), String> {
        let mut last_count: i64 = -1;
        let mut stable = 0;

        loop {
            let ready = self.ready_state().await? == "complete";
            let count = self.resource_count().await?;

            if ready && count == last_count {
                stable += 1;
                if stable >= IDLE_STABLE_POLLS {
                    return Ok(());
                }
            } else {
                stable = 0;
            }

            last_count = count;
            sleep(POLL_INTERVAL).await;
        }
    }
}

impl LoadProbe for PageProbe<'_> {
    async fn attempt(&mut self, url: &str, strategy: LoadStrategy) -> Result<(), String> {
        self.client
            .goto(url)
            .await
            .map_err(|err| format!("goto: {err}"))?;

        match strategy {
            LoadStrategy::NetworkIdle => self.wait_for_network_idle().await,
            LoadStrategy::DomContentLoaded => self.wait_for_dom_content().await,
            LoadStrategy::Load => self.wait_for_load().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Probe that records attempts and only completes on one strategy.
    struct ScriptedProbe {
        completes_on: Option<LoadStrategy>,
        attempts: Vec<LoadStrategy>,
    }

    impl ScriptedProbe {
        fn satisfying(strategy: Option<LoadStrategy>) -> Self {
            Self {
                completes_on: strategy,
                attempts: Vec::new(),
            }
        }
    }

    impl LoadProbe for ScriptedProbe {
        async fn attempt(&mut self, _url: &str, strategy: LoadStrategy) -> Result<(), String> {
            self.attempts.push(strategy);
            if self.completes_on == Some(strategy) {
                Ok(())
            } else {
                Err("completion signal never observed".to_string())
            }
        }
    }

    /// Probe that never resolves, forcing the per-strategy timeout.
    struct HangingProbe {
        attempts: Vec<LoadStrategy>,
    }

    impl LoadProbe for HangingProbe {
        async fn attempt(&mut self, _url: &str, strategy: LoadStrategy) -> Result<(), String> {
            self.attempts.push(strategy);
            std::future::pending().await
        }
    }

    fn test_budget() -> NavigationBudget {
        NavigationBudget {
            attempt: Duration::from_millis(50),
            settle: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn cascade_falls_back_to_load() {
        let mut probe = ScriptedProbe::satisfying(Some(LoadStrategy::Load));
        let outcome = drive(&mut probe, "https://example.com/", test_budget())
            .await
            .unwrap();

        assert_eq!(outcome.strategy, LoadStrategy::Load);
        assert_eq!(probe.attempts, LoadStrategy::CASCADE.to_vec());
    }

    #[tokio::test]
    async fn strictest_strategy_wins_when_satisfied() {
        let mut probe = ScriptedProbe::satisfying(Some(LoadStrategy::NetworkIdle));
        let outcome = drive(&mut probe, "https://example.com/", test_budget())
            .await
            .unwrap();

        assert_eq!(outcome.strategy, LoadStrategy::NetworkIdle);
        assert_eq!(probe.attempts, vec![LoadStrategy::NetworkIdle]);
    }

    #[tokio::test]
    async fn exhausted_cascade_surfaces_navigation_failed() {
        let mut probe = ScriptedProbe::satisfying(None);
        let err = drive(&mut probe, "https://example.com/x", test_budget())
            .await
            .unwrap_err();

        assert_eq!(probe.attempts.len(), 3);
        match err {
            AnalysisError::NavigationFailed { url, .. } => {
                assert_eq!(url, "https://example.com/x");
            }
            other => panic!("expected NavigationFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn timeouts_advance_the_cascade() {
        let mut probe = HangingProbe {
            attempts: Vec::new(),
        };
        let err = drive(&mut probe, "https://example.com/", test_budget())
            .await
            .unwrap_err();

        assert_eq!(probe.attempts, LoadStrategy::CASCADE.to_vec());
        assert!(matches!(err, AnalysisError::NavigationFailed { .. }));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn budgets_depend_on_mode() {
        let quick = NavigationBudget::for_mode(true);
        assert_eq!(quick.attempt, Duration::from_secs(30));
        assert_eq!(quick.settle, Duration::from_secs(1));

        let normal = NavigationBudget::for_mode(false);
        assert_eq!(normal.attempt, Duration::from_secs(60));
        assert_eq!(normal.settle, Duration::from_secs(3));
    }
}
