use fantoccini::Client;
use serde::Serialize;
use serde_json::Value;

/// Load/timing metrics derived from the navigation-timing record, all
/// relative to the fetch start instant. Metrics default to zero when the
/// browser did not populate the corresponding entry.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PerformanceMetrics {
    pub load_time_ms: f64,
    pub dom_content_loaded_ms: f64,
    pub response_time_ms: f64,
    pub transfer_size_kb: f64,
}

/// Navigation timing is a runtime browser API, not serializable into the
/// static snapshot, so this extractor queries the live page.
const NAVIGATION_TIMING_JS: &str = r#"
    const [entry] = performance.getEntriesByType('navigation');
    if (!entry) { return null; }
    return {
        loadTime: entry.duration,
        domContentLoaded: entry.domContentLoadedEventEnd - entry.startTime,
        responseTime: entry.responseEnd - entry.requestStart,
        transferSize: entry.transferSize,
    };
"#;

pub async fn extract(client: &Client) -> Result<PerformanceMetrics, String> {
    let value = client
        .execute(NAVIGATION_TIMING_JS, vec![])
        .await
        .map_err(|err| format!("navigation timing query: {err}"))?;
    Ok(from_entry(&value))
}

fn from_entry(value: &Value) -> PerformanceMetrics {
    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
            .max(0.0)
    };

    PerformanceMetrics {
        load_time_ms: field("loadTime"),
        dom_content_loaded_ms: field("domContentLoaded"),
        response_time_ms: field("responseTime"),
        transfer_size_kb: field("transferSize") / 1024.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_default_to_zero_without_an_entry() {
        let metrics = from_entry(&Value::Null);
        assert_eq!(metrics.load_time_ms, 0.0);
        assert_eq!(metrics.dom_content_loaded_ms, 0.0);
        assert_eq!(metrics.response_time_ms, 0.0);
        assert_eq!(metrics.transfer_size_kb, 0.0);
    }

    #[test]
    fn metrics_read_from_a_populated_entry() {
        let entry = serde_json::json!({
            "loadTime": 1850.0,
            "domContentLoaded": 900.5,
            "responseTime": 210.0,
            "transferSize": 51200.0,
        });
        let metrics = from_entry(&entry);
        assert_eq!(metrics.load_time_ms, 1850.0);
        assert_eq!(metrics.dom_content_loaded_ms, 900.5);
        assert_eq!(metrics.response_time_ms, 210.0);
        assert_eq!(metrics.transfer_size_kb, 50.0);
    }

    #[test]
    fn partial_entries_zero_the_missing_fields() {
        let entry = serde_json::json!({ "loadTime": 1000.0 });
        let metrics = from_entry(&entry);
        assert_eq!(metrics.load_time_ms, 1000.0);
        assert_eq!(metrics.transfer_size_kb, 0.0);
    }
}
