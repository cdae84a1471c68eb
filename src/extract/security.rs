use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;
use std::sync::LazyLock;

/// Inline script count above which the injection-risk warning fires.
const INLINE_SCRIPT_THRESHOLD: usize = 5;

/// `src=`/`href=` attributes pointing at plain-http resources.
static INSECURE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)(?:src|href)\s*=\s*["']http://"#).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize)]
pub struct SecurityFinding {
    pub severity: Severity,
    pub message: String,
}

impl SecurityFinding {
    fn warning(message: String) -> Self {
        Self {
            severity: Severity::Warning,
            message,
        }
    }

    fn info(message: String) -> Self {
        Self {
            severity: Severity::Info,
            message,
        }
    }
}

/// Runs the security checks over the parsed document and the raw markup.
pub fn check(doc: &Html, raw_html: &str) -> Vec<SecurityFinding> {
    let mut findings = Vec::new();

    if !has_csp_meta(doc) {
        findings.push(SecurityFinding::warning(
            "No Content-Security-Policy meta tag found".to_string(),
        ));
    }

    let insecure = INSECURE_REF.find_iter(raw_html).count();
    if insecure > 0 {
        findings.push(SecurityFinding::warning(format!(
            "{insecure} resource reference(s) loaded over insecure http://"
        )));
    }

    let script_selector = Selector::parse("script").unwrap();
    let mut external = 0;
    let mut inline = 0;
    for script in doc.select(&script_selector) {
        match script.value().attr("src") {
            Some(src) if is_external(src) => external += 1,
            Some(_) => {}
            None => inline += 1,
        }
    }

    if external > 0 {
        findings.push(SecurityFinding::info(format!(
            "{external} externally hosted script(s)"
        )));
    }
    if inline > INLINE_SCRIPT_THRESHOLD {
        findings.push(SecurityFinding::warning(format!(
            "{inline} inline script blocks increase the injection surface"
        )));
    }

    findings
}

fn has_csp_meta(doc: &Html) -> bool {
    let selector = Selector::parse("meta[http-equiv]").unwrap();
    doc.select(&selector).any(|el| {
        el.value()
            .attr("http-equiv")
            .is_some_and(|v| v.eq_ignore_ascii_case("content-security-policy"))
    })
}

fn is_external(src: &str) -> bool {
    let src = src.trim();
    src.starts_with("http://") || src.starts_with("https://") || src.starts_with("//")
}
