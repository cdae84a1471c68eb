use crate::extract::security::{self, Severity};
use scraper::Html;

fn check(html: &str) -> Vec<security::SecurityFinding> {
    let doc = Html::parse_document(html);
    security::check(&doc, html)
}

#[test]
fn missing_csp_meta_is_a_warning() {
    let findings = check("<html><head></head><body></body></html>");

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Warning);
    assert!(findings[0].message.contains("Content-Security-Policy"));
}

#[test]
fn csp_meta_silences_the_warning() {
    let html = r#"<html><head>
        <meta http-equiv="Content-Security-Policy" content="default-src 'self'">
    </head><body></body></html>"#;

    assert!(check(html).is_empty());
}

#[test]
fn insecure_references_are_counted() {
    let html = r#"<html><head>
        <meta http-equiv="content-security-policy" content="default-src 'self'">
    </head><body>
        <img src="http://example.com/a.png">
        <a href='http://example.com/page'>old link</a>
        <img src="https://example.com/safe.png">
    </body></html>"#;
    let findings = check(html);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Warning);
    assert!(findings[0].message.starts_with("2 resource reference(s)"));
}

#[test]
fn external_scripts_are_informational() {
    let html = r#"<html><head>
        <meta http-equiv="Content-Security-Policy" content="default-src 'self'">
        <script src="https://cdn.example.com/lib.js"></script>
        <script src="//cdn.example.com/other.js"></script>
        <script src="/local/app.js"></script>
    </head><body></body></html>"#;
    let findings = check(html);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Info);
    assert!(findings[0].message.starts_with("2 externally hosted"));
}

#[test]
fn inline_scripts_warn_only_above_the_threshold() {
    let csp = r#"<meta http-equiv="Content-Security-Policy" content="default-src 'self'">"#;
    let five_inline = format!(
        "<html><head>{csp}</head><body>{}</body></html>",
        "<script>1;</script>".repeat(5)
    );
    assert!(check(&five_inline).is_empty());

    let six_inline = format!(
        "<html><head>{csp}</head><body>{}</body></html>",
        "<script>1;</script>".repeat(6)
    );
    let findings = check(&six_inline);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Warning);
    assert!(findings[0].message.starts_with("6 inline script"));
}
