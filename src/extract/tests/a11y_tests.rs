use crate::extract::a11y;
use scraper::Html;

#[test]
fn skipped_heading_level_is_reported() {
    let html = r#"<html lang="en"><body>
        <h1>Title</h1><h2>Section</h2><h4>Detail</h4>
    </body></html>"#;
    let doc = Html::parse_document(html);
    let issues = a11y::check(&doc);

    assert_eq!(issues, vec!["Heading level skips from h2 to h4".to_string()]);
}

#[test]
fn sequential_headings_are_clean() {
    let html = r#"<html lang="en"><body>
        <h1>Title</h1><h2>Section</h2><h3>Detail</h3>
    </body></html>"#;
    let doc = Html::parse_document(html);

    assert!(a11y::check(&doc).is_empty());
}

#[test]
fn heading_level_may_decrease_freely() {
    // Dropping back from h3 to h2 is fine; only upward jumps skip levels
    let html = r#"<html lang="en"><body>
        <h1>A</h1><h2>B</h2><h3>C</h3><h2>D</h2>
    </body></html>"#;
    let doc = Html::parse_document(html);

    assert!(a11y::check(&doc).is_empty());
}

#[test]
fn missing_lang_attribute_is_flagged() {
    let doc = Html::parse_document("<html><body><p>hello</p></body></html>");
    let issues = a11y::check(&doc);

    assert_eq!(
        issues,
        vec!["Missing lang attribute on the <html> element".to_string()]
    );
}

#[test]
fn images_and_anchors_are_checked_in_order() {
    let html = r#"<html><body>
        <img src="a.png">
        <img src="b.png" alt="fine">
        <a>anchor without target</a>
        <a href="/ok">fine</a>
    </body></html>"#;
    let doc = Html::parse_document(html);
    let issues = a11y::check(&doc);

    assert_eq!(issues.len(), 3);
    assert!(issues[0].contains("lang attribute"));
    assert!(issues[1].contains("1 image(s) missing alt text"));
    assert!(issues[2].contains("1 anchor element(s) without an href"));
}
