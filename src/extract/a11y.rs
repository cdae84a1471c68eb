use super::missing_alt;
use scraper::{Html, Selector};

/// Runs the accessibility checks over the parsed document.
///
/// Returns human-readable issues in check order; an empty list signals a
/// clean result.
pub fn check(doc: &Html) -> Vec<String> {
    let mut issues = Vec::new();

    if root_lang(doc).is_none() {
        issues.push("Missing lang attribute on the <html> element".to_string());
    }

    let img_selector = Selector::parse("img").unwrap();
    let without_alt = doc.select(&img_selector).filter(|el| missing_alt(*el)).count();
    if without_alt > 0 {
        issues.push(format!("{without_alt} image(s) missing alt text"));
    }

    let anchor_selector = Selector::parse("a").unwrap();
    let bare_anchors = doc
        .select(&anchor_selector)
        .filter(|el| el.value().attr("href").is_none())
        .count();
    if bare_anchors > 0 {
        issues.push(format!(
            "{bare_anchors} anchor element(s) without an href attribute"
        ));
    }

    for (from, to) in heading_skips(doc) {
        issues.push(format!("Heading level skips from h{from} to h{to}"));
    }

    issues
}

fn root_lang(doc: &Html) -> Option<String> {
    let selector = Selector::parse("html").unwrap();
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("lang"))
        .map(|lang| lang.trim().to_string())
        .filter(|lang| !lang.is_empty())
}

/// Scans the document-ordered heading sequence for jumps of more than one
/// level between consecutive headings.
fn heading_skips(doc: &Html) -> Vec<(u8, u8)> {
    let selector = Selector::parse("h1, h2, h3, h4, h5, h6").unwrap();
    let levels = doc
        .select(&selector)
        .filter_map(|el| el.value().name().strip_prefix('h'))
        .filter_map(|digit| digit.parse::<u8>().ok())
        .collect::<Vec<_>>();

    levels
        .windows(2)
        .filter(|pair| pair[1] > pair[0] + 1)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}
