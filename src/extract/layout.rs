use super::collapsed_text;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// Body text threshold for the hero fallback heuristic: the first h1's
/// container must carry at least this much text to count as a hero block.
const HERO_TEXT_THRESHOLD: usize = 200;

/// Structural signals about the page layout
#[derive(Debug, Clone, Default, Serialize)]
pub struct LayoutSignals {
    pub has_header: bool,
    pub has_nav: bool,
    pub has_footer: bool,
    pub has_hero: bool,
    pub has_main: bool,
    pub section_count: usize,
    pub article_count: usize,
    pub form_count: usize,
    pub button_count: usize,
    pub image_count: usize,
    pub link_count: usize,
    pub text_length: usize,
}

/// Extracts layout signals from the parsed document.
///
/// Region flags combine semantic-tag presence with class/id substring
/// matching, so conventionally named markup is recognized even when it
/// avoids the semantic elements.
pub fn extract(doc: &Html) -> LayoutSignals {
    let markers = attribute_markers(doc);

    LayoutSignals {
        has_header: has_tag(doc, "header") || any_marker(&markers, &["header", "masthead"]),
        has_nav: has_tag(doc, "nav") || any_marker(&markers, &["nav", "menu"]),
        has_footer: has_tag(doc, "footer") || any_marker(&markers, &["footer"]),
        has_hero: any_marker(&markers, &["hero", "banner", "jumbotron"]) || has_hero_heading(doc),
        has_main: has_tag(doc, "main") || any_marker(&markers, &["main", "content"]),
        section_count: count(doc, "section"),
        article_count: count(doc, "article"),
        form_count: count(doc, "form"),
        button_count: count(doc, r#"button, input[type="submit"], input[type="button"]"#),
        image_count: count(doc, "img"),
        link_count: count(doc, "a[href]"),
        text_length: body_text_length(doc),
    }
}

/// Lower-cased class+id haystacks for every attributed element.
fn attribute_markers(doc: &Html) -> Vec<String> {
    let selector = Selector::parse("[class], [id]").unwrap();
    doc.select(&selector)
        .map(|element| {
            let value = element.value();
            format!(
                "{} {}",
                value.attr("class").unwrap_or_default(),
                value.attr("id").unwrap_or_default()
            )
            .to_lowercase()
        })
        .collect()
}

fn any_marker(haystacks: &[String], needles: &[&str]) -> bool {
    haystacks
        .iter()
        .any(|haystack| needles.iter().any(|needle| haystack.contains(needle)))
}

fn has_tag(doc: &Html, tag: &str) -> bool {
    let selector = Selector::parse(tag).unwrap();
    doc.select(&selector).next().is_some()
}

fn count(doc: &Html, selector: &str) -> usize {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector).count()
}

fn body_text_length(doc: &Html) -> usize {
    let selector = Selector::parse("body").unwrap();
    doc.select(&selector)
        .next()
        .map(|body| collapsed_text(body).len())
        .unwrap_or(0)
}

/// Fallback hero heuristic: the first top-level heading sits in a
/// container with a substantial amount of body text.
fn has_hero_heading(doc: &Html) -> bool {
    let selector = Selector::parse("h1").unwrap();
    let Some(heading) = doc.select(&selector).next() else {
        return false;
    };
    let Some(container) = heading.parent().and_then(ElementRef::wrap) else {
        return false;
    };
    collapsed_text(container).len() > HERO_TEXT_THRESHOLD
}
