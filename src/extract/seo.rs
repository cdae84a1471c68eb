use super::{collapsed_text, missing_alt};
use scraper::{Html, Selector};
use serde::Serialize;

/// On-page SEO signals, consumed by the scoring engine
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeoSignals {
    pub title: Option<String>,
    pub title_length: usize,
    pub meta_description: Option<String>,
    pub meta_description_length: usize,
    pub h1_count: usize,
    pub first_h1: Option<String>,
    pub images_without_alt: usize,
    pub canonical: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
}

/// Extracts SEO signals from the parsed document.
pub fn extract(doc: &Html) -> SeoSignals {
    let title = element_text(doc, "title");
    let meta_description = meta_content(doc, r#"meta[name="description"]"#);

    let h1_selector = Selector::parse("h1").unwrap();
    let h1_count = doc.select(&h1_selector).count();
    let first_h1 = doc
        .select(&h1_selector)
        .next()
        .map(collapsed_text)
        .filter(|text| !text.is_empty());

    let img_selector = Selector::parse("img").unwrap();
    let images_without_alt = doc.select(&img_selector).filter(|el| missing_alt(*el)).count();

    SeoSignals {
        title_length: title.as_deref().map(str::len).unwrap_or(0),
        title,
        meta_description_length: meta_description.as_deref().map(str::len).unwrap_or(0),
        meta_description,
        h1_count,
        first_h1,
        images_without_alt,
        canonical: link_href(doc, r#"link[rel="canonical"]"#),
        og_title: meta_content(doc, r#"meta[property="og:title"]"#),
        og_description: meta_content(doc, r#"meta[property="og:description"]"#),
        og_image: meta_content(doc, r#"meta[property="og:image"]"#),
    }
}

fn element_text(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .next()
        .map(collapsed_text)
        .filter(|text| !text.is_empty())
}

fn meta_content(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

fn link_href(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}
