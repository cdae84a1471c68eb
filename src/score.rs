use crate::extract::layout::LayoutSignals;
use crate::extract::seo::SeoSignals;
use serde::Serialize;

const TITLE_LENGTH_LIMIT: usize = 60;
const DESCRIPTION_LENGTH_LIMIT: usize = 160;
const IMAGE_ALT_PENALTY_CAP: i32 = 10;

/// A 0-100 SEO score with the issues behind every lost point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub issues: Vec<String>,
}

/// Scores the page from its SEO and layout signals.
///
/// Linear deduction model: start at 100, subtract a fixed amount per
/// failed check and record one issue message for it, clamp to [0,100].
/// Deductions are independent; the issue list preserves check order, so
/// identical inputs always produce the identical result.
pub fn score_seo(seo: &SeoSignals, layout: &LayoutSignals) -> ScoreResult {
    let mut score: i32 = 100;
    let mut issues = Vec::new();

    match &seo.title {
        None => {
            score -= 20;
            issues.push("Missing <title> tag".to_string());
        }
        Some(_) if seo.title_length > TITLE_LENGTH_LIMIT => {
            score -= 5;
            issues.push(format!(
                "Title is {} characters long (over {})",
                seo.title_length, TITLE_LENGTH_LIMIT
            ));
        }
        Some(_) => {}
    }

    match &seo.meta_description {
        None => {
            score -= 15;
            issues.push("Missing meta description".to_string());
        }
        Some(_) if seo.meta_description_length > DESCRIPTION_LENGTH_LIMIT => {
            score -= 5;
            issues.push(format!(
                "Meta description is {} characters long (over {})",
                seo.meta_description_length, DESCRIPTION_LENGTH_LIMIT
            ));
        }
        Some(_) => {}
    }

    if seo.h1_count == 0 {
        score -= 20;
        issues.push("No <h1> heading found".to_string());
    } else if seo.h1_count > 1 {
        score -= 10;
        issues.push(format!(
            "{} <h1> headings found (expected exactly one)",
            seo.h1_count
        ));
    }

    if seo.images_without_alt > 0 {
        score -= (2 * seo.images_without_alt as i32).min(IMAGE_ALT_PENALTY_CAP);
        issues.push(format!(
            "{} image(s) missing alt text",
            seo.images_without_alt
        ));
    }

    if !layout.has_header {
        score -= 5;
        issues.push("Missing <header> element".to_string());
    }
    if !layout.has_footer {
        score -= 5;
        issues.push("Missing <footer> element".to_string());
    }

    if seo.canonical.is_none() {
        score -= 5;
        issues.push("Missing canonical URL".to_string());
    }

    if seo.og_title.is_none() && seo.og_description.is_none() {
        score -= 10;
        issues.push("Missing Open Graph title and description".to_string());
    }

    ScoreResult {
        score: score.clamp(0, 100) as u8,
        issues,
    }
}
