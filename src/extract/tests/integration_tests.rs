//! End-to-end extraction + scoring over fixture documents, without a
//! browser: the pure extractors and the scoring engine see exactly what
//! they would see from a captured snapshot.

use crate::extract::{layout, seo};
use crate::score::score_seo;
use scraper::Html;

#[test]
fn minimal_document_with_two_gaps_scores_sixty_five() {
    // No <title>, no meta description; everything else present.
    let html = r#"<html lang="en"><head>
        <link rel="canonical" href="https://example.com/">
        <meta property="og:title" content="Example">
        <meta property="og:description" content="An example page">
    </head><body>
        <header>Site</header>
        <h1>Welcome</h1>
        <footer>Contact</footer>
    </body></html>"#;
    let doc = Html::parse_document(html);

    let seo_signals = seo::extract(&doc);
    let layout_signals = layout::extract(&doc);
    let result = score_seo(&seo_signals, &layout_signals);

    assert_eq!(result.score, 65); // 100 - 20 (title) - 15 (description)
    assert_eq!(result.issues.len(), 2);
    assert!(result.issues[0].contains("title"));
    assert!(result.issues[1].contains("meta description"));
}

#[test]
fn bare_document_hits_the_boundary_vector() {
    let doc = Html::parse_document("<html><body><p>nothing here</p></body></html>");

    let seo_signals = seo::extract(&doc);
    let layout_signals = layout::extract(&doc);
    let result = score_seo(&seo_signals, &layout_signals);

    // 100 - 20 - 15 - 20 - 5 - 5 - 5 - 10
    assert_eq!(result.score, 20);
    assert_eq!(result.issues.len(), 7);
}

#[test]
fn extraction_and_scoring_are_reproducible() {
    let html = r#"<html><head><title>Fixture</title></head><body>
        <header>h</header><h1>One</h1><h1>Two</h1><img src="x.png">
    </body></html>"#;
    let doc = Html::parse_document(html);

    let first = score_seo(&seo::extract(&doc), &layout::extract(&doc));
    let second = score_seo(&seo::extract(&doc), &layout::extract(&doc));

    assert_eq!(first, second);
}
