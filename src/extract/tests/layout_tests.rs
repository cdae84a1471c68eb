use crate::extract::layout;
use scraper::Html;

#[test]
fn semantic_regions_are_detected() {
    let html = r#"<html><body>
        <header>Top</header>
        <nav><a href="/">Home</a></nav>
        <main><p>Body</p></main>
        <footer>Bottom</footer>
    </body></html>"#;
    let doc = Html::parse_document(html);
    let signals = layout::extract(&doc);

    assert!(signals.has_header);
    assert!(signals.has_nav);
    assert!(signals.has_main);
    assert!(signals.has_footer);
}

#[test]
fn conventionally_named_markup_is_recognized() {
    // No semantic tags at all, only class/id conventions
    let html = r#"<html><body>
        <div class="site-header">Top</div>
        <div id="main-menu">Links</div>
        <div class="hero">Big intro</div>
        <div class="page-footer">Bottom</div>
    </body></html>"#;
    let doc = Html::parse_document(html);
    let signals = layout::extract(&doc);

    assert!(signals.has_header);
    assert!(signals.has_nav);
    assert!(signals.has_hero);
    assert!(signals.has_footer);
}

#[test]
fn element_counts_are_exact() {
    let html = r#"<html><body>
        <section></section><section></section>
        <article></article>
        <form><input type="submit"><button>Go</button></form>
        <img src="a.png"><img src="b.png"><img src="c.png">
        <a href="/x">x</a><a href="/y">y</a><a>no href</a>
    </body></html>"#;
    let doc = Html::parse_document(html);
    let signals = layout::extract(&doc);

    assert_eq!(signals.section_count, 2);
    assert_eq!(signals.article_count, 1);
    assert_eq!(signals.form_count, 1);
    assert_eq!(signals.button_count, 2);
    assert_eq!(signals.image_count, 3);
    assert_eq!(signals.link_count, 2);
}

#[test]
fn hero_heuristic_requires_substantial_text() {
    let long_text = "lorem ipsum ".repeat(25); // well over 200 characters
    let with_hero = format!(
        "<html><body><div><h1>Welcome</h1><p>{long_text}</p></div></body></html>"
    );
    let doc = Html::parse_document(&with_hero);
    assert!(layout::extract(&doc).has_hero);

    let without_hero =
        "<html><body><div><h1>Welcome</h1><p>short intro</p></div></body></html>";
    let doc = Html::parse_document(without_hero);
    assert!(!layout::extract(&doc).has_hero);
}

#[test]
fn body_text_length_collapses_whitespace() {
    let html = "<html><body><p>one   two\n\n three</p></body></html>";
    let doc = Html::parse_document(html);
    let signals = layout::extract(&doc);

    assert_eq!(signals.text_length, "one two three".len());
}
