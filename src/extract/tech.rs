use fantoccini::Client;

/// Characteristic path segments in script source URLs
const SCRIPT_SIGNATURES: &[(&str, &str)] = &[
    ("/_next/", "Next.js"),
    ("/_nuxt/", "Nuxt.js"),
    ("react", "React"),
    ("angular", "Angular"),
    ("vue", "Vue.js"),
    ("jquery", "jQuery"),
    ("bootstrap", "Bootstrap"),
    ("wp-content", "WordPress"),
    ("wp-includes", "WordPress"),
    ("cdn.shopify.com", "Shopify"),
    ("squarespace", "Squarespace"),
    ("wix.com", "Wix"),
    ("gatsby", "Gatsby"),
    ("ember", "Ember.js"),
];

/// Root-element identifiers and other markers in the serialized document
const MARKUP_SIGNATURES: &[(&str, &str)] = &[
    (r#"id="__next""#, "Next.js"),
    (r#"id="__nuxt""#, "Nuxt.js"),
    (r#"id="___gatsby""#, "Gatsby"),
    ("data-reactroot", "React"),
    ("ng-version", "Angular"),
    ("data-v-app", "Vue.js"),
    ("wp-content", "WordPress"),
    ("data-drupal-selector", "Drupal"),
];

/// Platform names recognized in the generator meta tag
const GENERATOR_SIGNATURES: &[(&str, &str)] = &[
    ("wordpress", "WordPress"),
    ("drupal", "Drupal"),
    ("joomla", "Joomla"),
    ("ghost", "Ghost"),
    ("hugo", "Hugo"),
    ("gatsby", "Gatsby"),
    ("wix", "Wix"),
    ("shopify", "Shopify"),
];

/// Detects frameworks/platforms from the live page plus the serialized
/// document. Best-effort: obfuscated bundles produce false negatives,
/// coincidental substrings false positives; presence is binary.
pub async fn detect(client: &Client, html: &str) -> Result<Vec<String>, String> {
    let sources = script_sources(client).await?;
    let generator = generator_meta(client).await?;
    Ok(match_signatures(&sources, generator.as_deref(), html))
}

/// Document-text-only detection, used when the live queries fail.
pub fn detect_offline(html: &str) -> Vec<String> {
    match_signatures(&[], None, html)
}

/// Evaluates the signature tables, deduplicating matched names.
pub(crate) fn match_signatures(
    script_sources: &[String],
    generator: Option<&str>,
    html: &str,
) -> Vec<String> {
    let mut stack: Vec<String> = Vec::new();

    let joined_sources = script_sources.join(" ").to_lowercase();
    for (signature, name) in SCRIPT_SIGNATURES {
        if joined_sources.contains(signature) {
            push_unique(&mut stack, name);
        }
    }

    let markup = html.to_lowercase();
    for (signature, name) in MARKUP_SIGNATURES {
        if markup.contains(signature) {
            push_unique(&mut stack, name);
        }
    }

    if let Some(generator) = generator {
        let generator = generator.to_lowercase();
        for (signature, name) in GENERATOR_SIGNATURES {
            if generator.contains(signature) {
                push_unique(&mut stack, name);
            }
        }
    }

    stack
}

fn push_unique(stack: &mut Vec<String>, name: &str) {
    if !stack.iter().any(|existing| existing == name) {
        stack.push(name.to_string());
    }
}

async fn script_sources(client: &Client) -> Result<Vec<String>, String> {
    let value = client
        .execute(
            "return Array.from(document.querySelectorAll('script[src]')).map(s => s.src);",
            vec![],
        )
        .await
        .map_err(|err| format!("script source query: {err}"))?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

async fn generator_meta(client: &Client) -> Result<Option<String>, String> {
    let value = client
        .execute(
            r#"const meta = document.querySelector('meta[name="generator"]');
               return meta ? meta.content : null;"#,
            vec![],
        )
        .await
        .map_err(|err| format!("generator meta query: {err}"))?;
    Ok(value.as_str().map(|content| content.to_string()))
}
