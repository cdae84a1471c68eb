use url::Url;

/// Normalizes arbitrary user input into an absolute https URL.
///
/// Parseable URLs are canonicalized with the scheme forced to https; input
/// that does not parse as an absolute URL (bare domains, hostname:port
/// shorthand) is prefixed with the https authority marker. Never fails.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();

    if let Ok(mut url) = Url::parse(trimmed) {
        // Inputs like "localhost:8080/path" parse with a bogus scheme and
        // no host; treat those the same as unparseable input below.
        if url.has_host() {
            if url.scheme() == "https" {
                return url.to_string();
            }
            if url.set_scheme("https").is_ok() {
                return url.to_string();
            }
            // Non-special schemes refuse the conversion; rebuild from the
            // authority onward instead.
            let rest = trimmed.split_once("://").map_or(trimmed, |(_, r)| r);
            return format!("https://{rest}");
        }
    }

    format!("https://{trimmed}")
}

/// Convert a URL to a sanitized filename (used for screenshot output)
pub fn sanitize_filename(url: &str) -> String {
    // Remove protocol and replace invalid filename characters
    let mut name = url.replace("https://", "").replace("http://", "");
    name = name.replace(['/', ':', '?', '&', '=', '#', '%'], "_");
    let name = name.trim_matches('_').to_string();

    // Limit filename length
    if name.len() > 100 {
        name[..100].to_string()
    } else {
        name
    }
}
