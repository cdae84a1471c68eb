/// Known analytics/advertising script origins and call patterns. Each
/// signature maps to a unique name, so the match list needs no further
/// deduplication.
const TRACKER_SIGNATURES: &[(&str, &str)] = &[
    ("googletagmanager.com", "Google Tag Manager"),
    ("google-analytics.com", "Google Analytics"),
    ("doubleclick.net", "DoubleClick"),
    ("connect.facebook.net", "Facebook Pixel"),
    ("static.hotjar.com", "Hotjar"),
    ("matomo.js", "Matomo"),
    ("cdn.segment.com", "Segment"),
    ("mixpanel.com", "Mixpanel"),
    ("clarity.ms", "Microsoft Clarity"),
    ("snap.licdn.com", "LinkedIn Insight"),
    ("analytics.tiktok.com", "TikTok Pixel"),
    ("script.crazyegg.com", "Crazy Egg"),
];

/// Detects known trackers by substring match over the document text.
/// Output order follows the signature table for reproducibility.
pub fn detect(html: &str) -> Vec<String> {
    let haystack = html.to_lowercase();
    TRACKER_SIGNATURES
        .iter()
        .filter(|(signature, _)| haystack.contains(signature))
        .map(|(_, name)| name.to_string())
        .collect()
}
