//! Locates the product link inside free-form message text.

use std::sync::LazyLock;

use regex::Regex;

/// Absolute URLs, `www.` links and bare `host.tld[/path]` tokens, in that
/// order of preference at any given position.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:https?://[^\s<>"']+|\bwww\.[^\s<>"']+|\b[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)*\.[a-z]{2,24}(?::\d{1,5})?(?:/[^\s<>"']*)?)"#,
    )
    .expect("valid url regex")
});

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}', '\'', '"'];

/// Top-level domains accepted for bare `host.tld` tokens written without a
/// scheme or `www.`. Matched case-sensitively so run-together sentences like
/// `price.Buy` are not taken for hosts.
const BARE_HOST_TLDS: &[&str] = &[
    "com", "in", "co", "net", "org", "io", "me", "ly", "gd", "cc", "it", "to", "store", "shop",
    "app", "page", "link", "xyz", "info", "biz", "online", "site",
];

/// Returns the first URL-like token in `body`, then in `caption`, coerced to
/// an absolute `https://` URL when it was written without a scheme.
///
/// Later URLs are never considered. `None` is the normal result for messages
/// without a link.
#[must_use]
pub fn find_product_url(body: &str, caption: Option<&str>) -> Option<String> {
    first_url(body).or_else(|| caption.and_then(first_url))
}

fn first_url(text: &str) -> Option<String> {
    URL_RE.find_iter(text).find_map(|m| link_at(text, m))
}

/// The absolute URL for a regex match, or `None` when a scheme-less match is
/// really part of an email address or a run-together sentence.
fn link_at(text: &str, m: regex::Match<'_>) -> Option<String> {
    let raw = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
    if raw.is_empty() {
        return None;
    }
    let lower = raw.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Some(raw.to_string());
    }

    let preceded_by_word = text[..m.start()]
        .chars()
        .next_back()
        .is_some_and(|c| c == '@' || c == '.' || c.is_alphanumeric());
    if preceded_by_word {
        return None;
    }
    if !lower.starts_with("www.") {
        let host = raw.split(['/', ':']).next().unwrap_or(raw);
        let tld = host.rsplit('.').next().unwrap_or(host);
        if !BARE_HOST_TLDS.contains(&tld) {
            return None;
        }
    }
    Some(format!("https://{raw}"))
}

/// Removes every URL-like token from `text`, leaving surrounding words intact.
///
/// Used before keyword and pincode searches so identifiers inside links are
/// not mistaken for product facts.
#[must_use]
pub(crate) fn strip_urls(text: &str) -> String {
    URL_RE
        .replace_all(text, |caps: &regex::Captures<'_>| match caps.get(0) {
            Some(m) if link_at(text, m).is_none() => m.as_str().to_string(),
            _ => " ".to_string(),
        })
        .into_owned()
}
