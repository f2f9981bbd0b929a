//! Removal of affiliate and tracking parameters from query strings.
//!
//! Works on the raw URL text rather than a parsed `Url` so that everything
//! except the dropped pairs (scheme, host, path, surviving pairs, fragment)
//! stays byte-identical.

/// Query keys dropped on exact, case-insensitive match.
const TRACKING_KEYS: [&str; 9] = [
    "tag",
    "ref",
    "affid",
    "linkcode",
    "ascsubtag",
    "affsource",
    "affextparam1",
    "fbclid",
    "gclid",
];

/// Query keys dropped when they start with one of these, case-insensitively.
const TRACKING_KEY_PREFIXES: [&str; 1] = ["utm_"];

/// Returns `url` without affiliate/tracking query pairs.
///
/// Pair order and repeated keys are preserved. When no pairs survive the `?`
/// is dropped as well. Idempotent.
#[must_use]
pub fn strip_tracking(url: &str) -> String {
    let (without_fragment, fragment) = match url.split_once('#') {
        Some((head, frag)) => (head, Some(frag)),
        None => (url, None),
    };

    let Some((base, query)) = without_fragment.split_once('?') else {
        return url.to_string();
    };

    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty() && !is_tracking_pair(pair))
        .collect();

    let mut clean = base.to_string();
    if !kept.is_empty() {
        clean.push('?');
        clean.push_str(&kept.join("&"));
    }
    if let Some(fragment) = fragment {
        clean.push('#');
        clean.push_str(fragment);
    }
    clean
}

fn is_tracking_pair(pair: &str) -> bool {
    let key = pair.split_once('=').map_or(pair, |(k, _)| k);
    let key = key.to_ascii_lowercase();
    TRACKING_KEYS.contains(&key.as_str())
        || TRACKING_KEY_PREFIXES
            .iter()
            .any(|prefix| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_affiliate_tag_and_keeps_other_params() {
        assert_eq!(
            strip_tracking("https://shop.example/tshirt?tag=abc123&color=red"),
            "https://shop.example/tshirt?color=red"
        );
    }

    #[test]
    fn drops_question_mark_when_nothing_survives() {
        assert_eq!(
            strip_tracking("https://www.amazon.in/dp/B0X?tag=deals-21&linkCode=ll1&ascsubtag=x"),
            "https://www.amazon.in/dp/B0X"
        );
    }

    #[test]
    fn keys_match_case_insensitively() {
        assert_eq!(
            strip_tracking("https://shop.example/p?LinkCode=a&UTM_Source=tg&id=7&FBCLID=z"),
            "https://shop.example/p?id=7"
        );
    }

    #[test]
    fn utm_prefix_removes_all_utm_keys() {
        assert_eq!(
            strip_tracking("https://shop.example/p?utm_source=a&utm_medium=b&utm_campaign=c&q=1"),
            "https://shop.example/p?q=1"
        );
    }

    #[test]
    fn preserves_order_and_repeated_keys() {
        assert_eq!(
            strip_tracking("https://shop.example/p?size=M&ref=x&size=L&color=red&affid=y&size=M"),
            "https://shop.example/p?size=M&size=L&color=red&size=M"
        );
    }

    #[test]
    fn keys_that_merely_contain_a_marker_survive() {
        assert_eq!(
            strip_tracking("https://shop.example/p?hashtag=sale&preferred=1&tags=a"),
            "https://shop.example/p?hashtag=sale&preferred=1&tags=a"
        );
    }

    #[test]
    fn keeps_encoded_values_byte_identical() {
        let url = "https://shop.example/p?q=red%20shirt&x=a%2Bb&flag";
        assert_eq!(strip_tracking(url), url);
    }

    #[test]
    fn keeps_fragment() {
        assert_eq!(
            strip_tracking("https://shop.example/p?tag=a&id=2#reviews"),
            "https://shop.example/p?id=2#reviews"
        );
        assert_eq!(
            strip_tracking("https://shop.example/p?tag=a#reviews"),
            "https://shop.example/p#reviews"
        );
    }

    #[test]
    fn url_without_query_is_unchanged() {
        let url = "https://shop.example/p/Item-Name";
        assert_eq!(strip_tracking(url), url);
    }

    #[test]
    fn stripping_is_idempotent() {
        let inputs = [
            "https://shop.example/tshirt?tag=abc123&color=red",
            "https://shop.example/p?utm_source=a",
            "https://shop.example/p?&&a=1&&ref=2#frag",
            "https://shop.example/p?",
            "https://shop.example/p",
        ];
        for url in inputs {
            let once = strip_tracking(url);
            assert_eq!(strip_tracking(&once), once, "not idempotent for {url}");
        }
    }
}
