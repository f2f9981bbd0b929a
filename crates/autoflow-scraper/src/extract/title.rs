//! Product title strategies and clean-up.

use std::sync::LazyLock;

use regex::Regex;

use super::html::{collapse_whitespace, Page};
use super::retailer::RetailerRule;
use crate::discovery::strip_urls;

/// Placeholder used when no strategy yields a usable title.
pub const DEFAULT_TITLE: &str = "T-shirt";

/// Captions shorter than this (after removing links) are not trusted as titles.
const MIN_CAPTION_HINT_CHARS: usize = 4;

/// Separators that usually introduce a site-name suffix. Pipes cut anywhere;
/// dashes need whitespace on both sides and colons whitespace after, so
/// hyphenated words survive.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\||\s+[-–—]\s+|:\s").expect("valid separator regex"));

static FILLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:buy|best price|online|deal|discount|offer|brand new|free shipping)\b")
        .expect("valid filler regex")
});

#[derive(Debug, Clone, Copy)]
enum TitleStrategy {
    CaptionHint,
    OgTitle,
    DocumentTitle,
    Heading,
    Selector(&'static str),
}

impl TitleStrategy {
    fn candidate(self, page: &Page, caption: Option<&str>) -> Option<String> {
        match self {
            TitleStrategy::CaptionHint => caption
                .map(|c| collapse_whitespace(&strip_urls(c)))
                .filter(|c| c.chars().count() >= MIN_CAPTION_HINT_CHARS),
            TitleStrategy::OgTitle => page.meta_content("og:title"),
            TitleStrategy::DocumentTitle => page.first_text("title"),
            TitleStrategy::Heading => page.first_text("h1"),
            TitleStrategy::Selector(css) => page.first_text(css),
        }
    }
}

/// Returns the first non-empty cleaned title from the strategy chain, or
/// [`DEFAULT_TITLE`].
pub(crate) fn extract_title(
    page: &Page,
    caption: Option<&str>,
    retailer: Option<&RetailerRule>,
) -> String {
    let generic = [
        TitleStrategy::CaptionHint,
        TitleStrategy::OgTitle,
        TitleStrategy::DocumentTitle,
        TitleStrategy::Heading,
    ];
    let specific = retailer
        .into_iter()
        .flat_map(|r| r.title_selectors.iter().copied().map(TitleStrategy::Selector));

    generic
        .into_iter()
        .chain(specific)
        .find_map(|strategy| {
            let cleaned = strategy
                .candidate(page, caption)
                .map(|raw| clean_title(&raw))
                .filter(|t| !t.is_empty());
            if let Some(title) = &cleaned {
                tracing::debug!(?strategy, title, "title strategy matched");
            }
            cleaned
        })
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Collapses whitespace, cuts a trailing site-name suffix and removes
/// marketing filler words.
pub(crate) fn clean_title(raw: &str) -> String {
    let collapsed = collapse_whitespace(raw);

    let truncated = match SEPARATOR_RE.find(&collapsed) {
        Some(m) if !collapsed[..m.start()].trim().is_empty() => &collapsed[..m.start()],
        _ => collapsed.as_str(),
    };

    let without_filler = FILLER_RE.replace_all(truncated, " ");
    collapse_whitespace(&without_filler)
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '-' | '|' | ':'))
        .to_string()
}
