//! Size availability detection.

use std::sync::LazyLock;

use autoflow_core::{SizeLabel, Sizes};
use regex::Regex;

use super::html::{element_text, Page};

/// Whole-word, case-sensitive size tokens.
static SIZE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(XXXL|XXL|XL|XS|S|M|L)\b").expect("valid size regex"));

/// Attribute substring marking a size selector.
const SIZE_HINT: &str = "size";

/// Hinted regions with more text than this are page-level containers rather
/// than selectors and are skipped.
const MAX_REGION_CHARS: usize = 400;

/// Labels inside size-selector regions; when none are found there, labels
/// anywhere in the rendered text.
pub(crate) fn extract_sizes(page: &Page) -> Sizes {
    let from_regions: Vec<SizeLabel> = page
        .elements_hinting(SIZE_HINT)
        .map(element_text)
        .filter(|text| text.chars().count() <= MAX_REGION_CHARS)
        .flat_map(|text| labels_in(&text))
        .collect();

    if !from_regions.is_empty() {
        return Sizes::from_labels(from_regions);
    }

    Sizes::from_labels(labels_in(page.text()))
}

fn labels_in(text: &str) -> Vec<SizeLabel> {
    SIZE_TOKEN_RE
        .find_iter(text)
        .filter_map(|m| SizeLabel::parse(m.as_str()))
        .collect()
}
