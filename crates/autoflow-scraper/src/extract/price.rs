//! Price strategies. Every result is a run of ASCII digits.

use std::sync::LazyLock;

use regex::Regex;

use super::html::Page;
use super::retailer::RetailerRule;

/// Used when no strategy finds a price.
pub const DEFAULT_PRICE: &str = "599";

/// Currency marker, optional whitespace, then an integer part that may carry
/// thousands separators. A decimal fraction is matched but not captured.
static CURRENCY_PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:₹|\bRs\.?|\bINR)\s*(\d[\d,]*)(?:\.\d+)?").expect("valid price regex")
});

static BARE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,3}(?:,\d{2,3})+|\d{2,})\b").expect("valid number regex")
});

static FIRST_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*").expect("valid number regex"));

const PRICE_META_KEYS: [&str; 2] = ["product:price:amount", "og:price:amount"];

/// Currency-prefixed token in the rendered text, then retailer price
/// elements, then price meta tags, then the first bare number of two or more
/// digits, then [`DEFAULT_PRICE`].
pub(crate) fn extract_price(page: &Page, retailer: Option<&RetailerRule>) -> String {
    currency_token(page.text())
        .or_else(|| {
            retailer.and_then(|r| {
                r.price_selectors
                    .iter()
                    .filter_map(|css| page.first_text(css))
                    .find_map(|text| first_number(&text))
            })
        })
        .or_else(|| {
            PRICE_META_KEYS
                .iter()
                .filter_map(|key| page.meta_content(key))
                .find_map(|content| first_number(&content))
        })
        .or_else(|| bare_number(page.text()))
        .unwrap_or_else(|| DEFAULT_PRICE.to_string())
}

fn currency_token(text: &str) -> Option<String> {
    CURRENCY_PRICE_RE
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| digits_only(m.as_str())))
        .find(|digits| !digits.is_empty())
}

fn bare_number(text: &str) -> Option<String> {
    BARE_NUMBER_RE
        .find(text)
        .map(|m| digits_only(m.as_str()))
        .filter(|d| !d.is_empty())
}

/// Integer part of the first number in `text`; decimals are dropped.
fn first_number(text: &str) -> Option<String> {
    FIRST_NUMBER_RE
        .find(text)
        .map(|m| digits_only(m.as_str()))
        .filter(|d| !d.is_empty())
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
