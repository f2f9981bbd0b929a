//! Delivery pincode for retailers whose listings are pincode-specific.

use std::sync::LazyLock;

use regex::Regex;

/// Used when neither the message nor the page carries a pincode.
pub const DEFAULT_PIN: &str = "110001";

static PIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{6}\b").expect("valid pincode regex"));

/// First standalone six-digit number in the message, then in the page text,
/// then [`DEFAULT_PIN`].
pub(crate) fn extract_pin(message_text: &str, page_text: &str) -> String {
    PIN_RE
        .find(message_text)
        .or_else(|| PIN_RE.find(page_text))
        .map_or_else(|| DEFAULT_PIN.to_string(), |m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_pin_beats_page_pin() {
        assert_eq!(extract_pin("deliver to 560001", "ships to 400001"), "560001");
    }

    #[test]
    fn page_pin_when_message_has_none() {
        assert_eq!(extract_pin("great kurti", "Delivery to 400001 in 3 days"), "400001");
    }

    #[test]
    fn longer_numbers_are_not_pins() {
        assert_eq!(extract_pin("order 1234567", "sku 98765432"), DEFAULT_PIN);
    }
}
