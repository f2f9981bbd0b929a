//! Gender and pack-size tags found in title and message text.

use std::sync::LazyLock;

use autoflow_core::Gender;
use regex::Regex;

/// Checked in this order; the first tag with a whole-word keyword match wins.
static GENDER_PATTERNS: LazyLock<Vec<(Gender, Regex)>> = LazyLock::new(|| {
    [
        (Gender::Men, r"(?i)\b(?:men|mens|men's|male)\b"),
        (Gender::Women, r"(?i)\b(?:women|womens|women's|ladies|female)\b"),
        (Gender::Kids, r"(?i)\b(?:kids|kid's|boys|girls|children)\b"),
        (Gender::Unisex, r"(?i)\bunisex\b"),
    ]
    .into_iter()
    .map(|(gender, pattern)| (gender, Regex::new(pattern).expect("valid gender regex")))
    .collect()
});

/// Pack and quantity phrases in priority order.
static QUANTITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bpack\s+of\s+\d+\b",
        r"(?i)\bset\s+of\s+\d+\b",
        r"(?i)\b\d+\s?pcs\b",
        r"(?i)\b\d+\s?kg\b",
        r"(?i)\b\d+\s?ml\b",
        r"(?i)\b\d+\s?g\b",
        r"(?i)\bquantity\s+\d+\b",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("valid quantity regex"))
    .collect()
});

pub(crate) fn detect_gender(text: &str) -> Option<Gender> {
    GENDER_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(gender, _)| *gender)
}

/// The matched phrase verbatim, e.g. `"Pack of 3"` stays capitalised.
pub(crate) fn detect_quantity(text: &str) -> Option<String> {
    QUANTITY_PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_is_whole_word() {
        assert_eq!(detect_gender("Women Kurta"), Some(Gender::Women));
        assert_eq!(detect_gender("MEN'S running shoe"), Some(Gender::Men));
        assert_eq!(detect_gender("Mentos pack"), None);
        assert_eq!(detect_gender("Plain cotton tee"), None);
    }

    #[test]
    fn gender_priority_order() {
        assert_eq!(detect_gender("Female fit, not for male"), Some(Gender::Men));
        assert_eq!(detect_gender("unisex tee for kids"), Some(Gender::Kids));
        assert_eq!(detect_gender("Unisex Hoodie"), Some(Gender::Unisex));
    }

    #[test]
    fn quantity_patterns_in_priority_order() {
        assert_eq!(detect_quantity("500g almonds, pack of 2").as_deref(), Some("pack of 2"));
        assert_eq!(detect_quantity("Set of 4 mugs").as_deref(), Some("Set of 4"));
        assert_eq!(detect_quantity("Socks 6 pcs").as_deref(), Some("6 pcs"));
        assert_eq!(detect_quantity("Rice 5kg bag").as_deref(), Some("5kg"));
        assert_eq!(detect_quantity("Shampoo 650 ml").as_deref(), Some("650 ml"));
        assert_eq!(detect_quantity("Coffee 200g jar").as_deref(), Some("200g"));
        assert_eq!(detect_quantity("quantity 3 left").as_deref(), Some("quantity 3"));
    }

    #[test]
    fn quantity_units_need_word_boundaries() {
        assert_eq!(detect_quantity("5 guys and 2 gadgets"), None);
        assert_eq!(detect_quantity("plain shirt"), None);
    }
}
