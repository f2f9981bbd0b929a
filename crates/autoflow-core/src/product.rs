use serde::{Deserialize, Serialize};

/// Audience tag derived from product title and message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
    Kids,
    Unisex,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Men => write!(f, "Men"),
            Gender::Women => write!(f, "Women"),
            Gender::Kids => write!(f, "Kids"),
            Gender::Unisex => write!(f, "Unisex"),
        }
    }
}

/// Apparel size label. Variant order is the canonical display order.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeLabel {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
    XXXL,
}

impl SizeLabel {
    /// Every label, in canonical order.
    pub const ALL: [SizeLabel; 7] = [
        SizeLabel::XS,
        SizeLabel::S,
        SizeLabel::M,
        SizeLabel::L,
        SizeLabel::XL,
        SizeLabel::XXL,
        SizeLabel::XXXL,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SizeLabel::XS => "XS",
            SizeLabel::S => "S",
            SizeLabel::M => "M",
            SizeLabel::L => "L",
            SizeLabel::XL => "XL",
            SizeLabel::XXL => "XXL",
            SizeLabel::XXXL => "XXXL",
        }
    }

    /// Exact, case-sensitive match against a label.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.as_str() == token)
    }
}

impl std::fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sizes detected on a product page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "labels")]
pub enum Sizes {
    /// Nothing detected; the reply omits the size line.
    #[default]
    Unknown,
    /// Every canonical label was seen.
    All,
    /// A strict, non-empty subset in canonical order.
    Listed(Vec<SizeLabel>),
}

impl Sizes {
    /// Builds a `Sizes` from detected labels, deduplicating, ordering by
    /// canonical position and collapsing the full set to [`Sizes::All`].
    #[must_use]
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = SizeLabel>,
    {
        let mut found: Vec<SizeLabel> = labels.into_iter().collect();
        found.sort_unstable();
        found.dedup();

        if found.is_empty() {
            Sizes::Unknown
        } else if found.len() >= SizeLabel::ALL.len() {
            Sizes::All
        } else {
            Sizes::Listed(found)
        }
    }

    /// Text rendered after `Size - `, or `None` when nothing was detected.
    #[must_use]
    pub fn display_value(&self) -> Option<String> {
        match self {
            Sizes::Unknown => None,
            Sizes::All => Some("All".to_string()),
            Sizes::Listed(labels) => Some(
                labels
                    .iter()
                    .map(|l| l.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

/// Normalized product facts extracted from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttributes {
    /// Never empty; falls back to a placeholder.
    pub title: String,
    /// Decimal digits only, no currency symbol or separators.
    pub price: String,
    pub sizes: Sizes,
    pub gender: Option<Gender>,
    /// Pack or quantity phrase exactly as it appeared, e.g. `"pack of 2"`.
    pub quantity: Option<String>,
    /// Six-digit delivery pincode; only set for retailers that need one.
    pub pin: Option<String>,
}
