//! Retailer-specific selectors tried after the generic strategies.

/// Per-retailer extraction hints keyed by a host substring.
#[derive(Debug)]
pub(crate) struct RetailerRule {
    pub(crate) host: &'static str,
    pub(crate) title_selectors: &'static [&'static str],
    pub(crate) price_selectors: &'static [&'static str],
    /// Whether replies for this retailer carry a delivery pincode.
    pub(crate) needs_pin: bool,
}

const RETAILERS: [RetailerRule; 4] = [
    RetailerRule {
        host: "amazon.",
        title_selectors: &["#productTitle", "#title"],
        price_selectors: &[".a-price .a-offscreen", ".a-price-whole", "#priceblock_dealprice", "#priceblock_ourprice"],
        needs_pin: false,
    },
    RetailerRule {
        host: "flipkart.com",
        title_selectors: &["span.B_NuCI", "span.VU-ZEz"],
        price_selectors: &["div._30jeq3", "div.Nx9bqj"],
        needs_pin: false,
    },
    RetailerRule {
        host: "myntra.com",
        title_selectors: &["h1.pdp-title", "h1.pdp-name"],
        price_selectors: &["span.pdp-price strong", "span.pdp-price"],
        needs_pin: false,
    },
    RetailerRule {
        host: "meesho.com",
        title_selectors: &["span[class*=ProductTitle]"],
        price_selectors: &["h4[class*=Price]"],
        needs_pin: true,
    },
];

/// Returns the rule whose host substring appears in `host`, if any.
pub(crate) fn retailer_for(host: &str) -> Option<&'static RetailerRule> {
    let host = host.to_ascii_lowercase();
    RETAILERS.iter().find(|rule| host.contains(rule.host))
}
