//! Heuristic product attribute extraction from arbitrary page markup.
//!
//! Each attribute has its own chain of strategies and never fails: a
//! strategy either finds a value or yields to the next, and the chain ends
//! in an empty or default value. Attributes are independent of each other.

mod html;
mod pin;
mod price;
mod retailer;
mod sizes;
mod tags;
mod title;

use autoflow_core::{ProductAttributes, RawMessage};
use reqwest::Url;

use crate::discovery::strip_urls;
use html::Page;

pub use pin::DEFAULT_PIN;
pub use price::DEFAULT_PRICE;
pub use title::DEFAULT_TITLE;

/// Derives product attributes from `markup` fetched from `url`.
///
/// The message caption doubles as a title hint; the message body and
/// caption also feed the gender, quantity and pincode searches.
#[must_use]
pub fn extract(markup: &str, message: &RawMessage, url: &str) -> ProductAttributes {
    let page = Page::parse(markup);
    let host = Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_default();
    let retailer = retailer::retailer_for(&host);
    let caption = message.caption_hint();

    let title = title::extract_title(&page, caption, retailer);
    let price = price::extract_price(&page, retailer);
    let sizes = sizes::extract_sizes(&page);

    let message_text = strip_urls(&message.full_text());
    let tag_text = format!("{title}\n{message_text}");
    let gender = tags::detect_gender(&tag_text);
    let quantity = tags::detect_quantity(&tag_text);

    let pin = retailer
        .filter(|r| r.needs_pin)
        .map(|_| pin::extract_pin(&message_text, page.text()));

    tracing::debug!(
        url,
        title,
        price,
        ?sizes,
        ?gender,
        ?quantity,
        ?pin,
        "extracted product attributes"
    );

    ProductAttributes {
        title,
        price,
        sizes,
        gender,
        quantity,
        pin,
    }
}
