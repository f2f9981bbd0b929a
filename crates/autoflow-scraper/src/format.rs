//! Reply text assembly.

use autoflow_core::ProductAttributes;

/// Characters and literals removed from the headline and detail lines so the
/// price reads as a bare number. The URL and signature lines are left as given.
const CURRENCY_SYMBOLS: [char; 4] = ['₹', '$', '€', '£'];
const RUPEE_LITERAL: &str = "Rs";

const NO_LINK_NOTICE: &str =
    "⚠️ No product link detected. Send a product URL or caption with link.";
const FETCH_FAILED_NOTICE: &str = "❌ Unable to extract product info.";
const FALLBACK_DEAL: &str =
    "Men Pack of 2 T-shirt @599 rs\nhttps://example.com\n\nSize - S, M\nPin - 110001";

/// Renders the product reply:
///
/// ```text
/// [Gender] [Quantity] Title @Price rs
/// <url>
///
/// Size - <sizes>      (only when sizes were found)
/// Pin - <pincode>     (only when a pincode applies)
///
/// <signature>
/// ```
#[must_use]
pub fn format_reply(attrs: &ProductAttributes, url: &str, signature: &str) -> String {
    let gender = attrs.gender.map(|g| g.to_string());
    let headline = [
        gender.as_deref(),
        attrs.quantity.as_deref(),
        Some(attrs.title.as_str()),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.trim().is_empty())
    .collect::<Vec<_>>()
    .join(" ");
    let headline = format!("{headline} @{} rs", attrs.price);

    let mut details = Vec::new();
    if let Some(sizes) = attrs.sizes.display_value() {
        details.push(format!("Size - {sizes}"));
    }
    if let Some(pin) = attrs.pin.as_deref().filter(|p| !p.is_empty()) {
        details.push(format!("Pin - {pin}"));
    }

    let mut lines = vec![strip_currency(&headline), url.to_string(), String::new()];
    if !details.is_empty() {
        lines.extend(details.iter().map(|d| strip_currency(d)));
        lines.push(String::new());
    }
    lines.push(signature.to_string());

    lines.join("\n")
}

/// Notice sent when the message carries no link.
#[must_use]
pub fn no_link_reply(signature: &str) -> String {
    format!("{NO_LINK_NOTICE}\n\n{signature}")
}

/// Notice sent when the page could not be fetched, echoing the caption when
/// one was supplied.
#[must_use]
pub fn fetch_failed_reply(caption: Option<&str>, signature: &str) -> String {
    match caption.map(str::trim).filter(|c| !c.is_empty()) {
        Some(caption) => format!(
            "🖼️ {}\n{FETCH_FAILED_NOTICE}\n\n{signature}",
            tidy_line(caption)
        ),
        None => format!("{FETCH_FAILED_NOTICE}\n\n{signature}"),
    }
}

/// Canned reply for unexpected failures.
#[must_use]
pub fn fallback_reply(signature: &str) -> String {
    format!("{FALLBACK_DEAL}\n\n{signature}")
}

/// Removes currency markers from one line, then collapses its whitespace.
fn strip_currency(line: &str) -> String {
    let without_symbols: String = line
        .replace(RUPEE_LITERAL, "")
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c))
        .collect();
    tidy_line(&without_symbols)
}

fn tidy_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
