//! Markup helpers shared by the attribute strategies.

use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Elements whose text is never rendered.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// A parsed product page together with its rendered text.
pub(crate) struct Page {
    document: Html,
    text: String,
}

impl Page {
    pub(crate) fn parse(markup: &str) -> Self {
        let document = Html::parse_document(markup);
        let text = visible_text(&document);
        Self { document, text }
    }

    pub(crate) fn document(&self) -> &Html {
        &self.document
    }

    /// Whitespace-collapsed text of every rendered text node, in document order.
    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// `content` of the first `<meta>` whose `property` or `name` equals `key`.
    pub(crate) fn meta_content(&self, key: &str) -> Option<String> {
        let selector = Selector::parse("meta[content]").ok()?;
        self.document.select(&selector).find_map(|meta| {
            let el = meta.value();
            let matches = [el.attr("property"), el.attr("name")]
                .into_iter()
                .flatten()
                .any(|v| v.trim().eq_ignore_ascii_case(key));
            if !matches {
                return None;
            }
            el.attr("content")
                .map(collapse_whitespace)
                .filter(|c| !c.is_empty())
        })
    }

    /// Collapsed text of the first element matching `css` with non-empty text.
    pub(crate) fn first_text(&self, css: &str) -> Option<String> {
        let selector = Selector::parse(css).ok()?;
        self.document
            .select(&selector)
            .map(element_text)
            .find(|t| !t.is_empty())
    }

    /// Elements carrying `hint` in a class, id, name, aria-label or `data-*`
    /// attribute value, compared case-insensitively.
    pub(crate) fn elements_hinting<'a>(&'a self, hint: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |el| {
                el.value().attrs().any(|(name, value)| {
                    let hinted_attr = matches!(name, "class" | "id" | "name" | "aria-label")
                        || name.starts_with("data-");
                    hinted_attr && value.to_ascii_lowercase().contains(hint)
                })
            })
    }
}

/// Rendered text beneath `el`, whitespace-collapsed.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    collapse_whitespace(&el.text().collect::<Vec<_>>().join(" "))
}

fn visible_text(document: &Html) -> String {
    let parts: Vec<&str> = document
        .root_element()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|a| {
                    a.value()
                        .as_element()
                        .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
                });
                if hidden {
                    None
                } else {
                    Some(&**text)
                }
            }
            _ => None,
        })
        .collect();
    collapse_whitespace(&parts.join(" "))
}

pub(crate) fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
          <head>
            <title> Cotton   T-Shirt | Shop </title>
            <meta content="Cotton T-Shirt | Shop" property="og:title">
            <meta name="description" content="">
            <style>.size { color: red }</style>
            <script>var sizes = ["XS", "XL"];</script>
          </head>
          <body>
            <h1>Cotton <em>T-Shirt</em></h1>
            <ul class="Size-Selector"><li>S</li><li>M</li></ul>
          </body>
        </html>
    "#;

    #[test]
    fn visible_text_skips_scripts_and_styles() {
        let page = Page::parse(PAGE);
        assert!(page.text().contains("Cotton T-Shirt | Shop"));
        assert!(!page.text().contains("var sizes"));
        assert!(!page.text().contains("color: red"));
    }

    #[test]
    fn meta_content_matches_property_regardless_of_attribute_order() {
        let page = Page::parse(PAGE);
        assert_eq!(
            page.meta_content("og:title").as_deref(),
            Some("Cotton T-Shirt | Shop")
        );
        assert_eq!(page.meta_content("description"), None);
    }

    #[test]
    fn first_text_collapses_nested_markup() {
        let page = Page::parse(PAGE);
        assert_eq!(page.first_text("h1").as_deref(), Some("Cotton T-Shirt"));
        assert_eq!(page.first_text("h2"), None);
    }

    #[test]
    fn elements_hinting_is_case_insensitive() {
        let page = Page::parse(PAGE);
        let texts: Vec<String> = page.elements_hinting("size").map(element_text).collect();
        assert_eq!(texts, vec!["S M".to_string()]);
    }
}
