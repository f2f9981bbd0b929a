//! End-to-end handling of one inbound message.

use std::panic::AssertUnwindSafe;

use autoflow_core::{ProductAttributes, RawMessage};
use futures::FutureExt;

use crate::affiliate::strip_tracking;
use crate::config::PipelineConfig;
use crate::discovery::find_product_url;
use crate::error::ScraperError;
use crate::extract::extract;
use crate::fetch::{HttpPageFetcher, PageFetcher};
use crate::format::{fallback_reply, fetch_failed_reply, format_reply, no_link_reply};
use crate::resolver::ShortenerResolver;

/// Where a message ended up after running through the stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The message carried no link; nothing was requested.
    NoUrl,
    /// The page at `url` could not be retrieved.
    FetchFailed {
        url: String,
        caption: Option<String>,
    },
    /// Attributes were extracted from the page at the cleaned `url`.
    Extracted {
        url: String,
        attributes: ProductAttributes,
    },
}

impl Outcome {
    /// Renders the reply text for this outcome.
    #[must_use]
    pub fn render(&self, signature: &str) -> String {
        match self {
            Outcome::NoUrl => no_link_reply(signature),
            Outcome::FetchFailed { caption, .. } => fetch_failed_reply(caption.as_deref(), signature),
            Outcome::Extracted { url, attributes } => format_reply(attributes, url, signature),
        }
    }
}

/// Discovery → resolution → stripping → fetch → extraction → formatting.
///
/// Holds no per-message state, so one `Pipeline` can serve concurrent
/// messages.
pub struct Pipeline<F = HttpPageFetcher> {
    config: PipelineConfig,
    resolver: ShortenerResolver,
    fetcher: F,
}

impl Pipeline<HttpPageFetcher> {
    /// Builds a pipeline that fetches pages over plain HTTP.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if an HTTP client cannot be constructed.
    pub fn new(config: PipelineConfig) -> Result<Self, ScraperError> {
        let fetcher = HttpPageFetcher::new(&config)?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: PageFetcher> Pipeline<F> {
    /// Builds a pipeline around a custom page fetcher.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the resolver's client cannot be constructed.
    pub fn with_fetcher(config: PipelineConfig, fetcher: F) -> Result<Self, ScraperError> {
        let resolver = ShortenerResolver::new(&config)?;
        Ok(Self {
            config,
            resolver,
            fetcher,
        })
    }

    /// Runs every stage for `message` and reports where it ended up.
    pub async fn process(&self, message: &RawMessage) -> Outcome {
        let Some(candidate) = find_product_url(&message.body, message.caption_hint()) else {
            tracing::debug!("no product link in message");
            return Outcome::NoUrl;
        };

        let resolved = self.resolver.resolve(&candidate).await;
        let url = strip_tracking(&resolved);
        tracing::debug!(candidate, resolved, url, "product link prepared");

        match self.fetcher.fetch(&url).await {
            Ok(markup) => {
                let attributes = extract(&markup, message, &url);
                Outcome::Extracted { url, attributes }
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "product page unavailable");
                Outcome::FetchFailed {
                    url,
                    caption: message.caption_hint().map(str::to_owned),
                }
            }
        }
    }

    /// Produces the reply text for `message`. Never fails: a panic anywhere
    /// in the stages is logged and answered with the canned fallback reply.
    pub async fn reply(&self, message: &RawMessage) -> String {
        let signature = &self.config.signature;
        match AssertUnwindSafe(self.process(message)).catch_unwind().await {
            Ok(outcome) => outcome.render(signature),
            Err(_) => {
                tracing::error!("message handling panicked; sending fallback reply");
                fallback_reply(signature)
            }
        }
    }
}
