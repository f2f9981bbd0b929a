//! Single-attempt page retrieval.

use std::future::Future;

use reqwest::redirect::Policy;
use reqwest::Client;

use crate::config::PipelineConfig;
use crate::error::ScraperError;

/// Source of product page markup.
///
/// [`HttpPageFetcher`] is the standard implementation; a renderer that
/// executes page scripts can stand in behind the same contract.
pub trait PageFetcher {
    /// Retrieves the markup at `url` in a single attempt.
    ///
    /// Every failure (network, timeout, non-2xx status, unreadable body)
    /// surfaces as [`ScraperError::FetchFailed`].
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, ScraperError>> + Send;
}

/// Plain HTTP GET with a browser-like `User-Agent`. No retries, no caching.
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &PipelineConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(&config.user_agent)
            .redirect(Policy::limited(config.max_redirects))
            .build()?;
        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<String, ScraperError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let response = self
            .client
            .get(parsed)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-IN,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        self.get(url).await.map_err(|e| {
            tracing::warn!(url, error = %e, "page fetch failed");
            ScraperError::FetchFailed {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_url_is_reported_as_fetch_failure() {
        let fetcher = HttpPageFetcher::new(&PipelineConfig::default()).expect("client builds");
        let err = fetcher.fetch("not a url").await.unwrap_err();
        match err {
            ScraperError::FetchFailed { url, reason } => {
                assert_eq!(url, "not a url");
                assert!(reason.starts_with("invalid URL"), "reason: {reason}");
            }
            other => panic!("expected FetchFailed, got {other:?}"),
        }
    }
}
