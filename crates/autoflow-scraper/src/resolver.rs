//! Follows link-shortener redirects to the destination URL.

use reqwest::redirect::Policy;
use reqwest::{Client, Method, Url};

use crate::config::PipelineConfig;
use crate::error::ScraperError;

/// Resolves shortened links by following their redirect chain.
///
/// Only hosts in the configured shortener set trigger a request; every other
/// URL is returned untouched without touching the network. Resolution is
/// best-effort: any failure yields the original URL.
pub struct ShortenerResolver {
    client: Client,
    shortener_domains: Vec<String>,
}

impl ShortenerResolver {
    /// Creates a resolver with the configured timeout, `User-Agent` and redirect bound.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(config: &PipelineConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(&config.user_agent)
            .redirect(Policy::limited(config.max_redirects))
            .build()?;
        Ok(Self {
            client,
            shortener_domains: config
                .shortener_domains
                .iter()
                .map(|d| d.to_ascii_lowercase())
                .collect(),
        })
    }

    /// Returns `true` when the URL's host contains a known shortener domain.
    #[must_use]
    pub fn is_shortened(&self, url: &str) -> bool {
        let Some(host) = host_of(url) else {
            return false;
        };
        self.shortener_domains
            .iter()
            .any(|domain| host.contains(domain.as_str()))
    }

    /// Returns the final destination of `url`, or `url` itself when it is not
    /// a shortener link or when resolution fails for any reason.
    pub async fn resolve(&self, url: &str) -> String {
        if !self.is_shortened(url) {
            return url.to_string();
        }

        match self.follow(url).await {
            Ok(resolved) => {
                tracing::debug!(url, resolved = %resolved, "resolved shortened link");
                resolved
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "shortener resolution failed; keeping original link");
                url.to_string()
            }
        }
    }

    /// HEAD first since most shorteners answer it with the redirect alone;
    /// GET when HEAD errors or ends on a non-success status.
    async fn follow(&self, url: &str) -> Result<String, ScraperError> {
        match self.request_final_url(Method::HEAD, url).await {
            Ok(resolved) => Ok(resolved),
            Err(head_err) => {
                tracing::debug!(url, error = %head_err, "HEAD resolution failed; retrying with GET");
                self.request_final_url(Method::GET, url).await
            }
        }
    }

    async fn request_final_url(&self, method: Method, url: &str) -> Result<String, ScraperError> {
        let response = self.client.request(method, url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response.url().to_string())
    }
}

fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
}
