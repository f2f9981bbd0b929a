//! Settings shared by the network-facing pipeline stages.

use std::time::Duration;

use autoflow_core::AppConfig;

/// Link-shortening hosts, matched as case-insensitive host substrings.
pub const SHORTENER_DOMAINS: [&str; 11] = [
    "cutt.ly",
    "spoo.me",
    "amzn-to.co",
    "fkrt.cc",
    "bitli.in",
    "da.gd",
    "wishlink.com",
    "bit.ly",
    "amzn.to",
    "tinyurl.com",
    "fkrt.it",
];

const DEFAULT_TIMEOUT_SECS: u64 = 8;
const DEFAULT_MAX_REDIRECTS: usize = 10;
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; AutoFlow/1.0)";
const DEFAULT_SIGNATURE: &str = "@reviewcheckk";

/// Explicit configuration for one [`crate::Pipeline`].
///
/// Constructed once and passed to each component; there is no process-wide
/// client or bot instance.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub max_redirects: usize,
    /// Full shortener set: the built-in domains plus any configured extras.
    pub shortener_domains: Vec<String>,
    pub signature: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            shortener_domains: SHORTENER_DOMAINS.iter().map(|d| (*d).to_string()).collect(),
            signature: DEFAULT_SIGNATURE.to_string(),
        }
    }
}

impl PipelineConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        let mut shortener_domains: Vec<String> =
            SHORTENER_DOMAINS.iter().map(|d| (*d).to_string()).collect();
        for extra in &config.extra_shortener_domains {
            if !shortener_domains.contains(extra) {
                shortener_domains.push(extra.clone());
            }
        }

        Self {
            timeout: Duration::from_secs(config.http_timeout_secs),
            user_agent: config.user_agent.clone(),
            max_redirects: config.max_redirects,
            shortener_domains,
            signature: config.signature.clone(),
        }
    }

    /// Adds a shortener host substring, e.g. for a locally mocked shortener.
    #[must_use]
    pub fn with_shortener(mut self, domain: &str) -> Self {
        let domain = domain.to_ascii_lowercase();
        if !self.shortener_domains.contains(&domain) {
            self.shortener_domains.push(domain);
        }
        self
    }
}
