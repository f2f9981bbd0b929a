#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide settings for the link enrichment pipeline.
///
/// Built once at startup and handed to the scraper, which derives its own
/// per-component settings from it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Timeout applied to every outbound request (shortener resolution and page fetch).
    pub http_timeout_secs: u64,
    pub user_agent: String,
    /// Redirect hops followed before a request is treated as failed.
    pub max_redirects: usize,
    /// Host substrings treated as shorteners on top of the built-in set.
    pub extra_shortener_domains: Vec<String>,
    /// Attribution line closing every reply.
    pub signature: String,
}
