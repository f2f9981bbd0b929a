use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; AutoFlow/1.0)";
const DEFAULT_SIGNATURE: &str = "@reviewcheckk";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment is valid.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("AUTOFLOW_ENV", "development"))?;
    let log_level = or_default("AUTOFLOW_LOG_LEVEL", "info");

    let http_timeout_secs = parse_u64("AUTOFLOW_HTTP_TIMEOUT_SECS", "8")?;
    if !(1..=9).contains(&http_timeout_secs) {
        return Err(ConfigError::InvalidEnvVar {
            var: "AUTOFLOW_HTTP_TIMEOUT_SECS".to_string(),
            reason: format!("{http_timeout_secs} is outside the supported range 1..=9"),
        });
    }

    let user_agent = or_default("AUTOFLOW_USER_AGENT", DEFAULT_USER_AGENT);

    let max_redirects = parse_usize("AUTOFLOW_MAX_REDIRECTS", "10")?;
    if max_redirects == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "AUTOFLOW_MAX_REDIRECTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let extra_shortener_domains = parse_domain_list(&or_default("AUTOFLOW_EXTRA_SHORTENERS", ""));
    let signature = or_default("AUTOFLOW_SIGNATURE", DEFAULT_SIGNATURE);

    Ok(AppConfig {
        env,
        log_level,
        http_timeout_secs,
        user_agent,
        max_redirects,
        extra_shortener_domains,
        signature,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "AUTOFLOW_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

/// Splits a comma-separated host list, lowercasing entries and dropping blanks.
fn parse_domain_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|d| d.trim().to_ascii_lowercase())
        .filter(|d| !d.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
