pub mod app_config;
pub mod config;
pub mod message;
pub mod product;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use message::RawMessage;
pub use product::{Gender, ProductAttributes, SizeLabel, Sizes};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
