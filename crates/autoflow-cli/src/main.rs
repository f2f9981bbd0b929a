use std::io::Read;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use autoflow_core::RawMessage;
use autoflow_scraper::{Outcome, Pipeline, PipelineConfig};

#[derive(Debug, Parser)]
#[command(name = "autoflow-cli")]
#[command(about = "Turn a deal message into a formatted product reply")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the reply text for one message.
    Reply(MessageArgs),
    /// Print the pipeline outcome for one message as JSON.
    Inspect(MessageArgs),
}

#[derive(Debug, Args)]
struct MessageArgs {
    /// Message body; read from stdin when omitted.
    #[arg(long)]
    body: Option<String>,
    /// Media caption sent along with the message.
    #[arg(long)]
    caption: Option<String>,
}

impl MessageArgs {
    fn into_message(self) -> anyhow::Result<RawMessage> {
        let body = match self.body {
            Some(body) => body,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read message body from stdin")?;
                buf
            }
        };
        Ok(RawMessage::new(body, self.caption))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = autoflow_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");
    let pipeline = Pipeline::new(PipelineConfig::from_app_config(&config))?;

    match cli.command {
        Commands::Reply(args) => {
            let message = args.into_message()?;
            println!("{}", pipeline.reply(&message).await);
        }
        Commands::Inspect(args) => {
            let message = args.into_message()?;
            let outcome = pipeline.process(&message).await;
            println!("{}", serde_json::to_string_pretty(&outcome_json(&outcome))?);
        }
    }

    Ok(())
}

fn outcome_json(outcome: &Outcome) -> serde_json::Value {
    match outcome {
        Outcome::NoUrl => json!({ "outcome": "no_url" }),
        Outcome::FetchFailed { url, caption } => json!({
            "outcome": "fetch_failed",
            "url": url,
            "caption": caption,
        }),
        Outcome::Extracted { url, attributes } => json!({
            "outcome": "extracted",
            "url": url,
            "attributes": attributes,
        }),
    }
}

#[cfg(test)]
mod tests {
    use autoflow_core::{ProductAttributes, Sizes};

    use super::*;

    #[test]
    fn cli_parses_reply_with_caption() {
        let cli = Cli::try_parse_from([
            "autoflow-cli",
            "reply",
            "--body",
            "https://shop.example/p",
            "--caption",
            "Hoodie",
        ])
        .unwrap();
        let Commands::Reply(args) = cli.command else {
            panic!("expected reply subcommand");
        };
        assert_eq!(args.body.as_deref(), Some("https://shop.example/p"));
        assert_eq!(args.caption.as_deref(), Some("Hoodie"));
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["autoflow-cli"]).is_err());
    }

    #[test]
    fn outcome_json_includes_attributes() {
        let outcome = Outcome::Extracted {
            url: "https://shop.example/p".to_string(),
            attributes: ProductAttributes {
                title: "Tee".to_string(),
                price: "599".to_string(),
                sizes: Sizes::All,
                gender: None,
                quantity: None,
                pin: None,
            },
        };
        let value = outcome_json(&outcome);
        assert_eq!(value["outcome"], "extracted");
        assert_eq!(value["attributes"]["price"], "599");
        assert_eq!(value["attributes"]["sizes"]["kind"], "all");
    }
}
