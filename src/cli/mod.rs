use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod ask;
pub mod chat;
pub mod health;
pub mod view;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Start an interactive tutoring session (default)
    Chat {},
    /// Ask a single question and print the tutor's reply
    Ask {
        message: String,
    },
    /// Ask the tutor to quiz you on your notes
    Quiz {},
    /// Check whether the tutoring service is up
    Health {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the tutoring service [env: TUTOR_API_URL]
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

fn init_tracing() {
    // Logs go to stderr so they never end up mixed into the transcript
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=warn", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    init_tracing();

    let config = AppConfig::default().with_api_url(args.api_url);
    tracing::debug!("Using tutoring service at {}", config.api_url);

    // Handle each sub command
    match args.command {
        Some(Command::Chat {}) | None => {
            chat::run(config).await?;
        }
        Some(Command::Ask { message }) => {
            ask::run(config, &message).await?;
        }
        Some(Command::Quiz {}) => {
            ask::run_quiz(config).await?;
        }
        Some(Command::Health {}) => {
            health::run(config).await?;
        }
    }

    Ok(())
}
