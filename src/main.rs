//! tweetembed - render Twitter/X posts as static HTML
//!
//! Command-line host for the embed pipeline. Rendered HTML goes to stdout,
//! logs go to stderr.

use std::io::{self, Read};

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use tweetembed::cli::{Cli, CliError, Command};
use tweetembed::{tweet_styles, Settings, TweetEmbedder};

fn read_input(input: Option<&std::path::Path>) -> Result<String, CliError> {
    match input {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Input {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| CliError::Input {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buffer)
        }
    }
}

/// Reads credentials from the environment and builds the pipeline
fn build_embedder(cli: &Cli) -> Result<TweetEmbedder, CliError> {
    let settings = Settings::from_env(cli.embed_options()?);
    Ok(TweetEmbedder::new(settings))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load .env file if it exists
    if cli.env_file.exists() {
        dotenvy::from_path(&cli.env_file)?;
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match &cli.command {
        Command::Styles => print!("{}", tweet_styles()),
        Command::Render(args) => {
            let fallback = args.static_fallback()?;
            let embedder = build_embedder(&cli)?;
            let resolution = embedder.resolve(&args.tweet_id, fallback.as_ref()).await;
            tracing::info!(tweet_id = %args.tweet_id, strategy = ?resolution.strategy, "rendered tweet");
            println!("{}", resolution.html);
        }
        Command::Embed { input } => {
            let content = read_input(input.as_deref())?;
            let embedder = build_embedder(&cli)?;
            print!("{}", embedder.auto_embed(&content).await);
        }
    }

    Ok(())
}
