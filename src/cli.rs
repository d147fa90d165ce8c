//! Command-line interface parsing for tweetembed
//!
//! The binary stands in for a site generator: it renders single tweets,
//! rewrites HTML documents with auto-embeds, and prints the stylesheet.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

use crate::cache::TweetCache;
use crate::config::EmbedOptions;
use crate::render::StaticFallback;

/// Error types for CLI argument handling
#[derive(Debug, Error)]
pub enum CliError {
    /// Only some of the static fallback fields were given
    #[error("Static fallback needs --handle, --text and --date together")]
    IncompleteFallback,

    /// No platform cache directory could be determined for --user-cache
    #[error("Could not determine a user cache directory")]
    NoUserCacheDir,

    /// Reading the input document failed
    #[error("Failed to read {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Render tweets to static HTML at build time
#[derive(Parser, Debug)]
#[command(name = "tweetembed")]
#[command(about = "Render Twitter/X posts as static HTML embeds")]
#[command(version)]
pub struct Cli {
    /// Directory for the tweets.json cache (caching is off when omitted)
    #[arg(long, value_name = "DIR", global = true, conflicts_with = "user_cache")]
    pub cache_dir: Option<PathBuf>,

    /// Cache in the platform cache directory (e.g. ~/.cache/tweetembed)
    #[arg(long, global = true)]
    pub user_cache: bool,

    /// Do not prefix rendered tweets with an inline <style> block
    #[arg(long, global = true)]
    pub no_inline_styles: bool,

    /// Path to a .env file with TOKEN, TOKEN_SECRET, CONSUMER_KEY, CONSUMER_SECRET
    #[arg(long, env = "DOTENV_PATH", default_value = ".env", global = true)]
    pub env_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one tweet
    Render(RenderArgs),

    /// Replace bare tweet-link paragraphs in an HTML document with embeds
    Embed {
        /// HTML file to read (stdin when omitted)
        input: Option<PathBuf>,
    },

    /// Print the tweet card stylesheet
    Styles,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Tweet id
    pub tweet_id: String,

    /// Author handle for the static fallback
    #[arg(long)]
    pub handle: Option<String>,

    /// Tweet text for the static fallback
    #[arg(long)]
    pub text: Option<String>,

    /// Display date for the static fallback
    #[arg(long)]
    pub date: Option<String>,
}

impl RenderArgs {
    /// Static fallback from the optional flags
    ///
    /// # Returns
    /// * `Ok(None)` if none of the flags were given
    /// * `Ok(Some(StaticFallback))` if all three were given
    /// * `Err(CliError::IncompleteFallback)` otherwise
    pub fn static_fallback(&self) -> Result<Option<StaticFallback>, CliError> {
        match (&self.handle, &self.text, &self.date) {
            (None, None, None) => Ok(None),
            (Some(handle), Some(text), Some(date)) => Ok(Some(StaticFallback {
                handle: handle.clone(),
                text: text.clone(),
                date: date.clone(),
            })),
            _ => Err(CliError::IncompleteFallback),
        }
    }
}

impl Cli {
    /// Embed options derived from the global flags
    ///
    /// Auto-embedding is enabled for the `embed` command only.
    pub fn embed_options(&self) -> Result<EmbedOptions, CliError> {
        let cache_directory = if self.user_cache {
            Some(TweetCache::user_cache_dir().ok_or(CliError::NoUserCacheDir)?)
        } else {
            self.cache_dir.clone()
        };

        Ok(EmbedOptions {
            cache_directory,
            use_inline_styles: !self.no_inline_styles,
            auto_embed: matches!(self.command, Command::Embed { .. }),
        })
    }
}
