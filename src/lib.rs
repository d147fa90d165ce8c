//! Build-time Twitter/X embeds
//!
//! Resolves tweet ids to static HTML cards for static-site generators. A tweet
//! is rendered from the local cache if present, otherwise fetched from the
//! Twitter API and cached, otherwise replaced by a static or client-side
//! fallback. See [`TweetEmbedder`].

pub mod cache;
pub mod cli;
pub mod config;
pub mod embed;
pub mod pipeline;
pub mod render;
pub mod twitter;

pub use cache::TweetCache;
pub use config::{Credentials, EmbedOptions, Settings};
pub use pipeline::{Resolution, Strategy, TweetEmbedder};
pub use render::{tweet_styles, StaticFallback, TweetViewModel};
