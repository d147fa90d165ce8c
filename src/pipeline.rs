//! Tweet resolution pipeline
//!
//! Resolves a tweet id to HTML by trying a fixed sequence of [`Strategy`]
//! values and stopping at the first one that produces output:
//!
//! 1. [`Strategy::Cache`]: a previously resolved tweet from `tweets.json`
//! 2. [`Strategy::LiveFetch`]: the Twitter API, when credentials are configured
//! 3. [`Strategy::StaticFallback`]: text and date supplied by the caller
//! 4. [`Strategy::ClientSide`]: a widget placeholder hydrated in the browser
//!
//! Failures inside a strategy are logged and the next strategy is tried, so
//! resolution always yields HTML.

use crate::cache::TweetCache;
use crate::config::Settings;
use crate::embed::find_status_links;
use crate::render::{
    render_placeholder, render_static_fallback, render_tweet, StaticFallback, TweetViewModel,
};
use crate::twitter::{TweetFetcher, TwitterClient};

/// One way of producing HTML for a tweet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Cache,
    LiveFetch,
    StaticFallback,
    ClientSide,
}

impl Strategy {
    /// Resolution order
    pub const ORDER: [Strategy; 4] = [
        Strategy::Cache,
        Strategy::LiveFetch,
        Strategy::StaticFallback,
        Strategy::ClientSide,
    ];
}

/// HTML for a tweet and the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub strategy: Strategy,
    pub html: String,
}

/// Resolves tweet ids to embeddable HTML
pub struct TweetEmbedder {
    settings: Settings,
    cache: TweetCache,
    /// Present only when credentials are configured
    fetcher: Option<Box<dyn TweetFetcher>>,
}

impl std::fmt::Debug for TweetEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweetEmbedder")
            .field("settings", &self.settings)
            .field("cache", &self.cache)
            .field("live_fetch", &self.fetcher.is_some())
            .finish()
    }
}

impl TweetEmbedder {
    /// Creates an embedder that fetches from the public Twitter API when
    /// `settings` carries credentials
    pub fn new(settings: Settings) -> Self {
        let fetcher = settings
            .credentials
            .clone()
            .map(|credentials| Box::new(TwitterClient::new(credentials)) as Box<dyn TweetFetcher>);
        Self::build(settings, fetcher)
    }

    /// Creates an embedder with a custom fetcher, regardless of configured credentials
    pub fn with_fetcher(settings: Settings, fetcher: Box<dyn TweetFetcher>) -> Self {
        Self::build(settings, Some(fetcher))
    }

    fn build(settings: Settings, fetcher: Option<Box<dyn TweetFetcher>>) -> Self {
        let cache = TweetCache::from_options(&settings.options);
        Self {
            settings,
            cache,
            fetcher,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn cache(&self) -> &TweetCache {
        &self.cache
    }

    /// Renders a tweet, falling back as far as necessary
    pub async fn render(&self, tweet_id: &str, fallback: Option<&StaticFallback>) -> String {
        self.resolve(tweet_id, fallback).await.html
    }

    /// Resolves a tweet and reports which strategy answered
    pub async fn resolve(&self, tweet_id: &str, fallback: Option<&StaticFallback>) -> Resolution {
        for strategy in Strategy::ORDER {
            if let Some(html) = self.attempt(strategy, tweet_id, fallback).await {
                tracing::debug!(tweet_id, ?strategy, "resolved tweet");
                return Resolution { strategy, html };
            }
        }

        // ClientSide always answers; kept for exhaustiveness.
        Resolution {
            strategy: Strategy::ClientSide,
            html: render_placeholder(tweet_id),
        }
    }

    /// Runs a single strategy, returning `None` when it has no answer
    pub async fn attempt(
        &self,
        strategy: Strategy,
        tweet_id: &str,
        fallback: Option<&StaticFallback>,
    ) -> Option<String> {
        match strategy {
            Strategy::Cache => self.from_cache(tweet_id).await,
            Strategy::LiveFetch => self.from_api(tweet_id).await,
            Strategy::StaticFallback => {
                fallback.map(|fallback| render_static_fallback(tweet_id, fallback))
            }
            Strategy::ClientSide => Some(render_placeholder(tweet_id)),
        }
    }

    async fn from_cache(&self, tweet_id: &str) -> Option<String> {
        if !self.cache.is_enabled() {
            return None;
        }
        if self.settings.force_refresh {
            tracing::debug!(tweet_id, "force refresh set, bypassing cache");
            return None;
        }

        let tweet = self.cache.lookup(tweet_id).await?;
        Some(self.present(&tweet))
    }

    async fn from_api(&self, tweet_id: &str) -> Option<String> {
        let Some(fetcher) = &self.fetcher else {
            tracing::debug!(tweet_id, "no credentials, skipping live fetch");
            return None;
        };

        let record = match fetcher.fetch(tweet_id).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(tweet_id, error = %e, "live fetch failed, falling back");
                return None;
            }
        };
        tracing::info!(tweet_id, "fetched tweet from API");

        let tweet = TweetViewModel::from_record(&record);

        if let Err(e) = self.cache.store(&tweet).await {
            tracing::warn!(tweet_id, error = %e, "could not cache tweet");
        }

        Some(self.present(&tweet))
    }

    fn present(&self, tweet: &TweetViewModel) -> String {
        render_tweet(tweet, self.settings.options.use_inline_styles)
    }

    /// Replaces every paragraph that holds nothing but a bare status link with
    /// the embed for that tweet
    ///
    /// Returns `content` unchanged when auto-embedding is disabled. Embeds are
    /// resolved concurrently.
    pub async fn auto_embed(&self, content: &str) -> String {
        if !self.settings.options.auto_embed {
            return content.to_string();
        }

        let links = find_status_links(content);
        if links.is_empty() {
            return content.to_string();
        }

        let embeds = futures::future::join_all(
            links.iter().map(|link| self.render(&link.tweet_id, None)),
        )
        .await;

        let mut output = String::with_capacity(content.len());
        let mut cursor = 0;
        for (link, embed) in links.iter().zip(embeds) {
            output.push_str(&content[cursor..link.range.start]);
            output.push_str(&embed);
            cursor = link.range.end;
        }
        output.push_str(&content[cursor..]);
        output
    }
}
