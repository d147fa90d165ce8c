//! Tweet cache persisted to a single JSON file
//!
//! Provides a `TweetCache` that keeps every resolved tweet in
//! `<cache_dir>/tweets.json`, keyed by tweet id. Entries never expire.

use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;

use crate::config::EmbedOptions;
use crate::render::TweetViewModel;

/// Name of the cache file inside the cache directory
pub const CACHE_FILE_NAME: &str = "tweets.json";

/// On-disk shape: tweet id → view model
pub type CachedTweets = BTreeMap<String, TweetViewModel>;

/// Errors that can occur when writing the cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// Directory creation or file write failed
    #[error("Cache I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cache contents could not be serialized
    #[error("Failed to serialize cache: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reads and writes the tweet cache file
///
/// A cache built without a directory is disabled: lookups always miss and
/// stores do nothing. Clones share one write lock, so concurrent stores from
/// the same process never drop each other's entries.
#[derive(Debug, Clone)]
pub struct TweetCache {
    /// Path of `tweets.json`, `None` when caching is disabled
    path: Option<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl TweetCache {
    /// Creates a disabled cache
    pub fn disabled() -> Self {
        Self {
            path: None,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a cache stored in `cache_dir`
    pub fn with_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(cache_dir.into().join(CACHE_FILE_NAME)),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a cache from host options; an absent or empty directory disables it
    pub fn from_options(options: &EmbedOptions) -> Self {
        match &options.cache_directory {
            Some(dir) if !dir.as_os_str().is_empty() => Self::with_dir(dir.clone()),
            _ => Self::disabled(),
        }
    }

    /// Platform cache directory for tweetembed
    ///
    /// `~/.cache/tweetembed/` on Linux. Returns `None` if no home directory
    /// can be determined.
    pub fn user_cache_dir() -> Option<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "tweetembed")?;
        Some(project_dirs.cache_dir().to_path_buf())
    }

    pub fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    /// Path of the backing file, if caching is enabled
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads every cached tweet
    ///
    /// A missing, unreadable or malformed file reads as an empty cache.
    pub async fn read_all(&self) -> CachedTweets {
        let Some(path) = &self.path else {
            return CachedTweets::new();
        };

        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "tweet cache not created yet");
                return CachedTweets::new();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read tweet cache");
                return CachedTweets::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(tweets) => tweets,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed tweet cache");
                CachedTweets::new()
            }
        }
    }

    /// Looks up a tweet by id
    pub async fn lookup(&self, tweet_id: &str) -> Option<TweetViewModel> {
        if !self.is_enabled() {
            return None;
        }
        self.read_all().await.remove(tweet_id)
    }

    /// Adds or replaces a tweet and rewrites the cache file
    ///
    /// The new contents are staged in `tweets.json.tmp` and renamed over the
    /// cache file. Creates the cache directory if needed. No-op when caching
    /// is disabled.
    pub async fn store(&self, tweet: &TweetViewModel) -> Result<(), CacheError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let _guard = self.write_lock.lock().await;

        let mut tweets = self.read_all().await;
        tweets.insert(tweet.id.clone(), tweet.clone());
        let json = serde_json::to_string_pretty(&tweets)?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await.map_err(|source| CacheError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        // Readers take no lock, so they must only ever see a complete file.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, json).await.map_err(|source| CacheError::Io {
            path: staging.clone(),
            source,
        })?;
        fs::rename(&staging, path).await.map_err(|source| CacheError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), tweet_id = %tweet.id, "wrote tweet cache");
        Ok(())
    }
}
