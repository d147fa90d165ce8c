//! Cache module for storing resolved tweets to disk
//!
//! Every tweet rendered from the live API is kept in one JSON file so later
//! builds can render it without credentials or network access. Entries are
//! kept forever; a missing or unreadable file simply behaves as an empty cache.

mod manager;

pub use manager::{CacheError, CachedTweets, TweetCache, CACHE_FILE_NAME};
