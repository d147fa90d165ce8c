//! Twitter API access
//!
//! Raw status types, OAuth 1.0a signing and the HTTP client that fetches a
//! single status for the resolution pipeline.

pub mod client;
pub mod oauth;
pub mod types;

pub use client::{FetchError, TweetFetcher, TwitterClient};
pub use types::TweetRecord;
