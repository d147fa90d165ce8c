//! Twitter status API client
//!
//! Fetches a single status from the v1.1 `statuses/show` endpoint in extended
//! text mode. Failures are reported to the caller as [`FetchError`]; there are
//! no retries.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use thiserror::Error;

use super::oauth::OAuthSigner;
use super::types::TweetRecord;
use crate::config::Credentials;

/// Base URL for the Twitter API
const TWITTER_API_BASE_URL: &str = "https://api.twitter.com";

/// Errors that can occur when fetching a tweet
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse API response: {0}")]
    Json(#[from] serde_json::Error),

    /// Could not sign the request
    #[error("OAuth signing failed: {0}")]
    OAuth(String),

    /// API answered with a non-success status
    #[error("Twitter API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Tweet ids are numeric; anything else would alter the request path
    #[error("Invalid tweet id: {0:?}")]
    InvalidId(String),
}

/// Source of raw tweet records
///
/// The pipeline only holds a fetcher when credentials are configured.
#[async_trait]
pub trait TweetFetcher: Send + Sync {
    async fn fetch(&self, tweet_id: &str) -> Result<TweetRecord, FetchError>;
}

/// Client for the Twitter v1.1 status endpoint
#[derive(Debug, Clone)]
pub struct TwitterClient {
    http_client: Client,
    signer: OAuthSigner,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl TwitterClient {
    /// Creates a client against the public API
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, TWITTER_API_BASE_URL)
    }

    /// Creates a client against a custom base URL (for testing)
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            signer: OAuthSigner::new(credentials),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of the status endpoint for an id, without query string
    fn status_url(&self, tweet_id: &str) -> String {
        format!("{}/1.1/statuses/show/{}.json", self.base_url, tweet_id)
    }

    /// Fetches a status in extended text mode
    ///
    /// # Returns
    /// * `Ok(TweetRecord)` - The parsed status
    /// * `Err(FetchError)` - Invalid id, transport, signing, HTTP status or JSON failure
    pub async fn fetch_tweet(&self, tweet_id: &str) -> Result<TweetRecord, FetchError> {
        if !is_tweet_id(tweet_id) {
            return Err(FetchError::InvalidId(tweet_id.to_string()));
        }

        let url = self.status_url(tweet_id);
        let query = [("tweet_mode", "extended")];
        let authorization = self.signer.authorization("GET", &url, &query)?;

        let response = self
            .http_client
            .get(&url)
            .query(&query)
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl TweetFetcher for TwitterClient {
    async fn fetch(&self, tweet_id: &str) -> Result<TweetRecord, FetchError> {
        self.fetch_tweet(tweet_id).await
    }
}

fn is_tweet_id(tweet_id: &str) -> bool {
    !tweet_id.is_empty() && tweet_id.bytes().all(|b| b.is_ascii_digit())
}

/// Pulls the first message out of an `{"errors": [{"message": ..}]}` body
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value["errors"][0]["message"]
                .as_str()
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| body.chars().take(200).collect())
}
