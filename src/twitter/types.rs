//! Twitter API v1.1 status payload
//!
//! Only the fields needed to render an embed are modeled. Unknown fields are
//! ignored and missing entity lists deserialize as empty.

use serde::{Deserialize, Serialize};

/// A status as returned by `statuses/show` with `tweet_mode=extended`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetRecord {
    /// Tweet id as a string (the numeric `id` overflows JavaScript numbers)
    pub id_str: String,
    /// Full, untruncated text; the API delivers it HTML-escaped
    pub full_text: String,
    /// Creation time, e.g. `Wed Oct 10 20:19:24 +0000 2018`
    pub created_at: String,
    #[serde(default)]
    pub favorite_count: u64,
    pub user: TweetUser,
    #[serde(default)]
    pub entities: TweetEntities,
    /// Carries every attached photo; `entities.media` only lists the first
    #[serde(default)]
    pub extended_entities: Option<ExtendedEntities>,
}

/// Author of a status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetUser {
    pub name: String,
    pub screen_name: String,
    #[serde(default)]
    pub profile_image_url_https: String,
}

/// Character offsets `[start, end)` into `full_text`, counted in code points
pub type Indices = [usize; 2];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TweetEntities {
    #[serde(default)]
    pub hashtags: Vec<HashtagEntity>,
    #[serde(default)]
    pub user_mentions: Vec<MentionEntity>,
    #[serde(default)]
    pub urls: Vec<UrlEntity>,
    #[serde(default)]
    pub media: Vec<MediaEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedEntities {
    #[serde(default)]
    pub media: Vec<MediaEntity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagEntity {
    pub indices: Indices,
    /// Tag without the leading `#`
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionEntity {
    pub indices: Indices,
    /// Handle without the leading `@`
    #[serde(default)]
    pub screen_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlEntity {
    pub indices: Indices,
    /// The t.co link as it appears in the text
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub expanded_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaEntity {
    pub indices: Indices,
    pub media_url_https: String,
}
