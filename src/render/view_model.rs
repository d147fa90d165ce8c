//! Render-ready tweet representation
//!
//! A [`TweetViewModel`] is derived once from a fetched [`TweetRecord`] and is
//! what the cache persists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entities::extract;
use super::text::render_text;
use crate::twitter::TweetRecord;

/// Format of `created_at` in API responses, e.g. `Wed Oct 10 20:19:24 +0000 2018`
const API_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Shown under the tweet, e.g. `08:19 PM · Oct 10, 2018`
const DISPLAY_DATE_FORMAT: &str = "%I:%M %p · %b %-d, %Y";

/// Tooltip on the date link, e.g. `Oct 10, 2018 08:19:24 (UTC)`
const META_DATE_FORMAT: &str = "%b %-d, %Y %I:%M:%S (UTC)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetDates {
    pub display: String,
    pub meta: String,
}

/// The author fields shown in the card header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub name: String,
    pub screen_name: String,
    pub profile_image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetViewModel {
    pub id: String,
    /// Tweet body with entities linked and line breaks as `<br/>`
    pub html_text: String,
    pub images: Vec<String>,
    pub dates: TweetDates,
    pub favorite_count: u64,
    pub user: AuthorSummary,
}

impl TweetViewModel {
    pub fn from_record(record: &TweetRecord) -> Self {
        let extracted = extract(record);
        let html_text = render_text(&record.full_text, &extracted.replacements);

        Self {
            id: record.id_str.clone(),
            html_text,
            images: extracted.images,
            dates: format_dates(&record.created_at),
            favorite_count: record.favorite_count,
            user: AuthorSummary {
                name: record.user.name.clone(),
                screen_name: record.user.screen_name.clone(),
                profile_image_url: record.user.profile_image_url_https.clone(),
            },
        }
    }

    /// Canonical link to the tweet
    pub fn status_url(&self) -> String {
        status_url(&self.user.screen_name, &self.id)
    }

    pub fn profile_url(&self) -> String {
        format!("https://twitter.com/{}", self.user.screen_name)
    }
}

/// `https://twitter.com/{handle}/status/{id}`
pub fn status_url(handle: &str, tweet_id: &str) -> String {
    format!("https://twitter.com/{handle}/status/{tweet_id}")
}

/// Formats the API timestamp for display; unparseable input is shown verbatim
fn format_dates(created_at: &str) -> TweetDates {
    match DateTime::parse_from_str(created_at, API_DATE_FORMAT) {
        Ok(parsed) => TweetDates {
            display: parsed.format(DISPLAY_DATE_FORMAT).to_string(),
            meta: parsed.with_timezone(&Utc).format(META_DATE_FORMAT).to_string(),
        },
        Err(e) => {
            tracing::warn!(created_at, error = %e, "unrecognized tweet timestamp");
            TweetDates {
                display: created_at.to_string(),
                meta: created_at.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twitter::types::{HashtagEntity, MediaEntity, TweetEntities, TweetUser};

    fn sample_record() -> TweetRecord {
        TweetRecord {
            id_str: "1050118621198921728".to_string(),
            full_text: "Ship it #rust\nhttps://t.co/pic".to_string(),
            created_at: "Wed Oct 10 20:19:24 +0000 2018".to_string(),
            favorite_count: 12,
            user: TweetUser {
                name: "Ferris".to_string(),
                screen_name: "ferris".to_string(),
                profile_image_url_https: "https://pbs.twimg.com/ferris.png".to_string(),
            },
            entities: TweetEntities {
                hashtags: vec![HashtagEntity {
                    indices: [8, 13],
                    text: "rust".to_string(),
                }],
                media: vec![MediaEntity {
                    indices: [14, 30],
                    media_url_https: "https://pbs.twimg.com/media/pic.jpg".to_string(),
                }],
                ..Default::default()
            },
            extended_entities: None,
        }
    }

    #[test]
    fn test_from_record() {
        let vm = TweetViewModel::from_record(&sample_record());

        assert_eq!(vm.id, "1050118621198921728");
        assert_eq!(
            vm.html_text,
            r##"Ship it <a href="https://twitter.com/hashtag/rust">#rust</a><br/>"##
        );
        assert_eq!(vm.images, vec!["https://pbs.twimg.com/media/pic.jpg"]);
        assert_eq!(vm.favorite_count, 12);
        assert_eq!(vm.user.screen_name, "ferris");
        assert_eq!(vm.user.profile_image_url, "https://pbs.twimg.com/ferris.png");
    }

    #[test]
    fn test_format_dates() {
        let dates = format_dates("Wed Oct 10 20:19:24 +0000 2018");
        assert_eq!(dates.display, "08:19 PM · Oct 10, 2018");
        assert_eq!(dates.meta, "Oct 10, 2018 08:19:24 (UTC)");
    }

    #[test]
    fn test_format_dates_single_digit_day() {
        let dates = format_dates("Mon Jan 01 09:05:00 +0000 2024");
        assert_eq!(dates.display, "09:05 AM · Jan 1, 2024");
    }

    #[test]
    fn test_format_dates_invalid_input_is_kept() {
        let dates = format_dates("yesterday");
        assert_eq!(dates.display, "yesterday");
        assert_eq!(dates.meta, "yesterday");
    }

    #[test]
    fn test_urls() {
        let vm = TweetViewModel::from_record(&sample_record());
        assert_eq!(
            vm.status_url(),
            "https://twitter.com/ferris/status/1050118621198921728"
        );
        assert_eq!(vm.profile_url(), "https://twitter.com/ferris");
    }

    #[test]
    fn test_serde_roundtrip_through_json() {
        let vm = TweetViewModel::from_record(&sample_record());
        let json = serde_json::to_string(&vm).unwrap();
        let back: TweetViewModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vm);
    }
}
