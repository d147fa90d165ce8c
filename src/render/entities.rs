//! Entity extraction
//!
//! Turns the hashtag, mention, URL and media entities of a status into
//! offset-tagged replacements for the text renderer, and collects the
//! attached image URLs.

use maud::html;

use crate::twitter::types::{Indices, TweetRecord};

/// A span of the tweet text and the HTML that replaces it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Start offset in code points, inclusive
    pub start: usize,
    /// End offset in code points, exclusive
    pub end: usize,
    /// Text currently at `[start, end)`
    pub old_text: String,
    /// HTML fragment to splice in; empty removes the span
    pub new_text: String,
}

/// Output of [`extract`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    /// Replacements in extraction order (not sorted)
    pub replacements: Vec<Replacement>,
    /// Image URLs in entity order
    pub images: Vec<String>,
}

/// Extracts replacements and images from a status
pub fn extract(record: &TweetRecord) -> Extracted {
    let text = &record.full_text;
    let entities = &record.entities;
    let mut replacements = Vec::new();

    for hashtag in &entities.hashtags {
        if let Some(old_text) = slice_chars(text, hashtag.indices) {
            let tag = payload_or_tail(&hashtag.text, &old_text);
            let href = format!("https://twitter.com/hashtag/{tag}");
            let new_text = anchor(&href, &old_text);
            replacements.push(replacement(hashtag.indices, old_text, new_text));
        }
    }

    for mention in &entities.user_mentions {
        if let Some(old_text) = slice_chars(text, mention.indices) {
            let handle = payload_or_tail(&mention.screen_name, &old_text);
            let href = format!("https://twitter.com/{handle}");
            let new_text = anchor(&href, &old_text);
            replacements.push(replacement(mention.indices, old_text, new_text));
        }
    }

    for url in &entities.urls {
        if let Some(old_text) = slice_chars(text, url.indices) {
            let expanded = url.expanded_url.as_deref().unwrap_or(&url.url);
            let new_text = anchor(expanded, strip_scheme(expanded));
            replacements.push(replacement(url.indices, old_text, new_text));
        }
    }

    // Media links are dropped from the text; the images render below it.
    for media in &entities.media {
        if let Some(old_text) = slice_chars(text, media.indices) {
            replacements.push(replacement(media.indices, old_text, String::new()));
        }
    }

    let images = match &record.extended_entities {
        Some(extended) if !extended.media.is_empty() => &extended.media,
        _ => &entities.media,
    }
    .iter()
    .map(|media| media.media_url_https.clone())
    .collect();

    Extracted {
        replacements,
        images,
    }
}

fn replacement(indices: Indices, old_text: String, new_text: String) -> Replacement {
    Replacement {
        start: indices[0],
        end: indices[1],
        old_text,
        new_text,
    }
}

/// Substring at a code-point range, or `None` if the range is invalid
fn slice_chars(text: &str, [start, end]: Indices) -> Option<String> {
    let count = text.chars().count();
    if start > end || end > count {
        tracing::warn!(start, end, len = count, "skipping entity outside tweet text");
        return None;
    }
    Some(text.chars().skip(start).take(end - start).collect())
}

/// Entity payload if present, otherwise the label minus its `#`/`@` sigil
fn payload_or_tail<'a>(payload: &'a str, label: &'a str) -> &'a str {
    if payload.is_empty() {
        label
            .char_indices()
            .nth(1)
            .map_or("", |(offset, _)| &label[offset..])
    } else {
        payload
    }
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

fn anchor(href: &str, label: &str) -> String {
    html! { a href=(href) { (label) } }.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twitter::types::{
        ExtendedEntities, HashtagEntity, MediaEntity, MentionEntity, TweetEntities, TweetUser,
        UrlEntity,
    };

    fn record(text: &str, entities: TweetEntities) -> TweetRecord {
        TweetRecord {
            id_str: "1".to_string(),
            full_text: text.to_string(),
            created_at: "Wed Oct 10 20:19:24 +0000 2018".to_string(),
            favorite_count: 0,
            user: TweetUser {
                name: "Ferris".to_string(),
                screen_name: "ferris".to_string(),
                profile_image_url_https: String::new(),
            },
            entities,
            extended_entities: None,
        }
    }

    fn media(indices: Indices, url: &str) -> MediaEntity {
        MediaEntity {
            indices,
            media_url_https: url.to_string(),
        }
    }

    #[test]
    fn test_no_entities_yields_nothing() {
        let extracted = extract(&record("plain text", TweetEntities::default()));
        assert!(extracted.replacements.is_empty());
        assert!(extracted.images.is_empty());
    }

    #[test]
    fn test_hashtag_links_to_search() {
        let entities = TweetEntities {
            hashtags: vec![HashtagEntity {
                indices: [4, 9],
                text: "rust".to_string(),
            }],
            ..Default::default()
        };
        let extracted = extract(&record("I 💜 #rust", entities));

        let rep = &extracted.replacements[0];
        assert_eq!(rep.old_text, "#rust");
        assert_eq!(
            rep.new_text,
            r##"<a href="https://twitter.com/hashtag/rust">#rust</a>"##
        );
    }

    #[test]
    fn test_mention_links_to_profile_using_label_when_payload_missing() {
        let entities = TweetEntities {
            user_mentions: vec![MentionEntity {
                indices: [3, 10],
                screen_name: String::new(),
            }],
            ..Default::default()
        };
        let extracted = extract(&record("hi @ferris!", entities));

        assert_eq!(
            extracted.replacements[0].new_text,
            r#"<a href="https://twitter.com/ferris">@ferris</a>"#
        );
    }

    #[test]
    fn test_url_shows_expanded_url_without_scheme() {
        let entities = TweetEntities {
            urls: vec![UrlEntity {
                indices: [5, 28],
                url: "https://t.co/AbCdEfGhIj".to_string(),
                expanded_url: Some("https://www.rust-lang.org/learn?x=1&y=2".to_string()),
            }],
            ..Default::default()
        };
        let extracted = extract(&record("read https://t.co/AbCdEfGhIj", entities));

        let rep = &extracted.replacements[0];
        assert_eq!(rep.old_text, "https://t.co/AbCdEfGhIj");
        assert_eq!(
            rep.new_text,
            r#"<a href="https://www.rust-lang.org/learn?x=1&amp;y=2">www.rust-lang.org/learn?x=1&amp;y=2</a>"#
        );
    }

    #[test]
    fn test_url_without_expansion_falls_back_to_short_link() {
        let entities = TweetEntities {
            urls: vec![UrlEntity {
                indices: [0, 11],
                url: "http://t.co".to_string(),
                expanded_url: None,
            }],
            ..Default::default()
        };
        let extracted = extract(&record("http://t.co", entities));

        assert_eq!(
            extracted.replacements[0].new_text,
            r#"<a href="http://t.co">t.co</a>"#
        );
    }

    #[test]
    fn test_media_is_removed_and_collected_in_order() {
        let entities = TweetEntities {
            media: vec![
                media([5, 10], "https://pbs.twimg.com/a.jpg"),
                media([11, 16], "https://pbs.twimg.com/b.jpg"),
            ],
            ..Default::default()
        };
        let extracted = extract(&record("look pic_a pic_b", entities));

        assert_eq!(extracted.replacements.len(), 2);
        assert!(extracted.replacements.iter().all(|r| r.new_text.is_empty()));
        assert_eq!(extracted.replacements[0].old_text, "pic_a");
        assert_eq!(
            extracted.images,
            vec!["https://pbs.twimg.com/a.jpg", "https://pbs.twimg.com/b.jpg"]
        );
    }

    #[test]
    fn test_extended_media_supplies_all_photos() {
        let entities = TweetEntities {
            media: vec![media([5, 10], "https://pbs.twimg.com/a.jpg")],
            ..Default::default()
        };
        let mut rec = record("look pic_a", entities);
        rec.extended_entities = Some(ExtendedEntities {
            media: vec![
                media([5, 10], "https://pbs.twimg.com/a.jpg"),
                media([5, 10], "https://pbs.twimg.com/b.jpg"),
            ],
        });

        let extracted = extract(&rec);

        assert_eq!(extracted.replacements.len(), 1);
        assert_eq!(extracted.images.len(), 2);
        assert_eq!(extracted.images[1], "https://pbs.twimg.com/b.jpg");
    }

    #[test]
    fn test_out_of_range_entity_is_skipped() {
        let entities = TweetEntities {
            hashtags: vec![
                HashtagEntity {
                    indices: [0, 50],
                    text: "nope".to_string(),
                },
                HashtagEntity {
                    indices: [4, 2],
                    text: "inverted".to_string(),
                },
            ],
            ..Default::default()
        };
        let extracted = extract(&record("#short", entities));
        assert!(extracted.replacements.is_empty());
    }

    #[test]
    fn test_payload_or_tail() {
        assert_eq!(payload_or_tail("rust", "#rust"), "rust");
        assert_eq!(payload_or_tail("", "#rust"), "rust");
        assert_eq!(payload_or_tail("", "＃rust"), "rust");
        assert_eq!(payload_or_tail("", ""), "");
    }
}
