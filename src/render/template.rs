//! HTML templates for the three kinds of embed output.

use maud::{html, Markup, PreEscaped};

use super::view_model::{status_url, TweetViewModel};

/// Loads the official widget script that hydrates `twitter-tweet` blockquotes
pub const WIDGETS_SCRIPT: &str =
    r#"<script async src="https://platform.twitter.com/widgets.js" charset="utf-8"></script>"#;

/// Handle used in placeholder links; the widget script only reads the id
const PLACEHOLDER_HANDLE: &str = "user";

/// Caller-supplied text to show when the tweet cannot be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFallback {
    pub handle: String,
    pub text: String,
    pub date: String,
}

/// Static card for a fully resolved tweet
pub fn tweet_card(tweet: &TweetViewModel) -> Markup {
    let profile_url = tweet.profile_url();
    let tweet_url = tweet.status_url();

    html! {
        blockquote.static-tweet {
            div.tweet-header {
                a.tweet-profile href=(profile_url) {
                    img src=(tweet.user.profile_image_url);
                }
                div.tweet-author {
                    a.tweet-author-name href=(profile_url) { (tweet.user.name) }
                    a.tweet-author-handle href=(profile_url) { "@" (tweet.user.screen_name) }
                }
                a.tweet-bird href=(tweet_url) {
                    div.tweet-bird-icon aria-label="View on Twitter" title="View on Twitter" role="presentation" {}
                }
            }
            // Body is already HTML: escaped API text plus generated anchors.
            p.tweet-body { (PreEscaped(&tweet.html_text)) }
            div.tweet-images {
                @for image in &tweet.images {
                    img alt="Image from Tweet" src=(image);
                }
            }
            div.tweet-footer {
                a.tweet-heart href=(format!("https://twitter.com/intent/like?tweet_id={}", tweet.id)) {
                    div.tweet-heart-icon aria-label="Like" title="Like" role="img" {}
                    span.tweet-favorite-count { (tweet.favorite_count) }
                }
                a.tweet-date href=(tweet_url) title=(format!("Time Posted: {}", tweet.dates.meta)) {
                    (tweet.dates.display)
                }
            }
        }
    }
}

/// Widget blockquote pre-filled with the caller's text and date
pub fn static_fallback(tweet_id: &str, fallback: &StaticFallback) -> Markup {
    html! {
        blockquote.twitter-tweet {
            (fallback.text)
            " "
            a href=(status_url(&fallback.handle, tweet_id)) { (fallback.date) }
        }
        (PreEscaped(WIDGETS_SCRIPT))
    }
}

/// Empty widget blockquote, hydrated in the browser
pub fn client_side_placeholder(tweet_id: &str) -> Markup {
    html! {
        blockquote.twitter-tweet {
            a href=(status_url(PLACEHOLDER_HANDLE, tweet_id)) {}
        }
        (PreEscaped(WIDGETS_SCRIPT))
    }
}
