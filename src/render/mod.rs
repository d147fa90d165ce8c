//! Tweet rendering
//!
//! Record → view model (entity extraction and text splicing) → HTML card →
//! presentation (inline styles and minification). Fallback markup for tweets
//! that could not be resolved lives in [`template`] too.

pub mod entities;
pub mod format;
pub mod minify;
pub mod template;
pub mod text;
pub mod view_model;

pub use format::{present, tweet_styles};
pub use template::StaticFallback;
pub use view_model::TweetViewModel;

use minify::minify_html;

/// Renders a view model to its final, minified HTML
pub fn render_tweet(tweet: &TweetViewModel, use_inline_styles: bool) -> String {
    let card = minify_html(&template::tweet_card(tweet).into_string());
    present(&card, use_inline_styles)
}

/// Renders the caller-supplied static fallback block
pub fn render_static_fallback(tweet_id: &str, fallback: &StaticFallback) -> String {
    minify_html(&template::static_fallback(tweet_id, fallback).into_string())
}

/// Renders the client-side widget placeholder
pub fn render_placeholder(tweet_id: &str) -> String {
    minify_html(&template::client_side_placeholder(tweet_id).into_string())
}
