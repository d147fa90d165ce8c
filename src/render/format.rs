//! Final presentation of rendered tweets: optional inline styles plus minification.

use super::minify::{minify_css, minify_html};

/// Stylesheet for `.static-tweet` cards
const TWEET_CSS: &str = include_str!("../../assets/tweet.css");

/// The bundled stylesheet, for hosts that ship it in their own CSS bundle
pub fn tweet_styles() -> &'static str {
    TWEET_CSS
}

/// Wraps a rendered card with an inline `<style>` block if requested and minifies the result
pub fn present(card_html: &str, use_inline_styles: bool) -> String {
    if use_inline_styles {
        let styles = format!("<style type='text/css'>{}</style>", minify_css(TWEET_CSS));
        minify_html(&(styles + card_html))
    } else {
        minify_html(card_html)
    }
}
