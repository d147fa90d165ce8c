//! Auto-embed scanning
//!
//! Finds paragraphs that consist of a single bare tweet link, as Markdown
//! renders a status URL pasted on its own line:
//!
//! ```html
//! <p><a href="https://twitter.com/rustlang/status/42">https://twitter.com/rustlang/status/42</a></p>
//! ```
//!
//! The link text must equal the href; labelled links are left alone.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static STATUS_PARAGRAPH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<p><a href="(https://(?:www\.)?(?:twitter|x)\.com/[^/"<>]+/status/([0-9]+))">([^<]*)</a></p>"#,
    )
    .expect("status paragraph regex should compile")
});

/// A bare status-link paragraph found in rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLink {
    /// Byte range of the whole `<p>…</p>` element
    pub range: Range<usize>,
    pub tweet_id: String,
}

/// Finds every bare status-link paragraph, in document order
pub fn find_status_links(content: &str) -> Vec<StatusLink> {
    STATUS_PARAGRAPH_REGEX
        .captures_iter(content)
        .filter(|caps| caps[1] == caps[3])
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(StatusLink {
                range: whole.range(),
                tweet_id: caps[2].to_string(),
            })
        })
        .collect()
}
