//! Whitespace minification for generated markup and CSS
//!
//! Embeds are often injected into Markdown, where an indented or blank line
//! turns into a code block or a stray `<p>`. Every line break is removed: between
//! tags it disappears, inside text it collapses to one space.

use regex::Regex;
use std::sync::LazyLock;

static BETWEEN_TAGS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s*[\r\n]\s*<").expect("between-tags regex should compile"));

static LINE_BREAK_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[\r\n]\s*").expect("line break run regex should compile"));

static SPACE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("space run regex should compile"));

static CSS_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("CSS comment regex should compile"));

static CSS_WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("CSS whitespace regex should compile"));

static CSS_PUNCTUATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*([{};:,>])\s*").expect("CSS punctuation regex should compile")
});

/// Collapses whitespace in HTML
pub fn minify_html(html: &str) -> String {
    let html = BETWEEN_TAGS_REGEX.replace_all(html, "><");
    let html = LINE_BREAK_RUN_REGEX.replace_all(&html, " ");
    let html = SPACE_RUN_REGEX.replace_all(&html, " ");
    html.trim().to_string()
}

/// Strips comments and redundant whitespace from a stylesheet
pub fn minify_css(css: &str) -> String {
    let css = CSS_COMMENT_REGEX.replace_all(css, "");
    let css = CSS_WHITESPACE_REGEX.replace_all(&css, " ");
    let css = CSS_PUNCTUATION_REGEX.replace_all(&css, "$1");
    css.replace(";}", "}").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_html_removes_indentation_between_tags() {
        let html = "<blockquote>\n    <p>Hi</p>\n\n    <div></div>\n</blockquote>\n";
        assert_eq!(minify_html(html), "<blockquote><p>Hi</p><div></div></blockquote>");
    }

    #[test]
    fn test_minify_html_keeps_inline_spaces() {
        let html = r#"<p><a href="x">#a</a> <a href="y">#b</a> and   more</p>"#;
        assert_eq!(
            minify_html(html),
            r#"<p><a href="x">#a</a> <a href="y">#b</a> and more</p>"#
        );
    }

    #[test]
    fn test_minify_html_collapses_line_breaks_in_text() {
        let html = "<blockquote>\n  Hello\n  <a>Jan 1</a>\n</blockquote>";
        assert_eq!(minify_html(html), "<blockquote> Hello <a>Jan 1</a></blockquote>");
    }

    #[test]
    fn test_minify_html_output_has_no_line_breaks() {
        let html = "<div>\r\n\t<span>a</span>\r\n</div>";
        let min = minify_html(html);
        assert!(!min.contains('\n') && !min.contains('\r'));
    }

    #[test]
    fn test_minify_css() {
        let css = "/* card */\n.static-tweet {\n  margin: 0 auto;\n  color : #333;\n}\n\n.a > .b,\n.c { padding: 4px 8px; }\n";
        assert_eq!(
            minify_css(css),
            ".static-tweet{margin:0 auto;color:#333}.a>.b,.c{padding:4px 8px}"
        );
    }
}
