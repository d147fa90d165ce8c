//! Tweet text rendering
//!
//! Rebuilds the text in a single pass from sorted replacement ranges, so a
//! replacement can never land on an earlier copy of the same substring.

use regex::Regex;
use std::sync::LazyLock;

use super::entities::Replacement;

static LINE_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("line break regex should compile"));

/// Applies replacements to `text` and converts line breaks to `<br/>`
///
/// Replacements may arrive in any order. Ranges are code-point offsets; a
/// range overlapping an earlier-starting one is ignored.
pub fn render_text(text: &str, replacements: &[Replacement]) -> String {
    let mut sorted: Vec<&Replacement> = replacements.iter().collect();
    sorted.sort_by_key(|rep| (rep.start, rep.end));

    // Byte offset of every code point, plus one past the end.
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = boundaries.len() - 1;

    let mut html = String::with_capacity(text.len());
    let mut cursor = 0;

    for rep in sorted {
        if rep.start < cursor || rep.start > rep.end || rep.end > char_count {
            tracing::debug!(start = rep.start, end = rep.end, "skipping overlapping replacement");
            continue;
        }
        html.push_str(&text[boundaries[cursor]..boundaries[rep.start]]);
        html.push_str(&rep.new_text);
        cursor = rep.end;
    }
    html.push_str(&text[boundaries[cursor]..]);

    // Line breaks must survive whitespace collapsing during minification.
    LINE_BREAK_REGEX.replace_all(&html, "<br/>").into_owned()
}
