//! Pattern matchers for individual markup lines.
//!
//! Each matcher is a pure function from a line to a classified token. The
//! precedence between constructs is not encoded here: the classifier and the
//! content structurer apply these in their own, explicit order.

use crate::document::ImageRef;
use std::collections::BTreeMap;

/// How many leading spaces map to one list nesting level.
const INDENT_UNIT: usize = 2;

/// A matched list item line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ListLine<'a> {
    pub(crate) level: u8,
    pub(crate) text: &'a str,
}

/// A matched column marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ColumnToken {
    /// `::left::`
    Left,
    /// `::right::`
    Right,
    /// `:::columns`, which also enters the left column.
    Open,
    /// `|||`, which switches to the right column.
    Split,
    /// `:::`, which leaves column mode.
    Close,
}

/// Match an ATX heading: one to six `#` followed by a space.
pub(crate) fn match_heading(line: &str) -> Option<(u8, &str)> {
    let trimmed = line.trim_start();
    let level = trimmed.bytes().take_while(|b| *b == b'#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = &trimmed[level..];
    rest.strip_prefix(' ').map(|text| (level as u8, text.trim()))
}

/// Match a `-`/`*`/`+` bullet; the nesting level comes from the leading
/// indent divided by the indent unit, rounded down.
pub(crate) fn match_bullet(line: &str) -> Option<ListLine> {
    let trimmed = line.trim_start();
    let mut chars = trimmed.chars();
    if !matches!(chars.next(), Some('-' | '*' | '+')) || chars.next() != Some(' ') {
        return None;
    }
    let text = trimmed[2..].trim();
    if text.is_empty() {
        return None;
    }
    Some(ListLine { level: indent_level(line), text })
}

/// Match a `N.` numbered list item.
pub(crate) fn match_numbered(line: &str) -> Option<ListLine> {
    let trimmed = line.trim_start();
    let digits = trimmed.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let text = trimmed[digits..].strip_prefix(". ")?.trim();
    if text.is_empty() {
        return None;
    }
    Some(ListLine { level: indent_level(line), text })
}

/// Match a `>` block quote line.
pub(crate) fn match_quote(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix('>').map(str::trim)
}

/// Match a quote attribution line: an em-dash or hyphen lead-in.
///
/// Only meaningful right after quote lines; the structurer decides when to
/// apply it.
pub(crate) fn match_attribution(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if !trimmed.starts_with('—') && !trimmed.starts_with('-') {
        return None;
    }
    let author = trimmed.trim_start_matches(['—', '-', ' ']);
    (!author.is_empty()).then_some(author)
}

/// Match a `|`-delimited table row and split it into trimmed cells.
pub(crate) fn match_pipe_row(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    if !trimmed.starts_with('|') {
        return None;
    }
    let inner = trimmed.trim_matches('|');
    Some(inner.split('|').map(|cell| cell.trim().to_string()).collect())
}

/// Match a column marker line.
pub(crate) fn match_column_marker(line: &str) -> Option<ColumnToken> {
    match line.trim() {
        "::left::" => Some(ColumnToken::Left),
        "::right::" => Some(ColumnToken::Right),
        ":::columns" => Some(ColumnToken::Open),
        "|||" => Some(ColumnToken::Split),
        ":::" => Some(ColumnToken::Close),
        _ => None,
    }
}

/// Match a fence line, returning the trimmed info tag (possibly empty).
pub(crate) fn match_fence(line: &str) -> Option<&str> {
    line.trim().strip_prefix("```").map(str::trim)
}

/// Match an `![alt](src){key=value,...}` image reference.
pub(crate) fn match_image(line: &str) -> Option<ImageRef> {
    let start = line.find("![")?;
    let rest = &line[start + 2..];
    let alt_end = rest.find(']')?;
    let alt = &rest[..alt_end];
    let rest = rest[alt_end + 1..].strip_prefix('(')?;
    let source_end = rest.find(')')?;
    let source = &rest[..source_end];
    let mut attributes = BTreeMap::new();
    if let Some(attrs) = rest[source_end + 1..].strip_prefix('{') {
        let attrs = attrs.split_once('}')?.0;
        for attribute in attrs.split(',') {
            if let Some((key, value)) = attribute.split_once('=') {
                attributes.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
    }
    Some(ImageRef { alt: alt.trim().to_string(), source: source.trim().to_string(), attributes })
}

/// Whether this line opens an HTML comment.
pub(crate) fn is_comment_open(line: &str) -> bool {
    line.trim_start().starts_with("<!--")
}

/// Whether this line is a slide break: three or more dashes and nothing else.
pub(crate) fn is_slide_break(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'-')
}

/// Whether this line delimits a front matter block.
pub(crate) fn is_front_matter_delimiter(line: &str) -> bool {
    line.trim() == "---"
}

fn indent_level(line: &str) -> u8 {
    let indent = line.len() - line.trim_start().len();
    (indent / INDENT_UNIT).min(u8::MAX as usize) as u8
}
