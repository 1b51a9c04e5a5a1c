//! Structural slide type detection.

use crate::{
    document::SlideKind,
    markdown::elements::{match_column_marker, match_fence, match_heading, match_pipe_row, match_quote, ColumnToken},
};

/// Auto-detect a slide's type from its body, with directive comment lines
/// already removed.
///
/// The precedence is fixed and evaluated top to bottom, first match wins:
/// quote, chart, table, code, timeline, two-column, title, section, content.
/// An explicit `slide:` directive is resolved by the caller and always takes
/// priority over anything detected here.
pub(crate) fn classify(body: &str) -> SlideKind {
    let mut fence_tags: Vec<&str> = Vec::new();
    let mut lines: Vec<&str> = Vec::new();
    let mut in_fence = false;
    for line in body.lines() {
        if let Some(tag) = match_fence(line) {
            if !in_fence {
                fence_tags.push(tag);
            }
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }

    let has_fence = |wanted: &str| fence_tags.iter().any(|tag| *tag == wanted);
    let has_generic_fence = fence_tags.iter().any(|tag| !matches!(*tag, "chart" | "table" | "timeline"));
    let has_pipe_row =
        lines.iter().any(|line| match_column_marker(line).is_none() && match_pipe_row(line).is_some());
    let has_column_marker = lines.iter().any(|line| {
        matches!(match_column_marker(line), Some(ColumnToken::Left | ColumnToken::Right | ColumnToken::Open))
    });
    let first_heading = lines.first().and_then(|line| match_heading(line)).map(|(level, _)| level);

    if lines.first().is_some_and(|line| match_quote(line).is_some()) {
        SlideKind::Quote
    } else if has_fence("chart") {
        SlideKind::Chart
    } else if has_fence("table") || has_pipe_row {
        SlideKind::Table
    } else if has_generic_fence {
        SlideKind::Code
    } else if has_fence("timeline") {
        SlideKind::Timeline
    } else if has_column_marker {
        SlideKind::TwoColumn
    } else if first_heading == Some(1) && lines.len() <= 3 {
        SlideKind::Title
    } else if first_heading == Some(2) && lines.len() <= 2 {
        SlideKind::Section
    } else {
        SlideKind::Content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::leading_quote("> be curious\n\n```table\nheaders: [a]\n```", SlideKind::Quote)]
    #[case::chart_fence("# Sales\n```chart\ntype: bar\n```", SlideKind::Chart)]
    #[case::chart_beats_table("```chart\nx: 1\n```\n| a | b |", SlideKind::Chart)]
    #[case::table_fence("```table\nheaders: [a]\n```", SlideKind::Table)]
    #[case::pipe_rows("# Data\n| a | b |\n| - | - |\n| 1 | 2 |", SlideKind::Table)]
    #[case::table_beats_trailing_quote("```table\nheaders: [a]\n```\n> an aside", SlideKind::Table)]
    #[case::code_fence("# Usage\n```rust\nfn main() {}\n```", SlideKind::Code)]
    #[case::untagged_fence("```\nplain\n```", SlideKind::Code)]
    #[case::timeline_fence("```timeline\nevents: []\n```", SlideKind::Timeline)]
    #[case::explicit_columns("# Halves\n::left::\n- a\n::right::\n- b", SlideKind::TwoColumn)]
    #[case::columns_dialect(":::columns\n- a\n|||\n- b\n:::", SlideKind::TwoColumn)]
    #[case::title("# Welcome\n## Subtitle", SlideKind::Title)]
    #[case::title_alone("# Welcome", SlideKind::Title)]
    #[case::long_heading_body("# Welcome\na\nb\nc", SlideKind::Content)]
    #[case::section("## Part Two", SlideKind::Section)]
    #[case::section_with_detail("## Part Two\nwhat's next", SlideKind::Section)]
    #[case::long_section("## Part Two\na\nb", SlideKind::Content)]
    #[case::plain_content("just some\nparagraph text", SlideKind::Content)]
    #[case::bullets("# Agenda\n- one\n- two\n- three", SlideKind::Content)]
    fn precedence(#[case] body: &str, #[case] expected: SlideKind) {
        assert_eq!(classify(body), expected);
    }

    #[test]
    fn pipe_rows_inside_fences_do_not_count() {
        let body = "# Shell\n```bash\ncat file | grep x\n```";
        assert_eq!(classify(body), SlideKind::Code);
    }

    #[test]
    fn quote_must_lead() {
        // The quote marker is not on the first non-empty line, so the table
        // cue wins.
        let body = "# Numbers\n| a | b |\n> a quote";
        assert_eq!(classify(body), SlideKind::Table);
    }
}
