//! The content structurer: walks a slide body and collects its typed pieces.

use crate::{
    document::{CodeBlock, ContentItem, ContentKind, ImageRef, SlideBody, SlideKind, TableSpec, Warning},
    markdown::elements::{
        match_attribution, match_bullet, match_column_marker, match_fence, match_heading, match_image,
        match_numbered, match_pipe_row, match_quote, ColumnToken, ListLine,
    },
    presentation::blocks,
};

/// The column mode tracked while scanning a slide body.
///
/// Entered on dedicated marker lines and left only on the next marker or end
/// of body; every slide starts over at `None`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
enum ColumnState {
    #[default]
    None,
    Left,
    Right,
}

/// A fenced block lifted out of the body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FencedBlock {
    pub(crate) tag: String,
    pub(crate) body: String,
}

/// Everything collected from one pass over a slide body.
#[derive(Debug, Default)]
pub(crate) struct ScannedSlide {
    pub(crate) title: Option<String>,
    pub(crate) subtitle: Option<String>,
    items: Vec<ContentItem>,
    left: Vec<ContentItem>,
    right: Vec<ContentItem>,
    quote_lines: Vec<String>,
    quote_author: Option<String>,
    pipe_rows: Vec<Vec<String>>,
    images: Vec<ImageRef>,
    blocks: Vec<FencedBlock>,
}

/// Scan a slide body, with directive comment lines already removed.
pub(crate) fn scan(body: &str) -> ScannedSlide {
    let mut scanned = ScannedSlide::default();
    let mut column = ColumnState::None;
    let mut fence: Option<FencedBlock> = None;
    let mut last_was_quote = false;

    for line in body.lines() {
        if fence.is_some() {
            if match_fence(line).is_some() {
                scanned.blocks.push(fence.take().unwrap_or_default());
            } else if let Some(open) = fence.as_mut() {
                if !open.body.is_empty() {
                    open.body.push('\n');
                }
                open.body.push_str(line);
            }
            continue;
        }
        if let Some(tag) = match_fence(line) {
            fence = Some(FencedBlock { tag: tag.to_string(), body: String::new() });
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        if let Some(marker) = match_column_marker(line) {
            column = match marker {
                ColumnToken::Left | ColumnToken::Open => ColumnState::Left,
                ColumnToken::Right | ColumnToken::Split => ColumnState::Right,
                ColumnToken::Close => ColumnState::None,
            };
            continue;
        }
        if let Some((_, text)) = match_heading(line) {
            // First heading wins the title, the second wins the subtitle,
            // anything later folds into content; heading levels don't matter.
            if scanned.title.is_none() {
                scanned.title = Some(text.to_string());
            } else if scanned.subtitle.is_none() {
                scanned.subtitle = Some(text.to_string());
            } else {
                scanned.push_item(column, ContentItem::paragraph(text));
            }
            last_was_quote = false;
            continue;
        }
        if let Some(text) = match_quote(line) {
            scanned.quote_lines.push(text.to_string());
            last_was_quote = true;
            continue;
        }
        if last_was_quote && scanned.quote_author.is_none() {
            if let Some(author) = match_attribution(line) {
                scanned.quote_author = Some(author.to_string());
                last_was_quote = false;
                continue;
            }
        }
        last_was_quote = false;
        if let Some(ListLine { level, text }) = match_bullet(line) {
            scanned.push_item(column, ContentItem::new(text, level, ContentKind::Bullet));
            continue;
        }
        if let Some(ListLine { level, text }) = match_numbered(line) {
            scanned.push_item(column, ContentItem::new(text, level, ContentKind::Numbered));
            continue;
        }
        if let Some(cells) = match_pipe_row(line) {
            scanned.pipe_rows.push(cells);
            continue;
        }
        if let Some(image) = match_image(line) {
            scanned.images.push(image);
            continue;
        }
        scanned.push_item(column, ContentItem::paragraph(line.trim()));
    }
    if let Some(open) = fence.take() {
        // An unterminated fence still counts as a block.
        scanned.blocks.push(open);
    }
    scanned
}

impl ScannedSlide {
    fn push_item(&mut self, column: ColumnState, item: ContentItem) {
        match column {
            ColumnState::None => self.items.push(item),
            ColumnState::Left => self.left.push(item),
            ColumnState::Right => self.right.push(item),
        }
    }

    /// Whether structuring found neither a title nor any content.
    pub(crate) fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.subtitle.is_none()
            && self.items.is_empty()
            && self.left.is_empty()
            && self.right.is_empty()
            && self.quote_lines.is_empty()
            && self.pipe_rows.is_empty()
            && self.images.is_empty()
            && self.blocks.is_empty()
    }

    /// Whether any image reference forces a full bleed layout.
    pub(crate) fn has_full_bleed_image(&self) -> bool {
        self.images.iter().any(ImageRef::is_full_bleed)
    }

    /// Assemble the typed body for the classified slide kind.
    pub(crate) fn into_body(self, kind: SlideKind, slide_index: usize, warnings: &mut Vec<Warning>) -> SlideBody {
        match kind {
            SlideKind::Title => SlideBody::Title,
            SlideKind::Section => SlideBody::Section,
            SlideKind::Content => SlideBody::Content { items: self.all_items() },
            SlideKind::TwoColumn => SlideBody::TwoColumn { left: self.left, right: self.right },
            SlideKind::Image => SlideBody::Image { images: self.images },
            SlideKind::Chart => self.into_chart(slide_index, warnings),
            SlideKind::Table => self.into_table(slide_index, warnings),
            SlideKind::Quote => {
                SlideBody::Quote { text: self.quote_lines.join(" "), author: self.quote_author }
            }
            SlideKind::Code => self.into_code(),
            SlideKind::Timeline => self.into_timeline(slide_index, warnings),
            SlideKind::Comparison => SlideBody::Comparison { left: self.left, right: self.right },
            SlideKind::Team => SlideBody::Team { members: self.all_items() },
            SlideKind::Blank => SlideBody::Blank,
        }
    }

    fn all_items(self) -> Vec<ContentItem> {
        let mut items = self.items;
        items.extend(self.left);
        items.extend(self.right);
        items
    }

    fn into_chart(self, slide_index: usize, warnings: &mut Vec<Warning>) -> SlideBody {
        let Some(block) = self.blocks.into_iter().find(|block| block.tag == "chart") else {
            return SlideBody::Chart(Default::default());
        };
        match blocks::parse_chart(&block.body) {
            Ok(chart) => SlideBody::Chart(chart),
            Err(error) => {
                warnings.push(Warning::new(slide_index, format!("malformed chart block: {error}")));
                SlideBody::Code(CodeBlock { language: block.tag, code: block.body })
            }
        }
    }

    fn into_table(self, slide_index: usize, warnings: &mut Vec<Warning>) -> SlideBody {
        if let Some(block) = self.blocks.iter().find(|block| block.tag == "table") {
            return match blocks::parse_table(&block.body, slide_index, warnings) {
                Ok(table) => SlideBody::Table(table),
                Err(error) => {
                    warnings.push(Warning::new(slide_index, format!("malformed table block: {error}")));
                    SlideBody::Code(CodeBlock { language: block.tag.clone(), code: block.body.clone() })
                }
            };
        }
        let mut rows = self.pipe_rows.into_iter();
        let Some(headers) = rows.next() else {
            return SlideBody::Table(TableSpec::default());
        };
        // The second row is the separator; it is skipped unconditionally,
        // never validated.
        let data: Vec<_> = rows.skip(1).collect();
        let data = blocks::reconcile_rows(headers.len(), data, slide_index, warnings);
        SlideBody::Table(TableSpec { headers, rows: data })
    }

    fn into_code(self) -> SlideBody {
        let block = self
            .blocks
            .iter()
            .find(|block| !matches!(block.tag.as_str(), "chart" | "table" | "timeline"))
            .or_else(|| self.blocks.first());
        let code = match block {
            Some(block) => {
                let language = if block.tag.is_empty() { "text".to_string() } else { block.tag.clone() };
                CodeBlock { language, code: block.body.clone() }
            }
            None => CodeBlock { language: "text".into(), code: String::new() },
        };
        SlideBody::Code(code)
    }

    fn into_timeline(self, slide_index: usize, warnings: &mut Vec<Warning>) -> SlideBody {
        let Some(block) = self.blocks.into_iter().find(|block| block.tag == "timeline") else {
            return SlideBody::Timeline { events: Vec::new() };
        };
        match blocks::parse_timeline(&block.body) {
            Ok(events) => SlideBody::Timeline { events },
            Err(error) => {
                warnings.push(Warning::new(slide_index, format!("malformed timeline block: {error}")));
                SlideBody::Code(CodeBlock { language: block.tag, code: block.body })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_slots() {
        let scanned = scan("# Welcome\n## Subtitle\n### Extra");
        assert_eq!(scanned.title.as_deref(), Some("Welcome"));
        assert_eq!(scanned.subtitle.as_deref(), Some("Subtitle"));
        assert_eq!(scanned.items, vec![ContentItem::paragraph("Extra")]);
    }

    #[test]
    fn heading_slots_ignore_levels() {
        let scanned = scan("### Deep first\n# Shallow second");
        assert_eq!(scanned.title.as_deref(), Some("Deep first"));
        assert_eq!(scanned.subtitle.as_deref(), Some("Shallow second"));
    }

    #[test]
    fn column_state_routes_items() {
        let scanned = scan("# Split\n- before\n::left::\n- l1\n- l2\n::right::\n- r1");
        assert_eq!(scanned.items.len(), 1);
        assert_eq!(scanned.left.len(), 2);
        assert_eq!(scanned.right.len(), 1);
        assert_eq!(scanned.left[0].text, "l1");
        assert_eq!(scanned.right[0].text, "r1");
    }

    #[test]
    fn columns_dialect_routes_items() {
        let scanned = scan(":::columns\n- l1\n|||\n- r1\n:::\n- after");
        assert_eq!(scanned.left.len(), 1);
        assert_eq!(scanned.right.len(), 1);
        assert_eq!(scanned.items.len(), 1);
        assert_eq!(scanned.items[0].text, "after");
    }

    #[test]
    fn nesting_levels() {
        let scanned = scan("- top\n  - nested\n    - deeper\n1. numbered");
        let levels: Vec<_> = scanned.items.iter().map(|item| item.level).collect();
        assert_eq!(levels, &[0, 1, 2, 0]);
        assert_eq!(scanned.items[3].kind, ContentKind::Numbered);
    }

    #[test]
    fn quote_with_attribution() {
        let scanned = scan("> stay hungry\n> stay foolish\n— Steve");
        assert_eq!(scanned.quote_lines, &["stay hungry", "stay foolish"]);
        assert_eq!(scanned.quote_author.as_deref(), Some("Steve"));
    }

    #[test]
    fn dash_without_quote_is_a_bullet() {
        let scanned = scan("- just a bullet");
        assert!(scanned.quote_author.is_none());
        assert_eq!(scanned.items[0].kind, ContentKind::Bullet);
    }

    #[test]
    fn fenced_block_collected_verbatim() {
        let scanned = scan("# Code\n```rust\nfn main() {\n    // | not a table |\n}\n```");
        assert_eq!(scanned.blocks.len(), 1);
        assert_eq!(scanned.blocks[0].tag, "rust");
        assert!(scanned.blocks[0].body.contains("fn main()"));
        assert!(scanned.pipe_rows.is_empty());
    }

    #[test]
    fn pipe_table_scanning() {
        let scanned = scan("| a | b |\n| --- | --- |\n| 1 | 2 |\n| 3 | 4 |");
        let mut warnings = Vec::new();
        let body = scanned.into_body(SlideKind::Table, 0, &mut warnings);
        let SlideBody::Table(table) = body else { panic!("not a table") };
        assert_eq!(table.headers, &["a", "b"]);
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn separator_is_skipped_unconditionally() {
        // The second row is data-shaped but still gets discarded.
        let scanned = scan("| a | b |\n| 1 | 2 |\n| 3 | 4 |");
        let mut warnings = Vec::new();
        let SlideBody::Table(table) = scanned.into_body(SlideKind::Table, 0, &mut warnings) else {
            panic!("not a table")
        };
        assert_eq!(table.rows, vec![vec!["3", "4"]]);
    }

    #[test]
    fn table_reconciliation_pads_and_truncates() {
        let scanned = scan("| a | b | c |\n| - | - | - |\n| 1 | 2 |\n| 1 | 2 | 3 | 4 |");
        let mut warnings = Vec::new();
        let SlideBody::Table(table) = scanned.into_body(SlideKind::Table, 7, &mut warnings) else {
            panic!("not a table")
        };
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
        assert_eq!(table.rows[1], vec!["1", "2", "3"]);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|warning| warning.slide_index == 7));
    }

    #[test]
    fn malformed_chart_falls_back_to_code() {
        let scanned = scan("```chart\n[ not yaml\n```");
        let mut warnings = Vec::new();
        let body = scanned.into_body(SlideKind::Chart, 2, &mut warnings);
        assert!(matches!(body, SlideBody::Code(_)));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("malformed chart block"));
    }

    #[test]
    fn empty_slide_detection() {
        assert!(scan("").is_empty());
        assert!(!scan("# Title").is_empty());
        assert!(!scan("- item").is_empty());
        assert!(!scan("> quote").is_empty());
    }
}
