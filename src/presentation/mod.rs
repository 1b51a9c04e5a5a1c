//! The compilation pipeline: segment, extract directives, classify, and
//! structure each slide into the document model.

use crate::{
    document::{
        Animation, PresentationDocument, SlideKind, SlideNode, SlideOverrides, Transition, Warning,
    },
    markdown::{
        directive::{match_directive, Directive},
        elements::{is_comment_open, match_fence},
        segment::segment,
    },
    presentation::{classify::classify, content::scan},
    theme::color::Color,
};
use std::collections::BTreeMap;

pub(crate) mod blocks;
pub(crate) mod classify;
pub(crate) mod content;
pub(crate) mod frontmatter;

/// Parses raw markup into a [PresentationDocument].
///
/// Every call starts from clean, call-local state and returns a fresh
/// immutable document, so a single parser value can serve concurrent callers
/// and results never leak between invocations.
#[derive(Copy, Clone, Debug, Default)]
pub struct DocumentParser;

impl DocumentParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a whole markup document.
    ///
    /// All malformed input is recovered: the worst a bad document yields is a
    /// default configuration, dropped slides, and warnings.
    pub fn parse(&self, input: &str) -> PresentationDocument {
        let segments = segment(input);
        let mut warnings = Vec::new();
        let config = frontmatter::parse(segments.front_matter.as_deref(), &mut warnings);
        let mut slides = Vec::new();
        for body in &segments.bodies {
            if let Some(slide) = build_slide(body, slides.len(), &mut warnings) {
                slides.push(slide);
            }
        }
        PresentationDocument { config, slides, warnings }
    }
}

fn build_slide(body: &str, slide_index: usize, warnings: &mut Vec<Warning>) -> Option<SlideNode> {
    let mut overrides = SlideOverrides::default();
    let mut forced = None;
    let stripped = extract_directives(body, &mut overrides, &mut forced, slide_index, warnings);

    let kind = forced.unwrap_or_else(|| classify(&stripped));
    let mut scanned = scan(&stripped);
    if scanned.is_empty() && kind != SlideKind::Blank {
        return None;
    }
    // A full bleed image wins over whatever the body otherwise looks like.
    let kind = if scanned.has_full_bleed_image() { SlideKind::Image } else { kind };
    // A blank slide is background only: headings in its body are discarded
    // along with the rest, so the node matches its tag.
    let (title, subtitle) = match kind {
        SlideKind::Blank => (None, None),
        _ => (scanned.title.take(), scanned.subtitle.take()),
    };
    let body = scanned.into_body(kind, slide_index, warnings);
    Some(SlideNode { title, subtitle, overrides, metadata: BTreeMap::new(), body })
}

/// Pull the directives out of a slide body and return the body with comment
/// lines removed, for the classifier and the structurer to work on.
///
/// Directives are order independent; fenced blocks are opaque to this pass.
fn extract_directives(
    body: &str,
    overrides: &mut SlideOverrides,
    forced: &mut Option<SlideKind>,
    slide_index: usize,
    warnings: &mut Vec<Warning>,
) -> String {
    let mut kept = Vec::new();
    let mut in_fence = false;
    let mut in_comment = false;
    for line in body.lines() {
        if in_comment {
            if line.contains("-->") {
                in_comment = false;
            }
            continue;
        }
        if match_fence(line).is_some() {
            in_fence = !in_fence;
            kept.push(line);
            continue;
        }
        if in_fence {
            kept.push(line);
            continue;
        }
        if is_comment_open(line) {
            if let Some(directive) = match_directive(line) {
                apply_directive(directive, overrides, forced, slide_index, warnings);
            }
            if !line.contains("-->") {
                in_comment = true;
            }
            continue;
        }
        kept.push(line);
    }
    kept.join("\n")
}

fn apply_directive(
    directive: Directive,
    overrides: &mut SlideOverrides,
    forced: &mut Option<SlideKind>,
    slide_index: usize,
    warnings: &mut Vec<Warning>,
) {
    match directive {
        Directive::Slide(tag) => match tag.parse() {
            Ok(kind) => *forced = Some(kind),
            // Unknown tags fall through to auto-detection.
            Err(_) => warnings.push(Warning::new(slide_index, format!("unknown slide type '{tag}'"))),
        },
        Directive::Background(value) => match value.parse::<Color>() {
            Ok(color) => overrides.background = Some(color),
            Err(error) => warnings
                .push(Warning::new(slide_index, format!("invalid background color '{value}': {error}"))),
        },
        Directive::BackgroundImage(path) => overrides.background_image = Some(path),
        Directive::BackgroundVideo(path) => overrides.background_video = Some(path),
        Directive::Transition { name, duration } => {
            overrides.transition = Some(Transition { name, duration_ms: duration });
        }
        Directive::Animate { name, delay } => {
            overrides.animation = Some(Animation { name, delay_ms: delay });
        }
        Directive::Layout(name) => overrides.layout = Some(name),
        Directive::Theme(name) => overrides.theme = Some(name),
        Directive::Notes(text) => overrides.notes = Some(text),
        Directive::Speaker(text) => overrides.speaker = Some(text),
        Directive::Timer(seconds) => overrides.timer = Some(seconds),
        Directive::Poll(question) => overrides.poll = Some(question),
        Directive::Qr(contents) => overrides.qr = Some(contents),
    }
}
