//! Splits raw markup into a front matter block and per-slide bodies.

use crate::markdown::elements::{is_front_matter_delimiter, is_slide_break};

/// The outcome of segmenting a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Segments {
    /// The raw front matter contents, without its delimiters.
    pub(crate) front_matter: Option<String>,
    /// One raw body per slide, in presentation order. Whitespace-only bodies
    /// are dropped, not emitted as blank slides.
    pub(crate) bodies: Vec<String>,
}

/// Split a document into front matter and slide bodies.
///
/// The front matter must be anchored at the very first line; a dangling
/// opening delimiter is not an error, it just isn't front matter.
pub(crate) fn segment(input: &str) -> Segments {
    let lines: Vec<&str> = input.lines().collect();
    let (front_matter, body_start) = split_front_matter(&lines);

    let mut bodies = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut flush = |current: &mut Vec<&str>| {
        let body = current.join("\n");
        if !body.trim().is_empty() {
            bodies.push(body.trim().to_string());
        }
        current.clear();
    };
    for line in &lines[body_start..] {
        if is_slide_break(line) {
            flush(&mut current);
        } else {
            current.push(line);
        }
    }
    flush(&mut current);
    Segments { front_matter, bodies }
}

fn split_front_matter(lines: &[&str]) -> (Option<String>, usize) {
    if !lines.first().is_some_and(|line| is_front_matter_delimiter(line)) {
        return (None, 0);
    }
    match lines.iter().skip(1).position(|line| is_front_matter_delimiter(line)) {
        Some(offset) => {
            let closing = offset + 1;
            let contents = lines[1..closing].join("\n");
            (Some(contents), closing + 1)
        }
        None => (None, 0),
    }
}
