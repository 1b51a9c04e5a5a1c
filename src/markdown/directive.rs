//! Directive comments: `<!-- keyword: value -->` lines that configure a
//! slide without appearing in rendered content.

/// A parsed directive.
///
/// Directives are order independent and may appear anywhere in a slide body.
/// Comment lines that don't carry a recognized keyword are treated as author
/// comments and ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Directive {
    /// `slide: <tag>`; forces the slide type, validated by the classifier.
    Slide(String),
    Background(String),
    BackgroundImage(String),
    BackgroundVideo(String),
    Transition { name: String, duration: Option<u32> },
    Animate { name: String, delay: Option<u32> },
    Layout(String),
    Theme(String),
    Notes(String),
    Speaker(String),
    Timer(u32),
    Poll(String),
    Qr(String),
}

/// Parse a directive out of a single comment line.
///
/// Returns `None` for anything that isn't a one-line comment carrying a
/// recognized `keyword: value` pair.
pub(crate) fn match_directive(line: &str) -> Option<Directive> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix("<!--")?.strip_suffix("-->")?.trim();
    let (keyword, value) = inner.split_once(':')?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let directive = match keyword.trim() {
        "slide" => Directive::Slide(value.into()),
        "background" => Directive::Background(value.into()),
        "bg-image" => Directive::BackgroundImage(value.into()),
        "bg-video" => Directive::BackgroundVideo(value.into()),
        "transition" => {
            let (name, duration) = split_timed(value);
            Directive::Transition { name, duration }
        }
        "animate" => {
            let (name, delay) = split_timed(value);
            Directive::Animate { name, delay }
        }
        "layout" => Directive::Layout(value.into()),
        "theme" => Directive::Theme(value.into()),
        "notes" => Directive::Notes(value.into()),
        "speaker" => Directive::Speaker(value.into()),
        "timer" => Directive::Timer(value.parse().ok()?),
        "poll" => Directive::Poll(value.into()),
        "qr" => Directive::Qr(value.into()),
        _ => return None,
    };
    Some(directive)
}

/// Split a `<name> [number]` directive value; a malformed number is dropped,
/// keeping the name.
fn split_timed(value: &str) -> (String, Option<u32>) {
    let mut parts = value.split_whitespace();
    let name = parts.next().unwrap_or_default().to_string();
    (name, parts.next().and_then(|part| part.parse().ok()))
}
