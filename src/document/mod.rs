//! The presentation document model.
//!
//! This is the contract surface handed to renderers: plain serializable data
//! with no behavior beyond small accessors. A document is immutable once
//! parsed and its slide order is presentation order.

use crate::theme::color::Color;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, str::FromStr};
use strum::{Display, EnumString};

/// A fully parsed presentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresentationDocument {
    pub config: GlobalConfig,
    pub slides: Vec<SlideNode>,
    /// Non-fatal conditions recovered during parsing.
    pub warnings: Vec<Warning>,
}

/// A recovered, non-fatal condition hit while parsing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub slide_index: usize,
    pub message: String,
}

impl Warning {
    pub(crate) fn new<S: Into<String>>(slide_index: usize, message: S) -> Self {
        Self { slide_index, message: message.into() }
    }
}

/// Global presentation configuration, typically from the front matter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    pub title: String,
    pub author: Option<String>,
    pub theme: String,
    pub aspect_ratio: AspectRatio,
    pub slide_numbers: bool,
    pub company: Option<String>,
    pub logo_path: Option<String>,
    pub footer_text: Option<String>,
    /// Arbitrary author-defined variables, scalars only.
    pub variables: BTreeMap<String, String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            title: "Presentation".into(),
            author: None,
            theme: "default".into(),
            aspect_ratio: AspectRatio::default(),
            slide_numbers: true,
            company: None,
            logo_path: None,
            footer_text: None,
            variables: BTreeMap::new(),
        }
    }
}

/// The slide canvas aspect ratio.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    SixteenNine,
    #[serde(rename = "4:3")]
    FourThree,
}

impl AspectRatio {
    /// The canvas dimensions in inches.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            AspectRatio::SixteenNine => (13.333, 7.5),
            AspectRatio::FourThree => (10.0, 7.5),
        }
    }
}

impl FromStr for AspectRatio {
    type Err = ();

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "16:9" => Ok(AspectRatio::SixteenNine),
            "4:3" => Ok(AspectRatio::FourThree),
            _ => Err(()),
        }
    }
}

/// A single slide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlideNode {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub overrides: SlideOverrides,
    pub metadata: BTreeMap<String, String>,
    pub body: SlideBody,
}

impl SlideNode {
    pub fn kind(&self) -> SlideKind {
        use SlideKind::*;
        match &self.body {
            SlideBody::Title => Title,
            SlideBody::Section => Section,
            SlideBody::Content { .. } => Content,
            SlideBody::TwoColumn { .. } => TwoColumn,
            SlideBody::Image { .. } => Image,
            SlideBody::Chart(_) => Chart,
            SlideBody::Table(_) => Table,
            SlideBody::Quote { .. } => Quote,
            SlideBody::Code(_) => Code,
            SlideBody::Timeline { .. } => Timeline,
            SlideBody::Comparison { .. } => Comparison,
            SlideBody::Team { .. } => Team,
            SlideBody::Blank => Blank,
        }
    }
}

/// The slide type tag, as spelled in `slide:` directives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    Title,
    Section,
    Content,
    TwoColumn,
    Image,
    Chart,
    Table,
    Quote,
    Code,
    Timeline,
    Comparison,
    Team,
    Blank,
}

/// Per-slide content, one variant per slide type.
///
/// Each variant carries only the content shape relevant to its tag; the
/// layout generator matches exhaustively over this so an unhandled type is a
/// compile error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideBody {
    Title,
    Section,
    Content { items: Vec<ContentItem> },
    TwoColumn { left: Vec<ContentItem>, right: Vec<ContentItem> },
    Image { images: Vec<ImageRef> },
    Chart(ChartSpec),
    Table(TableSpec),
    Quote { text: String, author: Option<String> },
    Code(CodeBlock),
    Timeline { events: Vec<TimelineEvent> },
    Comparison { left: Vec<ContentItem>, right: Vec<ContentItem> },
    Team { members: Vec<ContentItem> },
    Blank,
}

/// Directive overrides extracted from a slide's comment lines.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideOverrides {
    pub background: Option<Color>,
    pub background_image: Option<String>,
    pub background_video: Option<String>,
    pub transition: Option<Transition>,
    pub animation: Option<Animation>,
    pub layout: Option<String>,
    pub theme: Option<String>,
    pub notes: Option<String>,
    pub speaker: Option<String>,
    pub timer: Option<u32>,
    pub poll: Option<String>,
    pub qr: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub name: String,
    pub duration_ms: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub name: String,
    pub delay_ms: Option<u32>,
}

/// A piece of textual slide content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub text: String,
    /// Nesting depth, derived from leading indentation. Never negative.
    pub level: u8,
    pub kind: ContentKind,
}

impl ContentItem {
    pub(crate) fn new<S: Into<String>>(text: S, level: u8, kind: ContentKind) -> Self {
        Self { text: text.into(), level, kind }
    }

    pub(crate) fn paragraph<S: Into<String>>(text: S) -> Self {
        Self::new(text, 0, ContentKind::Paragraph)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Bullet,
    Numbered,
    Paragraph,
}

/// A table, with every row reconciled to the header width.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableSpec {
    pub fn columns(&self) -> usize {
        self.headers.len()
    }
}

/// A chart extracted from a fenced `chart` block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub title: Option<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    #[default]
    Column,
    Line,
    Pie,
    Area,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// An event on a timeline slide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub date: String,
    pub title: String,
    pub description: Option<String>,
}

/// A fenced code block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub language: String,
    pub code: String,
}

/// An image reference; resolving the source is the renderer's business.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub alt: String,
    pub source: String,
    pub attributes: BTreeMap<String, String>,
}

impl ImageRef {
    /// Whether the alt text marks this image as full bleed.
    pub fn is_full_bleed(&self) -> bool {
        matches!(self.alt.as_str(), "full" | "fullscreen")
    }
}
