//! Markdeck: a markdown-to-slide-deck compiler.
//!
//! This crate turns a loosely structured presentation markup (front matter,
//! per-slide directive comments, bullet/table/quote/code/chart/image syntax)
//! into a typed document model, resolves a visual theme for it, and maps each
//! slide into renderer-agnostic layout instructions. It performs no I/O: file
//! reading, image fetching, and serialization into any concrete container
//! format are the caller's business.

pub mod document;
pub mod layout;
pub(crate) mod markdown;
pub mod presentation;
pub mod theme;

pub use crate::{
    document::{PresentationDocument, SlideKind, SlideNode},
    layout::{generate, layout_slide, Placement},
    presentation::DocumentParser,
    theme::{
        color::{Color, ColorFormatError},
        registry::resolve_theme,
        Theme, ThemeNotFoundError,
    },
};
