//! The layout generator: maps a slide and a resolved theme into placement
//! instructions.
//!
//! This is a pure, stateless mapping: the same `(SlideNode, Theme)` pair
//! always yields the same instructions. Nothing here touches an output
//! format; a renderer consumes the instructions however it likes.

use crate::{
    document::{
        AspectRatio, ContentItem, ImageRef, PresentationDocument, SlideBody, SlideNode, TableSpec,
        TimelineEvent,
    },
    theme::{color::Color, registry::resolve_theme, FontRole, FontWeight, Theme, ThemeNotFoundError},
};
use serde::{Deserialize, Serialize};

const SIDE_MARGIN: f32 = 0.5;
const COLUMN_GUTTER: f32 = 0.33;
const TIMELINE_MARKER_SIZE: f32 = 0.3;

/// A placement instruction: where a piece of a slide goes and how it looks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub role: Role,
    pub frame: Frame,
    pub style: Style,
    /// The text carried by this box, when it is cheap to resolve here.
    /// Bullet items and image payloads stay on the slide node.
    pub text: Option<String>,
}

/// What a placement renders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Background,
    Title,
    Subtitle,
    Body,
    Author,
    HeaderCell,
    DataCell,
    Marker,
    Connector,
    Image,
    Code,
    ChartArea,
    Footer,
}

/// A box on the slide canvas, in inches.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub font: Option<FontSpec>,
    pub color: Color,
    pub fill: Option<Color>,
    pub align: Align,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
    pub weight: FontWeight,
    pub italic: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Lay out a whole document under its configured theme.
///
/// The document-level theme must exist; a per-slide override naming an
/// unknown theme falls back to the document theme so one bad slide doesn't
/// abort the rest.
pub fn generate(document: &PresentationDocument) -> Result<Vec<Vec<Placement>>, ThemeNotFoundError> {
    let document_theme = resolve_theme(&document.config.theme)?;
    let ratio = document.config.aspect_ratio;
    let (width, height) = ratio.dimensions();
    let mut sheets = Vec::with_capacity(document.slides.len());
    for (index, slide) in document.slides.iter().enumerate() {
        let theme = slide
            .overrides
            .theme
            .as_deref()
            .and_then(|name| resolve_theme(name).ok())
            .unwrap_or_else(|| document_theme.clone());
        let mut placements = layout_slide(slide, &theme, ratio);
        if let Some(footer) = footer_placement(document, index, &theme, width, height) {
            placements.push(footer);
        }
        sheets.push(placements);
    }
    Ok(sheets)
}

/// Lay out a single slide under a resolved theme.
pub fn layout_slide(slide: &SlideNode, theme: &Theme, aspect_ratio: AspectRatio) -> Vec<Placement> {
    let (width, height) = aspect_ratio.dimensions();
    let mut layout = SlideLayout::new(slide, theme, width, height);
    match &slide.body {
        SlideBody::Title => layout.title_slide(),
        SlideBody::Section => layout.section_slide(),
        SlideBody::Content { items } => layout.content_slide(items),
        SlideBody::TwoColumn { left, right } => layout.two_column_slide(left, right),
        SlideBody::Image { images } => layout.image_slide(images),
        SlideBody::Chart(_) => layout.chart_slide(),
        SlideBody::Table(table) => layout.table_slide(table),
        SlideBody::Quote { text, author } => layout.quote_slide(text, author.as_deref()),
        SlideBody::Code(code) => layout.code_slide(&code.code),
        SlideBody::Timeline { events } => layout.timeline_slide(events),
        SlideBody::Comparison { left, right } => layout.two_column_slide(left, right),
        SlideBody::Team { members } => layout.team_slide(members),
        // Blank slides are background only.
        SlideBody::Blank => {}
    }
    layout.placements
}

struct SlideLayout<'a> {
    slide: &'a SlideNode,
    theme: &'a Theme,
    width: f32,
    height: f32,
    /// Foreground for body text, adjusted when the background is overridden.
    text_color: Color,
    placements: Vec<Placement>,
}

impl<'a> SlideLayout<'a> {
    fn new(slide: &'a SlideNode, theme: &'a Theme, width: f32, height: f32) -> Self {
        let background = Self::background_color(slide, theme);
        let text_color = match slide.overrides.background {
            Some(color) => color.best_text_color(),
            None => theme.colors.on_background,
        };
        let mut layout =
            Self { slide, theme, width, height, text_color, placements: Vec::new() };
        layout.placements.push(Placement {
            role: Role::Background,
            frame: Frame::new(0.0, 0.0, width, height),
            style: Style { font: None, color: text_color, fill: Some(background), align: Align::Left },
            text: None,
        });
        layout
    }

    fn background_color(slide: &SlideNode, theme: &Theme) -> Color {
        if let Some(color) = slide.overrides.background {
            return color;
        }
        match slide.body {
            // Section dividers are drawn on the primary color.
            SlideBody::Section => theme.colors.primary,
            _ => theme.colors.background,
        }
    }

    fn font(&self, role: FontRole, family: &str, italic: bool) -> FontSpec {
        let style = self.theme.typography.role(role);
        FontSpec { family: family.into(), size: style.size, weight: style.weight, italic }
    }

    fn push_text(&mut self, role: Role, frame: Frame, font: FontSpec, color: Color, align: Align, text: Option<String>) {
        self.placements.push(Placement {
            role,
            frame,
            style: Style { font: Some(font), color, fill: None, align },
            text,
        });
    }

    /// The title band shared by most content-bearing slide types.
    fn title_band(&mut self) {
        let Some(title) = &self.slide.title else { return };
        let font = self.font(FontRole::H4, &self.theme.fonts.title, false);
        let frame = Frame::new(SIDE_MARGIN, 0.4, self.width - SIDE_MARGIN * 2.0, 0.8);
        let color = match self.slide.overrides.background {
            Some(_) => self.text_color,
            None => self.theme.colors.primary,
        };
        self.push_text(Role::Title, frame, font, color, Align::Left, Some(title.clone()));
        if let Some(subtitle) = &self.slide.subtitle {
            let font = self.font(FontRole::H6, &self.theme.fonts.title, false);
            let frame = Frame::new(SIDE_MARGIN, 1.1, self.width - SIDE_MARGIN * 2.0, 0.4);
            self.push_text(Role::Subtitle, frame, font, self.text_color, Align::Left, Some(subtitle.clone()));
        }
    }

    fn title_slide(&mut self) {
        if let Some(title) = &self.slide.title {
            let font = self.font(FontRole::H2, &self.theme.fonts.title, false);
            let frame = Frame::new(1.0, 2.5, self.width - 2.0, 1.5);
            let color = match self.slide.overrides.background {
                Some(_) => self.text_color,
                None => self.theme.colors.primary,
            };
            self.push_text(Role::Title, frame, font, color, Align::Center, Some(title.clone()));
        }
        if let Some(subtitle) = &self.slide.subtitle {
            let font = self.font(FontRole::H5, &self.theme.fonts.body, false);
            let frame = Frame::new(1.0, 4.2, self.width - 2.0, 1.0);
            self.push_text(Role::Subtitle, frame, font, self.text_color, Align::Center, Some(subtitle.clone()));
        }
    }

    fn section_slide(&mut self) {
        let color = match self.slide.overrides.background {
            Some(_) => self.text_color,
            None => self.theme.colors.on_primary,
        };
        if let Some(title) = &self.slide.title {
            let font = self.font(FontRole::H2, &self.theme.fonts.title, false);
            let frame = Frame::new(1.0, 3.0, self.width - 2.0, 1.5);
            self.push_text(Role::Title, frame, font, color, Align::Center, Some(title.clone()));
        }
        if let Some(subtitle) = &self.slide.subtitle {
            let font = self.font(FontRole::H5, &self.theme.fonts.body, false);
            let frame = Frame::new(1.0, 4.5, self.width - 2.0, 0.8);
            self.push_text(Role::Subtitle, frame, font, color, Align::Center, Some(subtitle.clone()));
        }
    }

    fn content_slide(&mut self, _items: &[ContentItem]) {
        self.title_band();
        let frame = Frame::new(0.8, 1.5, self.width - 1.6, self.height - 2.3);
        let font = self.font(FontRole::Body1, &self.theme.fonts.body, false);
        self.push_text(Role::Body, frame, font, self.text_color, Align::Left, None);
    }

    fn two_column_slide(&mut self, _left: &[ContentItem], _right: &[ContentItem]) {
        self.title_band();
        let column_width = (self.width - SIDE_MARGIN * 2.0 - COLUMN_GUTTER) / 2.0;
        let font = self.font(FontRole::Body1, &self.theme.fonts.body, false);
        let left_frame = Frame::new(SIDE_MARGIN, 1.5, column_width, self.height - 2.3);
        let right_frame =
            Frame::new(SIDE_MARGIN + column_width + COLUMN_GUTTER, 1.5, column_width, self.height - 2.3);
        self.push_text(Role::Body, left_frame, font.clone(), self.text_color, Align::Left, None);
        self.push_text(Role::Body, right_frame, font, self.text_color, Align::Left, None);
    }

    fn image_slide(&mut self, images: &[ImageRef]) {
        if let Some(full) = images.iter().find(|image| image.is_full_bleed()) {
            self.placements.push(Placement {
                role: Role::Image,
                frame: Frame::new(0.0, 0.0, self.width, self.height),
                style: Style { font: None, color: self.text_color, fill: None, align: Align::Center },
                text: Some(full.source.clone()),
            });
            return;
        }
        self.title_band();
        for image in images {
            let frame = self.image_frame(image);
            self.placements.push(Placement {
                role: Role::Image,
                frame,
                style: Style { font: None, color: self.text_color, fill: None, align: Align::Center },
                text: Some(image.source.clone()),
            });
        }
    }

    /// A framed image defaults to a centered box; `x`/`y`/`width`/`height`
    /// attributes override each edge independently.
    fn image_frame(&self, image: &ImageRef) -> Frame {
        let attribute = |name: &str| image.attributes.get(name).and_then(|value| value.parse::<f32>().ok());
        let width = attribute("width").unwrap_or(self.width - 4.0);
        let height = attribute("height").unwrap_or(self.height - 2.25);
        let x = attribute("x").unwrap_or((self.width - width) / 2.0);
        let y = attribute("y").unwrap_or(1.5);
        Frame::new(x, y, width, height)
    }

    fn chart_slide(&mut self) {
        self.title_band();
        let frame = Frame::new(1.0, 1.8, self.width - 2.0, 4.5);
        self.placements.push(Placement {
            role: Role::ChartArea,
            frame,
            style: Style {
                font: None,
                color: self.theme.colors.primary,
                fill: Some(self.theme.colors.surface),
                align: Align::Left,
            },
            text: None,
        });
    }

    fn table_slide(&mut self, table: &TableSpec) {
        self.title_band();
        if table.columns() == 0 {
            return;
        }
        let frame = Frame::new(1.0, 1.8, self.width - 2.0, 4.5);
        let columns = table.columns();
        let row_count = table.rows.len() + 1;
        let cell_width = frame.width / columns as f32;
        let row_height = frame.height / row_count as f32;
        for (column, header) in table.headers.iter().enumerate() {
            let cell = Frame::new(frame.x + cell_width * column as f32, frame.y, cell_width, row_height);
            self.placements.push(Placement {
                role: Role::HeaderCell,
                frame: cell,
                style: Style {
                    font: Some(self.font(FontRole::Subtitle1, &self.theme.fonts.body, false)),
                    color: self.theme.colors.on_secondary,
                    fill: Some(self.theme.colors.secondary),
                    align: Align::Left,
                },
                text: Some(header.clone()),
            });
        }
        let data_font = self.font(FontRole::Body2, &self.theme.fonts.body, false);
        for (row_index, row) in table.rows.iter().enumerate() {
            let y = frame.y + row_height * (row_index + 1) as f32;
            for (column, value) in row.iter().enumerate() {
                let cell = Frame::new(frame.x + cell_width * column as f32, y, cell_width, row_height);
                self.push_text(Role::DataCell, cell, data_font.clone(), self.text_color, Align::Left, Some(value.clone()));
            }
        }
    }

    fn quote_slide(&mut self, text: &str, author: Option<&str>) {
        let font = self.font(FontRole::H5, &self.theme.fonts.body, true);
        let frame = Frame::new(2.0, 2.5, self.width - 4.0, 2.0);
        self.push_text(Role::Body, frame, font, self.text_color, Align::Center, Some(format!("\u{201c}{text}\u{201d}")));
        if let Some(author) = author {
            let font = self.font(FontRole::Body1, &self.theme.fonts.body, false);
            let frame = Frame::new(2.0, 5.0, self.width - 4.0, 0.5);
            self.push_text(Role::Author, frame, font, self.theme.colors.secondary, Align::Center, Some(format!("— {author}")));
        }
    }

    fn code_slide(&mut self, code: &str) {
        self.title_band();
        let frame = Frame::new(1.0, 1.5, self.width - 2.0, self.height - 2.5);
        self.placements.push(Placement {
            role: Role::Code,
            frame,
            style: Style {
                font: Some(self.font(FontRole::Body2, &self.theme.fonts.code, false)),
                color: self.theme.colors.on_surface,
                fill: Some(self.theme.colors.surface),
                align: Align::Left,
            },
            text: Some(code.to_string()),
        });
    }

    fn timeline_slide(&mut self, events: &[TimelineEvent]) {
        self.title_band();
        if events.is_empty() {
            return;
        }
        let center = self.height / 2.0;
        let line = Frame::new(1.0, center, self.width - 2.0, 0.04);
        self.placements.push(Placement {
            role: Role::Connector,
            frame: line,
            style: Style { font: None, color: self.theme.colors.primary, fill: Some(self.theme.colors.primary), align: Align::Left },
            text: None,
        });
        let spacing = line.width / (events.len() + 1) as f32;
        let label_font = self.font(FontRole::Caption, &self.theme.fonts.body, false);
        for (index, event) in events.iter().enumerate() {
            let x = line.x + spacing * (index + 1) as f32;
            let marker = Frame::new(
                x - TIMELINE_MARKER_SIZE / 2.0,
                center - TIMELINE_MARKER_SIZE / 2.0,
                TIMELINE_MARKER_SIZE,
                TIMELINE_MARKER_SIZE,
            );
            self.placements.push(Placement {
                role: Role::Marker,
                frame: marker,
                style: Style {
                    font: None,
                    color: self.theme.colors.on_secondary,
                    fill: Some(self.theme.colors.secondary),
                    align: Align::Center,
                },
                text: None,
            });
            // Labels alternate above and below the line so neighbors don't
            // overlap.
            let label_y = if index % 2 == 0 { center + 0.3 } else { center - 1.0 };
            let label = Frame::new(x - 0.75, label_y, 1.5, 0.6);
            let mut text = event.date.clone();
            if !event.title.is_empty() {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(&event.title);
            }
            self.push_text(Role::Body, label, label_font.clone(), self.text_color, Align::Center, Some(text));
        }
    }

    fn team_slide(&mut self, members: &[ContentItem]) {
        self.title_band();
        if members.is_empty() {
            return;
        }
        let columns = 2usize;
        let rows = members.len().div_ceil(columns);
        let cell_width = (self.width - SIDE_MARGIN * 2.0 - COLUMN_GUTTER) / columns as f32;
        let cell_height = (self.height - 2.3) / rows as f32;
        let font = self.font(FontRole::Body1, &self.theme.fonts.body, false);
        for (index, member) in members.iter().enumerate() {
            let column = index % columns;
            let row = index / columns;
            let frame = Frame::new(
                SIDE_MARGIN + (cell_width + COLUMN_GUTTER) * column as f32,
                1.5 + cell_height * row as f32,
                cell_width,
                cell_height,
            );
            self.push_text(Role::Body, frame, font.clone(), self.text_color, Align::Center, Some(member.text.clone()));
        }
    }

}

fn footer_placement(
    document: &PresentationDocument,
    slide_index: usize,
    theme: &Theme,
    width: f32,
    height: f32,
) -> Option<Placement> {
    let config = &document.config;
    let mut parts = Vec::new();
    if let Some(text) = &config.footer_text {
        parts.push(text.clone());
    }
    if config.slide_numbers {
        parts.push((slide_index + 1).to_string());
    }
    if parts.is_empty() {
        return None;
    }
    let style = theme.typography.role(FontRole::Caption);
    Some(Placement {
        role: Role::Footer,
        frame: Frame::new(SIDE_MARGIN, height - 0.5, width - SIDE_MARGIN * 2.0, 0.3),
        style: Style {
            font: Some(FontSpec {
                family: theme.fonts.body.clone(),
                size: style.size,
                weight: style.weight,
                italic: false,
            }),
            color: theme.colors.on_background,
            fill: None,
            align: Align::Right,
        },
        text: Some(parts.join(" | ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{document::SlideKind, presentation::DocumentParser, theme::registry::resolve_theme};

    fn layout_markup(markup: &str) -> Vec<Vec<Placement>> {
        let document = DocumentParser::new().parse(markup);
        generate(&document).expect("generation failed")
    }

    fn roles(placements: &[Placement]) -> Vec<Role> {
        placements.iter().map(|placement| placement.role).collect()
    }

    #[test]
    fn layout_is_referentially_transparent() {
        let document = DocumentParser::new().parse("# Agenda\n- one\n- two\n- three");
        let theme = resolve_theme("default").expect("no theme");
        let first = layout_slide(&document.slides[0], &theme, AspectRatio::SixteenNine);
        let second = layout_slide(&document.slides[0], &theme, AspectRatio::SixteenNine);
        assert_eq!(first, second);
    }

    #[test]
    fn title_slide_centers_both_lines() {
        let sheets = layout_markup("# Welcome\n## All aboard");
        let placements = &sheets[0];
        assert_eq!(roles(placements), vec![Role::Background, Role::Title, Role::Subtitle, Role::Footer]);
        assert_eq!(placements[1].style.align, Align::Center);
        assert_eq!(placements[1].text.as_deref(), Some("Welcome"));
        assert_eq!(placements[2].text.as_deref(), Some("All aboard"));
    }

    #[test]
    fn section_background_uses_primary() {
        let sheets = layout_markup("## Part Two");
        let background = &sheets[0][0];
        let theme = resolve_theme("default").expect("no theme");
        assert_eq!(background.style.fill, Some(theme.colors.primary));
        let title = &sheets[0][1];
        assert_eq!(title.style.color, theme.colors.on_primary);
    }

    #[test]
    fn two_columns_are_equal_width_with_gutter() {
        let sheets = layout_markup("# Split\n::left::\n- a\n::right::\n- b");
        let bodies: Vec<_> =
            sheets[0].iter().filter(|placement| placement.role == Role::Body).collect();
        assert_eq!(bodies.len(), 2);
        let (left, right) = (bodies[0].frame, bodies[1].frame);
        assert_eq!(left.width, right.width);
        let gutter = right.x - (left.x + left.width);
        assert!((gutter - COLUMN_GUTTER).abs() < 1e-4, "gutter is {gutter}");
    }

    #[test]
    fn table_cells_have_roles_and_reduced_data_font() {
        let sheets = layout_markup("| a | b |\n| - | - |\n| 1 | 2 |");
        let placements = &sheets[0];
        let headers: Vec<_> = placements.iter().filter(|p| p.role == Role::HeaderCell).collect();
        let cells: Vec<_> = placements.iter().filter(|p| p.role == Role::DataCell).collect();
        assert_eq!(headers.len(), 2);
        assert_eq!(cells.len(), 2);
        let theme = resolve_theme("default").expect("no theme");
        assert_eq!(headers[0].style.fill, Some(theme.colors.secondary));
        let header_size = headers[0].style.font.as_ref().map(|font| font.size);
        let data_size = cells[0].style.font.as_ref().map(|font| font.size);
        assert!(data_size < header_size);
    }

    #[test]
    fn quote_carries_attribution() {
        let sheets = layout_markup("> make it simple\n— Ada");
        let placements = &sheets[0];
        let quote = placements.iter().find(|p| p.role == Role::Body).expect("no quote body");
        assert_eq!(quote.text.as_deref(), Some("\u{201c}make it simple\u{201d}"));
        assert!(quote.style.font.as_ref().is_some_and(|font| font.italic));
        let author = placements.iter().find(|p| p.role == Role::Author).expect("no author");
        assert_eq!(author.text.as_deref(), Some("— Ada"));
    }

    #[test]
    fn timeline_markers_are_evenly_spaced_and_labels_alternate() {
        let markup = "```timeline
events:
  - date: 2020
    title: Founded
  - date: 2021
    title: Growth
  - date: 2022
    title: Exit
```";
        let sheets = layout_markup(markup);
        let placements = &sheets[0];
        let markers: Vec<_> = placements.iter().filter(|p| p.role == Role::Marker).collect();
        assert_eq!(markers.len(), 3);
        let spacing = markers[1].frame.x - markers[0].frame.x;
        let second_spacing = markers[2].frame.x - markers[1].frame.x;
        assert!((spacing - second_spacing).abs() < 1e-4);
        let labels: Vec<_> = placements.iter().filter(|p| p.role == Role::Body).collect();
        assert_eq!(labels.len(), 3);
        assert!(labels[0].frame.y > labels[1].frame.y, "labels don't alternate");
        assert_eq!(labels[2].frame.y, labels[0].frame.y);
    }

    #[test]
    fn full_bleed_image_covers_canvas() {
        let sheets = layout_markup("![fullscreen](hero.png)");
        let image = sheets[0].iter().find(|p| p.role == Role::Image).expect("no image");
        assert_eq!(image.frame, Frame::new(0.0, 0.0, 13.333, 7.5));
        assert_eq!(image.text.as_deref(), Some("hero.png"));
    }

    #[test]
    fn image_attributes_override_frame() {
        let markup = "<!-- slide: image -->\n# Figure\n![diagram](d.png){x=1, y=2, width=5, height=3}";
        let sheets = layout_markup(markup);
        let image = sheets[0].iter().find(|p| p.role == Role::Image).expect("no image");
        assert_eq!(image.frame, Frame::new(1.0, 2.0, 5.0, 3.0));
    }

    #[test]
    fn unknown_document_theme_fails() {
        let document = DocumentParser::new().parse("---\ntheme: nonexistent\n---\n# A\n- x");
        generate(&document).expect_err("generation succeeded");
    }

    #[test]
    fn unknown_slide_theme_falls_back() {
        let markup = "---\ntheme: corporate\n---\n<!-- theme: nonexistent -->\n# A\n- x";
        let sheets = layout_markup(markup);
        assert!(!sheets[0].is_empty());
    }

    #[test]
    fn slide_theme_override_changes_colors() {
        let markup = "---\ntheme: corporate\n---\n# A\n- x\n---\n<!-- theme: tech -->\n# B\n- y";
        let sheets = layout_markup(markup);
        let tech = resolve_theme("tech").expect("no theme");
        let corporate = resolve_theme("corporate").expect("no theme");
        assert_eq!(sheets[0][0].style.fill, Some(corporate.colors.background));
        assert_eq!(sheets[1][0].style.fill, Some(tech.colors.background));
    }

    #[test]
    fn background_override_picks_readable_text() {
        let sheets = layout_markup("<!-- background: 000000 -->\n# Dark slide\n- item");
        let background = &sheets[0][0];
        assert_eq!(background.style.fill, Some(Color::BLACK));
        assert_eq!(background.style.color, Color::WHITE);
    }

    #[test]
    fn footer_counts_slides() {
        let markup = "---\nfooter_text: Confidential\n---\n# One\n- a\n---\n# Two\n- b";
        let sheets = layout_markup(markup);
        let footer = sheets[1].iter().find(|p| p.role == Role::Footer).expect("no footer");
        assert_eq!(footer.text.as_deref(), Some("Confidential | 2"));
        assert_eq!(footer.style.align, Align::Right);
    }

    #[test]
    fn blank_slide_is_background_only() {
        let document = DocumentParser::new().parse("<!-- slide: blank -->\n# Heading");
        let theme = resolve_theme("default").expect("no theme");
        let placements = layout_slide(&document.slides[0], &theme, AspectRatio::SixteenNine);
        assert_eq!(roles(&placements), vec![Role::Background]);
    }

    #[test]
    fn forced_team_slide_lays_out_a_grid() {
        let markup = "<!-- slide: team -->\n# Team\n- Ada\n- Grace\n- Edsger";
        let document = DocumentParser::new().parse(markup);
        assert_eq!(document.slides[0].kind(), SlideKind::Team);
        let sheets = generate(&document).expect("generation failed");
        let members: Vec<_> = sheets[0].iter().filter(|p| p.role == Role::Body).collect();
        assert_eq!(members.len(), 3);
        assert_eq!(members[0].frame.y, members[1].frame.y);
        assert!(members[2].frame.y > members[0].frame.y);
    }
}
