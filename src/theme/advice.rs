//! Palette suggestions and accessibility checks for a base color.

use crate::theme::color::Color;
use serde::{Deserialize, Serialize};

/// A color combination derived from a base color by hue rotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteSuggestion {
    pub name: String,
    pub description: String,
    pub colors: Vec<Color>,
}

/// The standard palette suggestions for a base color.
pub fn palette_suggestions(base: Color) -> Vec<PaletteSuggestion> {
    let palette = |name: &str, description: &str, colors: Vec<Color>| PaletteSuggestion {
        name: name.into(),
        description: description.into(),
        colors,
    };
    vec![
        palette("complementary", "High contrast, vibrant look", vec![base, base.rotate_hue(180.0)]),
        palette(
            "analogous",
            "Harmonious and pleasing",
            vec![base.rotate_hue(-30.0), base, base.rotate_hue(30.0)],
        ),
        palette(
            "triadic",
            "Balanced and colorful",
            vec![base, base.rotate_hue(120.0), base.rotate_hue(240.0)],
        ),
        palette(
            "split_complementary",
            "Vibrant with less tension",
            vec![base, base.rotate_hue(150.0), base.rotate_hue(210.0)],
        ),
    ]
}

/// How a color fares as a text background under WCAG 2.x.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityReport {
    pub contrast_white: f64,
    pub contrast_black: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
    pub best_text_color: Color,
}

/// Check a color against the WCAG contrast thresholds.
///
/// A level passes when either pure white or pure black text reaches the
/// required ratio over the color.
pub fn accessibility_report(color: Color) -> AccessibilityReport {
    let white = color.contrast_ratio(&Color::WHITE);
    let black = color.contrast_ratio(&Color::BLACK);
    let passes = |threshold: f64| white >= threshold || black >= threshold;
    AccessibilityReport {
        contrast_white: round_ratio(white),
        contrast_black: round_ratio(black),
        aa_normal: passes(4.5),
        aa_large: passes(3.0),
        aaa_normal: passes(7.0),
        aaa_large: passes(4.5),
        best_text_color: color.best_text_color(),
    }
}

fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}
