//! The closed registry of built-in themes.
//!
//! The registry is process-wide immutable state: it is populated once on
//! first use and only ever read afterwards, so concurrent lookups need no
//! locking.

use crate::theme::{
    color::Color, ColorScheme, FontSet, Shadow, SpacingScale, Theme, ThemeNotFoundError, Typography,
};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static THEMES: Lazy<BTreeMap<String, Theme>> = Lazy::new(|| {
    let themes = [
        // The classic markdown-deck palettes: a background, a heading color, a
        // body color, and an accent, plus the fonts that go with them.
        classic("default", "FFFFFF", "1F4E78", "2F2F2F", "4472C4", FontSet::new("Calibri Light", "Calibri")),
        classic("corporate", "FFFFFF", "003366", "333333", "0066CC", FontSet::new("Arial Black", "Arial")),
        classic("modern", "F8F9FA", "2C3E50", "34495E", "3498DB", FontSet::new("Segoe UI", "Segoe UI")),
        classic("minimal", "FFFFFF", "000000", "404040", "808080", FontSet::new("Helvetica", "Helvetica")),
        classic("creative", "FFF9E6", "E74C3C", "2C3E50", "9B59B6", FontSet::new("Georgia", "Georgia")),
        classic("dark", "1E1E1E", "FFFFFF", "E0E0E0", "00D9FF", FontSet::new("Calibri", "Calibri")),
        classic("academic", "FFFFFF", "1A237E", "37474F", "3F51B5", FontSet::new("Times New Roman", "Times New Roman")),
        classic("tech", "0A0E27", "00FF88", "FFFFFF", "FF006E", FontSet::new("Consolas", "Consolas")),
        classic("nature", "F1F8F4", "2D5016", "3E5C3E", "6AA84F", FontSet::new("Trebuchet MS", "Trebuchet MS")),
        classic("sunset", "FFF4E6", "D84315", "4E342E", "FF6F00", FontSet::new("Palatino Linotype", "Palatino Linotype")),
        material(
            "material_baseline",
            ["6200EE", "3700B3", "03DAC6", "018786", "FFFFFF", "FFFFFF", "B00020"],
            ["FFFFFF", "000000", "000000", "000000", "FFFFFF"],
            0.25,
        ),
        material(
            "material_dark",
            ["BB86FC", "3700B3", "03DAC6", "03DAC6", "121212", "121212", "CF6679"],
            ["000000", "000000", "FFFFFF", "FFFFFF", "000000"],
            0.25,
        ),
        material(
            "google_blue",
            ["4285F4", "1967D2", "EA4335", "C5221F", "FFFFFF", "F8F9FA", "EA4335"],
            ["FFFFFF", "FFFFFF", "202124", "202124", "FFFFFF"],
            0.5,
        ),
        material(
            "spotify_green",
            ["1DB954", "1AA34A", "191414", "000000", "191414", "282828", "E22134"],
            ["FFFFFF", "FFFFFF", "FFFFFF", "FFFFFF", "FFFFFF"],
            0.5,
        ),
        material(
            "notion_minimal",
            ["000000", "2F3437", "0084FF", "0073E6", "FFFFFF", "F7F6F3", "EB5757"],
            ["FFFFFF", "FFFFFF", "37352F", "37352F", "FFFFFF"],
            0.2,
        ),
    ];
    themes.into_iter().map(|theme| (theme.name.clone(), theme)).collect()
});

/// Resolve a theme by exact name.
pub fn resolve_theme(name: &str) -> Result<Theme, ThemeNotFoundError> {
    THEMES.get(name).cloned().ok_or_else(|| ThemeNotFoundError(name.into()))
}

/// All the registered theme names.
pub fn theme_names() -> Vec<String> {
    THEMES.keys().cloned().collect()
}

fn hex(value: &str) -> Color {
    value.parse().expect("corrupted theme color")
}

fn classic(name: &str, background: &str, heading: &str, body: &str, accent: &str, fonts: FontSet) -> Theme {
    let primary = hex(heading);
    let secondary = hex(accent);
    let background = hex(background);
    let error = hex("B00020");
    Theme {
        name: name.into(),
        colors: ColorScheme {
            primary,
            primary_variant: primary.adjust_lightness(-0.2),
            secondary,
            secondary_variant: secondary.adjust_lightness(-0.2),
            background,
            surface: background,
            error,
            on_primary: primary.best_text_color(),
            on_secondary: secondary.best_text_color(),
            on_background: hex(body),
            on_surface: hex(body),
            on_error: error.best_text_color(),
        },
        fonts,
        typography: Typography::default(),
        shadows: Shadow::scale(),
        spacing: SpacingScale::default(),
        corner_radius: 0.25,
    }
}

fn material(name: &str, colors: [&str; 7], foregrounds: [&str; 5], corner_radius: f64) -> Theme {
    let [primary, primary_variant, secondary, secondary_variant, background, surface, error] = colors;
    let [on_primary, on_secondary, on_background, on_surface, on_error] = foregrounds;
    Theme {
        name: name.into(),
        colors: ColorScheme {
            primary: hex(primary),
            primary_variant: hex(primary_variant),
            secondary: hex(secondary),
            secondary_variant: hex(secondary_variant),
            background: hex(background),
            surface: hex(surface),
            error: hex(error),
            on_primary: hex(on_primary),
            on_secondary: hex(on_secondary),
            on_background: hex(on_background),
            on_surface: hex(on_surface),
            on_error: hex(on_error),
        },
        fonts: FontSet::default(),
        typography: Typography::default(),
        shadows: Shadow::scale(),
        spacing: SpacingScale::default(),
        corner_radius,
    }
}
