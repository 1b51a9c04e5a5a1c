//! Theme resolution and color math.
//!
//! A [Theme] is either looked up by name in the built-in [registry] or
//! synthesized from a single seed color. Derived variants (dark mode, high
//! contrast) always produce new values: a base theme may be shared by
//! concurrent resolutions and is never mutated in place.

use crate::theme::color::Color;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod advice;
pub mod color;
pub mod registry;

/// An error caused by looking up a theme name the registry doesn't know.
#[derive(thiserror::Error, Debug)]
#[error("theme does not exist: '{0}'")]
pub struct ThemeNotFoundError(pub String);

/// A resolved visual theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ColorScheme,
    pub fonts: FontSet,
    pub typography: Typography,
    pub shadows: Vec<Shadow>,
    pub spacing: SpacingScale,
    pub corner_radius: f64,
}

impl Theme {
    /// Synthesize a theme from a seed color.
    ///
    /// Primary is the seed itself; the primary variant darkens it, the
    /// secondary rotates the hue by 30 degrees, and the secondary variant
    /// darkens that.
    pub fn synthesize(seed: Color) -> Theme {
        let secondary = seed.rotate_hue(30.0);
        Theme {
            name: "material_you".into(),
            colors: ColorScheme {
                primary: seed,
                primary_variant: seed.adjust_lightness(-0.2),
                secondary,
                secondary_variant: secondary.adjust_lightness(-0.2),
                background: Color::WHITE,
                surface: Color::new(0xf5, 0xf5, 0xf5),
                error: Color::new(0xb0, 0x00, 0x20),
                on_primary: seed.best_text_color(),
                on_secondary: secondary.best_text_color(),
                on_background: Color::BLACK,
                on_surface: Color::BLACK,
                on_error: Color::WHITE,
            },
            fonts: FontSet::default(),
            typography: Typography::default(),
            shadows: Shadow::scale(),
            spacing: SpacingScale::default(),
            corner_radius: 0.25,
        }
    }

    /// Derive the dark mode variant of this theme.
    ///
    /// Background and surface move to fixed dark tones while primary and
    /// secondary get lightened rather than darkened, so they stay readable
    /// on the new background.
    pub fn dark_variant(&self) -> Theme {
        let mut theme = self.clone();
        theme.name = format!("{}_dark", self.name);
        theme.colors = ColorScheme {
            primary: self.colors.primary.adjust_lightness(0.2),
            primary_variant: self.colors.primary_variant,
            secondary: self.colors.secondary.adjust_lightness(0.2),
            secondary_variant: self.colors.secondary_variant,
            background: Color::new(0x12, 0x12, 0x12),
            surface: Color::new(0x1e, 0x1e, 0x1e),
            error: Color::new(0xcf, 0x66, 0x79),
            on_primary: Color::BLACK,
            on_secondary: Color::BLACK,
            on_background: Color::WHITE,
            on_surface: Color::WHITE,
            on_error: Color::BLACK,
        };
        theme
    }

    /// Derive a high contrast variant: foregrounds over background and
    /// surface snap to whichever of pure black/white contrasts best.
    pub fn high_contrast_variant(&self) -> Theme {
        let mut theme = self.clone();
        theme.name = format!("{}_high_contrast", self.name);
        theme.colors.on_background = self.colors.background.best_text_color();
        theme.colors.on_surface = self.colors.surface.best_text_color();
        theme
    }
}

/// The color roles of a theme.
///
/// Every `on_*` field is the foreground meant to be drawn over the matching
/// surface color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: Color,
    pub primary_variant: Color,
    pub secondary: Color,
    pub secondary_variant: Color,
    pub background: Color,
    pub surface: Color,
    pub error: Color,
    pub on_primary: Color,
    pub on_secondary: Color,
    pub on_background: Color,
    pub on_surface: Color,
    pub on_error: Color,
}

/// The font families a theme draws from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSet {
    pub title: String,
    pub body: String,
    pub code: String,
}

impl FontSet {
    pub(crate) fn new(title: &str, body: &str) -> Self {
        Self { title: title.into(), body: body.into(), code: "Consolas".into() }
    }
}

impl Default for FontSet {
    fn default() -> Self {
        Self::new("Roboto", "Roboto")
    }
}

/// A named typography role.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Subtitle1,
    Subtitle2,
    Body1,
    Body2,
    Button,
    Caption,
    Overline,
}

/// The style a typography role resolves to.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub letter_spacing: f32,
}

impl TypeStyle {
    const fn new(size: f32, weight: FontWeight, letter_spacing: f32) -> Self {
        Self { size, weight, letter_spacing }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    Regular,
    Medium,
    Bold,
}

/// The typography scale: one style per named role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub h1: TypeStyle,
    pub h2: TypeStyle,
    pub h3: TypeStyle,
    pub h4: TypeStyle,
    pub h5: TypeStyle,
    pub h6: TypeStyle,
    pub subtitle1: TypeStyle,
    pub subtitle2: TypeStyle,
    pub body1: TypeStyle,
    pub body2: TypeStyle,
    pub button: TypeStyle,
    pub caption: TypeStyle,
    pub overline: TypeStyle,
}

impl Typography {
    pub fn role(&self, role: FontRole) -> TypeStyle {
        use FontRole::*;
        match role {
            H1 => self.h1,
            H2 => self.h2,
            H3 => self.h3,
            H4 => self.h4,
            H5 => self.h5,
            H6 => self.h6,
            Subtitle1 => self.subtitle1,
            Subtitle2 => self.subtitle2,
            Body1 => self.body1,
            Body2 => self.body2,
            Button => self.button,
            Caption => self.caption,
            Overline => self.overline,
        }
    }
}

impl Default for Typography {
    fn default() -> Self {
        use FontWeight::*;
        Self {
            h1: TypeStyle::new(96.0, Light, -1.5),
            h2: TypeStyle::new(60.0, Light, -0.5),
            h3: TypeStyle::new(48.0, Regular, 0.0),
            h4: TypeStyle::new(34.0, Regular, 0.25),
            h5: TypeStyle::new(24.0, Regular, 0.0),
            h6: TypeStyle::new(20.0, Medium, 0.15),
            subtitle1: TypeStyle::new(16.0, Regular, 0.15),
            subtitle2: TypeStyle::new(14.0, Medium, 0.1),
            body1: TypeStyle::new(16.0, Regular, 0.5),
            body2: TypeStyle::new(14.0, Regular, 0.25),
            button: TypeStyle::new(14.0, Medium, 1.25),
            caption: TypeStyle::new(12.0, Regular, 0.4),
            overline: TypeStyle::new(10.0, Regular, 1.5),
        }
    }
}

/// One step of the elevation scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub elevation: u8,
    pub shadow: Option<String>,
}

impl Shadow {
    /// The elevation scale, ordered by ascending elevation level.
    pub(crate) fn scale() -> Vec<Shadow> {
        let levels = [
            (0, None),
            (1, Some("0px 2px 1px -1px rgba(0,0,0,0.2)")),
            (2, Some("0px 3px 1px -2px rgba(0,0,0,0.2)")),
            (3, Some("0px 3px 3px -2px rgba(0,0,0,0.2)")),
            (4, Some("0px 2px 4px -1px rgba(0,0,0,0.2)")),
            (6, Some("0px 3px 5px -1px rgba(0,0,0,0.2)")),
            (8, Some("0px 5px 5px -3px rgba(0,0,0,0.2)")),
            (12, Some("0px 7px 8px -4px rgba(0,0,0,0.2)")),
            (16, Some("0px 8px 10px -5px rgba(0,0,0,0.2)")),
            (24, Some("0px 11px 15px -7px rgba(0,0,0,0.2)")),
        ];
        levels
            .into_iter()
            .map(|(elevation, shadow)| Shadow { elevation, shadow: shadow.map(Into::into) })
            .collect()
    }
}

/// The spacing scale, as multipliers of the base unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingScale {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self { xs: 0.25, sm: 0.5, md: 1.0, lg: 1.5, xl: 2.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::color::Hsl;

    #[test]
    fn synthesis_keeps_seed_as_primary() {
        let seed: Color = "FF5722".parse().expect("bad seed");
        let theme = Theme::synthesize(seed);
        assert_eq!(theme.colors.primary, seed);
    }

    #[test]
    fn synthesis_rotates_secondary_hue() {
        let seed: Color = "FF5722".parse().expect("bad seed");
        let theme = Theme::synthesize(seed);
        let primary_hue = Hsl::from(theme.colors.primary).h;
        let secondary_hue = Hsl::from(theme.colors.secondary).h;
        let difference = (secondary_hue - primary_hue).rem_euclid(1.0);
        assert!((difference - 30.0 / 360.0).abs() < 0.01, "hue difference is {difference}");
    }

    #[test]
    fn synthesis_darkens_variants() {
        let seed: Color = "FF5722".parse().expect("bad seed");
        let theme = Theme::synthesize(seed);
        assert!(Hsl::from(theme.colors.primary_variant).l < Hsl::from(theme.colors.primary).l);
        assert!(Hsl::from(theme.colors.secondary_variant).l < Hsl::from(theme.colors.secondary).l);
    }

    #[test]
    fn dark_variant_is_a_new_value() {
        let base = Theme::synthesize("FF5722".parse().expect("bad seed"));
        let dark = base.dark_variant();
        assert_eq!(base.colors.background, Color::WHITE);
        assert_eq!(dark.colors.background, Color::new(0x12, 0x12, 0x12));
        assert_eq!(dark.colors.surface, Color::new(0x1e, 0x1e, 0x1e));
        assert_eq!(dark.name, "material_you_dark");
        // Lightened, not darkened.
        assert!(Hsl::from(dark.colors.primary).l >= Hsl::from(base.colors.primary).l);
    }

    #[test]
    fn high_contrast_snaps_foregrounds() {
        let base = Theme::synthesize("FF5722".parse().expect("bad seed"));
        let contrasted = base.high_contrast_variant();
        assert_eq!(contrasted.colors.on_background, Color::BLACK);
        assert_eq!(contrasted.colors.on_surface, Color::BLACK);
        let dark = base.dark_variant().high_contrast_variant();
        assert_eq!(dark.colors.on_background, Color::WHITE);
    }

    #[test]
    fn shadow_scale_is_ascending() {
        let shadows = Shadow::scale();
        assert!(shadows.windows(2).all(|pair| pair[0].elevation < pair[1].elevation));
    }
}
