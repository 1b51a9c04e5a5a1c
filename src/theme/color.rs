use hex::{FromHex, FromHexError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A 24 bit RGB color.
///
/// Colors are parsed from and displayed as 6 hex digit strings without a
/// leading marker, which is the representation every theme field uses. A
/// leading `#` is tolerated on input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Rotate this color's hue by the given amount of degrees.
    pub fn rotate_hue(&self, degrees: f64) -> Color {
        let mut hsl = Hsl::from(*self);
        hsl.h = (hsl.h + degrees / 360.0).rem_euclid(1.0);
        hsl.into()
    }

    /// Shift this color's lightness by the given delta, clamped to [0, 1].
    pub fn adjust_lightness(&self, delta: f64) -> Color {
        let mut hsl = Hsl::from(*self);
        hsl.l = (hsl.l + delta).clamp(0.0, 1.0);
        hsl.into()
    }

    /// The WCAG 2.x relative luminance of this color.
    pub fn luminance(&self) -> f64 {
        fn channel(value: u8) -> f64 {
            let c = value as f64 / 255.0;
            if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// The WCAG contrast ratio between this color and another, in [1, 21].
    pub fn contrast_ratio(&self, other: &Color) -> f64 {
        let l1 = self.luminance();
        let l2 = other.luminance();
        (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
    }

    /// Whichever of pure black/white contrasts best against this color.
    pub fn best_text_color(&self) -> Color {
        if self.contrast_ratio(&Color::BLACK) > self.contrast_ratio(&Color::WHITE) {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.strip_prefix('#').unwrap_or(input);
        let values = <[u8; 3]>::from_hex(input)?;
        Ok(Self::new(values[0], values[1], values[2]))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode([self.r, self.g, self.b]))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let input = String::deserialize(deserializer)?;
        input.parse().map_err(de::Error::custom)
    }
}

/// An error caused by a color string that isn't 6 hex digits.
#[derive(thiserror::Error, Debug)]
#[error("invalid color: {0}")]
pub struct ColorFormatError(#[from] FromHexError);

/// A color in hue/saturation/lightness space, all components in [0, 1].
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Hsl {
    pub(crate) h: f64,
    pub(crate) s: f64,
    pub(crate) l: f64,
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        let r = color.r as f64 / 255.0;
        let g = color.g as f64 / 255.0;
        let b = color.b as f64 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return Self { h: 0.0, s: 0.0, l };
        }
        let delta = max - min;
        let s = if l <= 0.5 { delta / (max + min) } else { delta / (2.0 - max - min) };
        let h = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        Self { h: (h / 6.0).rem_euclid(1.0), s, l }
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        fn component(m1: f64, m2: f64, hue: f64) -> f64 {
            let hue = hue.rem_euclid(1.0);
            if hue < 1.0 / 6.0 {
                m1 + (m2 - m1) * hue * 6.0
            } else if hue < 0.5 {
                m2
            } else if hue < 2.0 / 3.0 {
                m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
            } else {
                m1
            }
        }

        if hsl.s == 0.0 {
            let value = (hsl.l * 255.0).round() as u8;
            return Color::new(value, value, value);
        }
        let m2 = if hsl.l <= 0.5 { hsl.l * (1.0 + hsl.s) } else { hsl.l + hsl.s - hsl.l * hsl.s };
        let m1 = 2.0 * hsl.l - m2;
        let r = component(m1, m2, hsl.h + 1.0 / 3.0);
        let g = component(m1, m2, hsl.h);
        let b = component(m1, m2, hsl.h - 1.0 / 3.0);
        Color::new((r * 255.0).round() as u8, (g * 255.0).round() as u8, (b * 255.0).round() as u8)
    }
}
