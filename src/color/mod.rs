//! Color math for icon palettes, on top of the `palette` crate.
//!
//! Colors are held as `Srgb<f64>` so that interpolated colors (see
//! [`Color::with_luminance`]) keep full precision until they are encoded
//! back to hex.

pub mod stats;

use crate::error::{CatalogError, Result};
use palette::color_difference::{EuclideanDistance, Wcag21RelativeContrast};
use palette::white_point::D65;
use palette::{Hsl, Hsv, IntoColor, Lab, Mix, Srgb, encoding};
use std::str::FromStr;

pub use stats::{ColorStat, app_colors, main_color_for, stats_for};

const LUMINANCE_EPSILON: f64 = 1e-7;
const LUMINANCE_MAX_ITER: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(Srgb<f64>);

impl Color {
    pub fn white() -> Self {
        Self(Srgb::new(1.0, 1.0, 1.0))
    }

    pub fn black() -> Self {
        Self(Srgb::new(0.0, 0.0, 0.0))
    }

    /// Parse `#rgb` or `#rrggbb` (the `#` is optional, digits are
    /// case-insensitive). Surrounding whitespace is rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || CatalogError::InvalidColorFormat(s.to_string());
        if s.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        let rgb = Srgb::<u8>::from_str(s).map_err(|_| invalid())?;
        Ok(Self(rgb.into_format()))
    }

    /// Channels rounded to whole 8-bit values.
    pub fn to_rgb8(self) -> Srgb<u8> {
        self.0.into_format()
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8().into_components();
        format!("#{}", hex::encode([r, g, b]))
    }

    /// The color snapped to 8-bit channels, i.e. what its hex encoding denotes.
    pub fn rounded(self) -> Self {
        Self(self.to_rgb8().into_format())
    }

    /// (hue in degrees, saturation, lightness). Hue is 0 for grays.
    pub fn hsl(self) -> (f64, f64, f64) {
        let hsl: Hsl<encoding::Srgb, f64> = self.0.into_color();
        (
            hsl.hue.into_positive_degrees(),
            hsl.saturation,
            hsl.lightness,
        )
    }

    /// HSV value component.
    pub fn value(self) -> f64 {
        let hsv: Hsv<encoding::Srgb, f64> = self.0.into_color();
        hsv.value
    }

    /// WCAG relative luminance.
    pub fn luminance(self) -> f64 {
        self.0.relative_luminance().luma
    }

    /// WCAG contrast ratio, always >= 1.
    pub fn contrast(self, other: Self) -> f64 {
        self.0.relative_contrast(other.0)
    }

    /// Euclidean distance in CIE L*a*b* (D65).
    pub fn distance(self, other: Self) -> f64 {
        self.lab().distance(other.lab())
    }

    pub fn lab(self) -> Lab<D65, f64> {
        self.0.into_color()
    }

    /// Move the color toward black or white until its relative luminance hits
    /// `target`. Bisects in gamma-encoded RGB, so hue is preserved.
    pub fn with_luminance(self, target: f64) -> Self {
        if target <= 0.0 {
            return Self::black();
        }
        if target >= 1.0 {
            return Self::white();
        }

        let (mut low, mut high) = if self.luminance() > target {
            (Self::black().0, self.0)
        } else {
            (self.0, Self::white().0)
        };

        let mut budget = LUMINANCE_MAX_ITER;
        loop {
            let mid = low.mix(high, 0.5);
            let lum = Self(mid).luminance();
            if (target - lum).abs() < LUMINANCE_EPSILON || budget == 0 {
                return Self(mid);
            }
            budget -= 1;
            if lum > target {
                high = mid;
            } else {
                low = mid;
            }
        }
    }
}
