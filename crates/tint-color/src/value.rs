//! Color Value
//!
//! A representation-agnostic color. Constructed from one of RGB, HSL or hex;
//! the other representations are computed on first read and cached. The
//! cache cells are interior state only - callers see an immutable value.

use std::cell::OnceCell;

use crate::convert;
use crate::{ColorError, Hsla, Rgba};

/// The representation supplied at construction.
#[derive(Debug, Clone, Copy)]
enum Canonical {
    Rgb(Rgba),
    Hsl(Hsla),
}

/// An immutable color value with lazily-derived representations.
#[derive(Debug, Clone)]
pub struct ColorValue {
    canonical: Canonical,
    rgba: OnceCell<Rgba>,
    hsla: OnceCell<Hsla>,
    /// Always the 6-digit longform; shortform is recomputed on demand.
    hex: OnceCell<String>,
}

impl ColorValue {
    fn new(canonical: Canonical) -> Self {
        Self {
            canonical,
            rgba: OnceCell::new(),
            hsla: OnceCell::new(),
            hex: OnceCell::new(),
        }
    }

    /// Create a color from RGBA components (`0..=255`).
    pub fn from_rgb(rgba: impl Into<Rgba>) -> Self {
        Self::new(Canonical::Rgb(rgba.into()))
    }

    /// Create a color from HSLA components (`0..=1`).
    pub fn from_hsl(hsla: impl Into<Hsla>) -> Self {
        Self::new(Canonical::Hsl(hsla.into()))
    }

    /// Create a color from a hex string (3 or 6 digits, optional leading
    /// `#`). Only the RGB form is stored; hex and HSL are derived lazily.
    pub fn from_hex(hex: &str, alpha: Option<f64>) -> Result<Self, ColorError> {
        let rgb = convert::hex_to_rgb(hex, alpha)?;
        Ok(Self::from_rgb(rgb))
    }

    /// Create a color from a loose RGBA component slice (3 or 4 values).
    pub fn try_from_rgb_slice(components: &[f64]) -> Result<Self, ColorError> {
        Ok(Self::from_rgb(Rgba::try_from(components)?))
    }

    /// Create a color from a loose HSLA component slice (3 or 4 values).
    pub fn try_from_hsl_slice(components: &[f64]) -> Result<Self, ColorError> {
        Ok(Self::from_hsl(Hsla::try_from(components)?))
    }

    /// The RGBA representation, converting from HSL on first call.
    pub fn to_rgb(&self) -> Rgba {
        *self.rgba.get_or_init(|| match self.canonical {
            Canonical::Rgb(rgba) => rgba,
            Canonical::Hsl(hsla) => convert::hsl_to_rgb(hsla),
        })
    }

    /// The HSLA representation, converting from RGB on first call.
    pub fn to_hsl(&self) -> Hsla {
        *self.hsla.get_or_init(|| match self.canonical {
            Canonical::Hsl(hsla) => hsla,
            Canonical::Rgb(rgba) => convert::rgb_to_hsl(rgba),
        })
    }

    /// The hex representation, no leading `#`. With `shortform`, the
    /// 3-digit compaction is returned when the color permits it; otherwise
    /// the 6-digit longform.
    pub fn to_hex(&self, shortform: bool) -> String {
        let hex = self.hex.get_or_init(|| convert::rgb_to_hex(self.to_rgb()));

        if shortform {
            if let Ok(Some(short)) = convert::hex_long_to_short(hex) {
                return short;
            }
        }

        hex.clone()
    }
}

impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        self.to_rgb() == other.to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_to_hex() {
        let color = ColorValue::from_rgb([225.0, 138.0, 36.0]);
        assert_eq!(color.to_hex(false), "e18a24");
    }

    #[test]
    fn test_from_hex_round_trip() {
        let color = ColorValue::from_hex("#e18a24", None).unwrap();
        let rgb = color.to_rgb();
        assert_eq!((rgb.r, rgb.g, rgb.b), (225.0, 138.0, 36.0));
        assert_eq!(color.to_hex(false), "e18a24");
    }

    #[test]
    fn test_from_hsl_lazy_rgb() {
        let color = ColorValue::from_hsl([0.0, 1.0, 0.5, 1.0]);
        let rgb = color.to_rgb();
        assert_eq!((rgb.r, rgb.g, rgb.b), (255.0, 0.0, 0.0));
        assert_eq!(color.to_hex(false), "ff0000");
    }

    #[test]
    fn test_to_hex_shortform() {
        let color = ColorValue::from_hex("aabbcc", None).unwrap();
        assert_eq!(color.to_hex(true), "abc");
        // Longform stays available after a shortform read.
        assert_eq!(color.to_hex(false), "aabbcc");

        let color = ColorValue::from_hex("e18a24", None).unwrap();
        assert_eq!(color.to_hex(true), "e18a24");
    }

    #[test]
    fn test_from_invalid_hex() {
        assert!(ColorValue::from_hex("nothex", None).is_err());
    }

    #[test]
    fn test_try_from_slice_shapes() {
        assert!(ColorValue::try_from_rgb_slice(&[1.0, 2.0]).is_err());
        assert!(ColorValue::try_from_rgb_slice(&[1.0, 2.0, 3.0]).is_ok());
        assert!(ColorValue::try_from_hsl_slice(&[0.1, 0.2, 0.3, 1.0]).is_ok());
        assert!(ColorValue::try_from_hsl_slice(&[0.1; 5]).is_err());
    }

    #[test]
    fn test_value_equality() {
        let a = ColorValue::from_hex("ff0000", None).unwrap();
        let b = ColorValue::from_hsl([0.0, 1.0, 0.5, 1.0]);
        // from_hex carries no alpha; compare against an alpha-less HSL.
        let b_rgb = b.to_rgb();
        assert_eq!((b_rgb.r, b_rgb.g, b_rgb.b), (255.0, 0.0, 0.0));
        let c = ColorValue::from_rgb([255.0, 0.0, 0.0]);
        assert_eq!(a, c);
    }
}
