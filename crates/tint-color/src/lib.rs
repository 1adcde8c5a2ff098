//! Tint Color
//!
//! Color-space conversions (RGB / HSL / hex) and a lazily-converting
//! color value type.

pub mod convert;
mod value;

pub use value::ColorValue;

/// RGBA components. `r`, `g` and `b` are in `0..=255`; alpha, when present,
/// is in `0..=255` as well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    /// Absent alpha is carried through untouched, not substituted with a
    /// default (conversions that need one default it at the point of use).
    pub a: Option<f64>,
}

impl Rgba {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }
}

impl From<[f64; 3]> for Rgba {
    fn from(v: [f64; 3]) -> Self {
        Self::rgb(v[0], v[1], v[2])
    }
}

impl From<[f64; 4]> for Rgba {
    fn from(v: [f64; 4]) -> Self {
        Self::rgba(v[0], v[1], v[2], v[3])
    }
}

impl From<[u8; 3]> for Rgba {
    fn from(v: [u8; 3]) -> Self {
        Self::rgb(v[0] as f64, v[1] as f64, v[2] as f64)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(v: [u8; 4]) -> Self {
        Self::rgba(v[0] as f64, v[1] as f64, v[2] as f64, v[3] as f64)
    }
}

impl TryFrom<&[f64]> for Rgba {
    type Error = ColorError;

    fn try_from(v: &[f64]) -> Result<Self, ColorError> {
        match v {
            [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
            [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
            _ => Err(ColorError::InvalidArgument(v.len())),
        }
    }
}

/// HSLA components, all in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    /// See [`Rgba::a`]; defaulted at the point of use, not at construction.
    pub a: Option<f64>,
}

impl Hsla {
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, a: None }
    }

    pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a: Some(a) }
    }
}

impl From<[f64; 3]> for Hsla {
    fn from(v: [f64; 3]) -> Self {
        Self::hsl(v[0], v[1], v[2])
    }
}

impl From<[f64; 4]> for Hsla {
    fn from(v: [f64; 4]) -> Self {
        Self::hsla(v[0], v[1], v[2], v[3])
    }
}

impl TryFrom<&[f64]> for Hsla {
    type Error = ColorError;

    fn try_from(v: &[f64]) -> Result<Self, ColorError> {
        match v {
            [h, s, l] => Ok(Self::hsl(*h, *s, *l)),
            [h, s, l, a] => Ok(Self::hsla(*h, *s, *l, *a)),
            _ => Err(ColorError::InvalidArgument(v.len())),
        }
    }
}

/// Color error
#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color string: '{0}'")]
    InvalidHexString(String),

    #[error("invalid color components: expected 3 or 4 values, got {0}")]
    InvalidArgument(usize),
}
