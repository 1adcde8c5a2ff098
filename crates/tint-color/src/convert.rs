//! Color-Space Conversions
//!
//! Pure functions between RGB, HSL and hex representations.
//! Hex strings never carry a leading `#` on output; input strings may.

use crate::{ColorError, Hsla, Rgba};

/// Convert RGBA (components `0..=255`) to HSLA (components `0..=1`).
/// A missing alpha defaults to 255 before scaling.
pub fn rgb_to_hsl(rgba: impl Into<Rgba>) -> Hsla {
    let Rgba { r, g, b, a } = rgba.into();
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;
    let a = a.unwrap_or(255.0) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let max_min = max + min;

    let l = max_min / 2.0;
    let (h, s) = if max != min {
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - d) } else { d / max_min };

        let h = if r == max {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if g == max {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h / 6.0, s)
    } else {
        // achromatic
        (0.0, 0.0)
    };

    Hsla::hsla(h, s, l, a)
}

/// Convert HSLA (components `0..=1`) to RGBA (components `0..=255`).
/// A missing alpha defaults to 1 before scaling. Every output component is
/// rounded to the nearest integer.
pub fn hsl_to_rgb(hsla: impl Into<Hsla>) -> Rgba {
    let Hsla { h, s, l, a } = hsla.into();
    let a = a.unwrap_or(1.0);

    let (r, g, b) = if s != 0.0 {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    } else {
        // achromatic
        (l, l, l)
    };

    Rgba::rgba(
        (r * 255.0).round(),
        (g * 255.0).round(),
        (b * 255.0).round(),
        (a * 255.0).round(),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Format an RGB value as a 6-digit lowercase hex string, no leading `#`.
/// Alpha, if any, is ignored.
pub fn rgb_to_hex(rgb: impl Into<Rgba>) -> String {
    let Rgba { r, g, b, .. } = rgb.into();
    format!("{:02x}{:02x}{:02x}", r as i64, g as i64, b as i64)
}

/// Format an HSL value as a 6-digit hex string by going through RGB.
pub fn hsl_to_hex(hsl: impl Into<Hsla>) -> String {
    rgb_to_hex(hsl_to_rgb(hsl.into()))
}

/// Parse a hex color string (3 or 6 digits, optional leading `#`) into RGB.
/// The caller-supplied alpha is carried through unchanged; when `None`, the
/// result has no alpha.
pub fn hex_to_rgb(hex: &str, alpha: Option<f64>) -> Result<Rgba, ColorError> {
    let normalized = normalize_hex(hex)?;
    let long = if normalized.len() == 3 {
        hex_short_to_long(normalized)?
    } else {
        normalized.to_string()
    };

    let channel = |range: std::ops::Range<usize>| -> Result<f64, ColorError> {
        u8::from_str_radix(&long[range], 16)
            .map(f64::from)
            .map_err(|_| ColorError::InvalidHexString(hex.to_string()))
    };

    Ok(Rgba {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
        a: alpha,
    })
}

/// Whether `value` is a valid hex color string: an optional single leading
/// `#` followed by exactly 3 or exactly 6 hex digits, case-insensitive.
pub fn is_valid_hex_string(value: &str) -> bool {
    let digits = value.strip_prefix('#').unwrap_or(value);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Whether the hex string can be written in 3-digit shortform. A string that
/// is already short reports `true`.
pub fn hex_can_be_short(hex: &str) -> Result<bool, ColorError> {
    let hex = normalize_hex(hex)?;
    if hex.len() == 3 {
        return Ok(true);
    }

    let d = hex.as_bytes();
    Ok(d[0] == d[1] && d[2] == d[3] && d[4] == d[5])
}

/// Compact a 6-digit hex string into its 3-digit shortform. Returns the
/// input unchanged if already short, `None` if it cannot be compacted.
pub fn hex_long_to_short(hex: &str) -> Result<Option<String>, ColorError> {
    let hex = normalize_hex(hex)?;
    if !hex_can_be_short(hex)? {
        return Ok(None);
    }
    if hex.len() == 3 {
        return Ok(Some(hex.to_string()));
    }

    let d = hex.as_bytes();
    Ok(Some(
        String::from_utf8_lossy(&[d[0], d[2], d[4]]).into_owned(),
    ))
}

/// Expand a 3-digit hex string into its 6-digit longform by doubling each
/// digit. A 6-digit input is returned unchanged.
pub fn hex_short_to_long(hex: &str) -> Result<String, ColorError> {
    let hex = normalize_hex(hex)?;
    if hex.len() == 6 {
        return Ok(hex.to_string());
    }

    let d = hex.as_bytes();
    Ok(String::from_utf8_lossy(&[d[0], d[0], d[1], d[1], d[2], d[2]]).into_owned())
}

/// Validate a hex color string and strip its leading marker, preserving the
/// original digit case. Everything up to and including the last `#` is
/// dropped, not just the first character.
pub fn normalize_hex(value: &str) -> Result<&str, ColorError> {
    if !is_valid_hex_string(value) {
        return Err(ColorError::InvalidHexString(value.to_string()));
    }

    Ok(match value.rfind('#') {
        Some(i) => &value[i + 1..],
        None => value,
    })
}
