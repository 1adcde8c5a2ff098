//! Color Source Resolver
//!
//! A pure decision function over (participant, configuration) plus a
//! side-effecting cache for the one expensive path. Precedence: explicit
//! override, then the configured source, then nothing.

use std::collections::HashMap;

use tint_color::{ColorValue, Hsla, Rgba, convert};
use tint_roster::Participant;

use crate::{ColorizeSource, ColorizerSettings, ImageAnalyzer, ResolveError, SwatchCategory};

/// Swatch categories tried in order when deriving from an avatar.
pub const DEFAULT_SWATCH_PRIORITY: [SwatchCategory; 2] =
    [SwatchCategory::Vibrant, SwatchCategory::Muted];

/// Substituted when analysis succeeds but reports no usable swatch.
/// Analysis *failure* is not substituted - it propagates to the caller.
pub const FALLBACK_SWATCH_RGB: [u8; 3] = [225, 138, 36];

/// Resolves participant colors, caching avatar derivations.
///
/// Cache entries live for the resolver's lifetime and are never refreshed,
/// even if the underlying avatar image changes; hosts that care can call
/// [`ColorResolver::invalidate`] on avatar edits.
#[derive(Debug, Default)]
pub struct ColorResolver {
    derived: HashMap<String, ColorValue>,
}

impl ColorResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the authoritative dialogue color for `participant`.
    ///
    /// Returns `Ok(None)` when the participant gets no color: source
    /// disabled, override-only with no override set, or the system
    /// participant (which never consults configuration).
    pub async fn resolve_color<A: ImageAnalyzer>(
        &mut self,
        participant: &Participant,
        settings: &ColorizerSettings,
        analyzer: &A,
    ) -> Result<Option<ColorValue>, ResolveError> {
        let Some(config) = settings.kind_config(participant.kind()) else {
            return Ok(None);
        };

        let override_hex = config
            .color_overrides
            .get(participant.avatar_name())
            .filter(|hex| !hex.is_empty());

        // Any non-empty override wins over the configured source.
        let source = if override_hex.is_some() {
            ColorizeSource::OverrideOnly
        } else {
            config.colorize_source
        };

        match source {
            ColorizeSource::AvatarDerived => {
                let key = participant.key();
                if let Some(cached) = self.derived.get(&key) {
                    tracing::debug!(participant = %key, "derived-color cache hit");
                    return Ok(Some(cached.clone()));
                }

                let image_path = participant.avatar_thumbnail_path();
                let swatches = analyzer.analyze(&image_path).await?;
                let rgb = swatches
                    .first_valid(&DEFAULT_SWATCH_PRIORITY)
                    .map(|swatch| swatch.rgb())
                    .unwrap_or(FALLBACK_SWATCH_RGB);

                let color = ColorValue::from_rgb(improve_contrast(rgb));
                tracing::debug!(participant = %key, color = %color.to_hex(false), "derived avatar color");
                self.derived.insert(key, color.clone());
                Ok(Some(color))
            }
            ColorizeSource::StaticColor => {
                Ok(Some(ColorValue::from_hex(&config.static_color, None)?))
            }
            ColorizeSource::OverrideOnly => match override_hex {
                Some(hex) => Ok(Some(ColorValue::from_hex(hex, None)?)),
                None => Ok(None),
            },
            ColorizeSource::Disabled => Ok(None),
        }
    }

    /// Drop the cached derivation for one participant. Returns whether an
    /// entry existed.
    pub fn invalidate(&mut self, participant: &Participant) -> bool {
        self.derived.remove(&participant.key()).is_some()
    }

    /// Drop every cached derivation.
    pub fn clear(&mut self) {
        self.derived.clear();
    }

    /// Number of cached derivations.
    pub fn cached_len(&self) -> usize {
        self.derived.len()
    }
}

/// Nudge an image-derived color toward readable dialogue text: hue kept,
/// saturation pulled toward the middle, luminosity raised to at least 0.7.
/// A fixed heuristic, not configurable.
pub fn improve_contrast(rgb: impl Into<Rgba>) -> Rgba {
    let hsl = convert::rgb_to_hsl(rgb.into());

    let s = if hsl.s > 0.5 { hsl.s - 0.1 } else { hsl.s + 0.3 };
    let l = if hsl.l > 0.7 { hsl.l } else { 0.7 };

    convert::hsl_to_rgb(Hsla::hsl(hsl.h, s, l))
}

/// The bubble-background variant of a dialogue color: same hue and
/// saturation, luminosity overridden with the configured value (typically
/// well below the text color's).
pub fn bubble_color(color: &ColorValue, lightness: f64) -> ColorValue {
    let hsl = color.to_hsl();
    ColorValue::from_hsl(Hsla {
        h: hsl.h,
        s: hsl.s,
        l: lightness,
        a: hsl.a,
    })
}
