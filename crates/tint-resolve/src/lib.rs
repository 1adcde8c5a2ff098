//! Tint Resolve
//!
//! Decides where a participant's display color comes from - an explicit
//! per-participant override, an avatar-derived swatch, a configured static
//! color, or nothing - and caches the expensive avatar derivations.

mod config;
mod resolver;
mod settings;
mod swatch;

pub use config::{
    ColorizeSource, ColorizeTargets, ColorizerSettings, DEFAULT_STATIC_COLOR, KindColorConfig,
};
pub use resolver::{
    ColorResolver, DEFAULT_SWATCH_PRIORITY, FALLBACK_SWATCH_RGB, bubble_color, improve_contrast,
};
pub use settings::{MemorySettingsStore, SettingsStore, load_settings, merge_defaults,
    save_settings};
pub use swatch::{ImageAnalyzer, Swatch, SwatchCategory, SwatchSet};

/// Resolution error
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Malformed stored hex reached a parser. Propagated, never silently
    /// replaced with a default - configuration is validated on write.
    #[error(transparent)]
    Color(#[from] tint_color::ColorError),

    /// The image-analysis collaborator failed outright (image did not
    /// load, analysis threw). Distinct from "no swatch found", which
    /// substitutes the fallback color instead.
    #[error("image analysis failed for '{path}': {message}")]
    Analysis { path: String, message: String },

    /// Persisted settings could not be encoded or decoded.
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),
}
