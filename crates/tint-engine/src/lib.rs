//! Tint Engine
//!
//! A perceptually pleasant dialogue colorizer for chat UIs: each
//! participant (character, user persona, or the system) gets a display
//! color derived from its avatar, a per-participant override, or a static
//! fallback, rendered as scoped CSS rule text.
//!
//! # Example
//! ```rust,ignore
//! use tint_engine::{Colorizer, Config};
//!
//! let mut colorizer = Colorizer::load(&store, Config::default())?;
//! let css = colorizer.stylesheet_for(&participant, &analyzer).await?;
//! ```

mod colorizer;

pub use colorizer::{Colorizer, Config};

// Re-export sub-crates for advanced usage
pub use tint_color as color;
pub use tint_resolve as resolve;
pub use tint_roster as roster;
pub use tint_style as style;

pub use tint_color::ColorValue;
pub use tint_resolve::{ColorizeSource, ColorizeTargets, ColorizerSettings, ImageAnalyzer};
pub use tint_roster::{Participant, ParticipantKind, RosterProvider};

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine error
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Resolve(#[from] tint_resolve::ResolveError),
}
