//! Colorizer Configuration
//!
//! Per-kind color settings plus the global knobs, in the persisted
//! settings shape. Missing keys deserialize to their defaults so settings
//! saved by older versions keep loading.

use std::collections::BTreeMap;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};
use tint_roster::ParticipantKind;

/// Default static dialogue color.
pub const DEFAULT_STATIC_COLOR: &str = "#e18a24";

/// Where a participant's color comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ColorizeSource {
    /// Derive from the participant's avatar image.
    #[default]
    #[serde(rename = "avatar_color")]
    AvatarDerived,

    /// Use the configured static color.
    #[serde(rename = "static_color")]
    StaticColor,

    /// Only participants with an explicit override get a color.
    #[serde(rename = "override_only")]
    OverrideOnly,

    /// No colorization. Unrecognized persisted values land here too.
    #[serde(rename = "disabled")]
    Disabled,
}

// Manual impl so unrecognized persisted values degrade to Disabled
// instead of failing the whole settings load.
impl<'de> Deserialize<'de> for ColorizeSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "avatar_color" => ColorizeSource::AvatarDerived,
            "static_color" => ColorizeSource::StaticColor,
            "override_only" => ColorizeSource::OverrideOnly,
            // Legacy persisted name for the override-only mode.
            "char_card_color" => ColorizeSource::OverrideOnly,
            _ => ColorizeSource::Disabled,
        })
    }
}

/// Color configuration for one participant kind. The system kind never
/// consults configuration and has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindColorConfig {
    #[serde(default)]
    pub colorize_source: ColorizeSource,

    /// Hex string, with leading `#`. Validated at the input boundary;
    /// a malformed value here fails resolution rather than being coerced.
    #[serde(default = "default_static_color")]
    pub static_color: String,

    /// Per-participant override colors, keyed by avatar name. A non-empty
    /// entry takes precedence over `colorize_source`.
    #[serde(default)]
    pub color_overrides: BTreeMap<String, String>,
}

fn default_static_color() -> String {
    DEFAULT_STATIC_COLOR.to_string()
}

impl Default for KindColorConfig {
    fn default() -> Self {
        Self {
            colorize_source: ColorizeSource::default(),
            static_color: default_static_color(),
            color_overrides: BTreeMap::new(),
        }
    }
}

/// Which message parts receive the resolved color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorizeTargets(pub u8);

impl ColorizeTargets {
    pub const NONE: Self = Self(0);
    /// Quoted spans inside message text.
    pub const QUOTED_TEXT: Self = Self(1);
    /// The whole message text.
    pub const FULL_TEXT: Self = Self(1 << 1);
    /// The message bubble background.
    pub const BUBBLE_BACKGROUND: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for ColorizeTargets {
    fn default() -> Self {
        Self::QUOTED_TEXT
    }
}

impl BitOr for ColorizeTargets {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// The full persisted settings: one config per configurable kind plus
/// global knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorizerSettings {
    #[serde(default)]
    pub character: KindColorConfig,

    #[serde(default)]
    pub persona: KindColorConfig,

    #[serde(default)]
    pub colorize_targets: ColorizeTargets,

    /// Luminosity override for the bubble background variant, `0.0..=1.0`.
    #[serde(default = "default_chat_bubble_lightness")]
    pub chat_bubble_lightness: f64,
}

fn default_chat_bubble_lightness() -> f64 {
    0.15
}

// Manual impl: the serde `default = ...` attributes cover deserialization
// only, and the in-process default must agree with them.
impl Default for ColorizerSettings {
    fn default() -> Self {
        Self {
            character: KindColorConfig::default(),
            persona: KindColorConfig::default(),
            colorize_targets: ColorizeTargets::default(),
            chat_bubble_lightness: default_chat_bubble_lightness(),
        }
    }
}

impl ColorizerSettings {
    /// The config for a kind, or `None` for the system participant.
    pub fn kind_config(&self, kind: ParticipantKind) -> Option<&KindColorConfig> {
        match kind {
            ParticipantKind::Character => Some(&self.character),
            ParticipantKind::Persona => Some(&self.persona),
            ParticipantKind::System => None,
        }
    }

    /// Mutable variant of [`ColorizerSettings::kind_config`].
    pub fn kind_config_mut(&mut self, kind: ParticipantKind) -> Option<&mut KindColorConfig> {
        match kind {
            ParticipantKind::Character => Some(&mut self.character),
            ParticipantKind::Persona => Some(&mut self.persona),
            ParticipantKind::System => None,
        }
    }
}
