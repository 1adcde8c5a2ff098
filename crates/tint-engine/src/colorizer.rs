//! Colorizer
//!
//! Wires settings, the resolver and style emission together for a host UI:
//! give it a participant, get back the CSS to apply.

use tint_color::{ColorValue, convert};
use tint_resolve::{
    ColorResolver, ColorizeTargets, ColorizerSettings, ImageAnalyzer, SettingsStore, bubble_color,
    load_settings, save_settings,
};
use tint_roster::Participant;

use crate::EngineError;

/// Colorizer construction parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key under which settings are persisted.
    pub extension_key: String,
    /// Defaults backfilled into whatever the store has saved.
    pub defaults: ColorizerSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension_key: "dialogue-colorizer".to_string(),
            defaults: ColorizerSettings::default(),
        }
    }
}

/// The engine facade: loaded settings plus the derivation cache.
#[derive(Debug)]
pub struct Colorizer {
    settings: ColorizerSettings,
    resolver: ColorResolver,
    extension_key: String,
}

impl Colorizer {
    /// Load persisted settings (merged over the configured defaults) and
    /// build a colorizer with an empty derivation cache.
    pub fn load(store: &dyn SettingsStore, config: Config) -> Result<Self, EngineError> {
        let settings = load_settings(store, &config.extension_key, &config.defaults)?;
        tracing::info!(extension_key = %config.extension_key, "colorizer settings loaded");

        Ok(Self {
            settings,
            resolver: ColorResolver::new(),
            extension_key: config.extension_key,
        })
    }

    pub fn settings(&self) -> &ColorizerSettings {
        &self.settings
    }

    /// Mutable settings access for configuration-UI callbacks. Persist
    /// with [`Colorizer::save`] afterwards.
    pub fn settings_mut(&mut self) -> &mut ColorizerSettings {
        &mut self.settings
    }

    /// Persist the current settings. Best-effort fire-and-forget as far as
    /// callers are concerned.
    pub fn save(&self, store: &mut dyn SettingsStore) -> Result<(), EngineError> {
        save_settings(store, &self.extension_key, &self.settings)?;
        Ok(())
    }

    /// Set or clear a per-participant override color. The hex value is
    /// validated here, at the write boundary, so malformed text never
    /// reaches the stored configuration.
    pub fn set_override(
        &mut self,
        participant: &Participant,
        hex: Option<&str>,
    ) -> Result<(), EngineError> {
        let Some(config) = self.settings.kind_config_mut(participant.kind()) else {
            // The system participant has no configuration to write to.
            return Ok(());
        };

        match hex {
            Some(hex) if !hex.is_empty() => {
                if !convert::is_valid_hex_string(hex) {
                    return Err(tint_resolve::ResolveError::Color(
                        tint_color::ColorError::InvalidHexString(hex.to_string()),
                    )
                    .into());
                }
                config
                    .color_overrides
                    .insert(participant.avatar_name().to_string(), hex.to_string());
            }
            _ => {
                config.color_overrides.remove(participant.avatar_name());
            }
        }

        tracing::debug!(participant = %participant, "override color updated");
        Ok(())
    }

    /// Resolve the dialogue color for a participant (cache-served for
    /// avatar derivations). `None` means the participant gets no color.
    pub async fn dialogue_color<A: ImageAnalyzer>(
        &mut self,
        participant: &Participant,
        analyzer: &A,
    ) -> Result<Option<ColorValue>, EngineError> {
        Ok(self
            .resolver
            .resolve_color(participant, &self.settings, analyzer)
            .await?)
    }

    /// Resolve and render the full scoped rule block for a participant.
    /// Empty when the participant gets no color.
    pub async fn stylesheet_for<A: ImageAnalyzer>(
        &mut self,
        participant: &Participant,
        analyzer: &A,
    ) -> Result<String, EngineError> {
        let Some(dialogue) = self.dialogue_color(participant, analyzer).await? else {
            return Ok(String::new());
        };

        let targets = self.settings.colorize_targets;
        let bubble = targets
            .contains(ColorizeTargets::BUBBLE_BACKGROUND)
            .then(|| bubble_color(&dialogue, self.settings.chat_bubble_lightness));

        Ok(tint_style::emit_rules(
            participant,
            targets,
            Some(&dialogue),
            bubble.as_ref(),
        ))
    }

    /// Drop the cached derivation for one participant (e.g. after its
    /// avatar image was edited).
    pub fn invalidate(&mut self, participant: &Participant) -> bool {
        self.resolver.invalidate(participant)
    }

    /// Drop every cached derivation.
    pub fn clear_cache(&mut self) {
        self.resolver.clear();
    }
}
