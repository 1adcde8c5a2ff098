//! Settings Persistence
//!
//! Load/save of the colorizer settings against a host-owned store. Loading
//! merges saved values over defaults so keys added since the save still get
//! their default; extra saved keys are preserved for round-tripping.
//! Saving is best-effort from the core's perspective - debouncing and
//! storage scheduling belong to the host.

use serde_json::Value;

use crate::{ColorizerSettings, ResolveError};

/// Host-owned settings storage, keyed by extension.
pub trait SettingsStore {
    /// The raw saved settings for `extension_key`, if any.
    fn load(&self, extension_key: &str) -> Option<Value>;

    /// Persist the raw settings for `extension_key`. Best-effort.
    fn save(&mut self, extension_key: &str, value: Value);
}

/// An in-memory store, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    entries: std::collections::HashMap<String, Value>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self, extension_key: &str) -> Option<Value> {
        self.entries.get(extension_key).cloned()
    }

    fn save(&mut self, extension_key: &str, value: Value) {
        self.entries.insert(extension_key.to_string(), value);
    }
}

/// Shallow-merge `saved` over `defaults`: keys present in the defaults but
/// absent from the saved object are backfilled, saved keys win whole, and
/// saved keys with no default are preserved.
pub fn merge_defaults(defaults: &Value, saved: Value) -> Value {
    let Value::Object(default_map) = defaults else {
        return defaults.clone();
    };
    let Value::Object(mut saved_map) = saved else {
        return defaults.clone();
    };

    for (key, value) in default_map {
        saved_map.entry(key.clone()).or_insert_with(|| value.clone());
    }

    Value::Object(saved_map)
}

/// Load settings for `extension_key`, merged over `defaults`.
pub fn load_settings(
    store: &dyn SettingsStore,
    extension_key: &str,
    defaults: &ColorizerSettings,
) -> Result<ColorizerSettings, ResolveError> {
    let default_value = serde_json::to_value(defaults)?;
    let saved = store
        .load(extension_key)
        .unwrap_or_else(|| Value::Object(Default::default()));

    let merged = merge_defaults(&default_value, saved);
    Ok(serde_json::from_value(merged)?)
}

/// Persist settings for `extension_key`.
pub fn save_settings(
    store: &mut dyn SettingsStore,
    extension_key: &str,
    settings: &ColorizerSettings,
) -> Result<(), ResolveError> {
    tracing::debug!(extension_key, "saving colorizer settings");
    store.save(extension_key, serde_json::to_value(settings)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorizeSource;
    use serde_json::json;

    const KEY: &str = "dialogue-colorizer";

    #[test]
    fn test_load_empty_store_yields_defaults() {
        let store = MemorySettingsStore::new();
        let loaded = load_settings(&store, KEY, &ColorizerSettings::default()).unwrap();
        assert_eq!(loaded, ColorizerSettings::default());
    }

    #[test]
    fn test_load_merges_saved_over_defaults() {
        let mut store = MemorySettingsStore::new();
        store.save(
            KEY,
            json!({
                "character": {
                    "colorize_source": "static_color",
                    "static_color": "#336699",
                    "color_overrides": {}
                }
            }),
        );

        let loaded = load_settings(&store, KEY, &ColorizerSettings::default()).unwrap();
        assert_eq!(loaded.character.colorize_source, ColorizeSource::StaticColor);
        assert_eq!(loaded.character.static_color, "#336699");
        // Keys missing from the save are backfilled from the defaults.
        assert_eq!(loaded.persona, ColorizerSettings::default().persona);
        assert_eq!(loaded.chat_bubble_lightness, 0.15);
    }

    #[test]
    fn test_merge_preserves_extra_saved_keys() {
        let defaults = json!({ "a": 1, "b": 2 });
        let merged = merge_defaults(&defaults, json!({ "b": 20, "future_key": true }));
        assert_eq!(merged, json!({ "a": 1, "b": 20, "future_key": true }));
    }

    #[test]
    fn test_save_round_trip() {
        let mut store = MemorySettingsStore::new();
        let mut settings = ColorizerSettings::default();
        settings
            .character
            .color_overrides
            .insert("seraphina.png".to_string(), "#abcdef".to_string());

        save_settings(&mut store, KEY, &settings).unwrap();
        let loaded = load_settings(&store, KEY, &ColorizerSettings::default()).unwrap();
        assert_eq!(loaded, settings);
    }
}
