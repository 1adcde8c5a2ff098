//! Comprehensive tests for tint-engine
//!
//! End-to-end flows: settings load, resolution, caching and rule emission.

use std::cell::Cell;

use tint_engine::resolve::{
    MemorySettingsStore, ResolveError, SettingsStore, Swatch, SwatchCategory, SwatchSet,
};
use tint_engine::roster::StaticRoster;
use tint_engine::{
    Colorizer, ColorizeSource, ColorizeTargets, Config, ImageAnalyzer, Participant,
    ParticipantKind,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

struct StubAnalyzer {
    rgb: [u8; 3],
    calls: Cell<u32>,
}

impl StubAnalyzer {
    fn new(rgb: [u8; 3]) -> Self {
        Self {
            rgb,
            calls: Cell::new(0),
        }
    }
}

impl ImageAnalyzer for StubAnalyzer {
    async fn analyze(&self, _image_path: &str) -> Result<SwatchSet, ResolveError> {
        self.calls.set(self.calls.get() + 1);
        let mut set = SwatchSet::new();
        set.insert(SwatchCategory::Vibrant, Swatch::new(self.rgb, 42));
        Ok(set)
    }
}

fn roster() -> StaticRoster {
    StaticRoster::new()
        .with_character("Seraphina", "seraphina.png")
        .with_persona("user-default.png", "Anon")
}

fn character() -> Participant {
    Participant::from_avatar_name(&roster(), ParticipantKind::Character, "seraphina.png").unwrap()
}

#[test]
fn test_static_color_stylesheet() {
    init_tracing();
    smol::block_on(async {
        let mut store = MemorySettingsStore::new();
        store.save(
            "dialogue-colorizer",
            serde_json::from_str(r#"{"character":{"colorize_source":"static_color"}}"#).unwrap(),
        );

        let mut colorizer = Colorizer::load(&store, Config::default()).unwrap();
        let css = colorizer
            .stylesheet_for(&character(), &StubAnalyzer::new([1, 2, 3]))
            .await
            .unwrap();

        // Default static color, scoped to the participant's key.
        assert_eq!(
            css,
            ".mes[tint-author=\"character|seraphina.png\"] .mes_text q { color: #e18a24; }\n"
        );
    });
}

#[test]
fn test_avatar_derivation_cached_across_calls() {
    init_tracing();
    smol::block_on(async {
        let store = MemorySettingsStore::new();
        let mut colorizer = Colorizer::load(&store, Config::default()).unwrap();
        let analyzer = StubAnalyzer::new([40, 40, 160]);

        let first = colorizer
            .stylesheet_for(&character(), &analyzer)
            .await
            .unwrap();
        let second = colorizer
            .stylesheet_for(&character(), &analyzer)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(analyzer.calls.get(), 1);

        // Invalidation forces a re-derivation.
        assert!(colorizer.invalidate(&character()));
        colorizer
            .stylesheet_for(&character(), &analyzer)
            .await
            .unwrap();
        assert_eq!(analyzer.calls.get(), 2);
    });
}

#[test]
fn test_override_wins_and_round_trips_through_store() {
    init_tracing();
    smol::block_on(async {
        let mut store = MemorySettingsStore::new();
        let mut colorizer = Colorizer::load(&store, Config::default()).unwrap();

        colorizer
            .set_override(&character(), Some("#112233"))
            .unwrap();
        colorizer.save(&mut store).unwrap();

        // Reload from the store: the override survives and beats the
        // configured avatar-derived source without touching the analyzer.
        let mut reloaded = Colorizer::load(&store, Config::default()).unwrap();
        assert_eq!(
            reloaded.settings().character.colorize_source,
            ColorizeSource::AvatarDerived
        );

        struct NeverAnalyzer;
        impl ImageAnalyzer for NeverAnalyzer {
            async fn analyze(&self, _: &str) -> Result<SwatchSet, ResolveError> {
                panic!("analyzer must not run when an override exists");
            }
        }

        let color = reloaded
            .dialogue_color(&character(), &NeverAnalyzer)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(color.to_hex(false), "112233");
    });
}

#[test]
fn test_clearing_override_restores_configured_source() {
    init_tracing();
    smol::block_on(async {
        let store = MemorySettingsStore::new();
        let mut colorizer = Colorizer::load(&store, Config::default()).unwrap();
        let analyzer = StubAnalyzer::new([200, 30, 90]);

        colorizer
            .set_override(&character(), Some("#112233"))
            .unwrap();
        colorizer.set_override(&character(), None).unwrap();

        colorizer
            .dialogue_color(&character(), &analyzer)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(analyzer.calls.get(), 1);
    });
}

#[test]
fn test_invalid_override_rejected_at_write() {
    init_tracing();
    let store = MemorySettingsStore::new();
    let mut colorizer = Colorizer::load(&store, Config::default()).unwrap();

    assert!(colorizer.set_override(&character(), Some("nothex")).is_err());
    assert!(colorizer
        .settings()
        .character
        .color_overrides
        .is_empty());
}

#[test]
fn test_bubble_background_target() {
    init_tracing();
    smol::block_on(async {
        let store = MemorySettingsStore::new();
        let mut colorizer = Colorizer::load(&store, Config::default()).unwrap();
        colorizer.settings_mut().character.colorize_source = ColorizeSource::StaticColor;
        colorizer.settings_mut().colorize_targets =
            ColorizeTargets::QUOTED_TEXT | ColorizeTargets::BUBBLE_BACKGROUND;

        let css = colorizer
            .stylesheet_for(&character(), &StubAnalyzer::new([1, 2, 3]))
            .await
            .unwrap();

        assert!(css.contains(".mes_text q { color: #e18a24; }"));

        // Bubble variant: same hue/saturation, lightness forced to the
        // default 0.15, which must hold without any persisted settings.
        let dialogue = tint_engine::ColorValue::from_hex("e18a24", None).unwrap();
        let expected = tint_engine::resolve::bubble_color(&dialogue, 0.15);
        assert!(css.contains(&format!("background-color: #{};", expected.to_hex(false))));
        assert!(!css.contains("background-color: #e18a24"));
    });
}

#[test]
fn test_system_participant_yields_no_rules() {
    init_tracing();
    smol::block_on(async {
        let store = MemorySettingsStore::new();
        let mut colorizer = Colorizer::load(&store, Config::default()).unwrap();

        let css = colorizer
            .stylesheet_for(Participant::system(), &StubAnalyzer::new([1, 2, 3]))
            .await
            .unwrap();
        assert!(css.is_empty());
    });
}
