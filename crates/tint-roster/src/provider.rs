//! Roster Provider
//!
//! Injected lookup capability for validating and resolving participant
//! names. The host UI owns the real character and persona lists; the core
//! only queries them.

use std::collections::BTreeMap;

/// A known chat character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterEntry {
    /// Human-readable display name.
    pub name: String,
    /// Stable avatar file name, unique among characters.
    pub avatar_file_name: String,
}

/// Roster lookup used by the participant factories.
pub trait RosterProvider {
    /// All known characters.
    fn characters(&self) -> &[CharacterEntry];

    /// All known personas: avatar id -> display name.
    fn personas(&self) -> &BTreeMap<String, String>;
}

/// A fixed in-memory roster, for embedding and tests.
#[derive(Debug, Default)]
pub struct StaticRoster {
    characters: Vec<CharacterEntry>,
    personas: BTreeMap<String, String>,
}

impl StaticRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_character(mut self, name: &str, avatar_file_name: &str) -> Self {
        self.characters.push(CharacterEntry {
            name: name.to_string(),
            avatar_file_name: avatar_file_name.to_string(),
        });
        self
    }

    pub fn with_persona(mut self, avatar_id: &str, display_name: &str) -> Self {
        self.personas
            .insert(avatar_id.to_string(), display_name.to_string());
        self
    }
}

impl RosterProvider for StaticRoster {
    fn characters(&self) -> &[CharacterEntry] {
        &self.characters
    }

    fn personas(&self) -> &BTreeMap<String, String> {
        &self.personas
    }
}
