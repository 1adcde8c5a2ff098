//! Tint Roster
//!
//! Participant identities - who a color belongs to. A participant is a
//! chat character, a user persona, or the system, identified by a stable
//! avatar name unique within its kind.

mod participant;
mod provider;

pub use participant::{Participant, SYSTEM_AVATAR_PATH};
pub use provider::{CharacterEntry, RosterProvider, StaticRoster};

use std::fmt;
use std::str::FromStr;

/// The closed set of participant kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantKind {
    Character,
    Persona,
    System,
}

impl ParticipantKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParticipantKind::Character => "character",
            ParticipantKind::Persona => "persona",
            ParticipantKind::System => "system",
        }
    }
}

impl fmt::Display for ParticipantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticipantKind {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, RosterError> {
        match s {
            "character" => Ok(ParticipantKind::Character),
            "persona" => Ok(ParticipantKind::Persona),
            "system" => Ok(ParticipantKind::System),
            other => Err(RosterError::InvalidKind(other.to_string())),
        }
    }
}

/// Identity resolution error. Never silently defaulted - a wrong participant
/// would corrupt the cache key space.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("unknown {kind} avatar '{avatar_name}'")]
    UnknownParticipant {
        kind: ParticipantKind,
        avatar_name: String,
    },

    #[error("no {kind} named '{name}'")]
    ParticipantNotFound { kind: ParticipantKind, name: String },

    #[error("invalid participant kind '{0}'")]
    InvalidKind(String),
}
