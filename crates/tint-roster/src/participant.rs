//! Participant Identity
//!
//! A validated (kind, avatar name) pair. Construction goes through the
//! factory functions so an identity always refers to a roster entry; the
//! plain constructor is not exposed.

use std::fmt;
use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{ParticipantKind, RosterError, RosterProvider};

/// The single well-known avatar path of the system participant.
pub const SYSTEM_AVATAR_PATH: &str = "img/five.png";

/// Separator in [`Participant::key`]. Does not occur in kinds or avatar
/// file names.
const KEY_SEPARATOR: char = '|';

// encodeURIComponent escape set: everything except alphanumerics and
// - _ . ! ~ * ' ( )
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static SYSTEM: LazyLock<Participant> = LazyLock::new(|| Participant {
    kind: ParticipantKind::System,
    avatar_name: SYSTEM_AVATAR_PATH.to_string(),
});

/// A colorable chat-message author: character, persona, or the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Participant {
    kind: ParticipantKind,
    avatar_name: String,
}

impl Participant {
    /// The process-wide system participant.
    pub fn system() -> &'static Participant {
        &SYSTEM
    }

    /// Create a participant from its stable avatar name, validating the
    /// name against the roster for its kind.
    pub fn from_avatar_name(
        roster: &dyn RosterProvider,
        kind: ParticipantKind,
        avatar_name: &str,
    ) -> Result<Self, RosterError> {
        let known = match kind {
            ParticipantKind::Character => roster
                .characters()
                .iter()
                .any(|c| c.avatar_file_name == avatar_name),
            ParticipantKind::Persona => roster.personas().contains_key(avatar_name),
            ParticipantKind::System => avatar_name == SYSTEM_AVATAR_PATH,
        };

        if !known {
            return Err(RosterError::UnknownParticipant {
                kind,
                avatar_name: avatar_name.to_string(),
            });
        }

        Ok(Self {
            kind,
            avatar_name: avatar_name.to_string(),
        })
    }

    /// Create a participant from a human-readable display name, resolving
    /// it to the canonical avatar name via the roster. Prefer
    /// [`Participant::from_avatar_name`] where the avatar name is at hand.
    pub fn from_display_name(
        roster: &dyn RosterProvider,
        kind: ParticipantKind,
        name: &str,
    ) -> Result<Self, RosterError> {
        let not_found = || RosterError::ParticipantNotFound {
            kind,
            name: name.to_string(),
        };

        if name.is_empty() {
            return Err(not_found());
        }

        let avatar_name = match kind {
            ParticipantKind::Character => roster
                .characters()
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.avatar_file_name.clone())
                .ok_or_else(not_found)?,
            ParticipantKind::Persona => roster
                .personas()
                .iter()
                .find(|(_, display)| display.as_str() == name)
                .map(|(avatar_id, _)| avatar_id.clone())
                .ok_or_else(not_found)?,
            ParticipantKind::System => SYSTEM_AVATAR_PATH.to_string(),
        };

        Self::from_avatar_name(roster, kind, &avatar_name)
    }

    pub fn kind(&self) -> ParticipantKind {
        self.kind
    }

    /// The stable avatar file name, unique within the kind.
    pub fn avatar_name(&self) -> &str {
        &self.avatar_name
    }

    /// Stable identity string `"<kind>|<avatar_name>"`, used verbatim as a
    /// cache and config key. Two participants are equal iff keys are equal.
    pub fn key(&self) -> String {
        format!("{}{}{}", self.kind, KEY_SEPARATOR, self.avatar_name)
    }

    /// URL path of the full-size avatar image.
    pub fn avatar_path(&self) -> String {
        self.render_avatar_path(false)
    }

    /// URL path of the avatar thumbnail image.
    pub fn avatar_thumbnail_path(&self) -> String {
        self.render_avatar_path(true)
    }

    fn render_avatar_path(&self, thumbnail: bool) -> String {
        let template = match (self.kind, thumbnail) {
            (ParticipantKind::Character, true) => "/thumbnail?type=avatar&file={0}",
            (ParticipantKind::Character, false) => "/characters/{0}",
            (ParticipantKind::Persona, _) => "/User Avatars/{0}",
            // The system avatar is one fixed path, thumbnail or not.
            (ParticipantKind::System, _) => return SYSTEM_AVATAR_PATH.to_string(),
        };

        let encoded = utf8_percent_encode(&self.avatar_name, COMPONENT).to_string();
        template.replace("{0}", &encoded)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
