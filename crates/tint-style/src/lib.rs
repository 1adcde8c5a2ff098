//! Tint Style
//!
//! Turns resolved participant colors into CSS rule text scoped to message
//! elements tagged with the author's identity key. Pure string building;
//! applying the rules to a document is the host's job.

use std::fmt::Write;

use tint_color::ColorValue;
use tint_resolve::ColorizeTargets;
use tint_roster::Participant;

/// Attribute the host sets on each message element to tag its author.
pub const AUTHOR_ATTR: &str = "tint-author";

/// Selector matching every message element authored by `participant`.
pub fn participant_selector(participant: &Participant) -> String {
    format!(
        ".mes[{}=\"{}\"]",
        AUTHOR_ATTR,
        escape_attr_value(&participant.key())
    )
}

/// Render the style rules for one participant: zero or one dialogue text
/// color and zero or one bubble background color, gated by `targets`.
/// Returns an empty string when nothing applies.
pub fn emit_rules(
    participant: &Participant,
    targets: ColorizeTargets,
    dialogue: Option<&ColorValue>,
    bubble: Option<&ColorValue>,
) -> String {
    let scope = participant_selector(participant);
    let mut css = String::new();

    if let Some(color) = dialogue {
        let hex = color.to_hex(false);
        if targets.contains(ColorizeTargets::QUOTED_TEXT) {
            let _ = writeln!(css, "{scope} .mes_text q {{ color: #{hex}; }}");
        }
        if targets.contains(ColorizeTargets::FULL_TEXT) {
            let _ = writeln!(css, "{scope} .mes_text {{ color: #{hex}; }}");
        }
    }

    if let Some(color) = bubble {
        if targets.contains(ColorizeTargets::BUBBLE_BACKGROUND) {
            let _ = writeln!(css, "{scope} {{ background-color: #{}; }}", color.to_hex(false));
        }
    }

    css
}

// CSS attribute values are double-quoted; escape the quote and the escape.
fn escape_attr_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
