//! Converting rendered segments into displayable forms.
//!
//! | Function | Produces |
//! |----------|----------|
//! | [`to_plain`] | text only, all styling dropped |
//! | [`to_legacy`] | text with `§` codes, for clients without components |
//! | [`to_ansi`] | terminal escape sequences |
//! | [`to_json`] | chat-component JSON with click and hover events |
//!
//! Only [`to_json`] keeps click, hover and insertion data.

mod ansi;
mod json;

pub use ansi::{to_ansi, ColorChoice};
pub use json::{to_json, to_json_string, to_json_string_pretty};

use crate::style::{LegacyCode, Style, StyledSegment};

/// Concatenates segment text.
pub fn to_plain(segments: &[StyledSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// Writes segments back out with `§` codes.
///
/// A code sequence is written wherever the style changes: `§r` when the
/// color is cleared or a flag switches off, then the color, then every
/// active format code. Empty segments are skipped.
///
/// ```rust
/// use chatmark_render::{compile_styled, to_legacy};
///
/// let segments = compile_styled("&cRed &lBold &rplain").render(&(), &());
/// assert_eq!(to_legacy(&segments), "§cRed §c§lBold §rplain");
/// ```
pub fn to_legacy(segments: &[StyledSegment]) -> String {
    let mut out = String::new();
    let mut current = Style::default();

    for segment in segments.iter().filter(|s| !s.text.is_empty()) {
        if segment.style != current {
            write_style_change(&current, &segment.style, &mut out);
            current = segment.style;
        }
        out.push_str(&segment.text);
    }

    out
}

fn write_style_change(prev: &Style, next: &Style, out: &mut String) {
    let needs_reset = next.color.is_none() || prev.formats().any(|f| !next.has(f));
    if needs_reset && !prev.is_plain() {
        LegacyCode::Reset.write_legacy(out);
    }
    if let Some(color) = next.color {
        color.write_legacy(out);
    }
    for format in next.formats() {
        LegacyCode::Format(format).write_legacy(out);
    }
}
