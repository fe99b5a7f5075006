//! Palette mapping for hex colors, and JSON helpers for variable documents.

use serde_json::Value;
use std::collections::BTreeMap;

const CUBE_BASE: u8 = 16;
const CUBE_WHITE: u8 = 231;
const GRAY_BASE: u8 = 232;

/// Maps a hex markup color onto the 256-color terminal palette.
///
/// Grays use the 24-step gray ramp, with near-black and near-white snapping
/// to the cube corners. Other colors use the 6x6x6 cube. Legacy `&` colors
/// never come through here: each carries its own 16-color index.
///
/// # Example
///
/// ```rust
/// use chatmark_render::{rgb_to_ansi256, Rgb};
///
/// // `#f80` in markup
/// let orange = Rgb::from_hex("f80").unwrap();
/// assert_eq!(rgb_to_ansi256((orange.r, orange.g, orange.b)), 208);
///
/// // `#777777` lands on the gray ramp
/// assert_eq!(rgb_to_ansi256((0x77, 0x77, 0x77)), 242);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => CUBE_BASE,
            249..=255 => CUBE_WHITE,
            level => GRAY_BASE + ((u16::from(level) - 8) * 24 / 247) as u8,
        };
    }

    let level = |c: u8| (u16::from(c) * 5 / 255) as u8;
    CUBE_BASE + 36 * level(r) + 6 * level(g) + level(b)
}

/// The text a JSON value substitutes as: strings unquoted, `null` empty,
/// everything else in compact JSON form.
pub(crate) fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Looks up a dotted variable name (`player.name`, `tags.0`) in a JSON
/// document. Numeric parts index arrays.
pub(crate) fn resolve_json_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |node, part| match node {
        Value::Object(map) => map.get(part),
        Value::Array(items) => part.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Flattens a JSON value into dotted-path keys.
///
/// Nested objects and arrays contribute one key per leaf (`user.name`,
/// `items.0`). Containers are also recorded under their own path as JSON,
/// so both `{items}` and `{items.0}` resolve. `null` leaves are skipped.
pub fn flatten_json(value: &Value) -> BTreeMap<String, String> {
    let mut acc = BTreeMap::new();
    flatten_recursive(value, "", &mut acc);
    acc
}

fn flatten_recursive(value: &Value, prefix: &str, acc: &mut BTreeMap<String, String>) {
    let child = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    };

    match value {
        Value::Null => {}
        Value::Object(map) => {
            if !prefix.is_empty() {
                acc.insert(prefix.to_string(), value.to_string());
            }
            for (key, nested) in map {
                flatten_recursive(nested, &child(key), acc);
            }
        }
        Value::Array(items) => {
            if !prefix.is_empty() {
                acc.insert(prefix.to_string(), value.to_string());
            }
            for (index, nested) in items.iter().enumerate() {
                flatten_recursive(nested, &child(&index.to_string()), acc);
            }
        }
        scalar => {
            let key = if prefix.is_empty() { "value" } else { prefix };
            acc.insert(key.to_string(), json_text(scalar));
        }
    }
}
