use serde::Serialize;

use crate::style::StyledSegment;

#[derive(Serialize)]
struct Root<'a> {
    text: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extra: Vec<Component<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Component<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    underlined: bool,
    #[serde(skip_serializing_if = "is_false")]
    strikethrough: bool,
    #[serde(skip_serializing_if = "is_false")]
    obfuscated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    click_event: Option<ClickEvent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hover_event: Option<HoverEvent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    insertion: Option<&'a str>,
}

#[derive(Serialize)]
struct ClickEvent<'a> {
    action: &'static str,
    value: &'a str,
}

#[derive(Serialize)]
struct HoverEvent<'a> {
    action: &'static str,
    contents: &'a str,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl<'a> From<&'a StyledSegment> for Component<'a> {
    fn from(segment: &'a StyledSegment) -> Self {
        let style = &segment.style;
        Component {
            text: &segment.text,
            color: style.color.map(|c| c.json_name()),
            bold: style.bold,
            italic: style.italic,
            underlined: style.underlined,
            strikethrough: style.strikethrough,
            obfuscated: style.obfuscated,
            click_event: segment.click.as_ref().map(|action| ClickEvent {
                action: action.action_name(),
                value: action.value(),
            }),
            hover_event: segment.hover.as_deref().map(|contents| HoverEvent {
                action: "show_text",
                contents,
            }),
            insertion: segment.insertion.as_deref(),
        }
    }
}

/// Builds a chat component: an empty root whose `extra` list holds one
/// component per segment.
///
/// ```rust
/// use chatmark_render::{compile_styled, to_json};
/// use serde_json::json;
///
/// let segments = compile_styled("&lhi").render(&(), &());
/// assert_eq!(
///     to_json(&segments),
///     json!({"text": "", "extra": [{"text": "hi", "bold": true}]})
/// );
/// ```
pub fn to_json(segments: &[StyledSegment]) -> serde_json::Value {
    serde_json::to_value(root(segments)).unwrap_or(serde_json::Value::Null)
}

/// Like [`to_json`], serialized to a compact string.
pub fn to_json_string(segments: &[StyledSegment]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&root(segments))
}

/// Like [`to_json_string`], indented for reading. Fields keep the order
/// `text`, `extra`, then the style and event fields.
pub fn to_json_string_pretty(segments: &[StyledSegment]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&root(segments))
}

fn root(segments: &[StyledSegment]) -> Root<'_> {
    Root {
        text: "",
        extra: segments.iter().map(Component::from).collect(),
    }
}
