use crate::bindings::{SegmentBindings, SegmentFunctions};
use crate::node::{write_function_placeholder, write_variable_placeholder, Node};
use crate::style::{ClickAction, Color, Style, StyledSegment};

/// Renders nodes to segments.
///
/// Color nodes update a running style. Every text, variable, function and
/// link node emits one segment carrying a copy of it.
pub(crate) fn render_styled<V, F>(nodes: &[Node], vars: &V, funcs: &F) -> Vec<StyledSegment>
where
    V: SegmentBindings + ?Sized,
    F: SegmentFunctions + ?Sized,
{
    let mut style = Style::default();
    let mut segments = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            Node::StaticText(text) => segments.push(StyledSegment::new(text.as_str(), style)),
            Node::Variable(name) => {
                let mut segment = StyledSegment::new("", style);
                if !vars.apply_variable(name, &mut segment) {
                    segment = StyledSegment::new("", style);
                    write_variable_placeholder(name, &mut segment.text);
                }
                segments.push(segment);
            }
            Node::Function(call) => {
                let mut segment = StyledSegment::new("", style);
                if !funcs.apply_function(&call.name, &call.args, &mut segment) {
                    segment = StyledSegment::new("", style);
                    write_function_placeholder(call, &mut segment.text);
                }
                segments.push(segment);
            }
            Node::Link(url) => segments.push(
                StyledSegment::new(url.as_str(), style)
                    .with_click(ClickAction::OpenUrl(url.clone())),
            ),
            Node::LegacyColor(code) => style.apply_code(*code),
            Node::HexColor(rgb) => style.color = Some(Color::Rgb(*rgb)),
        }
    }

    segments
}
