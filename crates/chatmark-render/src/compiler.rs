//! Lowers tokens into nodes and classifies the result.
//!
//! Both compile targets share one lowering pass; they differ in what happens
//! to colors and links:
//!
//! | Token | Flat | Styled |
//! |-------|------|--------|
//! | `Text` | `StaticText` | `StaticText` |
//! | `Variable` | `Variable` or `Function` | `Variable` or `Function` |
//! | `LegacyColor` | `§c` text | `LegacyColor` |
//! | `HexColor` | `§x§r§r§g§g§b§b` text | `HexColor` |
//! | `Url` | text | `Link` |
//!
//! Adjacent text always merges, so a flat template without references
//! collapses into one string.

use chatmark_parser::{parse_function, Token};

use crate::node::Node;
use crate::render::render_styled;
use crate::style::{Color, LegacyCode, Rgb};
use crate::template::{CompiledSegments, CompiledTemplate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Flat,
    Styled,
}

/// Compiles tokens for the flat renderer.
///
/// Yields [`CompiledTemplate::Static`] unless a variable or function
/// reference remains.
///
/// ```rust
/// use chatmark_parser::tokenize;
/// use chatmark_render::{compile_flat, CompiledTemplate};
///
/// let compiled = compile_flat(tokenize("&aHi #f80there"));
/// assert_eq!(compiled, CompiledTemplate::Static("§aHi §x§f§f§8§8§0§0there".into()));
/// ```
pub fn compile_flat(tokens: impl IntoIterator<Item = Token>) -> CompiledTemplate {
    let mut nodes = lower(tokens, Target::Flat);

    let compiled = if nodes.iter().any(|n| !n.is_static_text()) {
        CompiledTemplate::Dynamic(nodes)
    } else {
        // Merging leaves at most one text node.
        match nodes.pop() {
            Some(Node::StaticText(text)) => CompiledTemplate::Static(text),
            _ => CompiledTemplate::Static(String::new()),
        }
    };

    tracing::trace!(
        kind = compiled.kind(),
        nodes = compiled.node_count(),
        "compiled flat template"
    );
    compiled
}

/// Compiles tokens for the styled renderer.
///
/// Without variable or function references the segments are rendered here,
/// once, and every later render returns a copy.
pub fn compile_segments(tokens: impl IntoIterator<Item = Token>) -> CompiledSegments {
    let nodes = lower(tokens, Target::Styled);

    let compiled = if nodes.iter().any(Node::is_binding) {
        CompiledSegments::Dynamic(nodes)
    } else {
        CompiledSegments::Static(render_styled(&nodes, &(), &()))
    };

    tracing::trace!(kind = compiled.kind(), "compiled styled template");
    compiled
}

fn lower(tokens: impl IntoIterator<Item = Token>, target: Target) -> Vec<Node> {
    let mut nodes = Vec::new();

    for token in tokens {
        match token {
            Token::Text(text) => push_text(&mut nodes, &text),
            Token::Variable(body) => nodes.push(variable_node(body)),
            Token::LegacyColor(c) => match LegacyCode::from_char(c) {
                Some(code) if target == Target::Flat => {
                    let mut text = String::with_capacity(3);
                    code.write_legacy(&mut text);
                    push_text(&mut nodes, &text);
                }
                Some(code) => nodes.push(Node::LegacyColor(code)),
                None => {
                    tracing::debug!(code = %c, "unknown legacy code kept as text");
                    push_text(&mut nodes, &format!("&{}", c));
                }
            },
            Token::HexColor(hex) => match Rgb::from_hex(&hex) {
                Some(rgb) if target == Target::Flat => {
                    let mut text = String::with_capacity(21);
                    Color::Rgb(rgb).write_legacy(&mut text);
                    push_text(&mut nodes, &text);
                }
                Some(rgb) => nodes.push(Node::HexColor(rgb)),
                None => {
                    tracing::debug!(%hex, "malformed hex color kept as text");
                    push_text(&mut nodes, &format!("#{}", hex));
                }
            },
            Token::Url(url) => match target {
                Target::Flat => push_text(&mut nodes, &url),
                Target::Styled => nodes.push(Node::Link(url)),
            },
        }
    }

    nodes
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if text.is_empty() {
        return;
    }
    match nodes.last_mut() {
        Some(Node::StaticText(last)) => last.push_str(text),
        _ => nodes.push(Node::StaticText(text.to_string())),
    }
}

fn variable_node(body: String) -> Node {
    if !body.contains('(') {
        return Node::Variable(body);
    }
    match parse_function(&body) {
        Ok(call) => Node::Function(call),
        Err(err) => {
            tracing::debug!(%err, "variable body is not a function call");
            Node::Variable(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatmark_parser::{tokenize, FunctionCall};
    use crate::style::{NamedColor, Style};

    fn text(s: &str) -> Node {
        Node::StaticText(s.to_string())
    }

    mod flat {
        use super::*;

        #[test]
        fn empty_is_static_empty() {
            assert_eq!(compile_flat(tokenize("")), CompiledTemplate::Static(String::new()));
        }

        #[test]
        fn plain_text_is_static() {
            assert_eq!(
                compile_flat(tokenize("hello")),
                CompiledTemplate::Static("hello".into())
            );
        }

        #[test]
        fn colors_lower_to_section_signs() {
            assert_eq!(
                compile_flat(tokenize("&cRed &lbold&r")),
                CompiledTemplate::Static("§cRed §lbold§r".into())
            );
        }

        #[test]
        fn hex_lowers_to_extended_form() {
            assert_eq!(
                compile_flat(tokenize("#abcdef!")),
                CompiledTemplate::Static("§x§a§b§c§d§e§f!".into())
            );
        }

        #[test]
        fn urls_lower_to_text() {
            assert_eq!(
                compile_flat(tokenize("see https://x.y/z now")),
                CompiledTemplate::Static("see https://x.y/z now".into())
            );
        }

        #[test]
        fn variable_makes_dynamic() {
            assert_eq!(
                compile_flat(tokenize("has {one}")),
                CompiledTemplate::Dynamic(vec![text("has "), Node::Variable("one".into())])
            );
        }

        #[test]
        fn text_merges_around_colors() {
            assert_eq!(
                compile_flat(tokenize("a&ab{x}c&rd")),
                CompiledTemplate::Dynamic(vec![
                    text("a§ab"),
                    Node::Variable("x".into()),
                    text("c§rd"),
                ])
            );
        }

        #[test]
        fn function_bodies_parse() {
            assert_eq!(
                compile_flat(tokenize("{foo(1, 2)}")),
                CompiledTemplate::Dynamic(vec![Node::Function(FunctionCall {
                    name: "foo".into(),
                    args: vec!["1".into(), "2".into()],
                })])
            );
        }

        #[test]
        fn tokens_outside_the_tokenizer_fall_back_to_text() {
            let compiled = compile_flat(vec![
                Token::LegacyColor('z'),
                Token::HexColor("12".into()),
            ]);
            assert_eq!(compiled, CompiledTemplate::Static("&z#12".into()));
        }
    }

    mod styled {
        use super::*;

        #[test]
        fn colors_only_is_static() {
            let compiled = compile_segments(tokenize("&aGreen &lBold"));
            let CompiledSegments::Static(segments) = compiled else {
                panic!("expected static segments");
            };
            assert_eq!(segments.len(), 2);
            assert_eq!(segments[0].text, "Green ");
            assert_eq!(segments[0].style, Style::new().color(NamedColor::Green));
            assert_eq!(segments[1].style, Style::new().color(NamedColor::Green).bold());
        }

        #[test]
        fn urls_become_links() {
            let compiled = compile_segments(tokenize("go {x} https://a.b"));
            assert_eq!(
                compiled,
                CompiledSegments::Dynamic(vec![
                    text("go "),
                    Node::Variable("x".into()),
                    text(" "),
                    Node::Link("https://a.b".into()),
                ])
            );
        }

        #[test]
        fn keeps_color_nodes() {
            let compiled = compile_segments(tokenize("&c#00ff00{n}"));
            assert_eq!(
                compiled,
                CompiledSegments::Dynamic(vec![
                    Node::LegacyColor(LegacyCode::Color(NamedColor::Red)),
                    Node::HexColor(Rgb::new(0, 255, 0)),
                    Node::Variable("n".into()),
                ])
            );
        }

        #[test]
        fn empty_is_static_and_empty() {
            assert_eq!(compile_segments(tokenize("")), CompiledSegments::Static(vec![]));
        }
    }
}
