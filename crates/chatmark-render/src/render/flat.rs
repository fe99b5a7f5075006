use std::cell::RefCell;

use crate::bindings::Bindings;
use crate::node::{write_function_placeholder, write_variable_placeholder, Node};
use crate::style::Color;

/// Scratch buffers larger than this are released after a render.
const MAX_RETAINED_CAPACITY: usize = 64 * 1024;

thread_local! {
    static SCRATCH: RefCell<String> = RefCell::new(String::with_capacity(256));
}

/// Renders nodes to a string.
///
/// Uses a per-thread scratch buffer. A binding that renders another template
/// from inside this call finds the buffer borrowed and gets a fresh one.
pub(crate) fn render_flat<B: Bindings + ?Sized>(nodes: &[Node], bindings: &B) -> String {
    SCRATCH.with(|cell| match cell.try_borrow_mut() {
        Ok(mut buf) => {
            buf.clear();
            write_nodes(nodes, bindings, &mut buf);
            let out = buf.as_str().to_owned();
            if buf.capacity() > MAX_RETAINED_CAPACITY {
                *buf = String::new();
            }
            out
        }
        Err(_) => {
            tracing::trace!("scratch buffer in use, rendering into a fresh one");
            let mut buf = String::new();
            write_nodes(nodes, bindings, &mut buf);
            buf
        }
    })
}

fn write_nodes<B: Bindings + ?Sized>(nodes: &[Node], bindings: &B, out: &mut String) {
    for node in nodes {
        match node {
            Node::StaticText(text) | Node::Link(text) => out.push_str(text),
            Node::Variable(name) => {
                if !bindings.write_variable(name, out) {
                    write_variable_placeholder(name, out);
                }
            }
            Node::Function(call) => {
                if !bindings.write_function(&call.name, &call.args, out) {
                    write_function_placeholder(call, out);
                }
            }
            Node::LegacyColor(code) => code.write_legacy(out),
            Node::HexColor(rgb) => Color::Rgb(*rgb).write_legacy(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::Variables;
    use crate::compile;
    use crate::style::{LegacyCode, Rgb};
    use chatmark_parser::FunctionCall;

    #[test]
    fn walks_every_node_kind() {
        let nodes = vec![
            Node::LegacyColor(LegacyCode::Reset),
            Node::StaticText("a".into()),
            Node::HexColor(Rgb::new(0x11, 0x22, 0x33)),
            Node::Variable("v".into()),
            Node::Function(FunctionCall {
                name: "f".into(),
                args: vec!["x".into()],
            }),
            Node::Link("https://l".into()),
        ];
        let vars = Variables::new().set("v", "V");
        assert_eq!(
            render_flat(&nodes, &vars),
            "§ra§x§1§1§2§2§3§3V{f(x)}https://l"
        );
    }

    #[test]
    fn reentrant_render_gets_its_own_buffer() {
        let inner = compile("[{x}]");
        let vars = Variables::new().function("nested", move |args: &[String]| {
            let vars = Variables::new().set("x", args.concat());
            inner.render(&vars)
        });

        let outer = compile("a{nested(b)}c");
        assert_eq!(outer.render(&vars), "a[b]c");
    }

    #[test]
    fn large_output_is_returned_whole() {
        let big = "x".repeat(MAX_RETAINED_CAPACITY * 2);
        let vars = Variables::new().set("big", big.clone());
        let out = compile("{big}!").render(&vars);
        assert_eq!(out.len(), big.len() + 1);
        // Buffer was released; the next render still works.
        assert_eq!(compile("{big}").render(&Variables::new()), "{big}");
    }
}
