//! Compiled template nodes.

use std::fmt::Write;

use chatmark_parser::FunctionCall;

use crate::style::{LegacyCode, Rgb};

/// One element of a compiled template.
///
/// Nodes are immutable once compiled. In a compiled sequence a
/// [`Node::StaticText`] is never empty and never next to another one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    StaticText(String),
    /// Plain `{name}` substitution.
    Variable(String),
    /// `{name(args...)}` call with arguments fixed at compile time.
    Function(FunctionCall),
    LegacyColor(LegacyCode),
    HexColor(Rgb),
    /// A link; only styled templates keep these, flat ones inline the URL.
    Link(String),
}

impl Node {
    /// Returns true for [`Node::StaticText`].
    pub fn is_static_text(&self) -> bool {
        matches!(self, Node::StaticText(_))
    }

    /// Returns true for nodes resolved through caller bindings at render time.
    pub fn is_binding(&self) -> bool {
        matches!(self, Node::Variable(_) | Node::Function(_))
    }
}

/// Appends the `{name}` placeholder for an unresolved variable.
pub(crate) fn write_variable_placeholder(name: &str, out: &mut String) {
    out.push('{');
    out.push_str(name);
    out.push('}');
}

/// Appends the `{name(a,b)}` placeholder for an unresolved function.
pub(crate) fn write_function_placeholder(call: &FunctionCall, out: &mut String) {
    // Writing into a String cannot fail.
    let _ = write!(out, "{{{}}}", call);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders() {
        let mut out = String::new();
        write_variable_placeholder("player", &mut out);
        assert_eq!(out, "{player}");

        let call = FunctionCall {
            name: "foo".into(),
            args: vec!["1".into(), "2".into()],
        };
        let mut out = String::new();
        write_function_placeholder(&call, &mut out);
        assert_eq!(out, "{foo(1,2)}");
    }

    #[test]
    fn node_kinds() {
        assert!(Node::StaticText("x".into()).is_static_text());
        assert!(Node::Variable("x".into()).is_binding());
        assert!(Node::Function(FunctionCall::default()).is_binding());
        assert!(!Node::LegacyColor(LegacyCode::Reset).is_binding());
        assert!(!Node::Link("http://x".into()).is_static_text());
    }
}
