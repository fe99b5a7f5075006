//! Property-based tests for chatmark-render using proptest.

use chatmark_render::{
    compile, compile_styled, to_plain, CompiledTemplate, Node, StyledVariables, Variables,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Markup without `{`, so it always compiles to a static template.
fn static_markup() -> impl Strategy<Value = String> {
    "[a-z &#0-9lrA-F!.:/]{0,40}"
}

/// Text with no `{`, `&` or `#`, including link-shaped runs.
fn trigger_free_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 .,!?:;/()éü漢]{0,60}",
        "[a-z ]{0,10}https?://[a-z./?=]{1,20}[ a-z]{0,10}",
    ]
}

/// Arbitrary markup drawn from the characters the tokenizer reacts to.
fn any_markup() -> impl Strategy<Value = String> {
    "[a-f0-9 {}&#()\",lrxyz]{0,40}"
}

fn ident() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Text without markup renders back to itself, whatever is bound.
    #[test]
    fn trigger_free_text_renders_unchanged(
        source in trigger_free_text(),
        name in ident(),
        value in ".{0,10}"
    ) {
        let template = compile(&source);
        prop_assert!(template.is_static());

        let vars = Variables::new().set(name.as_str(), value.as_str());
        prop_assert_eq!(template.render(&Variables::new()), source.clone());
        prop_assert_eq!(template.render(&vars), source.clone());

        let styled_vars = StyledVariables::new().set(name, value);
        let segments = compile_styled(&source).render(&styled_vars, &());
        prop_assert_eq!(to_plain(&segments), source);
    }

    /// Any markup without `{` compiles to a static template whose render
    /// ignores bindings.
    #[test]
    fn brace_free_markup_is_static(source in static_markup(), name in ident(), value in ".{0,10}") {
        let template = compile(&source);
        prop_assert!(template.is_static());

        let vars = Variables::new().set(name, value);
        prop_assert_eq!(template.render(&vars), template.render(&Variables::new()));
    }

    /// Compiling never panics, and dynamic templates keep their shape.
    #[test]
    fn compiled_nodes_are_well_formed(source in any_markup()) {
        match compile(&source).compiled() {
            CompiledTemplate::Static(_) => {}
            CompiledTemplate::Dynamic(nodes) => {
                prop_assert!(nodes.iter().any(|n| !n.is_static_text()));
                for pair in nodes.windows(2) {
                    prop_assert!(!(pair[0].is_static_text() && pair[1].is_static_text()));
                }
                for node in nodes {
                    if let Node::StaticText(text) = node {
                        prop_assert!(!text.is_empty());
                    }
                }
            }
        }
    }

    /// Rendering with nothing bound never panics and equals a second render.
    #[test]
    fn unbound_render_is_deterministic(source in any_markup()) {
        let template = compile(&source);
        prop_assert_eq!(template.render(&Variables::new()), template.render(&Variables::new()));

        let styled = compile_styled(&source);
        prop_assert_eq!(styled.render(&(), &()), styled.render(&(), &()));
    }

    /// A bound variable renders its value between surrounding text.
    #[test]
    fn variable_substitution(
        prefix in "[a-z ]{0,10}",
        name in ident(),
        value in "[a-zA-Z0-9 ]{0,20}"
    ) {
        let source = format!("{}{{{}}}", prefix, name);
        let vars = Variables::new().set(name.as_str(), value.as_str());
        prop_assert_eq!(compile(&source).render(&vars), format!("{}{}", prefix, value));

        let styled_vars = StyledVariables::new().set(name.as_str(), value.as_str());
        let segments = compile_styled(&source).render(&styled_vars, &());
        prop_assert_eq!(to_plain(&segments), format!("{}{}", prefix, value));
    }
}
