//! Compiled templates.
//!
//! Compile once, render many times. A [`Template`] renders to a flat string,
//! a [`StyledTemplate`] renders to styled segments. Both are immutable and
//! may be shared freely between threads.
//!
//! ```rust
//! use chatmark_render::{compile, Template, Variables};
//!
//! let welcome = compile("&6Welcome, {player}!");
//! assert!(!welcome.is_static());
//!
//! let vars = Variables::new().set("player", "Alex");
//! assert_eq!(welcome.render(&vars), "§6Welcome, Alex!");
//!
//! // Unbound names render as their placeholder.
//! assert_eq!(welcome.render(&Variables::new()), "§6Welcome, {player}!");
//!
//! let motd = Template::compile("&aServer is up");
//! assert_eq!(motd.as_static(), Some("§aServer is up"));
//! ```

use chatmark_parser::Tokenizer;

use crate::bindings::{Bindings, SegmentBindings, SegmentFunctions};
use crate::compiler;
use crate::node::Node;
use crate::render::{render_flat, render_styled};
use crate::style::StyledSegment;

/// Compiled form of a flat template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledTemplate {
    /// Fully rendered text.
    Static(String),
    /// Nodes with at least one variable or function reference.
    Dynamic(Vec<Node>),
}

impl CompiledTemplate {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            CompiledTemplate::Static(_) => "static",
            CompiledTemplate::Dynamic(_) => "dynamic",
        }
    }

    pub(crate) fn node_count(&self) -> usize {
        match self {
            CompiledTemplate::Static(_) => 1,
            CompiledTemplate::Dynamic(nodes) => nodes.len(),
        }
    }
}

/// Compiled form of a styled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledSegments {
    /// Segments rendered at compile time.
    Static(Vec<StyledSegment>),
    /// Nodes with at least one variable or function reference.
    Dynamic(Vec<Node>),
}

impl CompiledSegments {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            CompiledSegments::Static(_) => "static",
            CompiledSegments::Dynamic(_) => "dynamic",
        }
    }
}

/// A template rendered to flat text with `§` codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    compiled: CompiledTemplate,
}

impl Template {
    /// Tokenizes and compiles `source`. Never fails.
    pub fn compile(source: &str) -> Self {
        Self {
            source: source.to_string(),
            compiled: compiler::compile_flat(Tokenizer::new(source)),
        }
    }

    /// The markup this template was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn compiled(&self) -> &CompiledTemplate {
        &self.compiled
    }

    /// Returns true if rendering does no per-call work.
    pub fn is_static(&self) -> bool {
        matches!(self.compiled, CompiledTemplate::Static(_))
    }

    /// The precomputed text of a static template.
    pub fn as_static(&self) -> Option<&str> {
        match &self.compiled {
            CompiledTemplate::Static(text) => Some(text),
            CompiledTemplate::Dynamic(_) => None,
        }
    }

    /// Renders the template against `bindings`.
    ///
    /// Unbound variables render as `{name}` and unbound functions as
    /// `{name(a,b)}`.
    pub fn render<B: Bindings + ?Sized>(&self, bindings: &B) -> String {
        match &self.compiled {
            CompiledTemplate::Static(text) => text.clone(),
            CompiledTemplate::Dynamic(nodes) => render_flat(nodes, bindings),
        }
    }
}

/// A template rendered to styled segments.
///
/// ```rust
/// use chatmark_render::{compile_styled, to_plain, StyledFunctions, StyledVariables};
///
/// let template = compile_styled("&e{name} &7joined. {command([wave],/wave)}");
/// let vars = StyledVariables::new().set("name", "Alex");
/// let segments = template.render(&vars, &StyledFunctions::standard());
///
/// assert_eq!(to_plain(&segments), "Alex joined. [wave]");
/// assert!(segments.last().unwrap().click.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledTemplate {
    source: String,
    compiled: CompiledSegments,
}

impl StyledTemplate {
    /// Tokenizes and compiles `source`. Never fails.
    pub fn compile(source: &str) -> Self {
        Self {
            source: source.to_string(),
            compiled: compiler::compile_segments(Tokenizer::new(source)),
        }
    }

    /// The markup this template was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn compiled(&self) -> &CompiledSegments {
        &self.compiled
    }

    /// Returns true if the segments were rendered at compile time.
    pub fn is_static(&self) -> bool {
        matches!(self.compiled, CompiledSegments::Static(_))
    }

    /// Renders the template. Every call returns fresh segments.
    pub fn render<V, F>(&self, vars: &V, funcs: &F) -> Vec<StyledSegment>
    where
        V: SegmentBindings + ?Sized,
        F: SegmentFunctions + ?Sized,
    {
        match &self.compiled {
            CompiledSegments::Static(segments) => segments.clone(),
            CompiledSegments::Dynamic(nodes) => render_styled(nodes, vars, funcs),
        }
    }
}

/// Compiles a flat template. Shorthand for [`Template::compile`].
pub fn compile(source: &str) -> Template {
    Template::compile(source)
}

/// Compiles a styled template. Shorthand for [`StyledTemplate::compile`].
pub fn compile_styled(source: &str) -> StyledTemplate {
    StyledTemplate::compile(source)
}
