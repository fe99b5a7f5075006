//! Compile-once, render-many templates for chatmark markup.
//!
//! Markup is tokenized by `chatmark-parser`, lowered into [`Node`]s and
//! classified once. Rendering then only walks what is left.
//!
//! Two renderers share the compiler:
//!
//! - **Flat** ([`Template`]): renders to a string. Colors become `§` codes,
//!   so a template without `{...}` references compiles to its final text.
//! - **Styled** ([`StyledTemplate`]): renders to [`StyledSegment`]s, each a
//!   run of text with one style and optional click, hover and insertion
//!   data. The [`output`] helpers turn segments into plain text, legacy
//!   codes, terminal escapes or chat-component JSON.
//!
//! # Example
//!
//! ```rust
//! use chatmark_render::{compile, compile_styled, to_plain, StyledVariables, Variables};
//!
//! let flat = compile("&a{player} &7joined");
//! let vars = Variables::new().set("player", "Steve");
//! assert_eq!(flat.render(&vars), "§aSteve §7joined");
//!
//! let styled = compile_styled("&a{player} &7joined");
//! let vars = StyledVariables::new().set("player", "Steve");
//! let segments = styled.render(&vars, &());
//! assert_eq!(segments.len(), 3);
//! assert_eq!(to_plain(&segments), "Steve joined");
//! ```
//!
//! # Bindings
//!
//! Templates never own data. Pass a [`Bindings`] implementation for flat
//! rendering, or [`SegmentBindings`] and [`SegmentFunctions`] for styled
//! rendering. Unresolved names render as `{name}` or `{name(a,b)}`.
//!
//! # Threads
//!
//! Compiled templates are immutable and `Send + Sync`; share them behind an
//! `Arc` or a `static` and render from any number of threads.

mod bindings;
mod compiler;
pub mod functions;
mod node;
pub mod output;
mod render;
pub mod style;
mod template;
mod util;

pub use bindings::{
    Bindings, FunctionFn, Plain, SegmentBindings, SegmentFn, SegmentFunctionFn, SegmentFunctions,
    SegmentValue, StyledFunctions, StyledVariables, TextFn, Value, Variables,
};
pub use compiler::{compile_flat, compile_segments};
pub use functions::standard_functions;
pub use node::Node;
pub use output::{
    to_ansi, to_json, to_json_string, to_json_string_pretty, to_legacy, to_plain, ColorChoice,
};
pub use style::{ClickAction, Color, NamedColor, Rgb, Style, StyledSegment};
pub use template::{
    compile, compile_styled, CompiledSegments, CompiledTemplate, StyledTemplate, Template,
};
pub use util::{flatten_json, rgb_to_ansi256};

pub use chatmark_parser::{FunctionCall, ParseError};
