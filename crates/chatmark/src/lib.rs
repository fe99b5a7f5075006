//! chatmark: styled chat markup.
//!
//! Write `&aGreen {player} &lbold #ff8800orange https://example.com` once,
//! compile it, and render it as often as needed:
//!
//! - to flat text with `§` codes ([`Template`]);
//! - to styled segments ([`StyledTemplate`]) carrying colors, format flags
//!   and click or hover actions, which convert to plain text, `§` codes,
//!   ANSI escapes or chat-component JSON.
//!
//! This crate re-exports `chatmark-parser` and `chatmark-render` and ships the
//! `chatmark` binary (see [`cli`]).
//!
//! # Example
//!
//! ```rust
//! use chatmark::{compile, compile_styled, to_json, StyledFunctions, Variables};
//!
//! let join = compile("&e{player} joined the game");
//! let vars = Variables::new().set("player", "Steve");
//! assert_eq!(join.render(&vars), "§eSteve joined the game");
//!
//! let help = compile_styled("&7Need help? {command(\"click here\",/help)}");
//! let segments = help.render(&(), &StyledFunctions::standard());
//! let json = to_json(&segments);
//! assert_eq!(json["extra"][1]["clickEvent"]["value"], "/help");
//! ```

pub mod cli;

pub use chatmark_parser::{
    is_legacy_code, parse_function, tokenize, FunctionCall, ParseError, Token, Tokenizer,
    ARG_ESCAPE, ESCAPE, LEGACY_CODES,
};
pub use chatmark_render::{
    compile, compile_flat, compile_segments, compile_styled, flatten_json, functions, output,
    rgb_to_ansi256, standard_functions, style, to_ansi, to_json, to_json_string,
    to_json_string_pretty, to_legacy, to_plain, Bindings, ClickAction, Color, ColorChoice,
    CompiledSegments, CompiledTemplate, FunctionFn, NamedColor, Node, Plain, Rgb,
    SegmentBindings, SegmentFn, SegmentFunctionFn, SegmentFunctions, SegmentValue, Style,
    StyledFunctions, StyledSegment, StyledTemplate, StyledVariables, Template, TextFn, Value,
    Variables,
};
