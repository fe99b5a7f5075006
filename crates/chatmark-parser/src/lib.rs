//! Tokenizer for chatmark, a small markup dialect for styled chat text.
//!
//! This crate turns raw markup into an ordered list of [`Token`]s and parses
//! function-shaped variable bodies. Compiling and rendering live in
//! `chatmark-render`.
//!
//! # Syntax
//!
//! | Markup | Meaning |
//! |--------|---------|
//! | `{name}` | variable reference; braces may nest |
//! | `{name(a,"b,c")}` | function call |
//! | `&a`, `&l`, `&r` | legacy color, format or reset code |
//! | `#f80`, `#ff8800` | hex color |
//! | `&{`, `&}`, `&&`, `&#` | literal `{`, `}`, `&`, `#` |
//! | `https://...` | link, runs to the next whitespace; kept inside a closed `{...}` |
//!
//! Malformed markup is never an error: an unclosed `{`, an unknown `&x` or a
//! short `#12` is kept as literal text.
//!
//! # Example
//!
//! ```rust
//! use chatmark_parser::{tokenize, Token};
//!
//! let tokens = tokenize("aaa{a{a}a}aaa");
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Text("aaa".into()),
//!         Token::Variable("a{a}a".into()),
//!         Token::Text("aaa".into()),
//!     ]
//! );
//! ```

mod braces;
mod error;
mod function;
mod token;
mod tokenizer;
mod url;

pub use error::ParseError;
pub use function::{parse_function, FunctionCall, ARG_ESCAPE};
pub use token::{is_legacy_code, Token, ESCAPE, LEGACY_CODES};
pub use tokenizer::{tokenize, Tokenizer};
