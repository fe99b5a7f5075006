//! Function-call sub-parser for variable bodies shaped like `name(a,b)`.
//!
//! # Argument Syntax
//!
//! - Arguments are separated by commas; `name()` is the only call with no
//!   arguments.
//! - Outside quotes whitespace is dropped and `)` ends the call. Anything
//!   after it is ignored.
//! - `"` toggles a quoted region where `,` and `)` are ordinary characters.
//!   The quotes themselves are not part of the argument.
//! - `\` makes the next character literal, inside or outside quotes.

use std::fmt;

use crate::error::ParseError;

/// Escape character inside argument lists.
pub const ARG_ESCAPE: char = '\\';

/// A parsed `name(args...)` reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionCall {
    /// Function name with whitespace removed.
    pub name: String,
    /// Arguments in call order.
    pub args: Vec<String>,
}

impl fmt::Display for FunctionCall {
    /// Writes the call back as `name(a,b)`, the form used for placeholders.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.args.join(","))
    }
}

/// Parses a variable body as a function call.
///
/// # Errors
///
/// Returns [`ParseError::NotAFunction`] if `inner` contains no `(`.
///
/// # Example
///
/// ```rust
/// use chatmark_parser::parse_function;
///
/// let call = parse_function(r#"aaa("b,)b",ccc)"#).unwrap();
/// assert_eq!(call.name, "aaa");
/// assert_eq!(call.args, vec!["b,)b", "ccc"]);
/// ```
pub fn parse_function(inner: &str) -> Result<FunctionCall, ParseError> {
    let open = inner
        .find('(')
        .ok_or_else(|| ParseError::NotAFunction(inner.to_string()))?;

    let name = inner[..open].chars().filter(|c| !c.is_whitespace()).collect();

    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    // Set once anything argument-shaped appears, so `name()` stays empty
    // while `name("")` yields one empty argument.
    let mut started = false;

    let mut chars = inner[open + 1..].chars();
    while let Some(c) = chars.next() {
        match c {
            ARG_ESCAPE => {
                current.push(chars.next().unwrap_or(ARG_ESCAPE));
                started = true;
            }
            '"' => {
                in_quotes = !in_quotes;
                started = true;
            }
            _ if in_quotes => current.push(c),
            ',' => {
                args.push(std::mem::take(&mut current));
                started = true;
            }
            ')' => break,
            c if c.is_whitespace() => {}
            _ => {
                current.push(c);
                started = true;
            }
        }
    }

    if started {
        args.push(current);
    }

    Ok(FunctionCall { name, args })
}
