//! Token types produced by the tokenizer.

/// Escape character for the markup dialect.
///
/// `&{`, `&}`, `&&` and `&#` stand for the literal second character, and
/// inside a variable body `&` in front of a brace cancels its nesting effect.
pub const ESCAPE: char = '&';

/// Every legacy code accepted after `&`, in table order.
///
/// `0`-`9` and `a`-`f` select one of the 16 colors, `k` `l` `m` `n` `o`
/// toggle obfuscated, bold, strikethrough, underline and italic, and `r`
/// resets everything.
pub const LEGACY_CODES: [char; 22] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'k', 'l', 'm',
    'n', 'o', 'r',
];

/// Returns true if `code` (already lowercased) is in the legacy table.
pub fn is_legacy_code(code: char) -> bool {
    LEGACY_CODES.contains(&code)
}

/// A single lexical unit of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text, with escapes already resolved.
    Text(String),
    /// Trimmed body of a `{...}` reference. May be function-shaped.
    Variable(String),
    /// Lowercase legacy code following `&`.
    LegacyColor(char),
    /// Six lowercase hex digits.
    HexColor(String),
    /// A `http://` or `https://` link, kept verbatim.
    Url(String),
}

impl Token {
    /// Returns true for [`Token::Text`].
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }
}
