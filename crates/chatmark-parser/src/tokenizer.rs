//! Character-level tokenizer.
//!
//! Braces are matched once up front (see [`crate::braces`]) and the input is
//! split around links (see [`crate::url`]). Each markup piece is then
//! scanned code point by code point. Scanning is a pure [`step`] function:
//! given the input and a position it returns the next position and either
//! one plain character or one token. The [`Tokenizer`] iterator only
//! accumulates plain characters into text runs.

use std::ops::Range;

use crate::braces::BraceMap;
use crate::token::{is_legacy_code, Token, ESCAPE};
use crate::url::{split_urls, Piece};

/// Minimum number of hex digits for a `#` color.
const HEX_SHORT: usize = 3;
/// Maximum number of hex digits for a `#` color.
const HEX_LONG: usize = 6;

/// Tokenizes `input` into an ordered list of tokens.
///
/// Never fails: malformed markup degrades to literal text.
///
/// # Example
///
/// ```rust
/// use chatmark_parser::{tokenize, Token};
///
/// let tokens = tokenize("Hi {name}&a!");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Text("Hi ".into()),
///         Token::Variable("name".into()),
///         Token::LegacyColor('a'),
///         Token::Text("!".into()),
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(input).collect()
}

/// Input code points together with their brace matches.
#[derive(Debug, Clone, Default)]
pub(crate) struct Markup {
    chars: Vec<char>,
    braces: BraceMap,
}

impl Markup {
    pub(crate) fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let braces = BraceMap::new(&chars);
        Self { chars, braces }
    }

    fn collect(&self, range: Range<usize>) -> String {
        self.chars[range].iter().collect()
    }
}

/// Outcome of a single scan step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    /// A character that extends the current text run. Escapes and failed
    /// triggers produce these too.
    Char(char),
    /// A structural token.
    Emit(Token),
}

/// Scans one unit starting at `pos`.
///
/// Returns the position after the unit and what it produced. `pos` must be
/// in bounds.
pub(crate) fn step(markup: &Markup, pos: usize) -> (usize, Step) {
    let chars = &markup.chars;
    match chars[pos] {
        '{' => scan_variable(markup, pos),
        ESCAPE => scan_legacy(chars, pos),
        '#' => scan_hex(chars, pos),
        c => (pos + 1, Step::Char(c)),
    }
}

fn scan_variable(markup: &Markup, start: usize) -> (usize, Step) {
    let Some(close) = markup.braces.close(start) else {
        return (start + 1, Step::Char('{'));
    };

    let chars = &markup.chars;
    let mut body = String::with_capacity(close - start);
    let mut i = start + 1;

    while i < close {
        let c = chars[i];
        if c == ESCAPE {
            match (chars.get(i + 1), chars.get(i + 2)) {
                // &{ or &}: literal brace, nesting untouched
                (Some(&(brace @ ('{' | '}'))), _) => {
                    body.push(brace);
                    i += 2;
                    continue;
                }
                // &&{ or &&}: literal escape, the brace is scanned normally
                (Some(&ESCAPE), Some(&('{' | '}'))) => {
                    body.push(ESCAPE);
                    i += 2;
                    continue;
                }
                _ => {}
            }
        }
        body.push(c);
        i += 1;
    }

    let name = body.trim().to_string();
    (close + 1, Step::Emit(Token::Variable(name)))
}

fn scan_legacy(chars: &[char], start: usize) -> (usize, Step) {
    let Some(next) = chars.get(start + 1) else {
        return (start + 1, Step::Char(ESCAPE));
    };

    match next.to_ascii_lowercase() {
        c @ ('{' | '}' | '#' | ESCAPE) => (start + 2, Step::Char(c)),
        c if is_legacy_code(c) => (start + 2, Step::Emit(Token::LegacyColor(c))),
        _ => (start + 1, Step::Char(ESCAPE)),
    }
}

fn scan_hex(chars: &[char], start: usize) -> (usize, Step) {
    let digits: String = chars[start + 1..]
        .iter()
        .take_while(|c| c.is_ascii_hexdigit())
        .take(HEX_LONG)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match digits.len() {
        n if n < HEX_SHORT => (start + 1, Step::Char('#')),
        HEX_LONG => (start + 1 + HEX_LONG, Step::Emit(Token::HexColor(digits))),
        _ => {
            let doubled = digits
                .chars()
                .take(HEX_SHORT)
                .flat_map(|c| [c, c])
                .collect();
            (start + 1 + HEX_SHORT, Step::Emit(Token::HexColor(doubled)))
        }
    }
}

/// Streaming tokenizer over a markup string.
///
/// Yields the same tokens as [`tokenize`], one at a time. Work is linear in
/// the length of the input.
pub struct Tokenizer {
    markup: Markup,
    pieces: std::vec::IntoIter<Piece>,
    /// Unscanned part of the current markup piece.
    cursor: Range<usize>,
    text: String,
    queued: Option<Token>,
}

impl Tokenizer {
    /// Creates a tokenizer over `input`.
    pub fn new(input: &str) -> Self {
        let markup = Markup::new(input);
        let pieces = split_urls(&markup.chars, &markup.braces).into_iter();
        Self {
            markup,
            pieces,
            cursor: 0..0,
            text: String::new(),
            queued: None,
        }
    }

    /// Returns pending text first and queues `token` behind it.
    fn emit(&mut self, token: Token) -> Token {
        if self.text.is_empty() {
            token
        } else {
            self.queued = Some(token);
            Token::Text(std::mem::take(&mut self.text))
        }
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.queued.take() {
            return Some(token);
        }

        loop {
            while self.cursor.start < self.cursor.end {
                let (next, outcome) = step(&self.markup, self.cursor.start);
                self.cursor.start = next;
                match outcome {
                    Step::Char(c) => self.text.push(c),
                    Step::Emit(token) => return Some(self.emit(token)),
                }
            }

            match self.pieces.next() {
                Some(Piece::Markup(range)) => self.cursor = range,
                Some(Piece::Url(range)) => {
                    let url = Token::Url(self.markup.collect(range));
                    return Some(self.emit(url));
                }
                None if self.text.is_empty() => return None,
                None => return Some(Token::Text(std::mem::take(&mut self.text))),
            }
        }
    }
}
