//! URL pre-extraction.
//!
//! Links routinely contain `&` and `#`, so they are cut out of the input
//! before the character-level pass ever sees them. A link written inside a
//! closed `{...}` body stays part of that body, so function arguments such
//! as `{link(Docs,https://docs.rs)}` keep their URL.

use std::ops::Range;

use crate::braces::BraceMap;
use crate::token::ESCAPE;

const URL_PREFIXES: [&str; 2] = ["http://", "https://"];

/// A code-point range of the input, either markup to scan or a link to keep
/// whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece {
    Markup(Range<usize>),
    Url(Range<usize>),
}

/// Splits `chars` into markup and link pieces, in order.
///
/// A link starts at `http://` or `https://` outside any closed variable body
/// and runs to the next whitespace character or the end of input. Empty
/// markup pieces are dropped.
pub(crate) fn split_urls(chars: &[char], braces: &BraceMap) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut markup_start = 0;
    let mut pos = 0;

    while pos < chars.len() {
        match chars[pos] {
            // Escaped brace or escape: the pair is literal text.
            ESCAPE if matches!(chars.get(pos + 1), Some(&('{' | '}' | ESCAPE))) => pos += 2,
            '{' => pos = braces.close(pos).map_or(pos + 1, |close| close + 1),
            _ if starts_url(chars, pos) => {
                if pos > markup_start {
                    pieces.push(Piece::Markup(markup_start..pos));
                }
                let end = chars[pos..]
                    .iter()
                    .position(|c| c.is_whitespace())
                    .map_or(chars.len(), |len| pos + len);
                pieces.push(Piece::Url(pos..end));
                pos = end;
                markup_start = end;
            }
            _ => pos += 1,
        }
    }

    if markup_start < chars.len() {
        pieces.push(Piece::Markup(markup_start..chars.len()));
    }
    pieces
}

fn starts_url(chars: &[char], pos: usize) -> bool {
    URL_PREFIXES.iter().any(|prefix| {
        let mut rest = chars[pos..].iter();
        prefix.chars().all(|p| rest.next() == Some(&p))
    })
}
