//! Brace matching for variable bodies.
//!
//! A single stack pass over the code points records, for every opening
//! brace, the brace that closes it. The tokenizer and the link pre-pass look
//! closes up here instead of rescanning the rest of the input.

use crate::token::ESCAPE;

/// Whether the brace at `pos` counts for nesting inside a variable body.
///
/// A brace preceded by exactly one escape character is literal. A run of
/// two or more escapes leaves it structural.
pub(crate) fn is_structural(chars: &[char], pos: usize) -> bool {
    match pos.checked_sub(1).map(|prev| chars[prev]) {
        Some(ESCAPE) => pos >= 2 && chars[pos - 2] == ESCAPE,
        _ => true,
    }
}

/// Closing position of each opening brace, indexed by code point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BraceMap {
    closes: Vec<Option<usize>>,
}

impl BraceMap {
    pub(crate) fn new(chars: &[char]) -> Self {
        let mut closes = vec![None; chars.len()];
        let mut open = Vec::new();

        for (pos, &c) in chars.iter().enumerate() {
            if !matches!(c, '{' | '}') || !is_structural(chars, pos) {
                continue;
            }
            if c == '{' {
                open.push(pos);
            } else if let Some(start) = open.pop() {
                closes[start] = Some(pos);
            }
        }

        Self { closes }
    }

    /// The brace closing the one at `open`, if the input has one.
    pub(crate) fn close(&self, open: usize) -> Option<usize> {
        self.closes.get(open).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(s: &str) -> BraceMap {
        BraceMap::new(&s.chars().collect::<Vec<_>>())
    }

    #[test]
    fn flat_pair() {
        let braces = map("a{b}c");
        assert_eq!(braces.close(1), Some(3));
        assert_eq!(braces.close(0), None);
    }

    #[test]
    fn nested_pairs() {
        let braces = map("{a{b}c}");
        assert_eq!(braces.close(0), Some(6));
        assert_eq!(braces.close(2), Some(4));
    }

    #[test]
    fn unclosed_outer_keeps_inner() {
        let braces = map("{a{b}");
        assert_eq!(braces.close(0), None);
        assert_eq!(braces.close(2), Some(4));
    }

    #[test]
    fn single_escape_hides_brace() {
        assert_eq!(map("{a&}b}").close(0), Some(5));
        assert_eq!(map("{a&{b}").close(0), Some(5));
    }

    #[test]
    fn escape_runs_leave_brace_structural() {
        assert_eq!(map("{a&&}b").close(0), Some(4));
        assert_eq!(map("{a&&&}b").close(0), Some(5));
    }

    #[test]
    fn stray_close_is_ignored() {
        let braces = map("}{x}");
        assert_eq!(braces.close(1), Some(3));
    }

    #[test]
    fn out_of_range_is_none() {
        assert_eq!(map("").close(0), None);
    }
}
