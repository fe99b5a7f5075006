//! Parser error types.

use thiserror::Error;

/// Error returned by [`parse_function`](crate::parse_function).
///
/// Tokenizing never fails; the only hard error in the dialect is asking for
/// the call shape of a body that has none.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The variable body has no opening parenthesis.
    #[error("not a function call: {0:?} has no opening parenthesis")]
    NotAFunction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_input() {
        let err = ParseError::NotAFunction("plain".to_string());
        let msg = err.to_string();
        assert!(msg.contains("not a function call"));
        assert!(msg.contains("\"plain\""));
    }
}
