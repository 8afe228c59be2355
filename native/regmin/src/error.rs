//! Error type shared by the front-end, the automaton models and both engines.

use std::path::PathBuf;

use crate::automaton::{StateId, Symbol};

/// regmin error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The pattern ended where an atom or a closing parenthesis was required.
    #[error("unexpected end of pattern at offset {offset}")]
    UnexpectedEnd { offset: usize },

    /// A character that cannot start or continue the current construct.
    #[error("unexpected character `{ch}` at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    /// An opening parenthesis without its closing partner.
    #[error("no matching `)` for the `(` at offset {offset}")]
    UnmatchedParen { offset: usize },

    /// The pattern (or a group, or an alternative) is empty.
    #[error("empty pattern at offset {offset}")]
    EmptyPattern { offset: usize },

    /// Groups nested deeper than the parser accepts.
    #[error("groups nested too deeply at offset {offset}")]
    NestingTooDeep { offset: usize },

    /// An NFA state already carries its two outgoing transitions.
    #[error("NFA state {state} already has two outgoing transitions")]
    OutDegreeExceeded { state: StateId },

    /// A DFA state already has a transition on this symbol.
    #[error("DFA state {state} already has a transition on `{symbol}`")]
    DuplicateTransition { state: StateId, symbol: Symbol },

    /// A state id outside the automaton's arena.
    #[error("unknown state {state}")]
    UnknownState { state: StateId },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the error comes from the pattern text rather than from the
    /// automata built out of it or from the environment.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedEnd { .. }
                | Error::UnexpectedChar { .. }
                | Error::UnmatchedParen { .. }
                | Error::EmptyPattern { .. }
                | Error::NestingTooDeep { .. }
        )
    }
}

/// Result type using regmin Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_offset() {
        let err = Error::UnexpectedChar { ch: ')', offset: 3 };
        assert_eq!(err.to_string(), "unexpected character `)` at offset 3");
    }

    #[test]
    fn test_syntax_classification() {
        assert!(Error::EmptyPattern { offset: 0 }.is_syntax());
        assert!(Error::UnmatchedParen { offset: 1 }.is_syntax());
        assert!(Error::NestingTooDeep { offset: 256 }.is_syntax());
        assert!(!Error::DuplicateTransition { state: 0, symbol: 'a' }.is_syntax());
        assert!(!Error::UnknownState { state: 9 }.is_syntax());
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error as _;

        let err = Error::Io {
            path: PathBuf::from("out/nfa.dot"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().starts_with("io error: out/nfa.dot"));
        assert!(err.source().is_some());
    }
}
