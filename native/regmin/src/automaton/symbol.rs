//! Symbol types for automata transitions.

use std::fmt;

/// An alphabet symbol: a single character.
pub type Symbol = char;

/// The label carried by an NFA transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Unconditional move, consumes no input.
    Epsilon,
    /// Move that consumes exactly this symbol.
    Symbol(Symbol),
}

impl Label {
    /// Check if this is an epsilon transition.
    #[inline]
    pub fn is_epsilon(self) -> bool {
        matches!(self, Label::Epsilon)
    }

    /// The consumed symbol, if any.
    #[inline]
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Label::Epsilon => None,
            Label::Symbol(c) => Some(c),
        }
    }
}

impl From<Symbol> for Label {
    fn from(c: Symbol) -> Self {
        Label::Symbol(c)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Epsilon => f.write_str("epsilon"),
            Label::Symbol(c) => write!(f, "{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon() {
        assert!(Label::Epsilon.is_epsilon());
        assert!(!Label::Symbol('a').is_epsilon());
        assert_eq!(Label::Epsilon.symbol(), None);
        assert_eq!(Label::from('x').symbol(), Some('x'));
    }

    #[test]
    fn test_display() {
        assert_eq!(Label::Epsilon.to_string(), "epsilon");
        assert_eq!(Label::Symbol('7').to_string(), "7");
    }
}
