//! Compile small regular expressions into minimal deterministic automata.
//!
//! The pipeline is: [`parser::parse`] builds an ε-NFA out of Thompson
//! fragments, [`automaton::subset_construction`] turns it into a DFA, and
//! [`automaton::minimize`] collapses that DFA to its equivalence classes.
//! Each stage's output is usable on its own.

pub mod automaton;
pub mod error;
pub mod parser;

pub use automaton::{Dfa, Nfa};
pub use error::{Error, Result};

/// The automata produced for one pattern, stage by stage.
#[derive(Debug, Clone)]
pub struct Compiled {
    pub nfa: Nfa,
    pub dfa: Dfa,
    pub minimized: Dfa,
}

impl Compiled {
    /// Parse, determinize and minimize a pattern, keeping every stage.
    pub fn new(pattern: &str) -> Result<Self> {
        let nfa = parser::parse(pattern)?;
        let dfa = nfa.determinize()?;
        let minimized = dfa.minimize()?;
        tracing::debug!(
            nfa_states = nfa.num_states(),
            dfa_states = dfa.num_states(),
            minimized_states = minimized.num_states(),
            "compiled pattern"
        );
        Ok(Self {
            nfa,
            dfa,
            minimized,
        })
    }
}

/// Compile a pattern straight to its minimal DFA.
pub fn compile(pattern: &str) -> Result<Dfa> {
    Ok(Compiled::new(pattern)?.minimized)
}
