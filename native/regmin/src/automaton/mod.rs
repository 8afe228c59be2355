//! Finite automata over single-character symbols.
//!
//! This module provides:
//! - Arena-backed ε-NFA and DFA models
//! - Thompson construction primitives for building NFAs
//! - Subset construction (NFA to DFA conversion)
//! - Partition-refinement DFA minimization
//! - Graphviz DOT export

mod dfa;
mod graphviz;
mod minimize;
mod nfa;
mod state;
mod subset_construction;
mod symbol;
mod thompson;

pub use dfa::{Dfa, DfaTransition};
pub use graphviz::{DfaDot, NfaDot};
pub use minimize::{BlockId, Partition, minimize};
pub use nfa::{MAX_OUT_DEGREE, Nfa, NfaBuilder, NfaTransition};
pub use state::{StateId, StateSet};
pub use subset_construction::subset_construction;
pub use symbol::{Label, Symbol};
pub use thompson::Fragment;
