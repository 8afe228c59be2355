//! Deterministic Finite Automaton (DFA) implementation.
//!
//! The transition function is partial: a missing transition means the input
//! is rejected, there is no implicit sink state.

use crate::automaton::state::StateId;
use crate::automaton::symbol::Symbol;
use crate::error::{Error, Result};
use indexmap::IndexSet;

/// A transition leaving a DFA state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DfaTransition {
    pub symbol: Symbol,
    pub target: StateId,
}

#[derive(Debug, Clone, Default)]
struct DfaState {
    transitions: Vec<DfaTransition>,
    accepting: bool,
}

/// A Deterministic Finite Automaton.
///
/// The automaton is the set of states reachable from [`Dfa::start`]; the arena
/// may hold other states, which no query starting from the start state sees.
#[derive(Debug, Clone)]
pub struct Dfa {
    states: Vec<DfaState>,
    start: StateId,
}

impl Dfa {
    /// Create a DFA with a single, non-accepting start state.
    pub fn new() -> Self {
        Self {
            states: vec![DfaState::default()],
            start: 0,
        }
    }

    /// Add a new state and return its ID.
    pub fn add_state(&mut self) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(DfaState::default());
        id
    }

    /// Get the start state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Set the start state.
    pub fn set_start(&mut self, state: StateId) -> Result<()> {
        self.state(state)?;
        self.start = state;
        Ok(())
    }

    /// Get the number of states in the arena.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    fn state(&self, state: StateId) -> Result<&DfaState> {
        self.states
            .get(state as usize)
            .ok_or(Error::UnknownState { state })
    }

    fn state_mut(&mut self, state: StateId) -> Result<&mut DfaState> {
        self.states
            .get_mut(state as usize)
            .ok_or(Error::UnknownState { state })
    }

    /// Add a transition. Fails if `source` already has a transition on
    /// `symbol`, which would make the automaton non-deterministic.
    pub fn add_transition(
        &mut self,
        source: StateId,
        symbol: Symbol,
        destination: StateId,
    ) -> Result<()> {
        self.state(destination)?;
        let state = self.state_mut(source)?;
        if state.transitions.iter().any(|t| t.symbol == symbol) {
            return Err(Error::DuplicateTransition {
                state: source,
                symbol,
            });
        }
        state.transitions.push(DfaTransition {
            symbol,
            target: destination,
        });
        Ok(())
    }

    /// Get the transition from a state on a symbol.
    pub fn target_of(&self, source: StateId, symbol: Symbol) -> Option<StateId> {
        self.transitions(source)
            .iter()
            .find(|t| t.symbol == symbol)
            .map(|t| t.target)
    }

    /// Outgoing transitions of a state, in insertion order; empty for ids
    /// outside the arena.
    pub fn transitions(&self, state: StateId) -> &[DfaTransition] {
        self.states
            .get(state as usize)
            .map_or(&[][..], |s| s.transitions.as_slice())
    }

    /// Make a state accepting.
    pub fn mark_accepting(&mut self, state: StateId) -> Result<()> {
        self.state_mut(state)?.accepting = true;
        Ok(())
    }

    /// Check if a state is accepting.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.states
            .get(state as usize)
            .is_some_and(|s| s.accepting)
    }

    /// Every state reachable from the start, each recorded once, in
    /// depth-first discovery order.
    pub fn reachable_states(&self) -> IndexSet<StateId> {
        let mut visited = IndexSet::new();
        visited.insert(self.start);
        let mut stack = vec![self.start];

        while let Some(state) = stack.pop() {
            for transition in self.transitions(state).iter().rev() {
                if visited.insert(transition.target) {
                    stack.push(transition.target);
                }
            }
        }

        visited
    }

    /// All symbols used by reachable states.
    pub fn alphabet(&self) -> IndexSet<Symbol> {
        self.reachable_states()
            .into_iter()
            .flat_map(|state| self.transitions(state).iter().map(|t| t.symbol))
            .collect()
    }

    /// Run the automaton over the input.
    pub fn is_match(&self, input: &str) -> bool {
        let mut state = self.start;
        for c in input.chars() {
            match self.target_of(state, c) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_accepting(state)
    }
}

impl Default for Dfa {
    fn default() -> Self {
        Self::new()
    }
}
