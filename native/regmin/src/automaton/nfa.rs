//! Epsilon Non-deterministic Finite Automaton (ε-NFA) implementation.
//!
//! States live in an arena and refer to each other by [`StateId`]. Every state
//! has at most two outgoing transitions, each either an epsilon move or a move
//! on one symbol. Acceptance has no per-state flag: the single terminate state
//! is the only accepting state.

use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{Label, Symbol};
use crate::automaton::thompson::Fragment;
use crate::error::{Error, Result};
use indexmap::IndexSet;

/// Maximum number of outgoing transitions of an NFA state.
pub const MAX_OUT_DEGREE: usize = 2;

/// A transition leaving an NFA state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NfaTransition {
    pub label: Label,
    pub target: StateId,
}

#[derive(Debug, Clone, Default)]
struct NfaState {
    transitions: Vec<NfaTransition>,
}

/// An Epsilon Non-deterministic Finite Automaton with one start and one
/// terminate state.
#[derive(Debug, Clone)]
pub struct Nfa {
    states: Vec<NfaState>,
    start: StateId,
    terminate: StateId,
}

impl Nfa {
    /// Get the start state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Get the terminate (accepting) state.
    pub fn terminate(&self) -> StateId {
        self.terminate
    }

    /// Get the number of states in the arena.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Outgoing transitions of a state; empty for ids outside the arena.
    pub fn transitions(&self, state: StateId) -> &[NfaTransition] {
        self.states
            .get(state as usize)
            .map_or(&[][..], |s| s.transitions.as_slice())
    }

    /// Get the epsilon closure of a set of states.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::with_capacity(self.states.len());
        let mut stack: Vec<StateId> = states.iter().collect();

        while let Some(s) = stack.pop() {
            if !closure.insert(s) {
                continue;
            }

            for transition in self.transitions(s) {
                if transition.label.is_epsilon() && !closure.contains(transition.target) {
                    stack.push(transition.target);
                }
            }
        }

        closure
    }

    /// Symbols labelling any outgoing transition of the given states, in the
    /// order they are first seen.
    pub fn symbols(&self, states: &StateSet) -> IndexSet<Symbol> {
        let mut symbols = IndexSet::new();
        for state in states.iter() {
            for transition in self.transitions(state) {
                if let Some(c) = transition.label.symbol() {
                    symbols.insert(c);
                }
            }
        }
        symbols
    }

    /// Get the states reachable from a set of states on a given symbol.
    /// Returns the epsilon closure of the reached states.
    pub fn move_on_symbol(&self, states: &StateSet, symbol: Symbol) -> StateSet {
        let mut reached = StateSet::with_capacity(self.states.len());

        for state in states.iter() {
            for transition in self.transitions(state) {
                if transition.label == Label::Symbol(symbol) {
                    reached.insert(transition.target);
                }
            }
        }

        self.epsilon_closure(&reached)
    }

    /// The configuration the automaton starts in.
    pub fn initial_configuration(&self) -> StateSet {
        self.epsilon_closure(&StateSet::singleton(self.start, self.states.len()))
    }

    /// Every state reachable from the start, each recorded once.
    pub fn reachable_states(&self) -> IndexSet<StateId> {
        let mut visited = IndexSet::new();
        visited.insert(self.start);
        let mut stack = vec![self.start];

        while let Some(state) = stack.pop() {
            for transition in self.transitions(state) {
                if visited.insert(transition.target) {
                    stack.push(transition.target);
                }
            }
        }

        visited
    }

    /// Check whether the whole input is in the language, by simulating the
    /// automaton on sets of states.
    pub fn is_match(&self, input: &str) -> bool {
        let mut current = self.initial_configuration();
        for c in input.chars() {
            current = self.move_on_symbol(&current, c);
            if current.is_empty() {
                return false;
            }
        }
        current.contains(self.terminate)
    }
}

/// Arena that NFA fragments are built in.
#[derive(Debug, Clone, Default)]
pub struct NfaBuilder {
    states: Vec<NfaState>,
}

impl NfaBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new isolated state and return its ID.
    pub fn add_state(&mut self) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(NfaState::default());
        id
    }

    /// Get the number of states allocated so far.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Add a transition from source to destination.
    pub fn add_transition(
        &mut self,
        source: StateId,
        label: Label,
        destination: StateId,
    ) -> Result<()> {
        if destination as usize >= self.states.len() {
            return Err(Error::UnknownState { state: destination });
        }
        let state = self
            .states
            .get_mut(source as usize)
            .ok_or(Error::UnknownState { state: source })?;
        if state.transitions.len() >= MAX_OUT_DEGREE {
            return Err(Error::OutDegreeExceeded { state: source });
        }
        state.transitions.push(NfaTransition {
            label,
            target: destination,
        });
        Ok(())
    }

    /// Add an epsilon transition from source to destination.
    pub fn add_epsilon_transition(&mut self, source: StateId, destination: StateId) -> Result<()> {
        self.add_transition(source, Label::Epsilon, destination)
    }

    /// Close the arena; the fragment's ends become the automaton's start and
    /// terminate states.
    pub fn finish(self, fragment: Fragment) -> Nfa {
        Nfa {
            states: self.states,
            start: fragment.start(),
            terminate: fragment.terminate(),
        }
    }
}
