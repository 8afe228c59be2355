//! Thompson construction: the six composition primitives that glue NFA
//! fragments together with epsilon transitions.
//!
//! A fragment's terminate state never has outgoing transitions, so each
//! primitive adds at most two transitions to any state and the out-degree
//! bound of the NFA model holds for everything built here.

use crate::automaton::nfa::NfaBuilder;
use crate::automaton::state::StateId;
use crate::automaton::symbol::Symbol;
use crate::error::Result;

/// A partial automaton inside an [`NfaBuilder`], identified by its entry and
/// exit states. Composition consumes fragments, so a piece of automaton is
/// never wired into two places.
#[derive(Debug, PartialEq, Eq)]
pub struct Fragment {
    start: StateId,
    terminate: StateId,
}

impl Fragment {
    pub fn new(start: StateId, terminate: StateId) -> Self {
        Self { start, terminate }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn terminate(&self) -> StateId {
        self.terminate
    }
}

impl NfaBuilder {
    /// `c`
    pub fn atomic(&mut self, c: Symbol) -> Result<Fragment> {
        let start = self.add_state();
        let terminate = self.add_state();
        self.add_transition(start, c.into(), terminate)?;
        Ok(Fragment { start, terminate })
    }

    /// `AB`
    pub fn concatenate(&mut self, a: Fragment, b: Fragment) -> Result<Fragment> {
        self.add_epsilon_transition(a.terminate, b.start)?;
        Ok(Fragment {
            start: a.start,
            terminate: b.terminate,
        })
    }

    /// `A|B`
    pub fn alternate(&mut self, a: Fragment, b: Fragment) -> Result<Fragment> {
        let start = self.add_state();
        let terminate = self.add_state();
        self.add_epsilon_transition(start, a.start)?;
        self.add_epsilon_transition(start, b.start)?;
        self.add_epsilon_transition(a.terminate, terminate)?;
        self.add_epsilon_transition(b.terminate, terminate)?;
        Ok(Fragment { start, terminate })
    }

    /// `A?`, that is `A|ε`
    pub fn optional(&mut self, a: Fragment) -> Result<Fragment> {
        let start = self.add_state();
        self.add_epsilon_transition(start, a.start)?;
        self.add_epsilon_transition(start, a.terminate)?;
        Ok(Fragment {
            start,
            terminate: a.terminate,
        })
    }

    /// `A*`
    pub fn kleene_closure(&mut self, a: Fragment) -> Result<Fragment> {
        let start = self.add_state();
        let terminate = self.add_state();
        self.add_epsilon_transition(a.terminate, start)?;
        self.add_epsilon_transition(start, a.start)?;
        self.add_epsilon_transition(start, terminate)?;
        Ok(Fragment { start, terminate })
    }

    /// `A+`, that is `AA*`
    pub fn positive_closure(&mut self, a: Fragment) -> Result<Fragment> {
        let start = self.add_state();
        let terminate = self.add_state();
        self.add_epsilon_transition(start, a.start)?;
        self.add_epsilon_transition(a.terminate, start)?;
        self.add_epsilon_transition(a.terminate, terminate)?;
        Ok(Fragment { start, terminate })
    }
}
