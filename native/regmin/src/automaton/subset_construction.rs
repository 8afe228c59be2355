//! Subset construction algorithm for converting ε-NFA to DFA.

use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::Nfa;
use crate::automaton::state::{StateId, StateSet};
use crate::error::Result;
use indexmap::IndexMap;
use tracing::{debug, trace};

/// Convert an epsilon-NFA to a DFA using the powerset construction algorithm.
///
/// Every DFA state stands for exactly one distinct epsilon-closed
/// configuration, and a configuration is expanded once, when first seen. A
/// DFA state is accepting iff its configuration holds the NFA terminate state.
pub fn subset_construction(nfa: &Nfa) -> Result<Dfa> {
    // Configuration -> DFA state
    let mut table: IndexMap<StateSet, StateId> = IndexMap::new();
    let mut dfa = Dfa::new();

    let initial = nfa.initial_configuration();
    table.insert(initial.clone(), dfa.start());
    trace!(configuration = ?initial, state = dfa.start(), "initial configuration");

    let mut worklist: Vec<(StateSet, StateId)> = vec![(initial, dfa.start())];

    while let Some((current, from)) = worklist.pop() {
        for symbol in nfa.symbols(&current) {
            // Non-empty: some member has a transition on `symbol`.
            let next = nfa.move_on_symbol(&current, symbol);

            let to = if let Some(&existing) = table.get(&next) {
                existing
            } else {
                let state = dfa.add_state();
                trace!(configuration = ?next, state, "new configuration");
                table.insert(next.clone(), state);
                worklist.push((next, state));
                state
            };

            // An existing transition must already agree with the successor;
            // anything else surfaces as a duplicate transition.
            if dfa.target_of(from, symbol) != Some(to) {
                dfa.add_transition(from, symbol, to)?;
            }
        }
    }

    let terminate = nfa.terminate();
    for (configuration, &state) in &table {
        if configuration.contains(terminate) {
            dfa.mark_accepting(state)?;
        }
    }

    debug!(
        nfa_states = nfa.num_states(),
        configurations = table.len(),
        "subset construction finished"
    );

    Ok(dfa)
}

impl Nfa {
    /// Determinize this automaton. See [`subset_construction`].
    pub fn determinize(&self) -> Result<Dfa> {
        subset_construction(self)
    }
}
