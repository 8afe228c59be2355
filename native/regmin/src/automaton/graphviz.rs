//! Graphviz DOT rendering of automata, for diagnostics.
//!
//! Only states reachable from the start are drawn. Accepting states (the
//! terminate state, for an NFA) are double circles; an unlabeled `start` node
//! points at the start state.

use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::Nfa;
use crate::automaton::state::StateId;
use std::fmt;

const HEADER: &str = "digraph finite_state_machine {\n    rankdir=LR;\n    size=\"8,5\"\n";

fn write_accepting(f: &mut fmt::Formatter<'_>, accepting: &[StateId]) -> fmt::Result {
    if accepting.is_empty() {
        return Ok(());
    }
    write!(f, "    node [shape = doublecircle label=\"\"];")?;
    for state in accepting {
        write!(f, " s{state}")?;
    }
    writeln!(f)
}

fn write_edge(f: &mut fmt::Formatter<'_>, from: StateId, to: StateId, label: &str) -> fmt::Result {
    let escaped = label.replace('\\', "\\\\").replace('"', "\\\"");
    writeln!(f, "    s{from} -> s{to} [ label = \"{escaped}\" ];")
}

fn write_footer(f: &mut fmt::Formatter<'_>, start: StateId) -> fmt::Result {
    writeln!(f, "    node [shape = none label=\"\"]; start")?;
    writeln!(f, "    start -> s{start} [ label = \"start\" ];")?;
    writeln!(f, "}}")
}

/// DOT view of an [`Nfa`]; see [`Nfa::dot`].
pub struct NfaDot<'a>(&'a Nfa);

impl fmt::Display for NfaDot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nfa = self.0;
        f.write_str(HEADER)?;
        write_accepting(f, &[nfa.terminate()])?;
        writeln!(f, "    node [shape = circle label=\"\"]")?;
        for state in nfa.reachable_states() {
            for transition in nfa.transitions(state) {
                write_edge(f, state, transition.target, &transition.label.to_string())?;
            }
        }
        write_footer(f, nfa.start())
    }
}

/// DOT view of a [`Dfa`]; see [`Dfa::dot`].
pub struct DfaDot<'a>(&'a Dfa);

impl fmt::Display for DfaDot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dfa = self.0;
        let reachable = dfa.reachable_states();
        let accepting: Vec<StateId> = reachable
            .iter()
            .copied()
            .filter(|&state| dfa.is_accepting(state))
            .collect();

        f.write_str(HEADER)?;
        write_accepting(f, &accepting)?;
        writeln!(f, "    node [shape = circle label=\"\"]")?;
        for &state in &reachable {
            for transition in dfa.transitions(state) {
                write_edge(f, state, transition.target, &transition.symbol.to_string())?;
            }
        }
        write_footer(f, dfa.start())
    }
}

impl Nfa {
    /// Borrowing DOT view, for `write!` or `to_string`.
    pub fn dot(&self) -> NfaDot<'_> {
        NfaDot(self)
    }

    /// Render as a DOT document.
    pub fn to_dot(&self) -> String {
        self.dot().to_string()
    }
}

impl Dfa {
    /// Borrowing DOT view of the reachable part.
    pub fn dot(&self) -> DfaDot<'_> {
        DfaDot(self)
    }

    /// Render as a DOT document.
    pub fn to_dot(&self) -> String {
        self.dot().to_string()
    }
}
