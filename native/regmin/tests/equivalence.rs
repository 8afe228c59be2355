//! Property tests: every stage accepts the same language, determinization
//! never produces ambiguous transitions, minimization is minimal and
//! idempotent.

use proptest::prelude::*;
use regmin::automaton::{Dfa, Partition};
use regmin::parser::parse;

const ALPHABET: [char; 3] = ['a', 'b', 'c'];

fn pattern() -> impl Strategy<Value = String> {
    let leaf = prop::sample::select(ALPHABET.to_vec()).prop_map(|c| c.to_string());
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("{l}{r}")),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| format!("({l}|{r})")),
            inner.clone().prop_map(|p| format!("({p})*")),
            inner.clone().prop_map(|p| format!("({p})+")),
            inner.prop_map(|p| format!("({p})?")),
        ]
    })
}

/// Every string over the alphabet up to the given length.
fn all_inputs(max_len: usize) -> Vec<String> {
    let mut inputs = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &frontier {
            for c in ALPHABET {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        inputs.extend(next.iter().cloned());
        frontier = next;
    }
    inputs
}

fn is_deterministic(dfa: &Dfa) -> bool {
    dfa.reachable_states().into_iter().all(|state| {
        let transitions = dfa.transitions(state);
        transitions
            .iter()
            .enumerate()
            .all(|(i, t)| transitions[i + 1..].iter().all(|u| u.symbol != t.symbol))
    })
}

proptest! {
    #[test]
    fn stages_accept_the_same_language(pattern in pattern()) {
        let nfa = parse(&pattern).unwrap();
        let dfa = nfa.determinize().unwrap();
        let minimized = dfa.minimize().unwrap();

        for input in all_inputs(4) {
            let expected = nfa.is_match(&input);
            prop_assert_eq!(dfa.is_match(&input), expected, "dfa on {:?}", input);
            prop_assert_eq!(minimized.is_match(&input), expected, "minimized on {:?}", input);
        }
    }

    #[test]
    fn determinization_is_deterministic(pattern in pattern()) {
        let dfa = parse(&pattern).unwrap().determinize().unwrap();
        prop_assert!(is_deterministic(&dfa));
        prop_assert_eq!(dfa.reachable_states().len(), dfa.num_states());
    }

    #[test]
    fn minimization_is_minimal_and_idempotent(pattern in pattern()) {
        let dfa = parse(&pattern).unwrap().determinize().unwrap();
        let minimized = dfa.minimize().unwrap();

        prop_assert!(is_deterministic(&minimized));
        prop_assert!(minimized.num_states() <= dfa.num_states());
        prop_assert_eq!(minimized.minimize().unwrap().num_states(), minimized.num_states());

        let mut partition = Partition::new(&minimized);
        partition.refine(&minimized);
        prop_assert_eq!(partition.len(), minimized.num_states());
    }
}
