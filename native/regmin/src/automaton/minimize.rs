//! DFA minimization by partition refinement.
//!
//! Reachable states start out split into accepting and non-accepting blocks.
//! Every pass scans the blocks in list order and splits a block as soon as one
//! symbol distinguishes its members; passes repeat until one makes no split.
//! Each surviving block becomes one state of the minimized automaton.

use crate::automaton::dfa::Dfa;
use crate::automaton::state::StateId;
use crate::automaton::symbol::Symbol;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use tracing::{debug, trace};

/// Index of a block slot inside a [`Partition`].
pub type BlockId = usize;

#[derive(Debug, Clone)]
struct Block {
    members: Vec<StateId>,
    prev: Option<BlockId>,
    next: Option<BlockId>,
}

/// Blocks of possibly-equivalent DFA states, kept as a doubly linked list
/// over an arena of slots.
///
/// Blocks are pairwise disjoint and together hold exactly the states
/// reachable from the start of the DFA the partition was built for.
#[derive(Debug, Clone)]
pub struct Partition {
    blocks: Vec<Block>,
    head: Option<BlockId>,
    tail: Option<BlockId>,
    len: usize,
    // DFA state -> block holding it; None for unreachable states
    block_of: Vec<Option<BlockId>>,
}

impl Partition {
    /// Initial partition: accepting and non-accepting reachable states. An
    /// empty side gets no block.
    pub fn new(dfa: &Dfa) -> Self {
        let mut partition = Self {
            blocks: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            block_of: vec![None; dfa.num_states()],
        };

        let (accepting, rejecting): (Vec<StateId>, Vec<StateId>) = dfa
            .reachable_states()
            .into_iter()
            .partition(|&state| dfa.is_accepting(state));

        for members in [accepting, rejecting] {
            if !members.is_empty() {
                partition.push_back(members);
            }
        }

        partition
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the partition has no blocks.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Blocks in list order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, &[StateId])> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let id = cursor?;
            let block = &self.blocks[id];
            cursor = block.next;
            Some((id, block.members.as_slice()))
        })
    }

    /// The block holding a state, if the state is partitioned.
    pub fn block_of(&self, state: StateId) -> Option<BlockId> {
        self.block_of.get(state as usize).copied().flatten()
    }

    fn push_back(&mut self, members: Vec<StateId>) -> BlockId {
        let id = self.blocks.len();
        for &state in &members {
            self.assign(state, id);
        }
        self.blocks.push(Block {
            members,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.blocks[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    fn insert_after(&mut self, pivot: BlockId, members: Vec<StateId>) -> BlockId {
        let id = self.blocks.len();
        for &state in &members {
            self.assign(state, id);
        }
        let next = self.blocks[pivot].next;
        self.blocks.push(Block {
            members,
            prev: Some(pivot),
            next,
        });
        self.blocks[pivot].next = Some(id);
        match next {
            Some(next) => self.blocks[next].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.len += 1;
        id
    }

    fn assign(&mut self, state: StateId, block: BlockId) {
        let idx = state as usize;
        if idx >= self.block_of.len() {
            self.block_of.resize(idx + 1, None);
        }
        self.block_of[idx] = Some(block);
    }

    /// Block reached from `state` on `symbol`; a missing transition is its own
    /// class, distinct from every real block.
    fn target_block(&self, dfa: &Dfa, state: StateId, symbol: Symbol) -> Option<BlockId> {
        dfa.target_of(state, symbol)
            .and_then(|target| self.block_of(target))
    }

    fn symbols(&self, dfa: &Dfa, block: BlockId) -> IndexSet<Symbol> {
        self.blocks[block]
            .members
            .iter()
            .flat_map(|&state| dfa.transitions(state).iter().map(|t| t.symbol))
            .collect()
    }

    /// Split off the members of `block` whose target block on `symbol`
    /// differs from the first member's. The compatible members stay in
    /// `block`; the others form a new block linked right after it.
    fn split(&mut self, dfa: &Dfa, block: BlockId, symbol: Symbol) -> bool {
        let members = &self.blocks[block].members;
        let Some((&reference, rest)) = members.split_first() else {
            return false;
        };
        let expected = self.target_block(dfa, reference, symbol);

        let mut kept = vec![reference];
        let mut split_off = Vec::new();
        for &state in rest {
            if self.target_block(dfa, state, symbol) == expected {
                kept.push(state);
            } else {
                split_off.push(state);
            }
        }

        if split_off.is_empty() {
            return false;
        }

        trace!(block, %symbol, kept = kept.len(), split = split_off.len(), "split block");
        self.blocks[block].members = kept;
        self.insert_after(block, split_off);
        true
    }

    /// One scan over all blocks. A block is split on the first symbol that
    /// distinguishes its members and is not examined further in this pass;
    /// blocks created during the pass are skipped until the next one.
    /// Returns the number of splits made.
    pub fn refine_pass(&mut self, dfa: &Dfa) -> usize {
        let mut splits = 0;
        let mut cursor = self.head;

        while let Some(block) = cursor {
            cursor = self.blocks[block].next;
            for symbol in self.symbols(dfa, block) {
                if self.split(dfa, block, symbol) {
                    splits += 1;
                    break;
                }
            }
        }

        splits
    }

    /// Refine until a pass makes no split. Returns the number of passes.
    pub fn refine(&mut self, dfa: &Dfa) -> usize {
        let mut passes = 0;
        loop {
            passes += 1;
            if self.refine_pass(dfa) == 0 {
                return passes;
            }
        }
    }

    /// Merge each block into one state.
    fn build(&self, dfa: &Dfa) -> Result<Dfa> {
        let mut minimized = Dfa::new();
        let mut merged: Vec<Option<StateId>> = vec![None; self.blocks.len()];
        for (position, (block, _)) in self.iter().enumerate() {
            merged[block] = Some(if position == 0 {
                minimized.start()
            } else {
                minimized.add_state()
            });
        }

        let merged_state = |state: StateId| -> Result<StateId> {
            self.block_of(state)
                .and_then(|block| merged[block])
                .ok_or(Error::UnknownState { state })
        };

        for (_, members) in self.iter() {
            for &state in members {
                let from = merged_state(state)?;
                for transition in dfa.transitions(state) {
                    let to = merged_state(transition.target)?;
                    match minimized.target_of(from, transition.symbol) {
                        Some(existing) => debug_assert_eq!(
                            existing, to,
                            "block members disagree on `{}`",
                            transition.symbol
                        ),
                        None => minimized.add_transition(from, transition.symbol, to)?,
                    }
                }
                if dfa.is_accepting(state) {
                    minimized.mark_accepting(from)?;
                }
            }
        }

        minimized.set_start(merged_state(dfa.start())?)?;
        Ok(minimized)
    }
}

/// Minimize a DFA: the result accepts the same language with the fewest
/// states, one per class of equivalent reachable states.
pub fn minimize(dfa: &Dfa) -> Result<Dfa> {
    let mut partition = Partition::new(dfa);
    let initial_blocks = partition.len();
    let passes = partition.refine(dfa);

    debug!(
        states = dfa.num_states(),
        initial_blocks,
        blocks = partition.len(),
        passes,
        "partition refinement converged"
    );

    partition.build(dfa)
}

impl Dfa {
    /// Minimize this automaton. See [`minimize`].
    pub fn minimize(&self) -> Result<Dfa> {
        minimize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_partition_invariant(partition: &Partition, dfa: &Dfa) {
        let mut seen = IndexSet::new();
        for (block, members) in partition.iter() {
            assert!(!members.is_empty());
            for &state in members {
                assert!(seen.insert(state), "state {state} in two blocks");
                assert_eq!(partition.block_of(state), Some(block));
            }
        }
        let mut reachable: Vec<StateId> = dfa.reachable_states().into_iter().collect();
        let mut covered: Vec<StateId> = seen.into_iter().collect();
        reachable.sort_unstable();
        covered.sort_unstable();
        assert_eq!(reachable, covered);
    }

    /// 0 -a-> 1 -b-> 3(final), 0 -b-> 2 -b-> 4(final)
    fn redundant() -> Dfa {
        let mut dfa = Dfa::new();
        for _ in 0..4 {
            dfa.add_state();
        }
        dfa.mark_accepting(3).unwrap();
        dfa.mark_accepting(4).unwrap();
        dfa.add_transition(0, 'a', 1).unwrap();
        dfa.add_transition(0, 'b', 2).unwrap();
        dfa.add_transition(1, 'b', 3).unwrap();
        dfa.add_transition(2, 'b', 4).unwrap();
        dfa
    }

    #[test]
    fn test_initial_partition() {
        let dfa = redundant();
        let partition = Partition::new(&dfa);
        assert_eq!(partition.len(), 2);
        assert_partition_invariant(&partition, &dfa);

        let blocks: Vec<Vec<StateId>> = partition.iter().map(|(_, m)| m.to_vec()).collect();
        assert_eq!(blocks[0].len(), 2);
        assert!(blocks[0].contains(&3) && blocks[0].contains(&4));
    }

    #[test]
    fn test_initial_partition_skips_empty_side() {
        let mut dfa = Dfa::new();
        let s1 = dfa.add_state();
        dfa.add_transition(0, 'a', s1).unwrap();
        let partition = Partition::new(&dfa);
        assert_eq!(partition.len(), 1);
    }

    #[test]
    fn test_dfa_minimization() {
        let dfa = redundant();
        let minimized = minimize(&dfa).unwrap();

        assert_eq!(minimized.num_states(), 3);
        assert!(minimized.is_match("ab"));
        assert!(minimized.is_match("bb"));
        assert!(!minimized.is_match("b"));
        assert!(!minimized.is_match("abb"));

        let start = minimized.start();
        assert_eq!(minimized.target_of(start, 'a'), minimized.target_of(start, 'b'));
    }

    #[test]
    fn test_refinement_reaches_fixpoint() {
        let dfa = redundant();
        let mut partition = Partition::new(&dfa);
        let passes = partition.refine(&dfa);

        assert!(passes >= 2);
        assert_eq!(partition.len(), 3);
        assert_eq!(partition.refine_pass(&dfa), 0);
        assert_partition_invariant(&partition, &dfa);
    }

    #[test]
    fn test_missing_transition_is_distinguishing() {
        // 0 -a-> 1(final) -a-> 2(final): 1 and 2 differ only in that 2 has
        // no transition on `a`.
        let mut dfa = Dfa::new();
        let s1 = dfa.add_state();
        let s2 = dfa.add_state();
        dfa.add_transition(0, 'a', s1).unwrap();
        dfa.add_transition(s1, 'a', s2).unwrap();
        dfa.mark_accepting(s1).unwrap();
        dfa.mark_accepting(s2).unwrap();

        let minimized = dfa.minimize().unwrap();
        assert_eq!(minimized.num_states(), 3);
        assert!(minimized.is_match("a"));
        assert!(minimized.is_match("aa"));
        assert!(!minimized.is_match("aaa"));
    }

    #[test]
    fn test_equivalent_cycle_collapses() {
        let mut dfa = Dfa::new();
        let s1 = dfa.add_state();
        dfa.add_transition(0, 'a', s1).unwrap();
        dfa.add_transition(s1, 'a', 0).unwrap();
        dfa.mark_accepting(0).unwrap();
        dfa.mark_accepting(s1).unwrap();

        let minimized = dfa.minimize().unwrap();
        assert_eq!(minimized.num_states(), 1);
        let start = minimized.start();
        assert!(minimized.is_accepting(start));
        assert_eq!(minimized.target_of(start, 'a'), Some(start));
    }

    #[test]
    fn test_already_minimal() {
        let mut dfa = Dfa::new();
        let s1 = dfa.add_state();
        dfa.add_transition(0, 'a', s1).unwrap();
        dfa.mark_accepting(s1).unwrap();

        let minimized = dfa.minimize().unwrap();
        assert_eq!(minimized.num_states(), 2);
        assert!(!minimized.is_accepting(minimized.start()));
        let end = minimized.target_of(minimized.start(), 'a').unwrap();
        assert!(minimized.is_accepting(end));
        assert!(minimized.transitions(end).is_empty());
    }

    #[test]
    fn test_unreachable_states_dropped() {
        let mut dfa = redundant();
        let orphan = dfa.add_state();
        dfa.add_transition(orphan, 'z', 0).unwrap();

        let partition = Partition::new(&dfa);
        assert_eq!(partition.block_of(orphan), None);

        let minimized = dfa.minimize().unwrap();
        assert_eq!(minimized.num_states(), 3);
        assert!(!minimized.alphabet().contains(&'z'));
    }

    #[test]
    fn test_start_not_in_first_block() {
        // Start is non-accepting; the accepting block is listed first.
        let dfa = redundant();
        let minimized = dfa.minimize().unwrap();
        assert!(!minimized.is_accepting(minimized.start()));
        assert!(minimized.is_match("ab"));
    }

    #[test]
    fn test_minimize_idempotent() {
        let once = redundant().minimize().unwrap();
        let twice = once.minimize().unwrap();
        assert_eq!(once.num_states(), twice.num_states());
    }
}
