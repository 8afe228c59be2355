//! State ids and the bit-set configurations built from them.

use fixedbitset::FixedBitSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A state identifier: the index of a state in its automaton's arena.
pub type StateId = u32;

/// NFA states held as bits, one per state id.
///
/// During subset construction a `StateSet` is a configuration: the NFA states
/// the automaton could simultaneously be in. Iteration is in ascending id
/// order, which is the canonical form used for table lookups. Equality and
/// hashing look at membership only, so two sets holding the same states are
/// equal regardless of how far their backing storage has grown.
#[derive(Clone)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// Empty set with room for ids below `capacity`. Larger ids still fit.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// `{state}`.
    pub fn singleton(state: StateId, capacity: usize) -> Self {
        let mut set = Self::with_capacity(capacity);
        set.insert(state);
        set
    }

    /// Add `state`, growing the bits if needed. `false` if it was already a
    /// member.
    pub fn insert(&mut self, state: StateId) -> bool {
        let idx = state as usize;
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        !self.bits.put(idx)
    }

    /// Membership test; ids past the end are absent.
    pub fn contains(&self, state: StateId) -> bool {
        self.bits.contains(state as usize)
    }

    /// No members.
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Member count.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Members, lowest id first.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|i| i as StateId)
    }

    /// Members collected into an ascending `Vec`.
    pub fn to_vec(&self) -> Vec<StateId> {
        self.iter().collect()
    }
}

impl PartialEq for StateSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for StateSet {}

impl Hash for StateSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0usize;
        for id in self.iter() {
            id.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let items: Vec<StateId> = iter.into_iter().collect();
        let capacity = items.iter().copied().max().map_or(0, |m| m as usize + 1);
        let mut set = Self::with_capacity(capacity);
        for state in items {
            set.insert(state);
        }
        set
    }
}
