//! Per-class live position registry.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use sg_core::Vec2;

/// The positions every agent of one class last committed.
///
/// The ledger is **live**: there is no per-frame snapshot copy, so an agent
/// ticked later in a frame reads the commits of agents ticked earlier in the
/// same frame.  Entries appear on an agent's first commit and are never
/// deleted; re-commits overwrite in place.
///
/// The two classes hold separate ledgers keyed by their own id types, which
/// is what makes cross-class peeking unrepresentable.
#[derive(Clone, Debug, Default)]
pub struct PositionLedger<Id> {
    entries: FxHashMap<Id, Vec2>,
}

impl<Id: Copy + Eq + Hash> PositionLedger<Id> {
    pub fn new() -> Self {
        Self { entries: FxHashMap::default() }
    }

    /// Insert or overwrite this agent's committed position.
    #[inline]
    pub fn commit(&mut self, id: Id, position: Vec2) {
        self.entries.insert(id, position);
    }

    /// The position `id` last committed, if it has ever ticked.
    #[inline]
    pub fn position(&self, id: Id) -> Option<Vec2> {
        self.entries.get(&id).copied()
    }

    /// Number of agents that have committed at least once.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All committed entries, in the ledger's (deterministic) internal order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, Vec2)> + '_ {
        self.entries.iter().map(|(&id, &pos)| (id, pos))
    }

    /// All committed positions except `of`'s own.
    ///
    /// This is the snapshot the separation rule runs over; self-exclusion
    /// here keeps an agent from being repelled by its own previous commit.
    pub fn neighbors(&self, of: Id) -> impl Iterator<Item = Vec2> + '_ {
        self.entries
            .iter()
            .filter(move |&(&id, _)| id != of)
            .map(|(_, &pos)| pos)
    }
}
