//! Sorted position structure and successor search.
//!
//! # Layout
//!
//! Entries live in a `Vec` kept in ascending position order. Every search,
//! both for lookups and for the insertion point, is a binary search, and
//! insertion splices the entry in at the found index (shifting only the
//! tail) instead of re-sorting.
//!
//! # Performance
//!
//! - **successor / exists / get**: O(log n)
//! - **insert / delete**: O(log n) search + O(n) shift
//!
//! Lookups vastly outnumber membership changes, and a contiguous `Vec`
//! keeps the hot search cache-friendly.

use crate::ring::entry::RingEntry;
use crate::token::Token;
use crate::vnode::VirtualNode;

/// Circular, position-ordered map from tokens to virtual nodes.
///
/// # Invariants
///
/// - Positions are unique; an insert at an occupied position is rejected
/// - `entries` is sorted ascending by position at all times
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring<T: Token> {
    entries: Vec<RingEntry<T>>,
}

impl<T: Token> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Token> Ring<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of occupied positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    fn search(&self, position: T) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|entry| entry.position.cmp(&position))
    }

    /// Insert `owner` at `position`.
    ///
    /// Returns `false` and leaves the ring untouched if the position is
    /// already taken; the existing owner is never overwritten.
    pub fn insert(&mut self, position: T, owner: VirtualNode) -> bool {
        match self.search(position) {
            Ok(_) => false,
            Err(idx) => {
                self.entries.insert(idx, RingEntry::new(position, owner));
                true
            }
        }
    }

    /// True iff `position` is occupied.
    pub fn exists(&self, position: T) -> bool {
        self.search(position).is_ok()
    }

    /// The virtual node stored at exactly `position`, if any.
    pub fn get(&self, position: T) -> Option<&VirtualNode> {
        self.search(position)
            .ok()
            .map(|idx| &self.entries[idx].owner)
    }

    /// Remove the entry at `position`. Absent positions are a no-op.
    pub fn delete(&mut self, position: T) -> Option<RingEntry<T>> {
        self.search(position)
            .ok()
            .map(|idx| self.entries.remove(idx))
    }

    /// Owner of the smallest position `>= target`, wrapping to the smallest
    /// position overall when `target` is past the last entry.
    ///
    /// Returns `None` only for an empty ring.
    pub fn successor(&self, target: T) -> Option<&VirtualNode> {
        let idx = self.entries.partition_point(|entry| entry.position < target);
        self.entries
            .get(idx)
            .or_else(|| self.first())
            .map(|entry| &entry.owner)
    }

    /// Entries in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = &RingEntry<T>> {
        self.entries.iter()
    }

    pub fn first(&self) -> Option<&RingEntry<T>> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&RingEntry<T>> {
        self.entries.last()
    }

    /// Each entry paired with the length of the arc it owns: every position
    /// after its predecessor, up to and including its own.
    ///
    /// The arcs of a non-empty ring sum to `T::space()`.
    pub fn arcs(&self) -> impl Iterator<Item = (&RingEntry<T>, u128)> {
        let single = self.entries.len() == 1;
        let last = self.last();

        self.entries.iter().enumerate().map(move |(idx, entry)| {
            if single {
                return (entry, T::space());
            }
            let prev = match idx {
                0 => last.map(|e| e.position).unwrap_or(entry.position),
                _ => self.entries[idx - 1].position,
            };
            (entry, prev.distance_to(&entry.position).to_u128())
        })
    }
}
