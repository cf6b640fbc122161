//! Fixed-capacity, order-preserving histories.
//!
//! Both the backtracking path and the visit history hold at most a fixed
//! number of positions and drop the *oldest* entry when a new one arrives at
//! capacity.  `VecDeque` gives O(1) push/evict at either end without the
//! element shifting a flat array would need.

use std::collections::VecDeque;
use std::collections::vec_deque;

use rustc_hash::FxHashMap;

use bg_core::Position;

// ── BoundedHistory ────────────────────────────────────────────────────────────

/// A FIFO-evicting deque with a fixed capacity.
///
/// Iteration runs oldest → newest.
#[derive(Clone, Debug)]
pub struct BoundedHistory<T> {
    items:    VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedHistory<T> {
    /// Create an empty history holding at most `capacity` items.
    ///
    /// A capacity of 0 is treated as 1; `GridConfig::validate` rejects it
    /// before it gets here.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `item`, evicting and returning the oldest entry if full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    /// Remove and return the newest entry.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Entry at `index`, counting from the oldest (0).
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The newest entry.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest to newest.
    #[inline]
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a BoundedHistory<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ── VisitLog ──────────────────────────────────────────────────────────────────

/// Every cell the agent has stepped into, in order and not deduplicated,
/// plus a running per-cell count over the retained window.
///
/// The counts always equal the number of occurrences of each cell in the
/// bounded history; an evicted entry decrements its cell's count.
#[derive(Clone, Debug)]
pub struct VisitLog {
    history: BoundedHistory<Position>,
    counts:  FxHashMap<Position, u32>,
}

impl VisitLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: BoundedHistory::new(capacity),
            counts:  FxHashMap::default(),
        }
    }

    /// Record one visit to `pos`.
    pub fn record(&mut self, pos: Position) {
        if let Some(old) = self.history.push(pos) {
            if let Some(n) = self.counts.get_mut(&old) {
                *n -= 1;
                if *n == 0 {
                    self.counts.remove(&old);
                }
            }
        }
        *self.counts.entry(pos).or_insert(0) += 1;
    }

    /// How many times `pos` occurs in the retained history.
    #[inline]
    pub fn count(&self, pos: Position) -> u32 {
        self.counts.get(&pos).copied().unwrap_or(0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Visits from oldest to newest.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.history.iter().copied()
    }
}
