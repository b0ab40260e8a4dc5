//! FIFO memory of recently made moves.

use std::collections::{HashMap, VecDeque};

use crate::neighborhood::Move;

/// Bounded FIFO queue of moves with O(1) membership lookup.
///
/// The same move may be queued more than once (after an aspiration or a
/// fallback selection); it stays tabu until its last copy is evicted.
#[derive(Debug, Clone, Default)]
pub struct TabuList {
    queue: VecDeque<Move>,
    counts: HashMap<Move, usize>,
}

impl TabuList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued moves, duplicates included.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether `mv` is currently tabu.
    pub fn contains(&self, mv: &Move) -> bool {
        self.counts.contains_key(mv)
    }

    /// Moves from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.queue.iter()
    }

    /// Enqueues `mv`, then evicts the oldest entries until at most
    /// `capacity` remain.
    pub fn push(&mut self, mv: Move, capacity: usize) {
        self.queue.push_back(mv);
        *self.counts.entry(mv).or_insert(0) += 1;

        while self.queue.len() > capacity {
            let Some(oldest) = self.queue.pop_front() else {
                break;
            };
            if let Some(count) = self.counts.get_mut(&oldest) {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&oldest);
                }
            }
        }
    }

    /// Forgets every queued move.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.counts.clear();
    }
}
