use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug)]
struct Entry {
    frequency: u64,
    sequence: u64,
    node_index: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-queue of pending tree roots. Among equal frequencies the node that
/// was pushed first is popped first.
pub struct PendingQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    next_sequence: u64,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, frequency: u64, node_index: usize) {
        let entry = Entry {
            frequency,
            sequence: self.next_sequence,
            node_index,
        };
        self.next_sequence += 1;
        self.heap.push(Reverse(entry));
    }

    /// Removes the lowest frequency node, returning its index.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(entry)| entry.node_index)
    }

    /// Removes the two lowest frequency nodes if at least two are pending.
    pub fn pop_pair(&mut self) -> Option<(usize, usize)> {
        if self.len() < 2 {
            return None;
        }
        let first = self.pop()?;
        let second = self.pop()?;
        Some((first, second))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl Default for PendingQueue {
    fn default() -> Self {
        Self::new()
    }
}
