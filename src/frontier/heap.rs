use super::*;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Smallest key first. Equal keys pop in insertion order, which keeps
/// uniform-cost and A* deterministic for a fixed successor order.
#[derive(Debug, Clone)]
pub struct Heap<T> {
    heap: BinaryHeap<Entry<T>>,
    tick: usize,
}

impl<T> Default for Heap<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            tick: 0,
        }
    }
}

impl<T> Frontier<T> for Heap<T> {
    fn push(&mut self, item: T, key: Cost) {
        self.tick += 1;
        self.heap.push(Entry {
            key,
            tick: self.tick,
            item,
        });
    }
    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// heap slot. ordering is reversed so that
/// the max-heap pops the min (key, tick).
#[derive(Debug, Clone)]
struct Entry<T> {
    key: Cost,
    tick: usize,
    item: T,
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.tick.cmp(&self.tick))
    }
}
impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Eq for Entry<T> {}
impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
