use super::*;
use std::collections::VecDeque;

/// First in, first out. Keys are ignored.
#[derive(Debug, Clone)]
pub struct Queue<T>(VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T, _: Cost) {
        self.0.push_back(item);
    }
    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}
