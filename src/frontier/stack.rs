use super::*;

/// Last in, first out. Keys are ignored.
#[derive(Debug, Clone)]
pub struct Stack<T>(Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T, _: Cost) {
        self.0.push(item);
    }
    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}
