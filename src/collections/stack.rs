//! Generic LIFO stack
//!
//! Backs the tracker's undo log. The top of the stack is the end of the
//! underlying vector, so push and pop are O(1) and cloning yields an
//! independent stack with the same top-to-bottom order.

/// Last-in-first-out container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push a value; it becomes the new top
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return the top value, or `None` if the stack is empty
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Borrow the top value without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate from top to bottom
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
