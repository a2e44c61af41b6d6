//! Growable array with explicit capacity management
//!
//! Capacity is tracked by the array itself rather than left to `Vec`'s
//! growth policy: it starts at 4, doubles when an insert finds the array
//! full, and only ever shrinks through [`DynArray::resize`].

/// Smallest capacity an array is created or reset with
pub const MIN_CAPACITY: usize = 4;

/// Insertion-ordered buffer with doubling growth
#[derive(Debug, Clone, PartialEq)]
pub struct DynArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> DynArray<T> {
    /// Create an empty array with the minimum capacity
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Create an empty array with the given capacity (at least 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity (number of slots before the next doubling)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a value, doubling the capacity first if the array is full
    pub fn push(&mut self, value: T) {
        if self.items.len() >= self.capacity {
            self.resize((self.capacity * 2).max(MIN_CAPACITY));
        }
        self.items.push(value);
    }

    /// Change the capacity. Shrinking below the current length drops the
    /// trailing elements.
    pub fn resize(&mut self, new_capacity: usize) {
        let new_capacity = new_capacity.max(1);
        self.items.truncate(new_capacity);
        if new_capacity > self.items.len() {
            self.items.reserve_exact(new_capacity - self.items.len());
        }
        self.items.shrink_to(new_capacity);
        self.capacity = new_capacity;
    }

    /// Remove the element at `index`, shifting later elements left
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Index of the first element matching the predicate
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Discard all elements and reset to the minimum capacity
    pub fn reset(&mut self) {
        self.items = Vec::with_capacity(MIN_CAPACITY);
        self.capacity = MIN_CAPACITY;
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_min_capacity() {
        let array: DynArray<i32> = DynArray::new();
        assert_eq!(array.capacity(), MIN_CAPACITY);
        assert!(array.is_empty());
    }

    #[test]
    fn test_doubles_when_full() {
        let mut array = DynArray::new();
        for i in 0..4 {
            array.push(i);
        }
        assert_eq!(array.capacity(), 4);

        array.push(4);
        assert_eq!(array.capacity(), 8);

        for i in 5..9 {
            array.push(i);
        }
        assert_eq!(array.capacity(), 16);
        assert_eq!(array.len(), 9);
        assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut array = DynArray::new();
        for i in 0..5 {
            array.push(i);
        }

        assert_eq!(array.remove(1), Some(1));
        assert_eq!(array.as_slice(), &[0, 2, 3, 4]);
        assert_eq!(array.remove(10), None);
        // Capacity never shrinks on removal
        assert_eq!(array.capacity(), 8);
    }

    #[test]
    fn test_explicit_shrink_truncates() {
        let mut array = DynArray::new();
        for i in 0..6 {
            array.push(i);
        }

        array.resize(3);
        assert_eq!(array.capacity(), 3);
        assert_eq!(array.as_slice(), &[0, 1, 2]);

        array.resize(0);
        assert_eq!(array.capacity(), 1);
        assert_eq!(array.len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut array = DynArray::new();
        for i in 0..10 {
            array.push(i);
        }

        array.reset();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), MIN_CAPACITY);
    }

    #[test]
    fn test_position() {
        let mut array = DynArray::new();
        array.push("a");
        array.push("b");
        array.push("b");

        assert_eq!(array.position(|s| *s == "b"), Some(1));
        assert_eq!(array.position(|s| *s == "z"), None);
    }
}
