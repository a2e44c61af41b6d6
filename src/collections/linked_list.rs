//! Singly linked list over an index arena
//!
//! Nodes live in a dense `Vec` and link to each other by index. Insertion
//! happens at the head, removal unlinks a node and compacts the arena, and
//! sorting relinks nodes in place without moving their values.

/// One list node: a value plus the index of its successor
#[derive(Debug, Clone)]
struct Node<T> {
    info: T,
    next: Option<usize>,
}

/// Singly linked list with head insertion and in-place merge sort
#[derive(Debug, Clone)]
pub struct SinglyLinkedList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
}

impl<T> SinglyLinkedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }

    /// Number of linked nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Insert a value as the new head
    pub fn push_front(&mut self, info: T) {
        let index = self.nodes.len();
        self.nodes.push(Node {
            info,
            next: self.head,
        });
        self.head = Some(index);
    }

    /// Unlink and return the first value (in list order) matching the predicate
    pub fn remove_first<P>(&mut self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;

        while let Some(index) = cursor {
            if predicate(&self.nodes[index].info) {
                let next = self.nodes[index].next;
                match prev {
                    None => self.head = next,
                    Some(p) => self.nodes[p].next = next,
                }
                return Some(self.release(index));
            }
            prev = cursor;
            cursor = self.nodes[index].next;
        }

        None
    }

    /// Check whether any value matches the predicate
    pub fn contains<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }

    /// Iterate in link order, starting at the head
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Merge sort the list by relinking nodes.
    ///
    /// `keep_left(a, b)` returns true when `a` may precede `b`. When it holds
    /// for equal keys the left run wins ties and the sort is stable.
    pub fn merge_sort_by<F>(&mut self, keep_left: F)
    where
        F: Fn(&T, &T) -> bool,
    {
        self.head = self.merge_sort(self.head, &keep_left);
    }

    fn merge_sort<F>(&mut self, start: Option<usize>, keep_left: &F) -> Option<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        let first = match start {
            Some(index) if self.nodes[index].next.is_some() => index,
            _ => return start,
        };

        let second = self.split(first);
        let left = self.merge_sort(Some(first), keep_left);
        let right = self.merge_sort(second, keep_left);
        self.merge(left, right, keep_left)
    }

    /// Cut the run starting at `start` after its midpoint and return the
    /// head of the second half. The first half gets the extra node when the
    /// run length is odd.
    fn split(&mut self, start: usize) -> Option<usize> {
        let mut slow = start;
        let mut fast = self.nodes[start].next;

        while let Some(f) = fast {
            let Some(after) = self.nodes[f].next else {
                break;
            };
            if let Some(s) = self.nodes[slow].next {
                slow = s;
            }
            fast = self.nodes[after].next;
        }

        self.nodes[slow].next.take()
    }

    fn merge<F>(
        &mut self,
        mut left: Option<usize>,
        mut right: Option<usize>,
        keep_left: &F,
    ) -> Option<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut head = None;
        let mut tail: Option<usize> = None;

        loop {
            let picked = match (left, right) {
                (Some(l), Some(r)) => {
                    if keep_left(&self.nodes[l].info, &self.nodes[r].info) {
                        left = self.nodes[l].next;
                        Some(l)
                    } else {
                        right = self.nodes[r].next;
                        Some(r)
                    }
                }
                (rest, None) | (None, rest) => {
                    self.link(&mut head, tail, rest);
                    break;
                }
            };
            self.link(&mut head, tail, picked);
            tail = picked;
        }

        head
    }

    fn link(&mut self, head: &mut Option<usize>, tail: Option<usize>, node: Option<usize>) {
        match tail {
            Some(t) => self.nodes[t].next = node,
            None => *head = node,
        }
    }

    /// Remove an already unlinked node from the arena. The last arena slot is
    /// moved into the hole, so the link that pointed at it is patched.
    fn release(&mut self, index: usize) -> T {
        let last = self.nodes.len() - 1;
        let node = self.nodes.swap_remove(index);

        if index != last {
            if self.head == Some(last) {
                self.head = Some(index);
            } else if let Some(pred) = self.nodes.iter_mut().find(|n| n.next == Some(last)) {
                pred.next = Some(index);
            }
        }

        node.info
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a [`SinglyLinkedList`] in link order
pub struct Iter<'a, T> {
    list: &'a SinglyLinkedList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let node = &self.list.nodes[index];
        self.cursor = node.next;
        Some(&node.info)
    }
}
