//! FIFO accumulator used by the tree traversals.

use std::collections::VecDeque;

/// First-in first-out collector.
///
/// Traversals enqueue cards in visit order and then drain the queue into a `Vec`,
/// so the resulting sequence always matches the order of `enqueue` calls.
#[derive(Debug, Clone)]
pub struct OrderedQueue<T> {
    items: VecDeque<T>,
}

impl<T> Default for OrderedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes the oldest value, `None` once the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn drain_to_vec(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(v) = self.dequeue() {
            out.push(v);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_enqueue_order() {
        let mut q = OrderedQueue::new();
        q.enqueue(3);
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue(), Some(3));
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn dequeue_on_empty_is_none() {
        let mut q: OrderedQueue<u8> = OrderedQueue::default();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn drain_empties_queue() {
        let mut q = OrderedQueue::new();
        for v in ["a", "b", "c"] {
            q.enqueue(v);
        }
        assert_eq!(q.drain_to_vec(), vec!["a", "b", "c"]);
        assert!(q.is_empty());
        assert!(q.drain_to_vec().is_empty());

        // queue is reusable after draining
        q.enqueue("d");
        assert_eq!(q.drain_to_vec(), vec!["d"]);
    }
}
