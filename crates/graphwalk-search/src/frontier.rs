use std::collections::VecDeque;
use std::hash::Hash;

use graphwalk_core::{PriorityQueue, Weight};

/// Pending-work container driving a search.
///
/// The container's discipline decides the search: a stack gives depth-first
/// order, a queue breadth-first, a priority queue lowest-priority-first.
/// Stacks and queues ignore the priority they are given.
pub trait Frontier<T> {
    fn push(&mut self, item: T, priority: Weight);
    fn pop(&mut self) -> Option<T>;
    fn is_empty(&self) -> bool;
}

impl<T> Frontier<T> for Vec<T> {
    fn push(&mut self, item: T, _priority: Weight) {
        Vec::push(self, item);
    }

    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> Frontier<T> for VecDeque<T> {
    fn push(&mut self, item: T, _priority: Weight) {
        self.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<T> Frontier<T> for PriorityQueue<T, Weight>
where
    T: Eq + Hash + Clone,
{
    fn push(&mut self, item: T, priority: Weight) {
        self.insert(item, priority);
    }

    fn pop(&mut self) -> Option<T> {
        PriorityQueue::pop(self)
    }

    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }
}
