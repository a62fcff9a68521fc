//! Binary min-heap with decrease-key.
//!
//! Each payload is stored at most once. A reverse index from payload to heap
//! slot lets `change_priority` find its entry without scanning, which is what
//! vertex-based Dijkstra needs on every edge relaxation.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Weight;
use crate::{GraphError, GraphResult};

#[derive(Debug, Clone)]
struct HeapEntry<T, P> {
    item: T,
    priority: P,
    /// Insertion rank, used to break priority ties.
    rank: u64,
}

fn parent(child: usize) -> usize {
    (child - 1) / 2
}

fn left(parent: usize) -> usize {
    parent * 2 + 1
}

/// Mutable min-priority queue keyed by payload.
///
/// Lower priorities come out first; equal priorities come out in insertion
/// order. Inserting a payload that is already queued replaces its priority.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P = Weight> {
    heap: Vec<HeapEntry<T, P>>,
    positions: HashMap<T, usize>,
    next_rank: u64,
}

impl<T, P> Default for PriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> PriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd,
{
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            positions: HashMap::new(),
            next_rank: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            next_rank: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Current priority of `item`, if it is queued.
    pub fn priority(&self, item: &T) -> Option<&P> {
        self.positions.get(item).map(|&pos| &self.heap[pos].priority)
    }

    /// The minimum entry, without removing it.
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.first().map(|e| (&e.item, &e.priority))
    }

    /// Add `item` with `priority`, or replace the priority of a queued `item`.
    pub fn insert(&mut self, item: T, priority: P) {
        if let Some(&pos) = self.positions.get(&item) {
            self.heap[pos].priority = priority;
            self.restore(pos);
            return;
        }
        let pos = self.push_unordered(item, priority);
        self.sift_up(pos);
    }

    /// Remove and return the minimum payload.
    pub fn pop(&mut self) -> Option<T> {
        self.pop_with_priority().map(|(item, _)| item)
    }

    pub fn pop_with_priority(&mut self) -> Option<(T, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.positions.remove(&entry.item);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.item, entry.priority))
    }

    /// Move `item` to `priority`, fixing up the heap in whichever direction it moved.
    ///
    /// Fails with `NotFound` if `item` is not queued.
    pub fn change_priority(&mut self, item: &T, priority: P) -> GraphResult<()>
    where
        T: Debug,
    {
        let pos = *self
            .positions
            .get(item)
            .ok_or_else(|| GraphError::not_found(item))?;
        self.heap[pos].priority = priority;
        self.restore(pos);
        Ok(())
    }

    /// Lazily extract every payload in ascending priority order.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, P> {
        DrainSorted { queue: self }
    }

    fn push_unordered(&mut self, item: T, priority: P) -> usize {
        let pos = self.heap.len();
        self.positions.insert(item.clone(), pos);
        self.heap.push(HeapEntry {
            item,
            priority,
            rank: self.next_rank,
        });
        self.next_rank += 1;
        pos
    }

    /// True when the entry at `a` must come out before the entry at `b`.
    fn precedes(&self, a: usize, b: usize) -> bool {
        let (x, y) = (&self.heap[a], &self.heap[b]);
        match x.priority.partial_cmp(&y.priority) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => x.rank < y.rank,
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        if let Some(pos) = self.positions.get_mut(&self.heap[a].item) {
            *pos = a;
        }
        if let Some(pos) = self.positions.get_mut(&self.heap[b].item) {
            *pos = b;
        }
    }

    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let up = parent(pos);
            if !self.precedes(pos, up) {
                break;
            }
            self.swap(pos, up);
            pos = up;
        }
        pos
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let l = left(pos);
            if l >= len {
                break;
            }
            let r = l + 1;
            let child = if r < len && self.precedes(r, l) { r } else { l };
            if !self.precedes(child, pos) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }

    fn restore(&mut self, pos: usize) {
        if self.sift_up(pos) == pos {
            self.sift_down(pos);
        }
    }
}

impl<T, P> FromIterator<(T, P)> for PriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd,
{
    /// Build the heap in linear time; later duplicates replace earlier priorities.
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        for (item, priority) in iter {
            match queue.positions.get(&item) {
                Some(&pos) => queue.heap[pos].priority = priority,
                None => {
                    queue.push_unordered(item, priority);
                }
            }
        }
        for pos in (0..queue.heap.len() / 2).rev() {
            queue.sift_down(pos);
        }
        queue
    }
}

impl<T, P> IntoIterator for PriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd,
{
    type Item = T;
    type IntoIter = IntoSorted<T, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoSorted { queue: self }
    }
}

/// Owning ascending-priority iterator over a `PriorityQueue`.
#[derive(Debug)]
pub struct IntoSorted<T, P> {
    queue: PriorityQueue<T, P>,
}

impl<T, P> Iterator for IntoSorted<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

/// Borrowing ascending-priority iterator; see [`PriorityQueue::drain_sorted`].
#[derive(Debug)]
pub struct DrainSorted<'a, T, P> {
    queue: &'a mut PriorityQueue<T, P>,
}

impl<T, P> Iterator for DrainSorted<'_, T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}
