//! `FibonacciHeap`: a mutable-priority min-queue.
//!
//! Nodes are stored in an arena (`Vec` of occupied/free slots threaded by a
//! free list) and every queued item maps to its arena index, so `decrease_key`
//! can reach an arbitrary node without back-pointers. Tree links (parent,
//! first child, left/right siblings) are plain indices into the arena.
//!
//! The ordering is injected through a [`Comparator`], which lets the same
//! structure serve "shortest" (smaller is better) and "critical" (larger is
//! better) semantics.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `insert` | \(O(1)\) | Splices a singleton tree into the root list |
//! | `peek_min` | \(O(1)\) | Min pointer |
//! | `decrease_key` | \(O(1)\) amortized | Cut + cascading cut |
//! | `extract_min` | \(O(\log n)\) amortized | Promotes children, consolidates roots |

use core::cmp::Ordering;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;
use std::collections::HashMap;

use thiserror::Error;

/// A total order over priorities.
pub trait Comparator<P> {
    /// Compares two priorities; `Less` means `a` is extracted before `b`.
    fn compare(&self, a: &P, b: &P) -> Ordering;
}

/// Orders priorities by their `Ord` implementation (min-heap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<P: Ord> Comparator<P> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &P, b: &P) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts a comparison closure into a [`Comparator`].
#[derive(Clone, Copy)]
pub struct CompareFn<F>(pub F);

impl<P, F> Comparator<P> for CompareFn<F>
where
    F: Fn(&P, &P) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &P, b: &P) -> Ordering {
        (self.0)(a, b)
    }
}

/// Errors reported by [`FibonacciHeap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `extract_min` was called on an empty heap.
    #[error("the priority queue is empty")]
    Empty,
    /// `insert` was called for an item that is already queued.
    #[error("the item is already queued")]
    DuplicateItem,
    /// `decrease_key` was called for an item that is not queued.
    #[error("the item is not queued")]
    ItemNotFound,
    /// `decrease_key` was called with a priority that does not strictly improve.
    #[error("the new priority does not improve the current one")]
    NotImproved,
}

struct Node<T, P> {
    item: T,
    priority: P,
    parent: Option<usize>,
    child: Option<usize>,
    left: usize,
    right: usize,
    degree: usize,
    marked: bool,
}

enum Slot<T, P> {
    Occupied(Node<T, P>),
    Free(Option<usize>),
}

/// A Fibonacci heap keyed by item identity.
///
/// Each item may be queued at most once; its priority can then be lowered
/// in place with [`decrease_key`](Self::decrease_key).
pub struct FibonacciHeap<T, P, C = NaturalOrder, S = RandomState> {
    slots: Vec<Slot<T, P>>,
    free_head: Option<usize>,
    index: HashMap<T, usize, S>,
    min: Option<usize>,
    comparator: C,
}

impl<T, P> FibonacciHeap<T, P> {
    /// Creates an empty min-heap ordered by `P: Ord`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, P, C> FibonacciHeap<T, P, C> {
    /// Creates an empty heap ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_comparator_and_hasher(comparator, RandomState::new())
    }

    /// Creates an empty heap with room for `capacity` items.
    pub fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            index: HashMap::with_capacity(capacity),
            min: None,
            comparator,
        }
    }
}

impl<T, P, C, S> FibonacciHeap<T, P, C, S> {
    /// Creates an empty heap with an explicit comparator and item hasher.
    pub fn with_comparator_and_hasher(comparator: C, hasher: S) -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            index: HashMap::with_hasher(hasher),
            min: None,
            comparator,
        }
    }

    /// Returns the number of queued items.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Returns the comparator ordering this heap.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes every item, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.free_head = None;
        self.min = None;
    }

    /// Returns the minimum item and its priority without removing it.
    pub fn peek_min(&self) -> Option<(&T, &P)> {
        self.min.map(|idx| {
            let node = self.node(idx);
            (&node.item, &node.priority)
        })
    }

    #[inline]
    fn node(&self, idx: usize) -> &Node<T, P> {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Free(_) => unreachable!("heap index {idx} points at a free slot"),
        }
    }

    #[inline]
    fn node_mut(&mut self, idx: usize) -> &mut Node<T, P> {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Free(_) => unreachable!("heap index {idx} points at a free slot"),
        }
    }

    fn alloc(&mut self, item: T, priority: P) -> usize {
        let idx = match self.free_head {
            Some(idx) => {
                self.free_head = match &self.slots[idx] {
                    Slot::Free(next) => *next,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                idx
            }
            None => self.slots.len(),
        };

        let node = Node {
            item,
            priority,
            parent: None,
            child: None,
            left: idx,
            right: idx,
            degree: 0,
            marked: false,
        };

        if idx == self.slots.len() {
            self.slots.push(Slot::Occupied(node));
        } else {
            self.slots[idx] = Slot::Occupied(node);
        }
        idx
    }

    fn release(&mut self, idx: usize) -> Node<T, P> {
        let slot = core::mem::replace(&mut self.slots[idx], Slot::Free(self.free_head));
        self.free_head = Some(idx);
        match slot {
            Slot::Occupied(node) => node,
            Slot::Free(_) => unreachable!("released a free slot"),
        }
    }

    /// Collects the circular sibling list starting at `start`.
    fn ring(&self, start: usize) -> Vec<usize> {
        let mut members = vec![start];
        let mut cur = self.node(start).right;
        while cur != start {
            members.push(cur);
            cur = self.node(cur).right;
        }
        members
    }

    /// Inserts `idx` to the right of `anchor` in the anchor's sibling list.
    fn splice(&mut self, anchor: usize, idx: usize) {
        let right = self.node(anchor).right;
        {
            let node = self.node_mut(idx);
            node.left = anchor;
            node.right = right;
        }
        self.node_mut(right).left = idx;
        self.node_mut(anchor).right = idx;
    }

    /// Removes `idx` from its sibling list, leaving it a singleton.
    fn unlink(&mut self, idx: usize) {
        let (left, right) = {
            let node = self.node(idx);
            (node.left, node.right)
        };
        self.node_mut(left).right = right;
        self.node_mut(right).left = left;
        let node = self.node_mut(idx);
        node.left = idx;
        node.right = idx;
    }
}

impl<T, P, C, S> FibonacciHeap<T, P, C, S>
where
    T: Eq + Hash + Clone,
    C: Comparator<P>,
    S: BuildHasher,
{
    /// Returns `true` if `item` is currently queued.
    pub fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }

    /// Returns the current priority of a queued item.
    pub fn priority(&self, item: &T) -> Option<&P> {
        self.index.get(item).map(|&idx| &self.node(idx).priority)
    }

    /// Queues `item` with `priority`.
    ///
    /// # Errors
    /// [`HeapError::DuplicateItem`] if the item is already queued.
    pub fn insert(&mut self, item: T, priority: P) -> Result<(), HeapError> {
        if self.index.contains_key(&item) {
            return Err(HeapError::DuplicateItem);
        }
        let idx = self.alloc(item.clone(), priority);
        self.index.insert(item, idx);
        self.add_root(idx);
        Ok(())
    }

    /// Lowers the priority of a queued item.
    ///
    /// # Errors
    /// - [`HeapError::ItemNotFound`] if the item is not queued.
    /// - [`HeapError::NotImproved`] unless `priority` is strictly better than
    ///   the current one under the heap's comparator.
    pub fn decrease_key(&mut self, item: &T, priority: P) -> Result<(), HeapError> {
        let idx = *self.index.get(item).ok_or(HeapError::ItemNotFound)?;
        if self.comparator.compare(&priority, &self.node(idx).priority) != Ordering::Less {
            return Err(HeapError::NotImproved);
        }
        self.node_mut(idx).priority = priority;

        if let Some(parent) = self.node(idx).parent {
            if self.less(idx, parent) {
                self.cut(idx, parent);
                self.cascading_cut(parent);
            }
        }
        if let Some(min) = self.min {
            if self.less(idx, min) {
                self.min = Some(idx);
            }
        }
        Ok(())
    }

    /// Removes and returns the item with the minimum priority.
    ///
    /// # Errors
    /// [`HeapError::Empty`] if nothing is queued.
    pub fn extract_min(&mut self) -> Result<(T, P), HeapError> {
        let min = self.min.ok_or(HeapError::Empty)?;

        if let Some(first_child) = self.node(min).child {
            for child in self.ring(first_child) {
                self.unlink(child);
                let node = self.node_mut(child);
                node.parent = None;
                node.marked = false;
                self.splice(min, child);
            }
            let node = self.node_mut(min);
            node.child = None;
            node.degree = 0;
        }

        let next = self.node(min).right;
        self.unlink(min);
        if next == min {
            self.min = None;
        } else {
            self.min = Some(next);
            self.consolidate();
        }

        let node = self.release(min);
        self.index.remove(&node.item);
        Ok((node.item, node.priority))
    }

    /// Removes and returns the minimum item, or `None` when empty.
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.extract_min().ok()
    }

    /// Drains the heap in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<(T, P)> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(entry) = self.pop() {
            out.push(entry);
        }
        out
    }

    /// Verifies heap order, parent links, degrees and the item index.
    ///
    /// Returns `true` if every structural invariant holds.
    pub fn check_invariants(&self) -> bool {
        let Some(min) = self.min else {
            return self.index.is_empty();
        };

        let mut seen = 0usize;
        for root in self.ring(min) {
            if self.node(root).parent.is_some() || self.less(root, min) {
                return false;
            }
            match self.check_subtree(root) {
                Some(count) => seen += count,
                None => return false,
            }
        }

        seen == self.index.len()
            && self
                .index
                .iter()
                .all(|(item, &idx)| matches!(&self.slots[idx], Slot::Occupied(n) if &n.item == item))
    }

    fn check_subtree(&self, idx: usize) -> Option<usize> {
        let node = self.node(idx);
        let Some(first) = node.child else {
            return (node.degree == 0).then_some(1);
        };

        let children = self.ring(first);
        if children.len() != node.degree {
            return None;
        }
        let mut count = 1;
        for child in children {
            if self.node(child).parent != Some(idx) || self.less(child, idx) {
                return None;
            }
            count += self.check_subtree(child)?;
        }
        Some(count)
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.comparator
            .compare(&self.node(a).priority, &self.node(b).priority)
            == Ordering::Less
    }

    fn add_root(&mut self, idx: usize) {
        {
            let node = self.node_mut(idx);
            node.parent = None;
            node.marked = false;
        }
        match self.min {
            None => self.min = Some(idx),
            Some(min) => {
                self.splice(min, idx);
                if self.less(idx, min) {
                    self.min = Some(idx);
                }
            }
        }
    }

    /// Moves `idx` from `parent`'s child list into the root list.
    fn cut(&mut self, idx: usize, parent: usize) {
        let next = self.node(idx).right;
        {
            let p = self.node_mut(parent);
            if p.child == Some(idx) {
                p.child = (next != idx).then_some(next);
            }
            p.degree -= 1;
        }
        self.unlink(idx);
        self.add_root(idx);
    }

    fn cascading_cut(&mut self, mut idx: usize) {
        while let Some(parent) = self.node(idx).parent {
            if !self.node(idx).marked {
                self.node_mut(idx).marked = true;
                return;
            }
            self.cut(idx, parent);
            idx = parent;
        }
    }

    /// Makes root `child` a child of root `parent`.
    fn link(&mut self, child: usize, parent: usize) {
        self.unlink(child);
        {
            let node = self.node_mut(child);
            node.parent = Some(parent);
            node.marked = false;
        }
        match self.node(parent).child {
            None => self.node_mut(parent).child = Some(child),
            Some(first) => self.splice(first, child),
        }
        self.node_mut(parent).degree += 1;
    }

    /// Merges roots of equal degree until all root degrees are distinct.
    fn consolidate(&mut self) {
        let Some(start) = self.min else {
            return;
        };

        let mut by_degree: Vec<Option<usize>> = Vec::new();
        for root in self.ring(start) {
            let mut x = root;
            let mut degree = self.node(x).degree;
            loop {
                if degree >= by_degree.len() {
                    by_degree.resize(degree + 1, None);
                }
                let Some(mut y) = by_degree[degree].take() else {
                    break;
                };
                if self.less(y, x) {
                    core::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                degree += 1;
            }
            by_degree[degree] = Some(x);
        }

        self.min = None;
        for root in by_degree.into_iter().flatten() {
            match self.min {
                Some(min) if !self.less(root, min) => {}
                _ => self.min = Some(root),
            }
        }
    }
}

impl<T, P> Default for FibonacciHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, C, S> fmt::Debug for FibonacciHeap<T, P, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibonacciHeap")
            .field("len", &self.len())
            .field("slots", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_heap_basic() {
        let mut heap = FibonacciHeap::new();
        heap.insert("a", 5).unwrap();
        heap.insert("b", 1).unwrap();
        heap.insert("c", 3).unwrap();

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek_min(), Some((&"b", &1)));
        assert_eq!(heap.extract_min(), Ok(("b", 1)));
        assert_eq!(heap.extract_min(), Ok(("c", 3)));
        assert_eq!(heap.extract_min(), Ok(("a", 5)));
        assert_eq!(heap.extract_min(), Err(HeapError::Empty));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_fibonacci_heap_order() {
        let mut heap = FibonacciHeap::new();
        let data = vec![10, 1, 5, 2, 8, 3, 7, 4, 9, 6];
        for (i, &x) in data.iter().enumerate() {
            heap.insert(i, x).unwrap();
        }
        assert!(heap.check_invariants());

        let result: Vec<i32> = heap.into_sorted_vec().into_iter().map(|(_, p)| p).collect();
        let mut expected = data;
        expected.sort_unstable();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_decrease_key_moves_to_front() {
        let mut heap = FibonacciHeap::new();
        for i in 0..16u32 {
            heap.insert(i, 100 + i).unwrap();
        }
        // Force a consolidation so that later keys sit below other nodes.
        assert_eq!(heap.extract_min(), Ok((0, 100)));
        assert!(heap.check_invariants());

        heap.decrease_key(&15, 1).unwrap();
        assert_eq!(heap.peek_min(), Some((&15, &1)));
        assert_eq!(heap.priority(&15), Some(&1));
        assert!(heap.check_invariants());
    }

    #[test]
    fn test_decrease_key_rejects_non_improvement() {
        let mut heap = FibonacciHeap::new();
        heap.insert('x', 4).unwrap();

        assert_eq!(heap.decrease_key(&'x', 4), Err(HeapError::NotImproved));
        assert_eq!(heap.decrease_key(&'x', 9), Err(HeapError::NotImproved));
        assert_eq!(heap.decrease_key(&'y', 1), Err(HeapError::ItemNotFound));
        assert_eq!(heap.priority(&'x'), Some(&4));
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut heap = FibonacciHeap::new();
        heap.insert(7, 1).unwrap();
        assert_eq!(heap.insert(7, 0), Err(HeapError::DuplicateItem));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn test_cascading_cuts_keep_structure() {
        let mut heap = FibonacciHeap::new();
        for i in 0..64i64 {
            heap.insert(i, i * 10).unwrap();
        }
        heap.extract_min().unwrap();

        // Repeatedly cut nodes out of deep trees, marking and cascading parents.
        for i in (33..64i64).rev().step_by(2) {
            heap.decrease_key(&i, -i).unwrap();
            assert!(heap.check_invariants());
        }
        heap.extract_min().unwrap();
        assert!(heap.check_invariants());

        let mut last = i64::MIN;
        while let Some((_, p)) = heap.pop() {
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_custom_comparator_max_heap() {
        let mut heap = FibonacciHeap::with_comparator(CompareFn(|a: &i32, b: &i32| b.cmp(a)));
        for (i, p) in [3, 9, 1, 7].into_iter().enumerate() {
            heap.insert(i, p).unwrap();
        }
        assert_eq!(heap.extract_min(), Ok((1, 9)));

        // "Decrease" means "improve" under the configured ordering.
        heap.decrease_key(&2, 20).unwrap();
        assert_eq!(heap.extract_min(), Ok((2, 20)));
        assert_eq!(heap.decrease_key(&0, 1), Err(HeapError::NotImproved));
    }

    #[test]
    fn test_slots_are_reused() {
        let mut heap = FibonacciHeap::with_capacity(4, NaturalOrder);
        for round in 0..3 {
            for i in 0..4 {
                heap.insert(i, round * 4 + i).unwrap();
            }
            while heap.pop().is_some() {}
        }
        assert!(heap.slots.len() <= 4);
        assert!(heap.check_invariants());
    }
}
