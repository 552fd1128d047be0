//! LinkedList - a doubly linked list over an arena of links.
//!
//! Links are addressed by [`NodeId`] handles rather than pointers:
//! - `next` is the forward link followed by traversal
//! - `prev` is a plain back-reference, never an owner
//! - freed slots are recycled through a free list

use std::fmt;

use crate::common::NodeId;
use crate::list::{IntoIter, Iter};

/// One element and its neighbours.
#[derive(Debug, Clone)]
pub(super) struct Link<T> {
    pub(super) value: T,
    pub(super) prev: Option<NodeId>,
    pub(super) next: Option<NodeId>,
}

/// A doubly linked list.
///
/// Head and tail operations are O(1). Positional operations walk from
/// whichever end is closer, so they are O(n). Positions outside the list
/// never panic: they return `None` or `false` and leave the list unchanged.
///
/// # Example
/// ```
/// use arbor::LinkedList;
///
/// let mut list = LinkedList::from_values([1, 2, 3]);
/// list.prepend(0);
/// list.append(4);
/// assert_eq!(list.len(), 5);
///
/// assert_eq!(list.shift(), Some(0));
/// assert_eq!(list.pop(), Some(4));
/// assert!(list.swap(0, 2));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
///
/// assert_eq!(list.get(9), None);
/// assert_eq!(list.remove(9), None);
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    /// Arena of links; None marks a free slot.
    slots: Vec<Option<Link<T>>>,

    /// Free slot handles (LIFO).
    free_list: Vec<NodeId>,

    head: Option<NodeId>,
    tail: Option<NodeId>,

    /// Maintained on every mutation, never recomputed.
    len: usize,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create a list holding `values` in iteration order.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.link(id)).map(|link| &link.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.link(id)).map(|link| &link.value)
    }

    /// Value at `index`, or None if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        let id = self.locate(index)?;
        self.link(id).map(|link| &link.value)
    }

    /// Mutable value at `index`, or None if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let id = self.locate(index)?;
        self.link_mut(id).map(|link| &mut link.value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    // ========================================================================
    // Public API: mutation
    // ========================================================================

    /// Add `value` at the front.
    pub fn prepend(&mut self, value: T) {
        let old_head = self.head;
        let id = self.allocate(Link {
            value,
            prev: None,
            next: old_head,
        });

        match old_head.and_then(|head| self.link_mut(head)) {
            Some(link) => link.prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    /// Add `value` at the back.
    pub fn append(&mut self, value: T) {
        let old_tail = self.tail;
        let id = self.allocate(Link {
            value,
            prev: old_tail,
            next: None,
        });

        match old_tail.and_then(|tail| self.link_mut(tail)) {
            Some(link) => link.next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Insert `value` so that it ends up at `index`.
    ///
    /// Everything at or after `index` moves one position right. `0`
    /// prepends and `len()` appends. Returns false (and changes nothing)
    /// when `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        if index > self.len {
            return false;
        }
        if index == 0 {
            self.prepend(value);
            return true;
        }
        if index == self.len {
            self.append(value);
            return true;
        }

        let Some(at) = self.locate(index) else {
            return false;
        };
        let prev = self.link(at).and_then(|link| link.prev);
        let id = self.allocate(Link {
            value,
            prev,
            next: Some(at),
        });

        if let Some(link) = self.link_mut(at) {
            link.prev = Some(id);
        }
        if let Some(link) = prev.and_then(|prev| self.link_mut(prev)) {
            link.next = Some(id);
        }
        self.len += 1;
        true
    }

    /// Remove and return the first value.
    pub fn shift(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(head)
    }

    /// Remove and return the last value.
    pub fn pop(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    /// Remove and return the value at `index`, or None if out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let id = self.locate(index)?;
        self.unlink(id)
    }

    /// Exchange the values stored at `a` and `b`.
    ///
    /// Only the values move; the links stay where they are. Returns false
    /// when either index is out of range, in which case nothing changes.
    /// Swapping an index with itself is a no-op that returns true.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        let (Some(x), Some(y)) = (self.locate(a), self.locate(b)) else {
            return false;
        };
        if x == y {
            return true;
        }

        let (lo, hi) = if x.0 < y.0 { (x.0, y.0) } else { (y.0, x.0) };
        let (left, right) = self.slots.split_at_mut(hi);
        if let (Some(l), Some(r)) = (left[lo].as_mut(), right[0].as_mut()) {
            std::mem::swap(&mut l.value, &mut r.value);
        }
        true
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // ========================================================================
    // Internal: arena
    // ========================================================================

    #[inline]
    pub(super) fn link(&self, id: NodeId) -> Option<&Link<T>> {
        self.slots.get(id.0)?.as_ref()
    }

    #[inline]
    fn link_mut(&mut self, id: NodeId) -> Option<&mut Link<T>> {
        self.slots.get_mut(id.0)?.as_mut()
    }

    #[inline]
    pub(super) fn head(&self) -> Option<NodeId> {
        self.head
    }

    #[inline]
    pub(super) fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    fn allocate(&mut self, link: Link<T>) -> NodeId {
        match self.free_list.pop() {
            Some(id) => {
                self.slots[id.0] = Some(link);
                id
            }
            None => {
                self.slots.push(Some(link));
                NodeId::new(self.slots.len() - 1)
            }
        }
    }

    /// Handle of the link at `index`, walking from the closer end.
    fn locate(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }

        if index <= self.len / 2 {
            let mut current = self.head?;
            for _ in 0..index {
                current = self.link(current)?.next?;
            }
            Some(current)
        } else {
            let mut current = self.tail?;
            for _ in 0..(self.len - 1 - index) {
                current = self.link(current)?.prev?;
            }
            Some(current)
        }
    }

    /// Detach `id` from its neighbours, free its slot and return its value.
    fn unlink(&mut self, id: NodeId) -> Option<T> {
        let link = self.slots.get_mut(id.0)?.take()?;
        self.free_list.push(id);

        match link.prev.and_then(|prev| self.link_mut(prev)) {
            Some(prev) => prev.next = link.next,
            None => self.head = link.next,
        }
        match link.next.and_then(|next| self.link_mut(next)) {
            Some(next) => next.prev = link.prev,
            None => self.tail = link.prev,
        }
        self.len -= 1;
        Some(link.value)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}
