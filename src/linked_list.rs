//! Doubly linked list over an arena of nodes.

use core::fmt;

use slab::Slab;

use crate::cursor::Cursor;
use crate::error::{ListError, Result};
use crate::list::{fmt_elements, List, NullableElements};
use crate::node::{Node, NodeId};

/// A doubly linked list.
///
/// Nodes are owned by an arena and refer to their neighbours by key, so the
/// forward and backward links carry no ownership. Index lookups walk from
/// whichever end of the chain is closer.
pub struct LinkedList<T> {
    nodes: Slab<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends an element to the back of the list. Always returns `true`.
    pub fn add(&mut self, elt: T) -> bool {
        let last = self.tail;
        let id = self.nodes.insert(Node::new(elt, last, None));
        match last {
            None => self.head = Some(id),
            Some(last) => self.nodes[last].next = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        true
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let id = self.locate(index)?;
        Ok(&self.nodes[id].element)
    }

    /// Removes the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let id = self.locate(index)?;
        self.unlink(id)
    }

    /// Removes the lowest-index element equal to `elt`.
    pub fn remove_value(&mut self, elt: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_first_by(|e| e == elt).is_some()
    }

    /// Removes and returns the first element, walking from the head, that
    /// matches `pred`.
    pub(crate) fn remove_first_by<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut curr = self.head;
        while let Some(id) = curr {
            let node = &self.nodes[id];
            if pred(&node.element) {
                return self.unlink(id).ok();
            }
            curr = node.next;
        }
        None
    }

    /// Returns a cursor that can remove while it traverses.
    pub fn cursor(&mut self) -> Cursor<&mut Self> {
        Cursor::new(self)
    }

    /// Returns a borrowing iterator over the elements, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            curr: self.head,
            remaining: self.len,
        }
    }

    /// Finds the node at `index`, walking from the nearer end.
    fn locate(&self, index: usize) -> Result<NodeId> {
        if index >= self.len {
            return Err(ListError::out_of_range(index, self.len));
        }
        let found = if self.from_head(index) {
            self.walk(self.head, index, |node| node.next)
        } else {
            self.walk(self.tail, self.len - 1 - index, |node| node.prev)
        };
        found.ok_or(ListError::InvalidArgument("chain shorter than its length"))
    }

    // the midpoint itself is reached from the head
    #[inline]
    fn from_head(&self, index: usize) -> bool {
        index <= self.len / 2
    }

    fn walk<F>(&self, start: Option<NodeId>, steps: usize, step: F) -> Option<NodeId>
    where
        F: Fn(&Node<T>) -> Option<NodeId>,
    {
        let mut curr = start;
        for _ in 0..steps {
            curr = step(self.nodes.get(curr?)?);
        }
        curr
    }

    /// Splices the node out of the chain and releases it from the arena.
    fn unlink(&mut self, id: NodeId) -> Result<T> {
        if !self.nodes.contains(id) {
            return Err(ListError::InvalidArgument("cannot unlink a node outside the chain"));
        }
        // dropping the slot releases the node's links along with it
        let Node {
            element,
            prev,
            next,
        } = self.nodes.remove(id);

        match prev {
            None => self.head = next,
            Some(prev) => self.nodes[prev].next = next,
        }
        match next {
            None => self.tail = prev,
            Some(next) => self.nodes[next].prev = prev,
        }
        self.len -= 1;

        if self.len == 0 {
            tracing::trace!("chain emptied, resetting node arena");
            self.nodes = Slab::new();
        }
        Ok(element)
    }
}

impl<T> List for LinkedList<T> {
    type Elem = T;
    type Ref<'a>
        = &'a T
    where
        Self: 'a;
    type Removed = T;

    fn add(&mut self, elt: T) -> bool {
        LinkedList::add(self, elt)
    }

    fn get(&self, index: usize) -> Result<&T> {
        LinkedList::get(self, index)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        LinkedList::remove_at(self, index)
    }

    fn remove_value(&mut self, elt: &T) -> bool
    where
        T: PartialEq,
    {
        LinkedList::remove_value(self, elt)
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// An iterator over the elements of a `LinkedList`.
///
/// This `struct` is created by [`LinkedList::iter()`]. See its
/// documentation for more.
pub struct Iter<'a, T: 'a> {
    list: &'a LinkedList<T>,
    curr: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes.get(self.curr?)?;
        self.curr = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.add(elt);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, self.iter())
    }
}

impl<T: fmt::Display> LinkedList<Option<T>> {
    /// Renders the list like `to_string()`, writing absent elements as `null`.
    pub fn display_nullable(&self) -> impl fmt::Display + '_ {
        NullableElements(self.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // walks both directions and checks they agree with `len`
    fn check_links<T>(list: &LinkedList<T>) {
        let mut forward = Vec::new();
        let mut curr = list.head;
        let mut prev = None;
        while let Some(id) = curr {
            assert_eq!(list.nodes[id].prev, prev);
            forward.push(id);
            prev = curr;
            curr = list.nodes[id].next;
        }
        assert_eq!(prev, list.tail);
        assert_eq!(forward.len(), list.len());

        let mut backward = Vec::new();
        let mut curr = list.tail;
        while let Some(id) = curr {
            backward.push(id);
            curr = list.nodes[id].prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(list.nodes.len(), list.len());
    }

    #[test]
    fn test_list() {
        let mut list = LinkedList::new();
        assert!(list.is_empty());
        check_links(&list);

        list.add(1);
        assert!(!list.is_empty());
        assert_eq!(*list.get(0).unwrap(), 1);
        check_links(&list);

        list.add(2);
        list.add(3);
        assert_eq!(list.to_string(), "[1, 2, 3]");
        check_links(&list);

        assert_eq!(list.remove_at(1), Ok(2));
        check_links(&list);
        assert_eq!(list.remove_at(1), Ok(3));
        check_links(&list);
        assert_eq!(list.remove_at(0), Ok(1));
        check_links(&list);
        assert!(list.is_empty());
        assert_eq!(list.remove_at(0), Err(ListError::out_of_range(0, 0)));
    }

    #[test]
    fn test_locate_from_both_ends() {
        for len in 1..10 {
            let list: LinkedList<usize> = (0..len).collect();
            for i in 0..len {
                assert_eq!(*list.get(i).unwrap(), i);
            }
            assert_eq!(list.get(len), Err(ListError::out_of_range(len, len)));
        }
    }

    #[test]
    fn test_walk_steps() {
        let list: LinkedList<usize> = (0..4).collect();
        // index 2 of 4 is the midpoint and is reached from the head in two steps
        assert_eq!(list.walk(list.head, 2, |n| n.next), list.locate(2).ok());
        assert_eq!(list.walk(list.tail, 0, |n| n.prev), list.locate(3).ok());
        assert_eq!(list.walk(list.head, 9, |n| n.next), None);
    }

    #[test]
    fn test_midpoint_from_head() {
        let even: LinkedList<usize> = (0..4).collect();
        assert!(even.from_head(2));
        assert!(!even.from_head(3));
        let odd: LinkedList<usize> = (0..5).collect();
        assert!(odd.from_head(2));
        assert!(!odd.from_head(3));

        // with the backward chain cut at the tail only head walks still resolve
        for len in [4, 5] {
            let mut list: LinkedList<usize> = (0..len).collect();
            let tail = list.tail.unwrap();
            list.nodes[tail].prev = None;
            assert_eq!(list.get(len / 2), Ok(&(len / 2)));
            assert_eq!(list.get(len - 1), Ok(&(len - 1)));
        }
        let mut list: LinkedList<usize> = (0..5).collect();
        let tail = list.tail.unwrap();
        list.nodes[tail].prev = None;
        assert!(matches!(list.get(3), Err(ListError::InvalidArgument(_))));
    }

    #[test]
    fn test_remove_value() {
        let mut list: LinkedList<i32> = [4, 5, 4, 6].into_iter().collect();
        assert!(list.remove_value(&4));
        assert_eq!(list.to_string(), "[5, 4, 6]");
        check_links(&list);
        assert!(list.remove_value(&6));
        assert_eq!(list.to_string(), "[5, 4]");
        check_links(&list);
        assert!(!list.remove_value(&7));
        assert_eq!(list.to_string(), "[5, 4]");
    }

    #[test]
    fn test_unlink_vacant() {
        let mut list: LinkedList<i32> = [1].into_iter().collect();
        assert!(matches!(
            list.unlink(42),
            Err(ListError::InvalidArgument(_))
        ));
        assert_eq!(list.len(), 1);
        check_links(&list);
    }

    #[test]
    fn test_refill_after_drain() {
        let mut list: LinkedList<i32> = (0..6).collect();
        while !list.is_empty() {
            list.remove_at(list.len() - 1).unwrap();
            check_links(&list);
        }
        assert!(list.head.is_none() && list.tail.is_none());
        list.add(9);
        list.add(10);
        assert_eq!(*list.get(0).unwrap(), 9);
        assert_eq!(*list.get(1).unwrap(), 10);
        check_links(&list);
    }

    #[test]
    fn test_iter() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert!(iter.next().is_none());
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[test]
    fn test_display_nullable() {
        let mut list: LinkedList<Option<&str>> = [None, Some("a"), None].into_iter().collect();
        assert_eq!(list.display_nullable().to_string(), "[null, a, null]");
        assert!(list.remove_value(&None));
        assert_eq!(list.display_nullable().to_string(), "[a, null]");
        check_links(&list);
    }
}
