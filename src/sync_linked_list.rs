//! Lock-guarded doubly linked list.

use alloc::sync::Arc;

use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_utils::CachePadded;
use parking_lot::Mutex;

use crate::cursor::Cursor;
use crate::entry::Entry;
use crate::error::Result;
use crate::linked_list::LinkedList;
use crate::list::{fmt_elements, List, NullableElements};

/// Thread-safe doubly linked list.
///
/// Same locking rules as [`SyncArrayList`](crate::SyncArrayList): one lock per
/// list held for every read and write, and a lock-free size.
pub struct SyncLinkedList<T> {
    inner: Mutex<LinkedList<Arc<T>>>,
    len: CachePadded<AtomicUsize>,
}

impl<T> Default for SyncLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SyncLinkedList<T> {
    /// Creates a new, empty `SyncLinkedList`.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(LinkedList::new()),
            len: CachePadded::new(AtomicUsize::new(0)),
        }
    }

    /// Returns the number of elements without taking the lock.
    #[inline]
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Returns true if the list is empty, without taking the lock.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an element to the back of the list. Always returns `true`.
    pub fn add(&self, elt: T) -> bool {
        let mut inner = self.inner.lock();
        inner.add(Arc::new(elt));
        self.len.store(inner.len(), Ordering::Release);
        true
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<Entry<T>> {
        let inner = self.inner.lock();
        inner.get(index).map(|elt| Entry::new(elt.clone()))
    }

    /// Removes the element at `index`.
    pub fn remove_at(&self, index: usize) -> Result<Entry<T>> {
        let mut inner = self.inner.lock();
        let removed = inner.remove_at(index)?;
        self.len.store(inner.len(), Ordering::Release);
        Ok(Entry::new(removed))
    }

    /// Removes the lowest-index element equal to `elt`.
    pub fn remove_value(&self, elt: &T) -> bool
    where
        T: PartialEq,
    {
        let mut inner = self.inner.lock();
        let found = inner.remove_first_by(|e| **e == *elt).is_some();
        if found {
            self.len.store(inner.len(), Ordering::Release);
        }
        found
    }

    /// Returns a cursor over the live list.
    pub fn cursor(&self) -> Cursor<&Self> {
        Cursor::new(self)
    }

    // handles to every element, taken under one lock
    fn snapshot(&self) -> Vec<Arc<T>> {
        self.inner.lock().iter().cloned().collect()
    }
}

impl<'a, T> List for &'a SyncLinkedList<T> {
    type Elem = T;
    type Ref<'b>
        = Entry<T>
    where
        Self: 'b;
    type Removed = Entry<T>;

    fn add(&mut self, elt: T) -> bool {
        SyncLinkedList::add(*self, elt)
    }

    fn get(&self, index: usize) -> Result<Entry<T>> {
        SyncLinkedList::get(*self, index)
    }

    fn remove_at(&mut self, index: usize) -> Result<Entry<T>> {
        SyncLinkedList::remove_at(*self, index)
    }

    fn remove_value(&mut self, elt: &T) -> bool
    where
        T: PartialEq,
    {
        SyncLinkedList::remove_value(*self, elt)
    }

    fn len(&self) -> usize {
        SyncLinkedList::len(*self)
    }
}

impl<T> FromIterator<T> for SyncLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let list = Self::new();
        for elt in iter {
            list.add(elt);
        }
        list
    }
}

// Formatting runs on a snapshot so element code never runs under the lock.
impl<T: fmt::Debug> fmt::Debug for SyncLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.snapshot()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SyncLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, self.snapshot())
    }
}

impl<T: fmt::Display> SyncLinkedList<Option<T>> {
    /// Renders the list like `to_string()`, writing absent elements as `null`.
    pub fn display_nullable(&self) -> impl fmt::Display {
        NullableElements(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListError;

    use std::sync::OnceLock;

    #[test]
    fn test_list() {
        let list = SyncLinkedList::new();
        assert!(list.is_empty());
        list.add(1);
        list.add(2);
        list.add(3);
        assert_eq!(list.len(), 3);
        assert_eq!(*list.get(1).unwrap(), 2);
        assert_eq!(list.get(3).unwrap_err(), ListError::out_of_range(3, 3));

        assert_eq!(*list.remove_at(2).unwrap(), 3);
        assert!(list.remove_value(&1));
        assert!(!list.remove_value(&1));
        assert_eq!(list.to_string(), "[2]");
        assert_eq!(format!("{list:?}"), "[2]");

        assert_eq!(*list.remove_at(0).unwrap(), 2);
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "[]");
    }

    #[test]
    fn test_absent_elements() {
        let list = SyncLinkedList::new();
        list.add(None);
        list.add(Some('a'));
        list.add(None);
        assert!(list.remove_value(&None));
        assert_eq!(*list.get(0).unwrap(), Some('a'));
        assert_eq!(*list.get(1).unwrap(), None);
        assert_eq!(list.display_nullable().to_string(), "[a, null]");
    }

    #[test]
    fn test_format_reads_back() {
        static LIST: OnceLock<SyncLinkedList<Reader>> = OnceLock::new();

        // an element whose formatting goes back to the list that holds it
        struct Reader;

        impl fmt::Display for Reader {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let head = LIST.get().is_some_and(|list| list.get(0).is_ok());
                write!(f, "{head}")
            }
        }

        impl fmt::Debug for Reader {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }

        let list = LIST.get_or_init(SyncLinkedList::new);
        list.add(Reader);
        assert_eq!(list.to_string(), "[true]");
        assert_eq!(format!("{list:?}"), "[true]");
    }
}
