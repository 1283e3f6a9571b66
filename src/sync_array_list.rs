//! Lock-guarded array list.

use alloc::sync::Arc;

use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_utils::CachePadded;
use parking_lot::Mutex;

use crate::array_list::ArrayList;
use crate::cursor::Cursor;
use crate::entry::Entry;
use crate::error::Result;
use crate::list::{fmt_elements, List, NullableElements};

/// Capacity of a fresh [`SyncArrayList`] and of one that has just been
/// emptied. Smaller than the plain list's on purpose.
pub const INITIAL_CAPACITY: usize = 8;

/// Thread-safe array list.
///
/// Every read and write takes the list's single lock for its whole duration.
/// Only [`len`](SyncArrayList::len) and [`is_empty`](SyncArrayList::is_empty)
/// skip the lock: the size is mirrored in an atomic that is stored with
/// release ordering before the lock is dropped.
///
/// Each call is atomic on its own. A sequence of calls, including a whole
/// [`cursor`](SyncArrayList::cursor) traversal, is not.
pub struct SyncArrayList<T> {
    inner: Mutex<ArrayList<Arc<T>>>,
    len: CachePadded<AtomicUsize>,
}

impl<T> Default for SyncArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SyncArrayList<T> {
    /// Creates a new, empty `SyncArrayList` with [`INITIAL_CAPACITY`].
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ArrayList::with_initial_capacity(INITIAL_CAPACITY)),
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

    /// Returns the logical capacity of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
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
    ///
    /// Each step takes the lock separately, so other threads may add or
    /// remove elements between two steps.
    pub fn cursor(&self) -> Cursor<&Self> {
        Cursor::new(self)
    }

    // handles to every element, taken under one lock
    fn snapshot(&self) -> Vec<Arc<T>> {
        self.inner.lock().iter().cloned().collect()
    }
}

impl<'a, T> List for &'a SyncArrayList<T> {
    type Elem = T;
    type Ref<'b>
        = Entry<T>
    where
        Self: 'b;
    type Removed = Entry<T>;

    fn add(&mut self, elt: T) -> bool {
        SyncArrayList::add(*self, elt)
    }

    fn get(&self, index: usize) -> Result<Entry<T>> {
        SyncArrayList::get(*self, index)
    }

    fn remove_at(&mut self, index: usize) -> Result<Entry<T>> {
        SyncArrayList::remove_at(*self, index)
    }

    fn remove_value(&mut self, elt: &T) -> bool
    where
        T: PartialEq,
    {
        SyncArrayList::remove_value(*self, elt)
    }

    fn len(&self) -> usize {
        SyncArrayList::len(*self)
    }
}

impl<T> FromIterator<T> for SyncArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let list = Self::new();
        for elt in iter {
            list.add(elt);
        }
        list
    }
}

// Formatting runs on a snapshot so element code never runs under the lock.
impl<T: fmt::Debug> fmt::Debug for SyncArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.snapshot()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SyncArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, self.snapshot())
    }
}

impl<T: fmt::Display> SyncArrayList<Option<T>> {
    /// Renders the list like `to_string()`, writing absent elements as `null`.
    pub fn display_nullable(&self) -> impl fmt::Display {
        NullableElements(self.snapshot())
    }
}
