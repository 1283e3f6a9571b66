//! Contiguous, growable array list.

use core::fmt;

use crate::cursor::Cursor;
use crate::error::{ListError, Result};
use crate::list::{fmt_elements, List, NullableElements};

/// Capacity of a fresh [`ArrayList`] and of one that has just been emptied.
pub const INITIAL_CAPACITY: usize = 10;

/// Factor the capacity is multiplied by when an append finds the buffer full.
pub const GROWTH_FACTOR: usize = 2;

/// A list backed by a contiguous buffer.
///
/// The capacity doubles whenever an append would exceed it. Removing the last
/// element drops the buffer and starts over with a fresh one of the initial
/// capacity, so a list that is drained and refilled does not keep its old
/// allocation around.
pub struct ArrayList<T> {
    buffer: Vec<T>,
    // tracked here rather than read back from the allocator, which is free
    // to hand out more than was asked for
    capacity: usize,
    initial_capacity: usize,
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Creates a new, empty `ArrayList` with [`INITIAL_CAPACITY`].
    pub fn new() -> Self {
        Self::with_initial_capacity(INITIAL_CAPACITY)
    }

    pub(crate) fn with_initial_capacity(initial_capacity: usize) -> Self {
        debug_assert!(initial_capacity > 0);
        Self {
            buffer: Vec::with_capacity(initial_capacity),
            capacity: initial_capacity,
            initial_capacity,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of elements the current buffer holds before it has to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends an element to the back of the list. Always returns `true`.
    pub fn add(&mut self, elt: T) -> bool {
        if self.buffer.len() == self.capacity {
            self.grow();
        }
        self.buffer.push(elt);
        true
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.buffer
            .get(index)
            .ok_or_else(|| ListError::out_of_range(index, self.len()))
    }

    /// Removes the element at `index`, moving every later element one slot
    /// towards the front.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len() {
            return Err(ListError::out_of_range(index, self.len()));
        }
        let removed = self.buffer.remove(index);
        self.reset_if_empty();
        Ok(removed)
    }

    /// Removes the lowest-index element equal to `elt`.
    pub fn remove_value(&mut self, elt: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_first_by(|e| e == elt).is_some()
    }

    /// Removes and returns the first element matching `pred`.
    pub(crate) fn remove_first_by<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.buffer.iter().position(|e| pred(e))?;
        let removed = self.buffer.remove(index);
        self.reset_if_empty();
        Some(removed)
    }

    /// Returns a cursor that can remove while it traverses.
    pub fn cursor(&mut self) -> Cursor<&mut Self> {
        Cursor::new(self)
    }

    /// Returns a borrowing iterator over the elements.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.buffer.iter()
    }

    fn grow(&mut self) {
        let capacity = self.capacity * GROWTH_FACTOR;
        tracing::debug!(from = self.capacity, to = capacity, "growing array buffer");
        let mut grown = Vec::with_capacity(capacity);
        grown.append(&mut self.buffer);
        self.buffer = grown;
        self.capacity = capacity;
    }

    fn reset_if_empty(&mut self) {
        if self.buffer.is_empty() {
            tracing::trace!(capacity = self.initial_capacity, "array emptied, resetting buffer");
            self.buffer = Vec::with_capacity(self.initial_capacity);
            self.capacity = self.initial_capacity;
        }
    }
}

impl<T> List for ArrayList<T> {
    type Elem = T;
    type Ref<'a>
        = &'a T
    where
        Self: 'a;
    type Removed = T;

    fn add(&mut self, elt: T) -> bool {
        ArrayList::add(self, elt)
    }

    fn get(&self, index: usize) -> Result<&T> {
        ArrayList::get(self, index)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        ArrayList::remove_at(self, index)
    }

    fn remove_value(&mut self, elt: &T) -> bool
    where
        T: PartialEq,
    {
        ArrayList::remove_value(self, elt)
    }

    fn len(&self) -> usize {
        ArrayList::len(self)
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.add(elt);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, self.iter())
    }
}

impl<T: fmt::Display> ArrayList<Option<T>> {
    /// Renders the list like `to_string()`, writing absent elements as `null`.
    pub fn display_nullable(&self) -> impl fmt::Display + '_ {
        NullableElements(self.iter().collect())
    }
}
