//! A cursor over any [`List`], driven by its `get` and `remove_at`.
//!
//! The cursor is not a snapshot. Every step reads the live list, so elements
//! added or removed through another path while a traversal is in progress
//! are visible to it and can shift which elements it yields. There is no
//! modification counter; the only inconsistency the cursor reports is a
//! `remove` whose target index has vanished.

use crate::error::{ListError, Result};
use crate::list::List;

/// A one-shot traversal over a list.
///
/// Obtained from `cursor()` on each list type. Once exhausted it stays
/// exhausted; take a fresh cursor for another pass.
pub struct Cursor<L> {
    list: L,
    // index of the element the next call to `next` returns
    cursor: usize,
    // index of the element most recently yielded, cleared by `remove`
    last_returned: Option<usize>,
}

impl<L: List> Cursor<L> {
    pub fn new(list: L) -> Self {
        Self {
            list,
            cursor: 0,
            last_returned: None,
        }
    }

    /// Returns true while the cursor has not reached the list's current size.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.cursor != self.list.len()
    }

    /// Yields the element at the cursor and advances.
    ///
    /// Fails with [`ListError::NoMoreElements`] once the cursor is past the
    /// end of the list.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<L::Ref<'_>> {
        let i = self.cursor;
        match self.list.get(i) {
            Ok(elt) => {
                self.last_returned = Some(i);
                self.cursor = i + 1;
                Ok(elt)
            }
            Err(e) if e.is_out_of_range() => Err(ListError::NoMoreElements),
            Err(e) => Err(e),
        }
    }

    /// Removes the element most recently yielded by [`next`](Cursor::next).
    ///
    /// Fails with [`ListError::InvalidIteratorState`] if `next` has not been
    /// called since the last `remove`, and with
    /// [`ListError::ConcurrentStructuralChange`] if the element's index is no
    /// longer inside the list.
    pub fn remove(&mut self) -> Result<L::Removed> {
        let last = self.last_returned.ok_or(ListError::InvalidIteratorState)?;
        match self.list.remove_at(last) {
            Ok(removed) => {
                if last < self.cursor {
                    self.cursor -= 1;
                }
                self.last_returned = None;
                Ok(removed)
            }
            Err(e) if e.is_out_of_range() => {
                tracing::trace!(index = last, "cursor remove target vanished");
                Err(ListError::ConcurrentStructuralChange)
            }
            Err(e) => Err(e),
        }
    }
}
