//! Shared handle to an element of a lock-guarded list.

use alloc::sync::Arc;

use core::borrow::Borrow;
use core::ops::Deref;
use core::{cmp, fmt};

/// An element handed out by [`SyncArrayList`](crate::SyncArrayList) or
/// [`SyncLinkedList`](crate::SyncLinkedList). You can `deref` it to get the value.
///
/// The list keeps its own handle, so an entry stays valid after the lock is
/// released and even after the element is removed from the list.
#[derive(Clone)]
pub struct Entry<T>(Arc<T>);

impl<T> Entry<T> {
    #[inline]
    pub(crate) fn new(elt: Arc<T>) -> Self {
        Entry(elt)
    }

    /// Returns the value if this is the last handle to it.
    pub fn into_inner(this: Self) -> Result<T, Self> {
        Arc::try_unwrap(this.0).map_err(Entry)
    }
}

impl<T> Deref for Entry<T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Entry<T> {
    fn as_ref(&self) -> &T {
        self.deref()
    }
}

impl<T> Borrow<T> for Entry<T> {
    fn borrow(&self) -> &T {
        self.deref()
    }
}

impl<T: fmt::Debug> fmt::Debug for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry({:?})", *self.0)
    }
}

impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl<T: PartialEq> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: PartialEq> PartialEq<T> for Entry<T> {
    fn eq(&self, other: &T) -> bool {
        *self.0 == *other
    }
}

impl<T: Eq> Eq for Entry<T> {}

impl<T: PartialOrd> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Entry<T>) -> Option<cmp::Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord> Ord for Entry<T> {
    fn cmp(&self, other: &Entry<T>) -> cmp::Ordering {
        (**self).cmp(&**other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry() {
        let a = Entry::new(Arc::new(3));
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a, 3);
        assert!(Entry::new(Arc::new(1)) < a);
        assert_eq!(format!("{a:?} {a}"), "Entry(3) 3");

        let a = Entry::into_inner(a).unwrap_err();
        drop(b);
        assert_eq!(Entry::into_inner(a), Ok(3));
    }
}
