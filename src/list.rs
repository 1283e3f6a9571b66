//! The sequential list contract shared by every storage flavour.
//!
//! Only a handful of operations are part of the contract: `add`, `get`,
//! `remove_at`, `remove_value`, `len` and `is_empty`. Everything else a
//! general purpose collection would offer is listed here with a provided
//! body that fails with [`ListError::UnsupportedOperation`], so a caller
//! finds out at the call site rather than through a silent no-op.

use alloc::sync::Arc;

use core::cmp::Ordering;
use core::fmt;
use core::ops::Range;

use crate::cursor::Cursor;
use crate::error::{ListError, Operation, Result};

fn unsupported<R>(op: Operation) -> Result<R> {
    tracing::debug!(%op, "unsupported list operation");
    Err(ListError::UnsupportedOperation(op))
}

/// An ordered sequence with 0-based indexing.
///
/// Absent elements are expressed by instantiating a list with `Option<T>`.
pub trait List {
    /// The element type.
    type Elem;

    /// What [`get`](List::get) hands out: a borrow for the plain lists, an
    /// [`Entry`](crate::Entry) for the lock-guarded ones.
    type Ref<'a>
    where
        Self: 'a;

    /// What [`remove_at`](List::remove_at) hands back.
    type Removed;

    /// Appends an element to the back. Always returns `true`.
    fn add(&mut self, elt: Self::Elem) -> bool;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Result<Self::Ref<'_>>;

    /// Removes and returns the element at `index`, shifting later elements
    /// one position towards the front.
    fn remove_at(&mut self, index: usize) -> Result<Self::Removed>;

    /// Removes the lowest-index element equal to `elt`. Returns `false` and
    /// leaves the list untouched when there is none.
    fn remove_value(&mut self, elt: &Self::Elem) -> bool
    where
        Self::Elem: PartialEq;

    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, _index: usize, _elt: Self::Elem) -> Result<()> {
        unsupported(Operation::Insert)
    }

    fn set(&mut self, _index: usize, _elt: Self::Elem) -> Result<Self::Removed> {
        unsupported(Operation::Set)
    }

    fn index_of(&self, _elt: &Self::Elem) -> Result<usize> {
        unsupported(Operation::IndexOf)
    }

    fn last_index_of(&self, _elt: &Self::Elem) -> Result<usize> {
        unsupported(Operation::LastIndexOf)
    }

    fn contains(&self, _elt: &Self::Elem) -> Result<bool> {
        unsupported(Operation::Contains)
    }

    fn contains_all(&self, _elts: &[Self::Elem]) -> Result<bool> {
        unsupported(Operation::ContainsAll)
    }

    fn add_all<I>(&mut self, _elts: I) -> Result<bool>
    where
        I: IntoIterator<Item = Self::Elem>,
    {
        unsupported(Operation::AddAll)
    }

    fn remove_all(&mut self, _elts: &[Self::Elem]) -> Result<bool> {
        unsupported(Operation::RemoveAll)
    }

    fn retain_all(&mut self, _elts: &[Self::Elem]) -> Result<bool> {
        unsupported(Operation::RetainAll)
    }

    fn replace_all<F>(&mut self, _f: F) -> Result<()>
    where
        F: FnMut(&Self::Elem) -> Self::Elem,
    {
        unsupported(Operation::ReplaceAll)
    }

    fn sort_by<F>(&mut self, _compare: F) -> Result<()>
    where
        F: FnMut(&Self::Elem, &Self::Elem) -> Ordering,
    {
        unsupported(Operation::Sort)
    }

    fn clear(&mut self) -> Result<()> {
        unsupported(Operation::Clear)
    }

    fn sub_list(&self, _range: Range<usize>) -> Result<Self>
    where
        Self: Sized,
    {
        unsupported(Operation::SubList)
    }

    fn to_vec(&self) -> Result<Vec<Self::Elem>> {
        unsupported(Operation::ToVec)
    }

    /// Bidirectional cursor positioned at `index`.
    fn list_cursor(&mut self, _index: usize) -> Result<Cursor<&mut Self>>
    where
        Self: Sized,
    {
        unsupported(Operation::ListCursor)
    }
}

impl<L: List + ?Sized> List for &mut L {
    type Elem = L::Elem;
    type Ref<'a>
        = L::Ref<'a>
    where
        Self: 'a;
    type Removed = L::Removed;

    #[inline]
    fn add(&mut self, elt: Self::Elem) -> bool {
        (**self).add(elt)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<Self::Ref<'_>> {
        (**self).get(index)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> Result<Self::Removed> {
        (**self).remove_at(index)
    }

    #[inline]
    fn remove_value(&mut self, elt: &Self::Elem) -> bool
    where
        Self::Elem: PartialEq,
    {
        (**self).remove_value(elt)
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Renders `[e0, e1, ..., en-1]`.
pub(crate) fn fmt_elements<I>(f: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    f.write_str("[")?;
    for (i, elt) in elements.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{elt}")?;
    }
    f.write_str("]")
}

/// An element that may be absent.
pub(crate) trait MaybeAbsent {
    type Value: fmt::Display;

    fn present(&self) -> Option<&Self::Value>;
}

impl<T: fmt::Display> MaybeAbsent for &Option<T> {
    type Value = T;

    fn present(&self) -> Option<&T> {
        (**self).as_ref()
    }
}

impl<T: fmt::Display> MaybeAbsent for Arc<Option<T>> {
    type Value = T;

    fn present(&self) -> Option<&T> {
        (**self).as_ref()
    }
}

struct NullOr<'a, T>(Option<&'a T>);

impl<T: fmt::Display> fmt::Display for NullOr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("null"),
        }
    }
}

/// Renders `[e0, e1, ...]` with absent elements written as `null`.
pub(crate) struct NullableElements<E>(pub(crate) Vec<E>);

impl<E: MaybeAbsent> fmt::Display for NullableElements<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, self.0.iter().map(|elt| NullOr(elt.present())))
    }
}
