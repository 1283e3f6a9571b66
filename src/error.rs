//! Error types shared by every list flavour and the cursor protocol.

use core::fmt;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, ListError>;

/// List capabilities that are deliberately not implemented.
///
/// Invoking any of them fails with [`ListError::UnsupportedOperation`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operation {
    Insert,
    Set,
    IndexOf,
    LastIndexOf,
    Contains,
    ContainsAll,
    AddAll,
    RemoveAll,
    RetainAll,
    ReplaceAll,
    Sort,
    Clear,
    SubList,
    ToVec,
    ListCursor,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Insert => "insert",
            Operation::Set => "set",
            Operation::IndexOf => "index_of",
            Operation::LastIndexOf => "last_index_of",
            Operation::Contains => "contains",
            Operation::ContainsAll => "contains_all",
            Operation::AddAll => "add_all",
            Operation::RemoveAll => "remove_all",
            Operation::RetainAll => "retain_all",
            Operation::ReplaceAll => "replace_all",
            Operation::Sort => "sort_by",
            Operation::Clear => "clear",
            Operation::SubList => "sub_list",
            Operation::ToVec => "to_vec",
            Operation::ListCursor => "list_cursor",
        };
        f.write_str(name)
    }
}

/// Every failure a list or a cursor can report.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ListError {
    /// Index was not below the current size.
    #[error("element index = {index}, list size = {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// The cursor has no element left to yield.
    #[error("no more elements")]
    NoMoreElements,

    /// `remove` was called before `next`, or twice in a row.
    #[error("cursor remove requires a preceding next")]
    InvalidIteratorState,

    /// The list changed shape between the cursor's `next` and `remove`.
    #[error("list was structurally modified during iteration")]
    ConcurrentStructuralChange,

    /// The capability is outside the list contract.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(Operation),

    /// Internal precondition violated; indicates a broken invariant.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl ListError {
    /// Create an index out of range error.
    pub fn out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    /// Returns true for `IndexOutOfRange`.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ListError::out_of_range(11, 3).to_string(),
            "element index = 11, list size = 3"
        );
        assert_eq!(
            ListError::UnsupportedOperation(Operation::Sort).to_string(),
            "unsupported operation: sort_by"
        );
        assert!(ListError::out_of_range(0, 0).is_out_of_range());
        assert!(!ListError::NoMoreElements.is_out_of_range());
    }
}
