//! Chain node of a [`LinkedList`](crate::LinkedList).
//!
//! Nodes live in the list's arena and refer to each other by arena key.
//! Neither link owns anything; the arena owns every node.

/// Arena key of a node.
pub(crate) type NodeId = usize;

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn new(element: T, prev: Option<NodeId>, next: Option<NodeId>) -> Self {
        Self {
            element,
            prev,
            next,
        }
    }
}
