#![doc = include_str!("../README.md")]

extern crate alloc;

pub mod array_list;
pub mod cursor;
pub mod entry;
pub mod error;
pub mod linked_list;
pub mod list;
mod node;
pub mod sync_array_list;
pub mod sync_linked_list;

pub use array_list::ArrayList;
pub use cursor::Cursor;
pub use entry::Entry;
pub use error::{ListError, Operation, Result};
pub use linked_list::LinkedList;
pub use list::List;
pub use sync_array_list::SyncArrayList;
pub use sync_linked_list::SyncLinkedList;
