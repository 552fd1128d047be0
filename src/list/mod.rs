//! Doubly linked list.
//!
//! # Components
//! - [`LinkedList`] - Ordered sequence with O(1) head/tail mutation and
//!   O(n) positional access
//! - [`Iter`] / [`IntoIter`] - Borrowing and owning iterators

mod iter;
mod linked_list;

pub use iter::{IntoIter, Iter};
pub use linked_list::LinkedList;
