//! Hand-managed containers backing the tracker
//!
//! - `DynArray`: insertion-ordered buffer with capacity doubling
//! - `SinglyLinkedList`: head-inserting list with relinking merge sort
//! - `Stack`: LIFO used for the undo log

pub mod dyn_array;
pub mod linked_list;
pub mod stack;

pub use dyn_array::{DynArray, MIN_CAPACITY};
pub use linked_list::SinglyLinkedList;
pub use stack::Stack;
