//! To-do list domain model
//!
//! An ordered list of task titles. Persistence lives in [`crate::storage`];
//! this module only holds the in-memory operations.

mod todo_list;

pub use todo_list::{TodoError, TodoList};
