//! Domain types for the todo tool.
//!
//! # Module Organization
//!
//! - [`task`] - The task record and the collection alias
//! - [`priority`] - Priority levels
//! - [`due_date`] - Strict calendar due dates
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use todo_core::{DueDate, Priority, Task, TaskList};
//! ```

mod due_date;
mod priority;
mod task;

pub use due_date::DueDate;
pub use priority::Priority;
pub use task::{Task, TaskList};
