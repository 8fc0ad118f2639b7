//! The task record.
//!
//! This module provides [`Task`], the single entity managed by this crate,
//! and the [`TaskList`] alias for the caller-owned collection.

use serde::Serialize;

use super::due_date::DueDate;
use super::priority::Priority;
use crate::error::ValidationError;
use crate::validate;

/// An ordered, caller-owned collection of tasks.
///
/// Position in the list is the address used by [`delete`](crate::delete) and
/// [`mark_completed`](crate::mark_completed).
pub type TaskList = Vec<Task>;

/// One to-do item.
///
/// Fields are private so a task can never hold an empty name, an invalid
/// date or an unknown priority. The only state change is
/// [`mark_completed`](Self::mark_completed), and it cannot be undone.
///
/// # Examples
///
/// ```
/// use todo_core::{Priority, Task};
///
/// let mut task = Task::new("Buy milk", "2024-05-01", "Low")?;
/// assert_eq!(task.name(), "Buy milk");
/// assert_eq!(task.priority(), Priority::Low);
/// assert!(!task.is_completed());
///
/// task.mark_completed();
/// assert!(task.is_completed());
/// # Ok::<(), todo_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Task {
    name: String,
    due_date: DueDate,
    priority: Priority,
    completed: bool,
}

impl Task {
    /// Validates raw fields and builds an open task.
    ///
    /// Checks run name, then due date, then priority; the first failure is
    /// returned.
    pub fn new(name: &str, due_date: &str, priority: &str) -> Result<Self, ValidationError> {
        Self::from_parts(name, due_date, priority, false)
    }

    /// Validates raw fields and builds a task with the given completion flag.
    ///
    /// Used when reconstructing tasks from the task file.
    pub fn from_parts(
        name: &str,
        due_date: &str,
        priority: &str,
        completed: bool,
    ) -> Result<Self, ValidationError> {
        let (due_date, priority) = validate::validate_task(name, due_date, priority)?;
        Ok(Self {
            name: name.to_owned(),
            due_date,
            priority,
            completed,
        })
    }

    /// Returns the task name exactly as entered.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the due date.
    #[inline]
    #[must_use]
    pub const fn due_date(&self) -> DueDate {
        self.due_date
    }

    /// Returns the priority.
    #[inline]
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns `true` once the task has been marked completed.
    #[inline]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Marks the task completed. Calling it again has no effect.
    #[inline]
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}
