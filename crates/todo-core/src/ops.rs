//! Collection operations.
//!
//! Each operation takes the caller's [`TaskList`] by mutable reference,
//! changes it in place, and leaves it untouched when it returns an error.

use tracing::debug;

use crate::error::TaskError;
use crate::types::{Task, TaskList};

/// Validates the raw fields and appends a new open task.
///
/// # Examples
///
/// ```
/// use todo_core::{add, TaskList};
///
/// let mut tasks = TaskList::new();
/// add(&mut tasks, "Buy milk", "2024-05-01", "Low")?;
/// assert_eq!(tasks.len(), 1);
///
/// assert!(add(&mut tasks, "   ", "2024-05-01", "Low").is_err());
/// assert_eq!(tasks.len(), 1);
/// # Ok::<(), todo_core::TaskError>(())
/// ```
pub fn add(
    tasks: &mut TaskList,
    name: &str,
    due_date: &str,
    priority: &str,
) -> Result<(), TaskError> {
    let task = Task::new(name, due_date, priority)?;
    debug!(name = task.name(), position = tasks.len(), "Adding task");
    tasks.push(task);
    Ok(())
}

/// Removes and returns the task at `index`, shifting later tasks down.
///
/// # Errors
///
/// Returns [`TaskError::IndexOutOfRange`] if `index` is negative or not less
/// than the collection length.
pub fn delete(tasks: &mut TaskList, index: i64) -> Result<Task, TaskError> {
    let position = checked_position(tasks, index)?;
    debug!(position, "Deleting task");
    Ok(tasks.remove(position))
}

/// Marks the task at `index` completed. Already completed tasks stay as they are.
///
/// # Errors
///
/// Same bounds rule as [`delete`].
pub fn mark_completed(tasks: &mut TaskList, index: i64) -> Result<(), TaskError> {
    let position = checked_position(tasks, index)?;
    debug!(position, "Marking task completed");
    if let Some(task) = tasks.get_mut(position) {
        task.mark_completed();
    }
    Ok(())
}

/// Converts a signed caller position into a valid index into `tasks`.
fn checked_position(tasks: &TaskList, index: i64) -> Result<usize, TaskError> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < tasks.len())
        .ok_or(TaskError::IndexOutOfRange {
            index,
            len: tasks.len(),
        })
}
