//! Field validation.
//!
//! Pure checks run before any task is built. Each takes one raw text field
//! and either succeeds or returns a [`ValidationError`], which converts into
//! [`TaskError::InvalidInput`](crate::TaskError::InvalidInput).

use crate::error::{TaskField, ValidationError};
use crate::types::{DueDate, Priority};

/// Fails if the name is empty after trimming whitespace.
///
/// # Examples
///
/// ```
/// use todo_core::validate::validate_name;
///
/// assert!(validate_name("Buy milk").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new(
            TaskField::Name,
            "Task name cannot be empty.",
        ));
    }
    Ok(())
}

/// Fails unless the text is a real calendar date in exact `YYYY-MM-DD` form.
pub fn validate_due_date(due_date: &str) -> Result<DueDate, ValidationError> {
    due_date.parse()
}

/// Fails unless the text is exactly `Low`, `Medium` or `High`.
pub fn validate_priority(priority: &str) -> Result<Priority, ValidationError> {
    priority.parse()
}

/// Runs all checks in order name, due date, priority.
///
/// Stops at the first failure, so only one error is ever reported.
///
/// # Examples
///
/// ```
/// use todo_core::{validate::validate_task, TaskField};
///
/// let err = validate_task("", "bad", "Urgent").unwrap_err();
/// assert_eq!(err.field, TaskField::Name);
/// ```
pub fn validate_task(
    name: &str,
    due_date: &str,
    priority: &str,
) -> Result<(DueDate, Priority), ValidationError> {
    validate_name(name)?;
    let due_date = validate_due_date(due_date)?;
    let priority = validate_priority(priority)?;
    Ok((due_date, priority))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("a").is_ok());
        assert!(validate_name("  a  ").is_ok());
        for name in ["", " ", "   ", "\t\n"] {
            let err = validate_name(name).unwrap_err();
            assert_eq!(err.field, TaskField::Name);
        }
    }

    #[test]
    fn test_validate_due_date_messages() {
        let err = validate_due_date("2024-13-01").unwrap_err();
        assert_eq!(err.field, TaskField::DueDate);
        assert_eq!(err.to_string(), "Due date must be in 'YYYY-MM-DD' format.");
    }

    #[test]
    fn test_validate_priority_messages() {
        let err = validate_priority("Urgent").unwrap_err();
        assert_eq!(err.field, TaskField::Priority);
        assert_eq!(err.to_string(), "Priority must be 'Low', 'Medium', or 'High'.");
    }

    #[test]
    fn test_validate_task_short_circuits_in_order() {
        let err = validate_task("ok", "nope", "Urgent").unwrap_err();
        assert_eq!(err.field, TaskField::DueDate);

        let err = validate_task("ok", "2024-01-01", "Urgent").unwrap_err();
        assert_eq!(err.field, TaskField::Priority);
    }

    #[test]
    fn test_validate_task_success() {
        let (date, priority) = validate_task("ok", "2024-01-01", "High").unwrap();
        assert_eq!(date.to_string(), "2024-01-01");
        assert_eq!(priority, Priority::High);
    }
}
