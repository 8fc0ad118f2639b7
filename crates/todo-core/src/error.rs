//! Error types for the todo-core crate.
//!
//! This module provides [`TaskError`], returned by every validation, mutation
//! and persistence operation, and [`ConfigError`] for configuration loading.

use std::fmt;

use camino::Utf8PathBuf;

/// The task field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The task name.
    Name,
    /// The due date.
    DueDate,
    /// The priority.
    Priority,
}

impl TaskField {
    /// Returns the column label used for this field in the task file header.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_core::TaskField;
    ///
    /// assert_eq!(TaskField::DueDate.label(), "Due Date");
    /// ```
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Task Name",
            Self::DueDate => "Due Date",
            Self::Priority => "Priority",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A raw task field that failed validation.
///
/// # Examples
///
/// ```
/// use todo_core::{Priority, TaskField};
///
/// let err = "Urgent".parse::<Priority>().unwrap_err();
/// assert_eq!(err.field, TaskField::Priority);
/// assert_eq!(err.to_string(), "Priority must be 'Low', 'Medium', or 'High'.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// The field that failed.
    pub field: TaskField,
    /// Human-readable reason.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    #[inline]
    pub fn new(field: TaskField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors that can occur while validating, mutating or persisting tasks.
///
/// # Error Recovery Strategy
///
/// - **Invalid input** ([`TaskError::InvalidInput`]): the collection is left untouched
/// - **Index out of range** ([`TaskError::IndexOutOfRange`]): the collection is left untouched
/// - **I/O errors** ([`TaskError::Io`]): propagate immediately, nothing is retried
///
/// Malformed rows found while loading are not errors; they are skipped and
/// reported through [`LoadReport`](crate::LoadReport).
///
/// # Examples
///
/// ```
/// use todo_core::TaskError;
///
/// fn handle_error(err: TaskError) {
///     match err {
///         TaskError::InvalidInput { field, message } => eprintln!("{field}: {message}"),
///         TaskError::IndexOutOfRange { index, len } => eprintln!("{index} not in 0..{len}"),
///         TaskError::Io { path, .. } => eprintln!("cannot access {path}"),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// A raw field failed validation.
    #[error("{message}")]
    InvalidInput {
        /// The field that failed.
        field: TaskField,
        /// Human-readable reason.
        message: String,
    },

    /// A position used for deletion or completion is outside the collection.
    #[error("Invalid task index {index} (collection holds {len} tasks).")]
    IndexOutOfRange {
        /// The requested position.
        index: i64,
        /// The collection length at the time of the call.
        len: usize,
    },

    /// The task file could not be created, read or written.
    #[error("failed to access task file {path}: {source}")]
    Io {
        /// The path that failed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl From<ValidationError> for TaskError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput {
            field: err.field,
            message: err.message,
        }
    }
}

impl TaskError {
    /// Creates a new [`TaskError::InvalidInput`] error.
    #[inline]
    pub fn invalid_input(field: TaskField, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Creates a new [`TaskError::Io`] error.
    #[inline]
    pub fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is a validation failure.
    #[inline]
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns `true` if this is an out-of-range position.
    #[inline]
    #[must_use]
    pub const fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Returns `true` if this is a persistence failure.
    #[inline]
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns the field that failed validation, if any.
    #[must_use]
    pub const fn field(&self) -> Option<TaskField> {
        match self {
            Self::InvalidInput { field, .. } => Some(*field),
            Self::IndexOutOfRange { .. } | Self::Io { .. } => None,
        }
    }

    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::InvalidInput { .. } | Self::IndexOutOfRange { .. } => None,
        }
    }
}

/// Errors that can occur during configuration loading and validation.
///
/// # Examples
///
/// ```
/// use todo_core::ConfigError;
///
/// let error = ConfigError::InvalidOption {
///     option: "store.path".to_owned(),
///     reason: "must not be empty".to_owned(),
/// };
/// assert!(error.to_string().contains("store.path"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
