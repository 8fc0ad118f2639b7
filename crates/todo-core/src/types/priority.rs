//! Task priority levels.
//!
//! This module provides the [`Priority`] enum, the fixed set of urgency
//! levels a task can carry.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{TaskField, ValidationError};

/// How urgent a task is.
///
/// The textual form is case-sensitive: only `Low`, `Medium` and `High` are
/// accepted, and the same spelling is written to the task file.
///
/// # Examples
///
/// ```
/// use todo_core::Priority;
///
/// let priority: Priority = "High".parse().unwrap();
/// assert_eq!(priority, Priority::High);
/// assert_eq!(priority.label(), "High");
///
/// assert!("high".parse::<Priority>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize)]
pub enum Priority {
    /// Can wait.
    Low,

    /// The preselected level for new tasks.
    #[default]
    Medium,

    /// Needs attention first.
    High,
}

impl Priority {
    /// All priority levels, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the exact text used for this level.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_core::Priority;
    ///
    /// assert_eq!(Priority::Low.label(), "Low");
    /// assert_eq!(Priority::Medium.label(), "Medium");
    /// ```
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parses an exact label, returning `None` for anything else.
    ///
    /// No trimming, no case folding and no synonyms.
    #[must_use]
    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == text)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            ValidationError::new(
                TaskField::Priority,
                "Priority must be 'Low', 'Medium', or 'High'.",
            )
        })
    }
}
