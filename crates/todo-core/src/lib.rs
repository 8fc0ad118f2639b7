//! Core types, validation, operations and persistence for the todo tool.
//!
//! This crate provides:
//!
//! - Domain types ([`Task`], [`Priority`], [`DueDate`]) that cannot hold invalid values
//! - Field validation applied before any mutation
//! - Collection operations ([`add`], [`delete`], [`mark_completed`]) on a caller-owned [`TaskList`]
//! - CSV persistence ([`save`], [`load`]) with best-effort recovery of damaged files
//! - Error and configuration types
//!
//! # Examples
//!
//! ```no_run
//! use todo_core::{add, load, mark_completed, save, DEFAULT_TASKS_PATH};
//!
//! let mut tasks = load(DEFAULT_TASKS_PATH)?;
//! add(&mut tasks, "Buy milk", "2024-05-01", "Low")?;
//! mark_completed(&mut tasks, 0)?;
//! save(&tasks, DEFAULT_TASKS_PATH)?;
//! # Ok::<(), todo_core::TaskError>(())
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod csv;
pub mod error;
pub mod ops;
pub mod store;
pub mod types;
pub mod validate;

pub use config::{Config, StoreConfig};
pub use error::{ConfigError, TaskError, TaskField, ValidationError};
pub use ops::{add, delete, mark_completed};
pub use store::{
    load, load_with_report, save, LoadReport, SkipReason, SkippedRow, DEFAULT_TASKS_PATH,
};
pub use types::{DueDate, Priority, Task, TaskList};
