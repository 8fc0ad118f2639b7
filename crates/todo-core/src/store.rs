//! Task file persistence.
//!
//! Saves and loads a whole [`TaskList`] to and from a CSV file with a fixed
//! header row:
//!
//! ```text
//! Task Name,Due Date,Priority,Completed
//! Buy milk,2024-05-01,Low,False
//! ```
//!
//! Both directions work on the complete document in memory and touch the
//! file through a single handle scoped to the call.

use std::fs;
use std::io::{self, Write};

use camino::Utf8Path;
use tracing::{debug, warn};

use crate::csv;
use crate::error::{TaskError, TaskField, ValidationError};
use crate::types::{Task, TaskList};

/// Location used when the caller does not pick one.
pub const DEFAULT_TASKS_PATH: &str = "data/tasks.csv";

/// Column names written as the first row.
pub const HEADER: [&str; 4] = ["Task Name", "Due Date", "Priority", "Completed"];

/// Why a row was left out of a load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    /// The row does not have exactly four fields.
    #[error("expected 4 fields, found {found}")]
    FieldCount {
        /// Number of fields actually present.
        found: usize,
    },

    /// The row has four fields but one of them fails validation.
    #[error("invalid {field}: {message}")]
    InvalidField {
        /// The offending field.
        field: TaskField,
        /// The validation message.
        message: String,
    },
}

impl From<ValidationError> for SkipReason {
    fn from(err: ValidationError) -> Self {
        Self::InvalidField {
            field: err.field,
            message: err.message,
        }
    }
}

/// A data row that was skipped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-indexed line where the row starts.
    pub line: usize,
    /// Why the row was skipped.
    pub reason: SkipReason,
}

/// Result of loading a task file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Tasks reconstructed from the file, in file order.
    pub tasks: TaskList,
    /// Data rows that could not be turned into tasks.
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    /// Returns `true` if every data row was loaded.
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Encodes tasks as a complete CSV document, header included.
///
/// # Examples
///
/// ```
/// use todo_core::{store, TaskList};
///
/// let mut tasks = TaskList::new();
/// todo_core::add(&mut tasks, "Buy milk", "2024-05-01", "Low")?;
///
/// assert_eq!(
///     store::encode(&tasks),
///     "Task Name,Due Date,Priority,Completed\r\nBuy milk,2024-05-01,Low,False\r\n"
/// );
/// # Ok::<(), todo_core::TaskError>(())
/// ```
#[must_use]
pub fn encode(tasks: &[Task]) -> String {
    let mut output = String::new();
    csv::write_row(&mut output, &HEADER);
    for task in tasks {
        let due_date = task.due_date().to_string();
        csv::write_row(
            &mut output,
            &[
                task.name(),
                &due_date,
                task.priority().label(),
                completed_label(task.is_completed()),
            ],
        );
    }
    output
}

/// Decodes a CSV document produced by [`encode`].
///
/// The first row is always treated as the header. Blank lines are ignored.
/// Rows with the wrong number of fields, or with values that fail
/// validation, are skipped and listed in [`LoadReport::skipped`].
#[must_use]
pub fn decode(text: &str) -> LoadReport {
    let mut report = LoadReport::default();

    for record in csv::parse(text).into_iter().skip(1) {
        if record.is_blank() {
            continue;
        }
        match task_from_fields(&record.fields) {
            Ok(task) => report.tasks.push(task),
            Err(reason) => {
                warn!(line = record.line, %reason, "Skipping malformed task row");
                report.skipped.push(SkippedRow {
                    line: record.line,
                    reason,
                });
            }
        }
    }

    report
}

/// Writes every task to `path`, replacing any existing content.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`TaskError::Io`] if a directory or the file cannot be created or
/// written.
pub fn save(tasks: &[Task], path: impl AsRef<Utf8Path>) -> Result<(), TaskError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| TaskError::io(parent, e))?;
    }

    let document = encode(tasks);
    write_document(path, &document).map_err(|e| TaskError::io(path, e))?;

    debug!(%path, count = tasks.len(), "Saved tasks");
    Ok(())
}

/// Loads tasks from `path`.
///
/// A missing file, or a path whose parent is not a directory, yields an
/// empty list. Malformed rows are skipped; use
/// [`load_with_report`] to find out which ones.
///
/// # Errors
///
/// Returns [`TaskError::Io`] if the file exists but cannot be read.
pub fn load(path: impl AsRef<Utf8Path>) -> Result<TaskList, TaskError> {
    load_with_report(path).map(|report| report.tasks)
}

/// Loads tasks from `path`, also returning the rows that were skipped.
///
/// # Errors
///
/// Returns [`TaskError::Io`] if the file exists but cannot be read, is not a
/// regular file, or is not valid UTF-8.
pub fn load_with_report(path: impl AsRef<Utf8Path>) -> Result<LoadReport, TaskError> {
    let path = path.as_ref();

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        // A regular file in place of a parent directory also means there is no task file.
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            debug!(%path, "No task file yet, starting empty");
            return Ok(LoadReport::default());
        }
        Err(e) => return Err(TaskError::io(path, e)),
    };

    let report = decode(&text);
    debug!(
        %path,
        count = report.tasks.len(),
        skipped = report.skipped.len(),
        "Loaded tasks"
    );
    Ok(report)
}

fn write_document(path: &Utf8Path, document: &str) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(document.as_bytes())?;
    file.flush()
}

const fn completed_label(completed: bool) -> &'static str {
    if completed { "True" } else { "False" }
}

fn task_from_fields(fields: &[String]) -> Result<Task, SkipReason> {
    let [name, due_date, priority, completed] = fields else {
        return Err(SkipReason::FieldCount {
            found: fields.len(),
        });
    };

    let completed = completed.to_lowercase() == "true";
    Task::from_parts(name, due_date, priority, completed).map_err(SkipReason::from)
}
