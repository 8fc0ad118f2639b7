//! CLI entry point for the todo tool.
//!
//! Every command loads the task file, applies at most one core operation,
//! and writes the file back if anything changed.
//!
//! # Usage
//!
//! ```bash
//! todo [OPTIONS] <COMMAND>
//!
//! # Show the task table
//! todo list
//!
//! # Add a task (priority defaults to Medium)
//! todo add "Buy milk" 2024-05-01 --priority Low
//!
//! # Mark the first task completed, then delete it
//! todo complete 0
//! todo delete 0
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use todo_core::{Config, Priority, Task, TaskList};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Manage a small to-do list stored in a CSV file.
#[derive(Parser)]
#[command(name = "todo", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to the task file.
    ///
    /// Overrides the configuration file. Defaults to `data/tasks.csv`.
    #[arg(short, long, global = true, env = "TODO_FILE")]
    file: Option<Utf8PathBuf>,

    /// Path to a JSON configuration file.
    #[arg(short, long, global = true, env = "TODO_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print all tasks with their positions.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Add a new task.
    Add {
        /// Task name.
        name: String,

        /// Due date in `YYYY-MM-DD` format.
        due_date: String,

        /// Priority: Low, Medium or High.
        #[arg(short, long, default_value_t = Priority::default().label().to_owned())]
        priority: String,
    },

    /// Delete the task at a position.
    Delete {
        /// Zero-based position as shown by `list`.
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Mark the task at a position as completed.
    Complete {
        /// Zero-based position as shown by `list`.
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Builds a [`Config`] from the optional config file and CLI overrides.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be read or is invalid.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load config {}: {}", path, e))?,
        None => Config::default(),
    };

    if let Some(file) = &cli.file {
        config.store.path.clone_from(file);
    }

    config.validate()?;
    Ok(config)
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Loads the task list, reporting how many damaged rows were dropped.
fn load_tasks(config: &Config) -> color_eyre::Result<TaskList> {
    let report = todo_core::load_with_report(&config.store.path)?;
    if !report.is_clean() {
        tracing::warn!(
            path = %config.store.path,
            skipped = report.skipped.len(),
            "Some rows could not be loaded and will be dropped on the next save"
        );
    }
    Ok(report.tasks)
}

/// Prints the task table or its JSON form.
fn run_list(config: &Config, json: bool) -> color_eyre::Result<()> {
    let tasks = load_tasks(config)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    if json {
        let content = serde_json::to_string_pretty(&tasks)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to serialize JSON: {}", e))?;
        writeln!(handle, "{content}")?;
        return Ok(());
    }

    if tasks.is_empty() {
        writeln!(handle, "No tasks.")?;
        return Ok(());
    }

    write!(handle, "{}", render_table(&tasks))?;
    Ok(())
}

/// Applies one mutation, saves, and prints a status line.
fn run_mutation(
    config: &Config,
    status: &str,
    mutate: impl FnOnce(&mut TaskList) -> Result<(), todo_core::TaskError>,
) -> color_eyre::Result<()> {
    let mut tasks = load_tasks(config)?;
    mutate(&mut tasks)?;
    todo_core::save(&tasks, &config.store.path)?;
    debug!(path = %config.store.path, count = tasks.len(), "Task file updated");

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{status}")?;
    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Renders tasks as an aligned text table.
fn render_table(tasks: &[Task]) -> String {
    use std::fmt::Write;

    let name_width = tasks
        .iter()
        .map(|t| t.name().chars().count())
        .max()
        .unwrap_or(0)
        .max("Task Name".len());

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<3}  {:<name_width$}  {:<10}  {:<8}  Completed",
        "#", "Task Name", "Due Date", "Priority"
    );
    for (i, task) in tasks.iter().enumerate() {
        let _ = writeln!(
            output,
            "{:<3}  {:<name_width$}  {:<10}  {:<8}  {}",
            i,
            task.name(),
            task.due_date().to_string(),
            task.priority().label(),
            if task.is_completed() { "True" } else { "False" }
        );
    }
    output
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Resolve the task file location
    let config = build_config(&cli)?;

    // 5. Route to appropriate command
    match &cli.command {
        Commands::List { json } => run_list(&config, *json),
        Commands::Add {
            name,
            due_date,
            priority,
        } => run_mutation(&config, "Task added successfully.", |tasks| {
            todo_core::add(tasks, name, due_date, priority)
        }),
        Commands::Delete { index } => run_mutation(&config, "Task deleted successfully.", |tasks| {
            todo_core::delete(tasks, *index).map(|_| ())
        }),
        Commands::Complete { index } => {
            run_mutation(&config, "Task marked as completed.", |tasks| {
                todo_core::mark_completed(tasks, *index)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_add_with_default_priority() {
        let cli = Cli::try_parse_from(["todo", "add", "Buy milk", "2024-05-01"]).unwrap();
        match cli.command {
            Commands::Add { priority, .. } => assert_eq!(priority, "Medium"),
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_cli_accepts_negative_index() {
        let cli = Cli::try_parse_from(["todo", "delete", "-1"]).unwrap();
        assert!(matches!(cli.command, Commands::Delete { index: -1 }));
    }

    #[test]
    fn test_file_flag_overrides_default_path() {
        let cli = Cli::try_parse_from(["todo", "--file", "other.csv", "list"]).unwrap();
        let config = build_config(&cli).unwrap();
        assert_eq!(config.store.path, "other.csv");
    }

    #[test]
    fn test_render_table() {
        let mut tasks = TaskList::new();
        todo_core::add(&mut tasks, "Buy milk", "2024-05-01", "Low").unwrap();
        todo_core::add(&mut tasks, "Write report", "2024-06-01", "High").unwrap();
        todo_core::mark_completed(&mut tasks, 1).unwrap();

        insta::assert_snapshot!(render_table(&tasks), @r"
        #    Task Name     Due Date    Priority  Completed
        0    Buy milk      2024-05-01  Low       False
        1    Write report  2024-06-01  High      True
        ");
    }
}
