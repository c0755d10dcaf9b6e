//! # CLI Behavior
//!
//! One possible client of the devcat library. This is the only place that
//! knows about terminal output, exit codes and logging setup.
//!
//! Every invocation loads the catalog, runs one command and, when the command
//! changed the catalog, saves it:
//!
//! - `--file` picks the file to load (default: configured `data-file`).
//! - `--out` picks the file to save to. Without it, an explicit `--file` is
//!   saved in place; otherwise the configured `save-file` is used.
//!
//! Running `devcat` with no subcommand lists the catalog.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context wiring and per-command handlers
//! - `render`: Output formatting (tables, colors, messages)
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
