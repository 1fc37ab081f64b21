//! Line-oriented shell that presents the ledger in a terminal.

pub mod commands;
pub mod context;
pub mod output;
pub mod registry;
pub mod render;
pub mod shell;

pub use context::{CliMode, ShellContext};
pub use shell::run_cli;
