// src/commands/mod.rs
//! Command handlers for the aneka-ui CLI

mod add;
mod diff;
mod doctor;
mod init;
mod list;
mod update;

pub use add::{cmd_add, DEFAULT_COMPONENTS};
pub use diff::cmd_diff;
pub use doctor::cmd_doctor;
pub use init::cmd_init;
pub use list::cmd_list;
pub use update::cmd_update;

use colored::Colorize;

/// Green status line for completed work
pub(crate) fn success_line(msg: &str) {
    println!("{} {msg}", "[ok]".green());
}

/// Yellow status line for degraded-but-continuing situations
pub(crate) fn warn_line(msg: &str) {
    println!("{} {msg}", "[warn]".yellow());
}

/// Red status line for per-item failures that do not abort the command
pub(crate) fn error_line(msg: &str) {
    eprintln!("{} {msg}", "[error]".red());
}
