// src/lib.rs

//! aneka-ui component distribution CLI
//!
//! Fetches framework-specific UI component sources from a remote JSON
//! registry and copies them into a consumer project, tracking local
//! configuration and supporting diff/update workflows.
//!
//! # Architecture
//!
//! - Config-first: one `aneka-ui.json` at the project root drives every
//!   command; install paths are derived from it deterministically
//! - Conflict resolution: each file write goes through a resolver that
//!   short-circuits on missing files, CLI flags, and identical content
//!   before ever prompting
//! - Registry dependencies resolve depth-first with cycle detection;
//!   npm dependencies are aggregated across the tree and installed once

pub mod cli;
pub mod commands;
pub mod config;
pub mod conflict;
pub mod diff;
mod error;
pub mod install;
pub mod installer;
pub mod registry;
pub mod runtime;

pub use config::{Aliases, Config, Framework, ResolvedPaths, Style, Tailwind, CONFIG_FILE};
pub use conflict::{confirm, resolve_file_conflict, ConflictAction, ConflictFlags};
pub use diff::{diff_lines, print_diff, DiffLine};
pub use error::{Error, Result};
pub use install::{discover_installed, item_target_dir, ComponentInstaller, InstallOutcome};
pub use installer::{
    filter_missing_packages, install_dependencies, installed_packages, strip_version_spec,
    PackageManager,
};
pub use registry::{
    ComponentSource, FetchOutcome, IndexEntry, ItemType, RegistryClient, RegistryFile,
    RegistryIndex, RegistryItem,
};
