// src/cli.rs

//! CLI definitions for aneka-ui.
//!
//! This module contains the command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "aneka-ui")]
#[command(author = "Aneka UI Project")]
#[command(version)]
#[command(about = "Add framework-specific UI components to your project", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize aneka-ui in the current project
    Init {
        /// Accept all defaults without prompting
        #[arg(short = 'y', long)]
        yes: bool,

        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Add components to your project
    Add {
        /// Component names to add
        components: Vec<String>,

        /// Overwrite existing files without prompting
        #[arg(short, long)]
        overwrite: bool,

        /// Skip existing files without prompting
        #[arg(short, long)]
        skip: bool,

        /// Add every known component
        #[arg(short, long)]
        all: bool,
    },

    /// List registry components
    List {
        /// Show only locally installed components
        #[arg(short, long)]
        installed: bool,

        /// Show every component available in the registry
        #[arg(short, long)]
        available: bool,
    },

    /// Show the diff between a local component and the registry version
    Diff {
        /// Component name
        component: String,
    },

    /// Update installed components from the registry
    Update {
        /// Component names to update
        components: Vec<String>,

        /// Update every installed component
        #[arg(short, long)]
        all: bool,

        /// Apply updates without showing diffs or confirming
        #[arg(short, long)]
        force: bool,
    },

    /// Check the project setup and report problems
    Doctor {
        /// Create missing directories
        #[arg(short, long)]
        fix: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
