// src/commands/add.rs

//! `aneka-ui add`: fetch components and copy them into the project.

use super::{error_line, success_line, warn_line};
use crate::config::Config;
use crate::conflict::ConflictFlags;
use crate::install::{ComponentInstaller, InstallOutcome};
use crate::installer::{filter_missing_packages, install_dependencies};
use crate::registry::RegistryClient;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// The components `--all` expands to
pub const DEFAULT_COMPONENTS: &[&str] = &["button", "card", "badge", "dialog", "tooltip"];

pub fn cmd_add(
    cwd: &Path,
    components: Vec<String>,
    overwrite: bool,
    skip: bool,
    all: bool,
) -> Result<()> {
    let names: Vec<String> = if all {
        DEFAULT_COMPONENTS.iter().map(|s| s.to_string()).collect()
    } else if components.is_empty() {
        anyhow::bail!("no components specified; pass component names or use --all");
    } else {
        components
    };

    let config = Config::load(cwd)?;
    info!("Adding {} component(s) for {}", names.len(), config);

    let client = RegistryClient::new()?;
    let outcome = client.fetch_components(&names, config.framework, config.style);
    for (name, err) in &outcome.failures {
        warn_line(&format!("skipping '{name}': {err}"));
    }
    if outcome.items.is_empty() {
        println!("Nothing to install.");
        return Ok(());
    }

    let flags = ConflictFlags { overwrite, skip };
    let mut installer = ComponentInstaller::new(&client, &config, cwd, flags);
    let mut installed = 0usize;
    for item in outcome.items {
        let name = item.name.clone();
        println!("Installing {name}...");
        match installer.install_tree(item) {
            Ok(InstallOutcome::Completed) => installed += 1,
            Ok(InstallOutcome::Cancelled) => {
                println!("Installation cancelled. Files already written were kept.");
                return Ok(());
            }
            Err(e) => {
                // Per-component failures (write errors, dependency cycles)
                // do not abort the rest of the batch.
                error_line(&format!("failed to install '{name}': {e}"));
            }
        }
    }

    let missing = filter_missing_packages(installer.dependencies(), cwd);
    if !missing.is_empty() {
        println!(
            "Installing {} package(s): {}",
            missing.len(),
            missing.join(", ")
        );
        install_dependencies(&missing, cwd, false)?;
    }
    let missing_dev = filter_missing_packages(installer.dev_dependencies(), cwd);
    if !missing_dev.is_empty() {
        println!(
            "Installing {} dev package(s): {}",
            missing_dev.len(),
            missing_dev.join(", ")
        );
        install_dependencies(&missing_dev, cwd, true)?;
    }

    success_line(&format!(
        "Installed {installed} component(s), wrote {} file(s)",
        installer.files_written()
    ));
    Ok(())
}
