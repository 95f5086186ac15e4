// src/commands/update.rs

//! `aneka-ui update`: reconcile installed components with the registry.
//!
//! Collects every pending change first, shows the diffs, and asks for one
//! aggregate confirmation before applying anything; there is no per-file
//! granularity once the user confirms.

use super::{error_line, success_line, warn_line};
use crate::config::Config;
use crate::conflict::confirm;
use crate::diff::print_diff;
use crate::install::{discover_installed, item_target_dir};
use crate::installer::{filter_missing_packages, install_dependencies};
use crate::registry::{RegistryClient, RegistryItem};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

struct FileChange {
    target: PathBuf,
    display: String,
    local: Option<String>,
    content: String,
}

struct PendingUpdate {
    item: RegistryItem,
    changes: Vec<FileChange>,
}

pub fn cmd_update(cwd: &Path, components: Vec<String>, all: bool, force: bool) -> Result<()> {
    let config = Config::load(cwd)?;
    let paths = config.resolved_paths(cwd);

    let names: Vec<String> = if all {
        discover_installed(&paths, &config)
    } else if components.is_empty() {
        anyhow::bail!("no components specified; pass component names or use --all");
    } else {
        components
    };
    if names.is_empty() {
        println!("No installed components found.");
        return Ok(());
    }

    info!("Checking {} component(s) for updates", names.len());
    let client = RegistryClient::new()?;
    let outcome = client.fetch_components(&names, config.framework, config.style);
    for (name, err) in &outcome.failures {
        warn_line(&format!("skipping '{name}': {err}"));
    }

    let mut pending: Vec<PendingUpdate> = Vec::new();
    for item in outcome.items {
        let dir = item_target_dir(&paths, item.item_type);
        let mut changes = Vec::new();
        for file in &item.files {
            let target = dir.join(&file.path);
            let local = fs::read_to_string(&target).ok();
            if local.as_deref() != Some(file.content.as_str()) {
                changes.push(FileChange {
                    display: target
                        .strip_prefix(cwd)
                        .unwrap_or(&target)
                        .display()
                        .to_string(),
                    target,
                    local,
                    content: file.content.clone(),
                });
            }
        }
        if changes.is_empty() {
            println!("{} is up to date", item.name);
        } else {
            pending.push(PendingUpdate { item, changes });
        }
    }

    if pending.is_empty() {
        success_line("All components are up to date.");
        return Ok(());
    }

    if !force {
        for update in &pending {
            println!("\n{} has changes:", update.item.name);
            for change in &update.changes {
                match &change.local {
                    Some(local) => print_diff(local, &change.content, &change.display),
                    None => println!("  {} (new file)", change.display),
                }
            }
        }
        println!();
        let total: usize = pending.iter().map(|u| u.changes.len()).sum();
        let question = format!(
            "Apply {total} file update(s) to {} component(s)?",
            pending.len()
        );
        if !confirm(&question)? {
            println!("Update cancelled.");
            return Ok(());
        }
    }

    let mut updated = 0usize;
    let mut dependencies: Vec<String> = Vec::new();
    let mut dev_dependencies: Vec<String> = Vec::new();
    for update in pending {
        let mut failed = false;
        for change in &update.changes {
            if let Some(parent) = change.target.parent() {
                if let Err(e) = fs::create_dir_all(parent) {
                    error_line(&format!("failed to create {}: {e}", parent.display()));
                    failed = true;
                    break;
                }
            }
            if let Err(e) = fs::write(&change.target, &change.content) {
                error_line(&format!("failed to write {}: {e}", change.display));
                failed = true;
                break;
            }
        }
        if failed {
            // Leave this component partially written and move on; the next
            // update run will pick up whatever still differs.
            continue;
        }
        updated += 1;
        println!("Updated {}", update.item.name);
        for dep in &update.item.dependencies {
            if !dependencies.contains(dep) {
                dependencies.push(dep.clone());
            }
        }
        for dep in &update.item.dev_dependencies {
            if !dev_dependencies.contains(dep) {
                dev_dependencies.push(dep.clone());
            }
        }
    }

    let missing = filter_missing_packages(&dependencies, cwd);
    if !missing.is_empty() {
        println!(
            "Installing {} package(s): {}",
            missing.len(),
            missing.join(", ")
        );
        install_dependencies(&missing, cwd, false)?;
    }
    let missing_dev = filter_missing_packages(&dev_dependencies, cwd);
    if !missing_dev.is_empty() {
        install_dependencies(&missing_dev, cwd, true)?;
    }

    success_line(&format!("Updated {updated} component(s)"));
    Ok(())
}
