// src/install.rs

//! Component installation engine.
//!
//! Walks a fetched component and its registry-declared dependencies
//! depth-first, writing each file through the conflict resolver and
//! aggregating the npm packages the whole tree declares. Every component is
//! visited exactly once: a dependency that resolves back onto the current
//! resolution path is a detected cycle and fails that component's install
//! instead of recursing forever, while one that was already completed (a
//! shared dependency) is silently skipped.

use crate::config::{Config, ResolvedPaths};
use crate::conflict::{resolve_file_conflict, ConflictAction, ConflictFlags};
use crate::error::{Error, Result};
use crate::registry::{ComponentSource, ItemType, RegistryItem};
use colored::Colorize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// How an install attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The component tree was processed (files written or skipped)
    Completed,
    /// The user cancelled at a conflict prompt; the caller must stop
    /// processing the remaining batch
    Cancelled,
}

/// Install directory for an item: components and utils land under their
/// respective aliases.
pub fn item_target_dir(paths: &ResolvedPaths, item_type: ItemType) -> &Path {
    match item_type {
        ItemType::Component => &paths.components_dir,
        ItemType::Util => &paths.utils_dir,
    }
}

/// Names of locally installed components, discovered by scanning the
/// components directory for files with the framework's extension.
pub fn discover_installed(paths: &ResolvedPaths, config: &Config) -> Vec<String> {
    let ext = config.framework.extension();
    let mut names: Vec<String> = WalkDir::new(&paths.components_dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|e| e == ext)
                .unwrap_or(false)
        })
        .filter_map(|entry| {
            entry
                .path()
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Depth-first component installer.
///
/// One installer instance spans a whole `add` invocation, so the visited
/// set and the aggregated package lists are shared across the requested
/// components.
pub struct ComponentInstaller<'a, S: ComponentSource> {
    source: &'a S,
    config: &'a Config,
    cwd: &'a Path,
    paths: ResolvedPaths,
    flags: ConflictFlags,
    /// Components fully processed in this session
    done: HashSet<String>,
    /// Current resolution path, for cycle reporting
    stack: Vec<String>,
    /// npm package specs declared across the tree, first-seen order
    dependencies: Vec<String>,
    dev_dependencies: Vec<String>,
    files_written: usize,
}

impl<'a, S: ComponentSource> ComponentInstaller<'a, S> {
    pub fn new(source: &'a S, config: &'a Config, cwd: &'a Path, flags: ConflictFlags) -> Self {
        Self {
            source,
            config,
            cwd,
            paths: config.resolved_paths(cwd),
            flags,
            done: HashSet::new(),
            stack: Vec::new(),
            dependencies: Vec::new(),
            dev_dependencies: Vec::new(),
            files_written: 0,
        }
    }

    /// npm dependencies aggregated so far, in first-seen order
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn dev_dependencies(&self) -> &[String] {
        &self.dev_dependencies
    }

    pub fn files_written(&self) -> usize {
        self.files_written
    }

    /// Install `item` and, recursively, its registry dependencies.
    pub fn install_tree(&mut self, item: RegistryItem) -> Result<InstallOutcome> {
        if self.done.contains(&item.name) {
            debug!("'{}' already installed in this session", item.name);
            return Ok(InstallOutcome::Completed);
        }
        if self.stack.contains(&item.name) {
            return Err(Error::CycleError(format!(
                "{} -> {}",
                self.stack.join(" -> "),
                item.name
            )));
        }

        self.stack.push(item.name.clone());
        let result = self.install_inner(&item);
        self.stack.pop();

        match result? {
            InstallOutcome::Completed => {
                self.done.insert(item.name);
                Ok(InstallOutcome::Completed)
            }
            InstallOutcome::Cancelled => Ok(InstallOutcome::Cancelled),
        }
    }

    fn install_inner(&mut self, item: &RegistryItem) -> Result<InstallOutcome> {
        if !self.write_files(item)? {
            return Ok(InstallOutcome::Cancelled);
        }
        self.collect_packages(item);

        for dep in &item.registry_dependencies {
            if self.done.contains(dep) {
                continue;
            }
            if self.stack.contains(dep) {
                return Err(Error::CycleError(format!(
                    "{} -> {dep}",
                    self.stack.join(" -> ")
                )));
            }
            let dep_item = match self
                .source
                .fetch(dep, self.config.framework, self.config.style)
            {
                Ok(dep_item) => dep_item,
                Err(e) => {
                    // A missing registry dependency degrades that one
                    // entry, not the whole component.
                    warn!("skipping registry dependency '{dep}': {e}");
                    continue;
                }
            };
            if self.install_tree(dep_item)? == InstallOutcome::Cancelled {
                return Ok(InstallOutcome::Cancelled);
            }
        }
        Ok(InstallOutcome::Completed)
    }

    /// Write the item's files through the conflict resolver.
    ///
    /// Returns false if the user cancelled.
    fn write_files(&mut self, item: &RegistryItem) -> Result<bool> {
        let dir = item_target_dir(&self.paths, item.item_type).to_path_buf();
        for file in &item.files {
            let target = dir.join(&file.path);
            match resolve_file_conflict(&target, &file.content, self.flags)? {
                ConflictAction::Overwrite => {
                    if let Some(parent) = target.parent() {
                        fs::create_dir_all(parent).map_err(|e| {
                            Error::IoError(format!(
                                "failed to create {}: {e}",
                                parent.display()
                            ))
                        })?;
                    }
                    fs::write(&target, &file.content).map_err(|e| {
                        Error::IoError(format!("failed to write {}: {e}", target.display()))
                    })?;
                    self.files_written += 1;
                    println!("  {} {}", "wrote".green(), self.display_path(&target));
                }
                ConflictAction::Skip => {
                    debug!("skipped {}", target.display());
                }
                ConflictAction::Cancel => return Ok(false),
            }
        }
        Ok(true)
    }

    fn collect_packages(&mut self, item: &RegistryItem) {
        for dep in &item.dependencies {
            if !self.dependencies.contains(dep) {
                self.dependencies.push(dep.clone());
            }
        }
        for dep in &item.dev_dependencies {
            if !self.dev_dependencies.contains(dep) {
                self.dev_dependencies.push(dep.clone());
            }
        }
    }

    fn display_path(&self, target: &Path) -> String {
        target
            .strip_prefix(self.cwd)
            .unwrap_or(target)
            .display()
            .to_string()
    }
}
