// src/commands/diff.rs

//! `aneka-ui diff`: compare a local component against the registry.

use super::success_line;
use crate::config::Config;
use crate::diff::print_diff;
use crate::install::item_target_dir;
use crate::registry::RegistryClient;
use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn cmd_diff(cwd: &Path, component: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let client = RegistryClient::new()?;
    let item = client.fetch_component(component, config.framework, config.style)?;

    let paths = config.resolved_paths(cwd);
    let dir = item_target_dir(&paths, item.item_type);

    if !item.files.iter().any(|f| dir.join(&f.path).exists()) {
        anyhow::bail!(
            "'{component}' is not installed locally; run `aneka-ui add {component}` first"
        );
    }

    let mut differs = false;
    for file in &item.files {
        let target = dir.join(&file.path);
        // A file the registry added since install shows as all-new.
        let local = fs::read_to_string(&target).unwrap_or_default();
        if local == file.content {
            continue;
        }
        differs = true;
        print_diff(&local, &file.content, &file.path);
    }

    if !differs {
        success_line(&format!("'{component}' is up to date"));
    }
    Ok(())
}
