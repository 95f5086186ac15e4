// src/commands/list.rs

//! `aneka-ui list`: show available and installed components.

use crate::config::Config;
use crate::install::discover_installed;
use crate::registry::RegistryClient;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn cmd_list(cwd: &Path, installed: bool, available: bool) -> Result<()> {
    let config = Config::load(cwd)?;
    let paths = config.resolved_paths(cwd);
    let local = discover_installed(&paths, &config);

    if installed && !available {
        if local.is_empty() {
            println!("No components installed.");
            return Ok(());
        }
        println!("Installed components ({}):", local.len());
        for name in &local {
            println!("  {name}");
        }
        return Ok(());
    }

    let client = RegistryClient::new()?;
    let index = client.fetch_index()?;
    let entries: Vec<_> = index
        .entries
        .iter()
        .filter(|e| e.supports(config.framework, config.style))
        .collect();

    if entries.is_empty() {
        println!("No components available for {config}.");
        return Ok(());
    }

    println!("Available components for {config} ({}):", entries.len());
    for entry in entries {
        let marker = if local.contains(&entry.name) {
            format!(" {}", "[installed]".green())
        } else {
            String::new()
        };
        let description = entry.description.as_deref().unwrap_or("");
        println!("  {:<16} {description}{marker}", entry.name);
    }
    Ok(())
}
