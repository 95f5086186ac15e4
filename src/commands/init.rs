// src/commands/init.rs

//! `aneka-ui init`: write the project configuration.

use super::success_line;
use crate::config::{Aliases, Config, Framework, Style, Tailwind, CONFIG_FILE};
use crate::error::Error;
use crate::runtime::ensure_supported_node;
use anyhow::Result;
use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::info;

pub fn cmd_init(cwd: &Path, yes: bool, force: bool) -> Result<()> {
    let node = ensure_supported_node()?;
    info!("node {node} detected");

    if Config::exists(cwd) && !force {
        anyhow::bail!("{CONFIG_FILE} already exists. Use --force to overwrite.");
    }

    let config = if yes || !crate::conflict::interactive() {
        Config::default()
    } else {
        prompt_for_config()?
    };

    config.save(cwd)?;
    let paths = config.resolved_paths(cwd);
    fs::create_dir_all(&paths.components_dir)?;
    fs::create_dir_all(&paths.utils_dir)?;

    success_line(&format!("Initialized aneka-ui for {config}"));
    println!("Run `aneka-ui add <component>` to add your first component.");
    Ok(())
}

fn prompt_for_config() -> crate::Result<Config> {
    let framework = prompt_choice(
        "Which framework does your project use?",
        Framework::iter().collect(),
    )?;
    let style = prompt_choice("Which design style?", Style::iter().collect())?;

    let defaults = Config::default();
    let aliases = Aliases {
        components: prompt_default("Components alias", &defaults.aliases.components)?,
        utils: prompt_default("Utils alias", &defaults.aliases.utils)?,
    };
    let tailwind = Tailwind {
        config: prompt_default("Tailwind config", &defaults.tailwind.config)?,
        css: prompt_default("Global CSS file", &defaults.tailwind.css)?,
    };

    Ok(Config {
        framework,
        style,
        aliases,
        tailwind,
    })
}

/// Numbered single-choice prompt; empty input takes the first option.
fn prompt_choice<T: Copy + fmt::Display>(question: &str, options: Vec<T>) -> crate::Result<T> {
    let mut stdout = io::stdout();
    loop {
        writeln!(stdout)?;
        writeln!(stdout, "{question}")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(stdout, "  [{}] {option}", i + 1)?;
        }
        write!(stdout, "Choice [1]: ")?;
        stdout.flush()?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| Error::PromptError(e.to_string()))?;

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(options[0]);
        }
        match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 && n <= options.len() => return Ok(options[n - 1]),
            _ => {
                writeln!(
                    stdout,
                    "Please enter a number between 1 and {}.",
                    options.len()
                )?;
            }
        }
    }
}

/// Free-text prompt; empty input takes the default.
fn prompt_default(question: &str, default: &str) -> crate::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{question} [{default}]: ")?;
    stdout.flush()?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| Error::PromptError(e.to_string()))?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
