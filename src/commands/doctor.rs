// src/commands/doctor.rs

//! `aneka-ui doctor`: check the project setup and report problems.

use crate::config::Config;
use crate::installer::PackageManager;
use crate::registry::RegistryClient;
use crate::runtime::ensure_supported_node;
use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Ok,
    Warning,
    Error,
}

struct Finding {
    severity: Severity,
    message: String,
}

impl Finding {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Ok,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

pub fn cmd_doctor(cwd: &Path, fix: bool) -> Result<()> {
    let mut findings: Vec<Finding> = Vec::new();

    let config = match Config::load(cwd) {
        Ok(config) => {
            findings.push(Finding::ok(format!(
                "aneka-ui.json is present and valid ({config})"
            )));
            Some(config)
        }
        Err(e) => {
            findings.push(Finding::error(e.to_string()));
            None
        }
    };

    match ensure_supported_node() {
        Ok(version) => findings.push(Finding::ok(format!("node {version}"))),
        Err(e) => findings.push(Finding::error(e.to_string())),
    }

    if let Some(config) = &config {
        let paths = config.resolved_paths(cwd);
        for (label, dir) in [
            ("components directory", &paths.components_dir),
            ("utils directory", &paths.utils_dir),
        ] {
            if dir.is_dir() {
                findings.push(Finding::ok(format!("{label} exists")));
            } else if fix {
                match fs::create_dir_all(dir) {
                    Ok(()) => findings.push(Finding::ok(format!(
                        "created {label} at {}",
                        dir.display()
                    ))),
                    Err(e) => findings.push(Finding::error(format!(
                        "failed to create {label}: {e}"
                    ))),
                }
            } else {
                findings.push(Finding::warning(format!(
                    "{label} missing at {} (run with --fix to create it)",
                    dir.display()
                )));
            }
        }

        for (label, file) in [
            ("tailwind config", &paths.tailwind_config),
            ("global CSS file", &paths.tailwind_css),
        ] {
            if file.is_file() {
                findings.push(Finding::ok(format!("{label} exists")));
            } else {
                findings.push(Finding::warning(format!(
                    "{label} missing at {}",
                    file.display()
                )));
            }
        }

        findings.push(Finding::ok(format!(
            "package manager: {}",
            PackageManager::detect(cwd)
        )));
        if !cwd.join("package.json").is_file() {
            findings.push(Finding::warning(
                "no package.json found; dependency installation will fail",
            ));
        }

        match RegistryClient::new().and_then(|client| client.fetch_index()) {
            Ok(index) => findings.push(Finding::ok(format!(
                "registry reachable ({} components)",
                index.entries.len()
            ))),
            Err(e) => findings.push(Finding::error(format!("registry unreachable: {e}"))),
        }
    }

    println!();
    for finding in &findings {
        let marker = match finding.severity {
            Severity::Ok => "[ok]".green(),
            Severity::Warning => "[warn]".yellow(),
            Severity::Error => "[error]".red(),
        };
        println!("  {marker} {}", finding.message);
    }
    println!();

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    if errors > 0 {
        anyhow::bail!("{errors} problem(s) found");
    }
    println!("No problems found.");
    Ok(())
}
