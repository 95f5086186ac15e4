// src/installer.rs

//! External package-dependency installation.
//!
//! Components declare npm package dependencies; this module detects the
//! consumer's package manager, lists what is already installed, and shells
//! out to install the remainder. Listing is fail-open (any failure reads as
//! "nothing installed"); installation failures are fatal to the enclosing
//! command.

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use strum_macros::Display;
use tracing::{debug, info};

/// Supported Node package managers, in lockfile-detection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Bun,
    Npm,
}

impl PackageManager {
    /// Detect the package manager for the project at `cwd`.
    ///
    /// Lockfile presence wins, then the `packageManager` field of
    /// package.json, then npm as the default.
    pub fn detect(cwd: &Path) -> Self {
        if cwd.join("pnpm-lock.yaml").is_file() {
            return PackageManager::Pnpm;
        }
        if cwd.join("yarn.lock").is_file() {
            return PackageManager::Yarn;
        }
        if cwd.join("bun.lockb").is_file() || cwd.join("bun.lock").is_file() {
            return PackageManager::Bun;
        }
        if cwd.join("package-lock.json").is_file() {
            return PackageManager::Npm;
        }
        Self::from_package_json(cwd).unwrap_or(PackageManager::Npm)
    }

    fn from_package_json(cwd: &Path) -> Option<Self> {
        let raw = fs::read_to_string(cwd.join("package.json")).ok()?;
        let pkg: Value = serde_json::from_str(&raw).ok()?;
        // packageManager is "name@version", e.g. "pnpm@9.1.0"
        let field = pkg.get("packageManager")?.as_str()?;
        match field.split('@').next()? {
            "pnpm" => Some(PackageManager::Pnpm),
            "yarn" => Some(PackageManager::Yarn),
            "bun" => Some(PackageManager::Bun),
            "npm" => Some(PackageManager::Npm),
            _ => None,
        }
    }

    /// Binary name to invoke
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
            PackageManager::Npm => "npm",
        }
    }

    /// Arguments for "list installed, depth 0, JSON"
    fn list_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Pnpm => &["list", "--depth", "0", "--json"],
            PackageManager::Yarn => &["list", "--depth=0", "--json"],
            PackageManager::Bun => &["pm", "ls"],
            PackageManager::Npm => &["ls", "--depth=0", "--json"],
        }
    }

    /// Arguments for installing the given package specifiers
    fn install_args(&self, dev: bool) -> Vec<&'static str> {
        let mut args: Vec<&'static str> = match self {
            PackageManager::Pnpm => vec!["add"],
            PackageManager::Yarn => vec!["add"],
            PackageManager::Bun => vec!["add"],
            PackageManager::Npm => vec!["install"],
        };
        if dev {
            args.push(match self {
                PackageManager::Pnpm | PackageManager::Yarn => "-D",
                PackageManager::Bun => "-d",
                PackageManager::Npm => "--save-dev",
            });
        }
        args
    }
}

/// Strip a version specifier from a package spec.
///
/// `react@^18.0.0` -> `react`; scoped packages keep their scope:
/// `@radix-ui/react-dialog@1.0.0` -> `@radix-ui/react-dialog`.
pub fn strip_version_spec(spec: &str) -> &str {
    match spec.rfind('@') {
        Some(idx) if idx > 0 => &spec[..idx],
        _ => spec,
    }
}

/// List the packages currently installed in the project at `cwd`.
///
/// Fail-open: a missing manager binary, a non-zero exit, or output that
/// does not parse all produce an empty set, so callers treat every
/// requested package as missing rather than aborting.
pub fn installed_packages(cwd: &Path) -> BTreeSet<String> {
    let manager = PackageManager::detect(cwd);
    let output = match Command::new(manager.command())
        .args(manager.list_args())
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            debug!("failed to run {} list: {e}", manager);
            return BTreeSet::new();
        }
    };

    if !output.status.success() {
        debug!("{} list exited with {}", manager, output.status);
        return BTreeSet::new();
    }

    let raw = String::from_utf8_lossy(&output.stdout);
    parse_installed(&raw, manager)
}

fn parse_installed(raw: &str, manager: PackageManager) -> BTreeSet<String> {
    match manager {
        PackageManager::Npm => dependency_keys(serde_json::from_str(raw).ok()),
        // pnpm prints an array of per-project objects
        PackageManager::Pnpm => {
            let parsed: Option<Value> = serde_json::from_str(raw).ok();
            match parsed {
                Some(Value::Array(projects)) => dependency_keys(projects.into_iter().next()),
                other => dependency_keys(other),
            }
        }
        // yarn classic prints {"type":"tree","data":{"trees":[{"name":"pkg@1.0.0"}]}}
        PackageManager::Yarn => raw
            .lines()
            .filter_map(|line| serde_json::from_str::<Value>(line).ok())
            .filter(|v| v.get("type").and_then(Value::as_str) == Some("tree"))
            .flat_map(|v| {
                v.pointer("/data/trees")
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default()
            })
            .filter_map(|tree| {
                tree.get("name")
                    .and_then(Value::as_str)
                    .map(|name| strip_version_spec(name).to_string())
            })
            .collect(),
        // bun pm ls prints plain text: "├── react@18.2.0"
        PackageManager::Bun => raw
            .lines()
            .filter_map(|line| line.split_whitespace().last())
            .filter(|token| token.contains('@'))
            .map(|token| strip_version_spec(token).to_string())
            .collect(),
    }
}

fn dependency_keys(value: Option<Value>) -> BTreeSet<String> {
    value
        .as_ref()
        .and_then(|v| v.get("dependencies"))
        .and_then(Value::as_object)
        .map(|deps| deps.keys().cloned().collect())
        .unwrap_or_default()
}

/// Filter `requested` down to specifiers whose package is not in `installed`.
///
/// Original specifier strings and input order are preserved.
pub fn filter_against(requested: &[String], installed: &BTreeSet<String>) -> Vec<String> {
    requested
        .iter()
        .filter(|spec| !installed.contains(strip_version_spec(spec)))
        .cloned()
        .collect()
}

/// Filter `requested` against the packages installed in `cwd`
pub fn filter_missing_packages(requested: &[String], cwd: &Path) -> Vec<String> {
    if requested.is_empty() {
        return Vec::new();
    }
    let installed = installed_packages(cwd);
    filter_against(requested, &installed)
}

/// Install the given package specifiers in `cwd`.
///
/// No-op on an empty list. Unlike listing, failure here propagates: a
/// half-installed dependency set is worth stopping for.
pub fn install_dependencies(packages: &[String], cwd: &Path, dev: bool) -> Result<()> {
    if packages.is_empty() {
        return Ok(());
    }

    let manager = PackageManager::detect(cwd);
    let mut args = manager.install_args(dev);
    args.extend(packages.iter().map(String::as_str));

    info!("Running {} {}", manager.command(), args.join(" "));
    let status = Command::new(manager.command())
        .args(&args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .status()
        .map_err(|e| Error::InstallError(format!("failed to run {}: {e}", manager.command())))?;

    if !status.success() {
        return Err(Error::InstallError(format!(
            "{} exited with {status}",
            manager.command()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_manager_from_lockfiles() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Npm);

        fs::write(dir.path().join("yarn.lock"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Yarn);

        // pnpm lockfile outranks yarn's
        fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Pnpm);
    }

    #[test]
    fn detects_manager_from_package_json_field() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "app", "packageManager": "bun@1.1.0"}"#,
        )
        .unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Bun);
    }

    #[test]
    fn strips_version_specifiers() {
        assert_eq!(strip_version_spec("react@^18.0.0"), "react");
        assert_eq!(strip_version_spec("react"), "react");
        assert_eq!(
            strip_version_spec("@radix-ui/react-dialog@1.0.0"),
            "@radix-ui/react-dialog"
        );
        assert_eq!(strip_version_spec("@scope/pkg"), "@scope/pkg");
    }

    #[test]
    fn filter_preserves_specifiers_and_order() {
        let requested = vec![
            "react@^18.0.0".to_string(),
            "clsx".to_string(),
            "@scope/pkg@2.0.0".to_string(),
        ];
        let installed: BTreeSet<String> = ["react".to_string()].into_iter().collect();

        let missing = filter_against(&requested, &installed);
        assert_eq!(missing, vec!["clsx", "@scope/pkg@2.0.0"]);

        let missing = filter_against(&requested, &BTreeSet::new());
        assert_eq!(missing, requested);
    }

    #[test]
    fn parses_npm_ls_output() {
        let raw = r#"{"name": "app", "dependencies": {"react": {"version": "18.2.0"}, "clsx": {"version": "2.0.0"}}}"#;
        let installed = parse_installed(raw, PackageManager::Npm);
        assert!(installed.contains("react"));
        assert!(installed.contains("clsx"));
        assert_eq!(installed.len(), 2);
    }

    #[test]
    fn parses_pnpm_list_output() {
        let raw = r#"[{"name": "app", "dependencies": {"vue": {"version": "3.4.0"}}}]"#;
        let installed = parse_installed(raw, PackageManager::Pnpm);
        assert!(installed.contains("vue"));
    }

    #[test]
    fn parses_yarn_list_output() {
        let raw = r#"{"type":"tree","data":{"trees":[{"name":"react@18.2.0"},{"name":"@scope/pkg@1.0.0"}]}}"#;
        let installed = parse_installed(raw, PackageManager::Yarn);
        assert!(installed.contains("react"));
        assert!(installed.contains("@scope/pkg"));
    }

    #[test]
    fn malformed_output_reads_as_empty() {
        assert!(parse_installed("not json", PackageManager::Npm).is_empty());
        assert!(parse_installed("", PackageManager::Pnpm).is_empty());
    }

    #[test]
    fn install_of_nothing_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        install_dependencies(&[], dir.path(), false).unwrap();
    }
}
