// src/runtime.rs

//! Node runtime checks.
//!
//! Installed components are consumed by a Node toolchain and dependency
//! installation shells out to a Node package manager, so the CLI refuses to
//! initialize a project on an unsupported Node version.

use crate::error::{Error, Result};
use semver::Version;
use std::process::Command;
use tracing::debug;

/// Minimum supported Node major version
pub const MIN_NODE_MAJOR: u64 = 18;

/// Query the installed Node version.
///
/// Locates `node` on PATH and parses `node --version` output
/// (`v18.17.0` -> `18.17.0`).
pub fn node_version() -> Result<Version> {
    let node = which::which("node")
        .map_err(|_| Error::RuntimeError("node not found in PATH".to_string()))?;

    let output = Command::new(&node)
        .arg("--version")
        .output()
        .map_err(|e| Error::RuntimeError(format!("failed to run node --version: {e}")))?;
    if !output.status.success() {
        return Err(Error::RuntimeError(format!(
            "node --version exited with {}",
            output.status
        )));
    }

    let raw = String::from_utf8_lossy(&output.stdout);
    let trimmed = raw.trim().trim_start_matches('v');
    debug!("node --version reported {trimmed}");
    Version::parse(trimmed)
        .map_err(|e| Error::RuntimeError(format!("unparseable node version '{trimmed}': {e}")))
}

/// Fail unless Node >= 18.0.0 is available
pub fn ensure_supported_node() -> Result<Version> {
    let version = node_version()?;
    if version.major < MIN_NODE_MAJOR {
        return Err(Error::RuntimeError(format!(
            "Node {version} is not supported; {MIN_NODE_MAJOR}.0.0 or newer is required"
        )));
    }
    Ok(version)
}
