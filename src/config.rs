// src/config.rs

//! Local project configuration (`aneka-ui.json`).
//!
//! The config file lives at the consumer project root and records which
//! framework and design style the project uses, plus the import aliases and
//! Tailwind file locations that installs are resolved against. It is written
//! once by `init` and read by every other command; the only mutation after
//! creation is a full overwrite via `init --force`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumIter, EnumString};

/// Config file name, relative to the project root
pub const CONFIG_FILE: &str = "aneka-ui.json";

/// Target UI framework
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
    Angular,
}

impl Framework {
    /// File extension used for component sources of this framework
    pub fn extension(&self) -> &'static str {
        match self {
            Framework::React => "tsx",
            Framework::Vue => "vue",
            Framework::Angular => "ts",
        }
    }
}

/// Design-language preset applied to every component
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Style {
    Material,
    Hig,
    Oneui,
}

/// Import aliases components are installed under
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aliases {
    pub components: String,
    pub utils: String,
}

impl Default for Aliases {
    fn default() -> Self {
        Self {
            components: "@/components/ui".to_string(),
            utils: "@/lib/utils".to_string(),
        }
    }
}

/// Tailwind file locations, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tailwind {
    pub config: String,
    pub css: String,
}

impl Default for Tailwind {
    fn default() -> Self {
        Self {
            config: "tailwind.config.js".to_string(),
            css: "src/index.css".to_string(),
        }
    }
}

/// The persisted project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub framework: Framework,
    pub style: Style,
    #[serde(default)]
    pub aliases: Aliases,
    #[serde(default)]
    pub tailwind: Tailwind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            framework: Framework::React,
            style: Style::Material,
            aliases: Aliases::default(),
            tailwind: Tailwind::default(),
        }
    }
}

/// Filesystem paths derived from the configured aliases.
///
/// Never persisted; recomputed from the config on every load so the file on
/// disk stays the single source of truth.
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub components_dir: PathBuf,
    pub utils_dir: PathBuf,
    pub tailwind_config: PathBuf,
    pub tailwind_css: PathBuf,
}

/// Map an import alias to a project-relative directory.
///
/// `@/` is the conventional alias for the project `src/` directory; anything
/// else is taken as a plain relative path.
fn resolve_alias(alias: &str) -> PathBuf {
    match alias.strip_prefix("@/") {
        Some(rest) => Path::new("src").join(rest),
        None => PathBuf::from(alias),
    }
}

impl Config {
    /// Whether a config file exists in `cwd`
    pub fn exists(cwd: &Path) -> bool {
        cwd.join(CONFIG_FILE).is_file()
    }

    /// Load the config from `cwd`.
    ///
    /// A missing file is a distinct error so callers can direct the user to
    /// `init`; a file that fails to parse (including out-of-enum framework
    /// or style values) is a config error.
    pub fn load(cwd: &Path) -> Result<Self> {
        let path = cwd.join(CONFIG_FILE);
        if !path.is_file() {
            return Err(Error::ConfigMissing(cwd.display().to_string()));
        }
        let raw = fs::read_to_string(&path)
            .map_err(|e| Error::ConfigError(format!("failed to read {}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::ConfigError(format!("failed to parse {}: {e}", path.display())))
    }

    /// Write the config to `cwd` as pretty-printed JSON
    pub fn save(&self, cwd: &Path) -> Result<()> {
        let path = cwd.join(CONFIG_FILE);
        let mut raw = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("failed to serialize config: {e}")))?;
        raw.push('\n');
        fs::write(&path, raw)
            .map_err(|e| Error::IoError(format!("failed to write {}: {e}", path.display())))?;
        Ok(())
    }

    /// Compute the install paths for this config under `cwd`
    pub fn resolved_paths(&self, cwd: &Path) -> ResolvedPaths {
        ResolvedPaths {
            components_dir: cwd.join(resolve_alias(&self.aliases.components)),
            utils_dir: cwd.join(resolve_alias(&self.aliases.utils)),
            tailwind_config: cwd.join(&self.tailwind.config),
            tailwind_css: cwd.join(&self.tailwind.css),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.framework, self.style)
    }
}
