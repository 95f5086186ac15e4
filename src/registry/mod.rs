// src/registry/mod.rs

//! Remote component registry: payload types and URL layout.
//!
//! The registry is a static JSON API. `index.json` lists every component;
//! individual components live at `{base}/{framework}/{style}/{name}.json`.
//! Payloads are validated by strict typed deserialization (an unknown
//! framework, style, or item type is a schema failure for that fetch) plus
//! a post-decode consistency check against the requested coordinates.

mod client;

pub use client::{FetchOutcome, RegistryClient};

use crate::config::{Framework, Style};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the registry base URL
pub const REGISTRY_URL_ENV: &str = "ANEKA_REGISTRY_URL";

/// Default registry base URL
pub const DEFAULT_REGISTRY_URL: &str = "https://aneka-ui.com/registry";

/// What kind of thing a registry item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Component,
    Util,
}

/// One source file within a registry item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryFile {
    /// Path relative to the install directory, extension included
    pub path: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default)]
    pub file_type: Option<String>,
}

/// A fetched registry component, complete with file contents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub framework: Framework,
    pub style: Style,
    pub files: Vec<RegistryFile>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub dev_dependencies: Vec<String>,
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl RegistryItem {
    /// Check the payload against the coordinates it was requested for.
    ///
    /// The URL layout makes a mismatch unlikely, but a misconfigured
    /// registry serving the wrong framework's sources would otherwise write
    /// unusable files into the project.
    pub fn validate(&self, name: &str, framework: Framework, style: Style) -> Result<()> {
        if self.name != name {
            return Err(Error::SchemaError(format!(
                "requested '{name}' but payload is for '{}'",
                self.name
            )));
        }
        if self.framework != framework || self.style != style {
            return Err(Error::SchemaError(format!(
                "'{name}' payload is for {}/{}, expected {framework}/{style}",
                self.framework, self.style
            )));
        }
        if self.files.is_empty() {
            return Err(Error::SchemaError(format!("'{name}' declares no files")));
        }
        Ok(())
    }
}

/// One entry of the registry index listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub description: Option<String>,
    pub frameworks: Vec<Framework>,
    pub styles: Vec<Style>,
}

impl IndexEntry {
    /// Whether this entry has a variant for the given framework and style
    pub fn supports(&self, framework: Framework, style: Style) -> bool {
        self.frameworks.contains(&framework) && self.styles.contains(&style)
    }
}

/// The registry index: an ordered list of component summaries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryIndex {
    pub entries: Vec<IndexEntry>,
}

/// Anything that can produce component payloads by coordinates.
///
/// The install engine depends on this seam rather than on the HTTP client
/// directly, so the dependency walk can be exercised against an in-memory
/// registry.
pub trait ComponentSource {
    fn fetch(&self, name: &str, framework: Framework, style: Style) -> Result<RegistryItem>;
}

/// Registry base URL, from the environment override or the default
pub fn base_url() -> String {
    std::env::var(REGISTRY_URL_ENV).unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string())
}

/// URL of a single component payload
pub fn item_url(base: &str, framework: Framework, style: Style, name: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/{framework}/{style}/{name}.json")
}

/// URL of the index listing
pub fn index_url(base: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/index.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> RegistryItem {
        serde_json::from_str(
            r#"{
                "name": "badge",
                "type": "component",
                "framework": "vue",
                "style": "hig",
                "files": [{"path": "badge.vue", "content": "<template/>", "type": "component"}],
                "dependencies": ["clsx"],
                "registryDependencies": ["icon-base"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn item_deserializes_with_camel_case_fields() {
        let item = sample_item();
        assert_eq!(item.name, "badge");
        assert_eq!(item.item_type, ItemType::Component);
        assert_eq!(item.registry_dependencies, vec!["icon-base"]);
        assert!(item.dev_dependencies.is_empty());
    }

    #[test]
    fn unknown_framework_is_a_schema_failure() {
        let raw = r#"{"name": "badge", "type": "component", "framework": "svelte",
                      "style": "hig", "files": []}"#;
        assert!(serde_json::from_str::<RegistryItem>(raw).is_err());
    }

    #[test]
    fn validate_rejects_mismatched_coordinates() {
        let item = sample_item();
        assert!(item.validate("badge", Framework::Vue, Style::Hig).is_ok());
        assert!(item.validate("button", Framework::Vue, Style::Hig).is_err());
        assert!(item
            .validate("badge", Framework::React, Style::Hig)
            .is_err());
    }

    #[test]
    fn validate_rejects_empty_file_lists() {
        let mut item = sample_item();
        item.files.clear();
        match item.validate("badge", Framework::Vue, Style::Hig) {
            Err(Error::SchemaError(_)) => {}
            other => panic!("expected SchemaError, got {other:?}"),
        }
    }

    #[test]
    fn url_layout() {
        assert_eq!(
            item_url("https://r.example.com/", Framework::Vue, Style::Hig, "badge"),
            "https://r.example.com/vue/hig/badge.json"
        );
        assert_eq!(
            index_url("https://r.example.com"),
            "https://r.example.com/index.json"
        );
    }

    #[test]
    fn index_is_a_bare_array() {
        let raw = r#"[{"name": "button", "type": "component",
                       "description": "A button",
                       "frameworks": ["react", "vue"], "styles": ["material"]}]"#;
        let index: RegistryIndex = serde_json::from_str(raw).unwrap();
        assert_eq!(index.entries.len(), 1);
        assert!(index.entries[0].supports(Framework::React, Style::Material));
        assert!(!index.entries[0].supports(Framework::Angular, Style::Material));
    }
}
