// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use aneka_ui::{ComponentSource, Config, Error, Framework, RegistryItem, Result, Style};
use std::collections::HashMap;
use tempfile::TempDir;

/// In-memory component source standing in for the HTTP registry.
pub struct FakeRegistry {
    items: HashMap<String, RegistryItem>,
}

impl FakeRegistry {
    pub fn new(items: Vec<RegistryItem>) -> Self {
        Self {
            items: items.into_iter().map(|i| (i.name.clone(), i)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> RegistryItem {
        self.items[name].clone()
    }
}

impl ComponentSource for FakeRegistry {
    fn fetch(&self, name: &str, _framework: Framework, _style: Style) -> Result<RegistryItem> {
        self.items
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFoundError(name.to_string()))
    }
}

/// Build a registry item from coordinates, one file per component.
pub fn item(
    name: &str,
    framework: &str,
    style: &str,
    packages: &[&str],
    registry_deps: &[&str],
) -> RegistryItem {
    let extension = match framework {
        "react" => "tsx",
        "vue" => "vue",
        "angular" => "ts",
        other => panic!("unknown framework {other}"),
    };
    serde_json::from_value(serde_json::json!({
        "name": name,
        "type": "component",
        "framework": framework,
        "style": style,
        "files": [{
            "path": format!("{name}.{extension}"),
            "content": format!("// {name} ({framework}/{style})\n"),
            "type": "component",
        }],
        "dependencies": packages,
        "registryDependencies": registry_deps,
    }))
    .expect("valid registry item fixture")
}

/// Create a temp project directory with a saved config.
pub fn setup_project(framework: Framework, style: Style) -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        framework,
        style,
        ..Config::default()
    };
    config.save(dir.path()).unwrap();
    (dir, config)
}
