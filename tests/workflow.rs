// tests/workflow.rs

//! Component install and reconcile workflow tests.

mod common;

use aneka_ui::{
    discover_installed, ComponentInstaller, Config, ConflictFlags, Framework, InstallOutcome,
    Style,
};
use common::{item, setup_project, FakeRegistry};
use std::fs;

#[test]
fn add_badge_pulls_in_registry_dependency_and_merges_packages() {
    // Config for vue/hig; badge declares icon-base as a registry
    // dependency and both declare overlapping npm packages.
    let (dir, config) = setup_project(Framework::Vue, Style::Hig);
    let registry = FakeRegistry::new(vec![
        item("badge", "vue", "hig", &["clsx", "tailwind-merge"], &["icon-base"]),
        item("icon-base", "vue", "hig", &["clsx"], &[]),
    ]);

    let mut installer =
        ComponentInstaller::new(&registry, &config, dir.path(), ConflictFlags::default());
    let outcome = installer.install_tree(registry.get("badge")).unwrap();
    assert_eq!(outcome, InstallOutcome::Completed);

    let components = dir.path().join("src/components/ui");
    assert!(components.join("badge.vue").is_file());
    assert!(components.join("icon-base.vue").is_file());

    // One deduplicated package list for the whole tree.
    assert_eq!(installer.dependencies(), ["clsx", "tailwind-merge"]);
}

#[test]
fn adding_twice_without_local_edits_writes_nothing_the_second_time() {
    let (dir, config) = setup_project(Framework::React, Style::Material);
    let registry = FakeRegistry::new(vec![item("button", "react", "material", &[], &[])]);

    let mut first =
        ComponentInstaller::new(&registry, &config, dir.path(), ConflictFlags::default());
    first.install_tree(registry.get("button")).unwrap();
    assert_eq!(first.files_written(), 1);

    let mut second =
        ComponentInstaller::new(&registry, &config, dir.path(), ConflictFlags::default());
    second.install_tree(registry.get("button")).unwrap();
    assert_eq!(second.files_written(), 0, "identical content must skip");
}

#[test]
fn overwrite_flag_replaces_locally_edited_files() {
    let (dir, config) = setup_project(Framework::React, Style::Material);
    let registry = FakeRegistry::new(vec![item("button", "react", "material", &[], &[])]);

    let mut installer =
        ComponentInstaller::new(&registry, &config, dir.path(), ConflictFlags::default());
    installer.install_tree(registry.get("button")).unwrap();

    let target = dir.path().join("src/components/ui/button.tsx");
    fs::write(&target, "// local edits\n").unwrap();

    let flags = ConflictFlags {
        overwrite: true,
        skip: false,
    };
    let mut installer = ComponentInstaller::new(&registry, &config, dir.path(), flags);
    installer.install_tree(registry.get("button")).unwrap();

    let content = fs::read_to_string(&target).unwrap();
    assert_eq!(content, "// button (react/material)\n");
}

#[test]
fn skip_flag_preserves_locally_edited_files() {
    let (dir, config) = setup_project(Framework::React, Style::Material);
    let registry = FakeRegistry::new(vec![item("button", "react", "material", &[], &[])]);

    let mut installer =
        ComponentInstaller::new(&registry, &config, dir.path(), ConflictFlags::default());
    installer.install_tree(registry.get("button")).unwrap();

    let target = dir.path().join("src/components/ui/button.tsx");
    fs::write(&target, "// local edits\n").unwrap();

    let flags = ConflictFlags {
        overwrite: false,
        skip: true,
    };
    let mut installer = ComponentInstaller::new(&registry, &config, dir.path(), flags);
    installer.install_tree(registry.get("button")).unwrap();

    let content = fs::read_to_string(&target).unwrap();
    assert_eq!(content, "// local edits\n");
}

#[test]
fn installed_components_are_discovered_by_framework_extension() {
    let (dir, config) = setup_project(Framework::Vue, Style::Hig);
    let registry = FakeRegistry::new(vec![
        item("badge", "vue", "hig", &[], &[]),
        item("card", "vue", "hig", &[], &[]),
    ]);

    let mut installer =
        ComponentInstaller::new(&registry, &config, dir.path(), ConflictFlags::default());
    installer.install_tree(registry.get("badge")).unwrap();
    installer.install_tree(registry.get("card")).unwrap();

    let paths = config.resolved_paths(dir.path());
    assert_eq!(discover_installed(&paths, &config), ["badge", "card"]);

    // A react project in the same tree would see nothing: wrong extension.
    let react_config = Config {
        framework: Framework::React,
        ..config.clone()
    };
    assert!(discover_installed(&paths, &react_config).is_empty());
}

#[test]
fn config_reload_survives_the_whole_workflow() {
    let (dir, config) = setup_project(Framework::Angular, Style::Oneui);
    let reloaded = Config::load(dir.path()).unwrap();
    assert_eq!(reloaded.framework, config.framework);
    assert_eq!(reloaded.style, config.style);
    assert_eq!(reloaded.framework.extension(), "ts");
}
