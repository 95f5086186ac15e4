// src/diff.rs

//! Line-level diff rendering.
//!
//! Used by the conflict prompt's "show diff" choice and by the `diff` and
//! `update` commands. Diffing is delegated to `diffy`; this module only
//! flattens its hunks into printable lines.

use colored::Colorize;
use diffy::{create_patch, Line};

/// One line of a rendered diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    Added(String),
    Removed(String),
    Unchanged(String),
}

/// Compute the line diff between `old` and `new`.
///
/// Identical inputs produce an empty vec.
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffLine> {
    let patch = create_patch(old, new);
    let mut lines = Vec::new();
    for hunk in patch.hunks() {
        for line in hunk.lines() {
            match line {
                Line::Context(s) => {
                    lines.push(DiffLine::Unchanged(s.trim_end_matches('\n').to_string()))
                }
                Line::Delete(s) => {
                    lines.push(DiffLine::Removed(s.trim_end_matches('\n').to_string()))
                }
                Line::Insert(s) => {
                    lines.push(DiffLine::Added(s.trim_end_matches('\n').to_string()))
                }
            }
        }
    }
    lines
}

/// Render a diff between the local and registry versions of a file.
///
/// Additions print as green `+`, removals as red `-`, unchanged context
/// indented.
pub fn print_diff(local: &str, registry: &str, path: &str) {
    println!("--- {path} (local)");
    println!("+++ {path} (registry)");
    for line in diff_lines(local, registry) {
        match line {
            DiffLine::Added(s) => println!("{}", format!("+{s}").green()),
            DiffLine::Removed(s) => println!("{}", format!("-{s}").red()),
            DiffLine::Unchanged(s) => println!("  {s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_produce_no_lines() {
        let text = "a\nb\nc\n";
        assert!(diff_lines(text, text).is_empty());
    }

    #[test]
    fn changed_line_shows_as_remove_then_add() {
        let old = "a\nb\nc\n";
        let new = "a\nB\nc\n";
        let lines = diff_lines(old, new);
        assert!(lines.contains(&DiffLine::Removed("b".to_string())));
        assert!(lines.contains(&DiffLine::Added("B".to_string())));
        assert!(lines.contains(&DiffLine::Unchanged("a".to_string())));
    }

    #[test]
    fn pure_addition_has_no_removals() {
        let old = "a\n";
        let new = "a\nb\n";
        let lines = diff_lines(old, new);
        assert!(lines.iter().all(|l| !matches!(l, DiffLine::Removed(_))));
        assert!(lines.contains(&DiffLine::Added("b".to_string())));
    }

    #[test]
    fn diff_round_trip_converges() {
        let old = "x\n";
        let new = "y\n";
        assert!(!diff_lines(old, new).is_empty());
        // After applying the update, re-comparing reports no differences.
        assert!(diff_lines(new, new).is_empty());
    }
}
