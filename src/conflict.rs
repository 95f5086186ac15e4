// src/conflict.rs

//! File-conflict resolution for component installs.
//!
//! For each registry file the caller asks this module what to do with the
//! target path: write it, skip it, or abort the whole operation. The
//! decision checks cheap short-circuits first (missing file, explicit CLI
//! flags, byte-identical content) and only falls back to an interactive
//! prompt when there is a genuine conflict. The resolver never writes
//! anything itself.

use crate::diff::print_diff;
use crate::error::{Error, Result};
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use tracing::warn;

/// Whether prompts can be answered: both ends of the conversation must be
/// a terminal.
pub fn interactive() -> bool {
    io::stdout().is_terminal() && io::stdin().is_terminal()
}

/// Terminal decision for a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictAction {
    /// Write the proposed content (also covers creating a new file)
    Overwrite,
    /// Leave the existing file untouched
    Skip,
    /// Abort the remaining operation; files already written stay on disk
    Cancel,
}

/// CLI flags that pre-resolve conflicts without prompting
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictFlags {
    pub overwrite: bool,
    pub skip: bool,
}

/// Decide what to do with `path` given the proposed registry content.
///
/// Decision order: a missing target is always written; the `--overwrite`
/// and `--skip` flags win next, in that order; byte-identical content is a
/// silent skip rather than a conflict; anything else prompts.
pub fn resolve_file_conflict(
    path: &Path,
    proposed: &str,
    flags: ConflictFlags,
) -> Result<ConflictAction> {
    if !path.exists() {
        return Ok(ConflictAction::Overwrite);
    }
    if flags.overwrite {
        return Ok(ConflictAction::Overwrite);
    }
    if flags.skip {
        return Ok(ConflictAction::Skip);
    }

    let existing = fs::read_to_string(path)
        .map_err(|e| Error::IoError(format!("failed to read {}: {e}", path.display())))?;
    if existing == proposed {
        return Ok(ConflictAction::Skip);
    }

    if !interactive() {
        warn!(
            "{} differs from the registry version; skipping (no terminal to prompt)",
            path.display()
        );
        return Ok(ConflictAction::Skip);
    }

    prompt_conflict(path, &existing, proposed)
}

/// Interactive conflict prompt.
///
/// "Show diff" loops back to the same prompt so the user can decide again
/// after seeing the changes; the loop bounds what would otherwise be
/// unbounded re-prompt recursion.
fn prompt_conflict(path: &Path, existing: &str, proposed: &str) -> Result<ConflictAction> {
    let mut stdout = io::stdout();
    loop {
        writeln!(stdout)?;
        writeln!(stdout, "{} already exists.", path.display())?;
        writeln!(stdout, "  [o] Overwrite with the registry version")?;
        writeln!(stdout, "  [s] Skip this file")?;
        writeln!(stdout, "  [d] Show diff")?;
        writeln!(stdout, "  [c] Cancel the remaining operation")?;
        writeln!(stdout)?;
        write!(stdout, "Choice [o/s/d/c]: ")?;
        stdout.flush()?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| Error::PromptError(e.to_string()))?;

        match input.trim().to_lowercase().as_str() {
            "o" | "overwrite" | "y" | "yes" => return Ok(ConflictAction::Overwrite),
            "s" | "skip" | "n" | "no" | "" => return Ok(ConflictAction::Skip),
            "d" | "diff" => {
                print_diff(existing, proposed, &path.display().to_string());
            }
            "c" | "cancel" | "q" => return Ok(ConflictAction::Cancel),
            _ => {
                writeln!(stdout, "Unknown option. Please enter o, s, d, or c.")?;
            }
        }
    }
}

/// Ask a yes/no question, defaulting to no.
///
/// Used by `update` for the single aggregate confirmation before applying
/// changes. Without a terminal the answer is always no.
pub fn confirm(question: &str) -> Result<bool> {
    if !interactive() {
        warn!("no terminal to confirm '{question}'; assuming no");
        return Ok(false);
    }

    let mut stdout = io::stdout();
    loop {
        write!(stdout, "{question} [y/N]: ")?;
        stdout.flush()?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| Error::PromptError(e.to_string()))?;

        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => {
                writeln!(stdout, "Please answer y or n.")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(overwrite: bool, skip: bool) -> ConflictFlags {
        ConflictFlags { overwrite, skip }
    }

    #[test]
    fn missing_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("button.tsx");
        let action = resolve_file_conflict(&target, "content", ConflictFlags::default()).unwrap();
        assert_eq!(action, ConflictAction::Overwrite);
    }

    #[test]
    fn overwrite_flag_wins_regardless_of_content() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("button.tsx");
        fs::write(&target, "local edits").unwrap();

        let action = resolve_file_conflict(&target, "local edits", flags(true, false)).unwrap();
        assert_eq!(action, ConflictAction::Overwrite);
        let action = resolve_file_conflict(&target, "new content", flags(true, false)).unwrap();
        assert_eq!(action, ConflictAction::Overwrite);
    }

    #[test]
    fn overwrite_takes_precedence_over_skip() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("button.tsx");
        fs::write(&target, "local edits").unwrap();

        let action = resolve_file_conflict(&target, "new content", flags(true, true)).unwrap();
        assert_eq!(action, ConflictAction::Overwrite);
    }

    #[test]
    fn skip_flag_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("button.tsx");
        fs::write(&target, "local edits").unwrap();

        let action = resolve_file_conflict(&target, "new content", flags(false, true)).unwrap();
        assert_eq!(action, ConflictAction::Skip);
    }

    #[test]
    fn identical_content_skips_without_prompting() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("button.tsx");
        fs::write(&target, "same content").unwrap();

        // No flags set; the byte-identical short-circuit resolves this
        // before any prompt could be reached.
        let action =
            resolve_file_conflict(&target, "same content", ConflictFlags::default()).unwrap();
        assert_eq!(action, ConflictAction::Skip);
    }

    #[test]
    fn differing_content_without_terminal_skips() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("button.tsx");
        fs::write(&target, "local edits").unwrap();

        // Test harness stdout is not a TTY, so the prompt path degrades to
        // a skip instead of blocking on stdin.
        let action =
            resolve_file_conflict(&target, "new content", ConflictFlags::default()).unwrap();
        assert_eq!(action, ConflictAction::Skip);
    }
}
