//! Per-file synchronization.
//!
//! Ties the parser and merge engine together for one translation file:
//! parse, merge against the master, and rewrite the file only when the
//! merge says its content must change.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::merge;
use crate::parser::{self, ParsedFile};

/// What happened to one translation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// True when the file was rewritten.
    pub updated: bool,
    /// Master keys this file had no translation for, in master order.
    pub missing_keys: Vec<String>,
}

/// Synchronize one translation file against the already-parsed master.
///
/// When nothing changed the file is left untouched on disk. A rewrite
/// replaces the whole file, each line terminated with a single `\n`.
pub fn sync_file(master: &ParsedFile, path: &Path) -> Result<FileOutcome> {
    let translation = parser::parse_file(path)?;
    let outcome = merge::merge(master, &translation);

    if outcome.changed {
        write_lines(path, &outcome.lines)?;
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        updated: outcome.changed,
        missing_keys: outcome.missing_keys,
    })
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }

    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
