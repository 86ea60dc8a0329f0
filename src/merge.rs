//! Pure merge engine.
//!
//! Produces the new content for a translation file from the master's parsed
//! structure and the translation's parsed structure. No I/O happens here,
//! so the decision rules can be unit tested directly.
//!
//! The master fully dictates the output: its comments, blank lines, key set,
//! and ordering are reproduced as-is. Only property values come from the
//! translation file. Keys that exist only in the translation file are
//! dropped, and comments that exist only in the translation file are lost.

use std::collections::HashMap;

use crate::parser::{Line, ParsedFile};

/// Result of merging one translation file against the master.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The intended new content, one entry per output line.
    pub lines: Vec<String>,
    /// Whether the translation file needs to be rewritten.
    pub changed: bool,
    /// Master keys with no translation, in master order, one entry per
    /// occurrence.
    pub missing_keys: Vec<String>,
}

/// Merge `translation` against `master`.
///
/// A key present in both keeps the translation's value; a key present only
/// in the master falls back to the master's value and is reported in
/// `missing_keys`. `changed` is true when the emitted lines differ from the
/// translation's original lines, and also whenever any key is missing: a
/// missing translation must keep signalling "needs update" on every run
/// until someone supplies it, even if the text on disk already matches.
pub fn merge(master: &ParsedFile, translation: &ParsedFile) -> MergeOutcome {
    let translations = build_translation_map(translation);

    let mut lines = Vec::with_capacity(master.len());
    let mut missing_keys = Vec::new();

    for record in master {
        match record {
            Line::Empty { raw } | Line::Comment { raw } => lines.push(raw.clone()),
            Line::Property { key, value, .. } => match translations.get(key.as_str()) {
                Some(translated) => lines.push(format!("{}={}", key, translated)),
                None => {
                    lines.push(format!("{}={}", key, value));
                    missing_keys.push(key.clone());
                }
            },
        }
    }

    let changed = !missing_keys.is_empty() || differs(&lines, translation);

    MergeOutcome {
        lines,
        changed,
        missing_keys,
    }
}

/// Key -> value lookup over the translation's property lines. Later
/// duplicates overwrite earlier ones.
fn build_translation_map(parsed: &ParsedFile) -> HashMap<&str, &str> {
    let mut translations = HashMap::new();
    for record in parsed {
        if let Line::Property { key, value, .. } = record {
            translations.insert(key.as_str(), value.as_str());
        }
    }
    translations
}

fn differs(lines: &[String], original: &ParsedFile) -> bool {
    lines.len() != original.len()
        || lines
            .iter()
            .zip(original)
            .any(|(line, record)| line != record.raw())
}
