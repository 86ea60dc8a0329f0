//! Line classifier for the properties file format.
//!
//! A properties file is parsed into an ordered sequence of typed line
//! records. Every physical line maps to exactly one record, so the original
//! file can be reproduced verbatim from its `ParsedFile`.

use std::{fs, path::Path};

use anyhow::{Context, Result};

/// One physical line of a properties file.
///
/// The raw text (without its trailing newline) is always retained: comments,
/// blank lines, and malformed lines must be copied through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Empty or whitespace-only line.
    Empty { raw: String },
    /// A `#` comment, or a malformed line carried through verbatim.
    Comment { raw: String },
    /// A `key=value` line. `key` is trimmed; `value` is kept verbatim,
    /// including any leading or trailing whitespace.
    Property {
        key: String,
        value: String,
        raw: String,
    },
}

impl Line {
    /// The original line content, without its trailing newline.
    pub fn raw(&self) -> &str {
        match self {
            Line::Empty { raw } | Line::Comment { raw } | Line::Property { raw, .. } => raw,
        }
    }
}

pub type ParsedFile = Vec<Line>;

/// Parse a properties file from disk.
pub fn parse_file(path: &Path) -> Result<ParsedFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(parse_content(&content))
}

/// Classify each `\n`-delimited line of `content`, in order.
///
/// A trailing newline does not produce an extra empty record; a final line
/// without a trailing newline is still parsed.
pub fn parse_content(content: &str) -> ParsedFile {
    let mut raw_lines: Vec<&str> = content.split('\n').collect();
    if raw_lines.last().is_some_and(|last| last.is_empty()) {
        raw_lines.pop();
    }
    raw_lines.into_iter().map(classify).collect()
}

fn classify(raw: &str) -> Line {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Line::Empty {
            raw: raw.to_string(),
        };
    }

    if trimmed.starts_with('#') {
        return Line::Comment {
            raw: raw.to_string(),
        };
    }

    // Only the first `=` splits key from value; later ones belong to the value.
    match raw.split_once('=') {
        Some((key, value)) => Line::Property {
            key: key.trim().to_string(),
            value: value.to_string(),
            raw: raw.to_string(),
        },
        // Malformed line - treat as a comment so it is never interpreted
        // as a key and survives untouched.
        None => Line::Comment {
            raw: raw.to_string(),
        },
    }
}
