//! `.env` file parsing and writing.
//!
//! The format is `KEY=VALUE` per line with no quoting or escaping. Values
//! may span several lines (PEM blocks and the like): a new entry starts
//! only at a line that looks like `UPPER_CASE_KEY=`, every other non-blank
//! line is appended to the open value after a `\n`.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

use crate::error::Result;

static NEW_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z_][A-Z0-9_]*=").expect("valid env key pattern"));

/// Parse `.env` text into ordered key/value pairs.
///
/// Blank lines and `#` comments are skipped between entries. The first
/// line containing `=` opens an entry (split on the first `=`, both sides
/// trimmed). Following lines are continuations until one matches the
/// new-entry pattern; blank continuation lines are dropped. Lines without
/// `=` before any entry is open are ignored. Duplicate keys are kept.
pub fn parse(text: &str) -> Vec<(String, String)> {
    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        i += 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let mut value = value.trim().to_string();
        while i < lines.len() && !NEW_ENTRY.is_match(lines[i]) {
            if !lines[i].is_empty() {
                value.push('\n');
                value.push_str(lines[i]);
            }
            i += 1;
        }

        entries.push((key.trim().to_string(), value));
    }

    entries
}

/// Collapse duplicate keys: each key keeps the position of its first
/// occurrence and the value of its last.
pub fn dedupe_last_wins(entries: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = Vec::with_capacity(entries.len());

    for (key, value) in entries {
        match out.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => out.push((key, value)),
        }
    }

    out
}

/// Serialize pairs as `KEY=VALUE` lines, values written verbatim.
///
/// [`parse`] reads the output back unchanged except for values with
/// leading or trailing whitespace (trimmed), blank lines (dropped), or a
/// continuation line that itself looks like `KEY=` (read as a new entry).
pub fn to_env_string<K: AsRef<str>, V: AsRef<str>>(entries: &[(K, V)]) -> String {
    let mut output = String::new();

    for (key, value) in entries {
        output.push_str(key.as_ref());
        output.push('=');
        output.push_str(value.as_ref());
        output.push('\n');
    }

    output
}

/// A parsed .env file
#[derive(Debug, Clone)]
pub struct Env {
    entries: Vec<(String, String)>,
    path: PathBuf,
}

impl Env {
    /// Parse an .env file from disk
    ///
    /// # Errors
    ///
    /// Returns `Error::ReadFile` if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = crate::core::fs::read(path)?;
        let entries = parse(&contents);

        debug!(path = %path.display(), entries = entries.len(), "parsed env file");

        Ok(Self {
            entries,
            path: path.to_path_buf(),
        })
    }

    /// Create from raw key-value pairs
    pub fn from_pairs(pairs: Vec<(String, String)>, path: PathBuf) -> Self {
        Self {
            entries: pairs,
            path,
        }
    }

    /// Write the env file to disk with owner-only permissions.
    pub fn save(&self) -> Result<()> {
        debug!(path = %self.path.display(), entries = self.entries.len(), "writing env file");
        crate::core::fs::write_private(&self.path, &self.to_string())
    }

    /// Value of the last entry named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All entries in file order, duplicates included
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Entries with duplicate keys collapsed (last value wins)
    pub fn into_unique(self) -> Vec<(String, String)> {
        dedupe_last_wins(self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&to_env_string(&self.entries))
    }
}
