//! Ignore lists: literal lines that should never show up in a report.
//!
//! An ignore file is plain text with one entry per line. Entries are
//! trimmed and blank lines are skipped. Matching is exact, so `Teh` and
//! `teh` are different entries.

use crate::ResultSet;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    entries: HashSet<String>,
}

impl IgnoreSet {
    /// Load the ignore list at `path`, falling back to an empty list when
    /// no path is given or the file can't be read.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::read(path) {
            Ok(set) => {
                debug!(path = %path.display(), entries = set.len(), "loaded ignore list");
                set
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "ignore list unreadable, using empty list");
                Self::default()
            }
        }
    }

    pub fn read(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        content.lines().collect()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.entries.contains(line)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every result line that matches an entry exactly. Surviving
    /// lines keep their order.
    pub fn filter(&self, mut results: ResultSet) -> ResultSet {
        if self.is_empty() || results.is_empty() {
            return results;
        }

        for lines in results.lines_mut() {
            lines.retain(|line| !self.contains(line));
        }

        results
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .filter_map(|line| {
                let entry = line.as_ref().trim();
                (!entry.is_empty()).then(|| entry.to_string())
            })
            .collect();

        Self { entries }
    }
}
