pub mod checker;
pub mod cli;
pub mod config;
pub mod ignore;

pub use checker::{run_checks, Checker, CheckerError, SpellCommand};
pub use config::Config;
pub use ignore::IgnoreSet;

use indexmap::IndexMap;
use std::path::Path;
use tracing::info;

/// Per-file checker results, kept in the order the files were checked.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    files: IndexMap<String, Vec<String>>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `lines` under `path`. A path seen before keeps its position
    /// and has its lines replaced.
    pub fn insert(&mut self, path: impl Into<String>, lines: Vec<String>) {
        self.files.insert(path.into(), lines);
    }

    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.files
            .iter()
            .map(|(path, lines)| (path.as_str(), lines.as_slice()))
    }

    pub fn lines_mut(&mut self) -> impl Iterator<Item = &mut Vec<String>> {
        self.files.values_mut()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of non-empty lines across all files.
    pub fn misspelling_count(&self) -> usize {
        self.files
            .values()
            .flatten()
            .filter(|line| !line.is_empty())
            .count()
    }
}

// Order sensitive, unlike IndexMap equality.
impl PartialEq for ResultSet {
    fn eq(&self, other: &Self) -> bool {
        self.files.iter().eq(other.files.iter())
    }
}

impl Eq for ResultSet {}

/// Check every source, then drop the lines listed in the ignore file.
pub fn run<C, P>(sources: &[P], checker: &C, ignore_file: Option<&Path>) -> Result<ResultSet, CheckerError>
where
    C: Checker + ?Sized,
    P: AsRef<str>,
{
    let results = run_checks(sources, checker)?;
    let ignores = IgnoreSet::load(ignore_file);
    let filtered = ignores.filter(results);

    info!(
        files = filtered.len(),
        misspellings = filtered.misspelling_count(),
        ignored = ignores.len(),
        "report ready"
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn lines(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut results = ResultSet::new();
        results.insert("b.txt", lines(&["foo"]));
        results.insert("a.txt", lines(&["bar"]));

        let paths: Vec<_> = results.iter().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["b.txt", "a.txt"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut results = ResultSet::new();
        results.insert("a.txt", lines(&["teh"]));
        results.insert("b.txt", lines(&[]));
        results.insert("a.txt", lines(&["wrold"]));

        assert_eq!(results.len(), 2);
        assert_eq!(results.iter().next().unwrap().0, "a.txt");
        assert_eq!(results.get("a.txt").unwrap(), &["wrold".to_string()]);
    }

    #[test]
    fn test_duplicate_paths_keep_first_position_among_many() {
        let mut results = ResultSet::new();
        for i in 0..1000 {
            results.insert(format!("docs/{}.md", i), lines(&["teh"]));
        }
        results.insert("docs/3.md", lines(&["wrold"]));
        results.insert("docs/0.md", lines(&[]));

        assert_eq!(results.len(), 1000);
        let paths: Vec<_> = results.iter().take(4).map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["docs/0.md", "docs/1.md", "docs/2.md", "docs/3.md"]);
        assert!(results.get("docs/0.md").unwrap().is_empty());
        assert_eq!(results.get("docs/3.md").unwrap(), &["wrold".to_string()]);
    }

    #[test]
    fn test_equality_depends_on_file_order() {
        let mut forward = ResultSet::new();
        forward.insert("a.txt", lines(&["teh"]));
        forward.insert("b.txt", lines(&[]));

        let mut backward = ResultSet::new();
        backward.insert("b.txt", lines(&[]));
        backward.insert("a.txt", lines(&["teh"]));

        assert_ne!(forward, backward);
        assert_eq!(forward, forward.clone());
    }

    #[test]
    fn test_misspelling_count_skips_empty_lines() {
        let mut results = ResultSet::new();
        results.insert("a.txt", lines(&["teh", "", "wrold"]));
        results.insert("b.txt", lines(&[""]));

        assert_eq!(results.misspelling_count(), 2);
    }

    fn fake_spell(path: &str) -> Result<String, CheckerError> {
        match path {
            "a.txt" => Ok("teh\nwrold\n".to_string()),
            _ => Ok(String::new()),
        }
    }

    fn report(results: &ResultSet) -> String {
        let mut buf = Vec::new();
        cli::output::write_report(&mut buf, results, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_run_without_ignore_file() {
        let results = run(&["a.txt", "b.txt"], &fake_spell, None).unwrap();
        assert_eq!(report(&results), "a.txt\n - teh\n - wrold\nb.txt\n");
    }

    #[test]
    fn test_run_with_ignore_file() {
        let dir = tempfile::tempdir().unwrap();
        let ignore = dir.path().join("ignore.txt");
        fs::write(&ignore, "teh\n").unwrap();

        let results = run(&["a.txt", "b.txt"], &fake_spell, Some(ignore.as_path())).unwrap();
        assert_eq!(report(&results), "a.txt\n - wrold\nb.txt\n");
    }

    #[test]
    fn test_run_with_missing_ignore_file_matches_no_ignore_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let with_missing = run(&["a.txt", "b.txt"], &fake_spell, Some(missing.as_path())).unwrap();
        let without = run(&["a.txt", "b.txt"], &fake_spell, None).unwrap();
        assert_eq!(with_missing, without);
    }

    #[test]
    fn test_run_propagates_checker_failure() {
        let failing = |path: &str| -> Result<String, CheckerError> {
            Err(CheckerError::InvalidOutput {
                program: "spell".to_string(),
                path: path.to_string(),
            })
        };

        assert!(run(&["a.txt"], &failing, None).is_err());
    }
}
