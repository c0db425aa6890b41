pub mod command;

use crate::ResultSet;
use std::process::ExitStatus;
use thiserror::Error;
use tracing::{debug, info};

pub use command::SpellCommand;

#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("failed to run `{program}` on {path}: {source}")]
    Spawn {
        program: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status} on {path}{}", stderr_suffix(.stderr))]
    Failed {
        program: String,
        path: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("`{program}` produced non UTF-8 output for {path}")]
    InvalidOutput { program: String, path: String },
}

fn stderr_suffix(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Something that can spellcheck one file and report the misspellings as
/// newline separated text.
pub trait Checker {
    fn check(&self, path: &str) -> Result<String, CheckerError>;
}

impl<F> Checker for F
where
    F: Fn(&str) -> Result<String, CheckerError>,
{
    fn check(&self, path: &str) -> Result<String, CheckerError> {
        self(path)
    }
}

/// Run `checker` over every path in order and collect its output lines.
///
/// The first failing file aborts the run; nothing collected so far is
/// returned.
pub fn run_checks<C, P>(paths: &[P], checker: &C) -> Result<ResultSet, CheckerError>
where
    C: Checker + ?Sized,
    P: AsRef<str>,
{
    let mut results = ResultSet::new();

    for path in paths {
        let path = path.as_ref();
        debug!(path, "checking file");

        let output = checker.check(path)?;
        let lines: Vec<String> = output.lines().map(str::to_string).collect();

        debug!(path, lines = lines.len(), "checker finished");
        results.insert(path, lines);
    }

    info!(files = results.len(), "spellcheck complete");
    Ok(results)
}
