use super::{Checker, CheckerError};
use crate::Config;
use std::process::{Command, Stdio};

/// Runs an external spell(1) compatible program once per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellCommand {
    program: String,
    args: Vec<String>,
}

impl SpellCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Extra arguments placed before the file path.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.checker.clone()).with_args(config.checker_args.iter().cloned())
    }
}

impl Checker for SpellCommand {
    fn check(&self, path: &str) -> Result<String, CheckerError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CheckerError::Spawn {
                program: self.program.clone(),
                path: path.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CheckerError::Failed {
                program: self.program.clone(),
                path: path.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| CheckerError::InvalidOutput {
            program: self.program.clone(),
            path: path.to_string(),
        })
    }
}
