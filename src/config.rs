use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".projspell.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Program invoked once per source file.
    pub checker: String,

    /// Arguments passed to the checker before the file path.
    pub checker_args: Vec<String>,

    pub ignore_file: Option<PathBuf>,
}

/// One config file on disk. Only the keys it sets are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    checker: Option<String>,
    checker_args: Option<Vec<String>>,
    ignore_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            checker: "spell".to_string(),
            checker_args: Vec::new(),
            ignore_file: None,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(ignore_file: Option<PathBuf>) -> Result<Self> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            ignore_file,
        )
    }

    pub fn load_from(
        global_path: Option<&Path>,
        local_path: &Path,
        ignore_file: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        // Local config overrides global
        if local_path.exists() {
            debug!(path = %local_path.display(), "loading local config");
            config = config.merge(Self::from_file(local_path)?);
        }

        if let Some(path) = ignore_file {
            config.ignore_file = Some(path);
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(checker) = file.checker {
            self.checker = checker;
        }
        if let Some(args) = file.checker_args {
            self.checker_args = args;
        }
        if let Some(ignore_file) = file.ignore_file {
            self.ignore_file = Some(ignore_file);
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "projspell").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
