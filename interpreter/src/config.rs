// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{io, path::{Path, PathBuf}};

use serde::Deserialize;
use thiserror::Error;

/// Looked up in the working directory when no `--config` is given.
pub const FILE_NAME: &str = "linescript.toml";

const DEFAULT_PROGRAM: &str = "programs/program.txt";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub run: ConfigSectionRun,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionRun {
    /// Program run by `linescript run` without a file argument.
    pub default_program: PathBuf,

    /// Always print the execution time, even without `timeexec()`.
    pub timeexec: bool,
}

impl Default for ConfigSectionRun {
    fn default() -> Self {
        Self {
            default_program: PathBuf::from(DEFAULT_PROGRAM),
            timeexec: false,
        }
    }
}

impl ConfigRoot {
    pub fn parse(source: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&source, path)
    }

    /// Loads `explicit` when given, otherwise [`FILE_NAME`] if it exists,
    /// otherwise the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = Path::new(FILE_NAME);
        if path.is_file() {
            return Self::load(path);
        }

        Ok(Self::default())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid configuration {}: {source}", .path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}
