//! Types for the batch module.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::config::{validate_config, Config, ConfigError};

/// Immutable inputs of one batch run, resolved from a validated `Config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSettings {
    /// Folder holding the sources; targets are written next to them.
    pub folder: PathBuf,
    /// Suffix identifying the files to convert.
    pub source_extension: String,
    /// Suffix given to the produced files.
    pub target_extension: String,
}

impl BatchSettings {
    pub fn new(
        folder: impl Into<PathBuf>,
        source_extension: impl Into<String>,
        target_extension: impl Into<String>,
    ) -> Self {
        Self {
            folder: folder.into(),
            source_extension: source_extension.into(),
            target_extension: target_extension.into(),
        }
    }
}

impl TryFrom<&Config> for BatchSettings {
    type Error = ConfigError;

    fn try_from(config: &Config) -> Result<Self, Self::Error> {
        validate_config(config)?;
        let folder = config
            .folder_path
            .clone()
            .ok_or(ConfigError::MissingFolderPath)?;
        Ok(Self {
            folder,
            source_extension: config.source_extension.clone(),
            target_extension: config.target_extension.clone(),
        })
    }
}

/// How a single file ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Converted,
    Failed { diagnostic: String },
}

/// Outcome of one matched file. `Display` renders the status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub source_name: String,
    pub target_name: String,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Converted)
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            FileStatus::Converted => {
                write!(f, "{} converted -> {}", self.source_name, self.target_name)
            }
            FileStatus::Failed { diagnostic } => {
                write!(f, "{} conversion failed: {}", self.source_name, diagnostic)
            }
        }
    }
}

/// Summary of a completed batch, in processing order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Number of files converted.
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of files the engine failed to convert.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.converted()
    }
}
