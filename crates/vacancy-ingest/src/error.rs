//! Error types for vacancy data ingestion.

use std::path::PathBuf;
use thiserror::Error;
use vacancy_model::VacancyError;

/// Errors that can occur while loading or splitting vacancy files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create an output directory or file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// The CSV reader rejected the input.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The CSV writer failed while writing a part file.
    #[error("failed to write CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },

    // === Content Errors ===
    /// The file parsed but its content is unusable.
    #[error(transparent)]
    Vacancy(#[from] VacancyError),
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;

impl IngestError {
    /// Returns the content error wrapped by this error, if any.
    pub fn as_vacancy_error(&self) -> Option<&VacancyError> {
        match self {
            IngestError::Vacancy(err) => Some(err),
            _ => None,
        }
    }
}
