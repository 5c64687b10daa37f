//! Error types for spreadsheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and classifying uploaded files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Uploaded file is missing from its stored location.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read a file from disk.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV content.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to open or parse an Excel workbook.
    #[error("failed to read workbook {path}: {message}")]
    WorkbookRead { path: PathBuf, message: String },

    /// File extension is not one the reader supports.
    #[error("unsupported file extension '{extension}' for {file}")]
    UnsupportedExtension { file: String, extension: String },

    /// A file or sheet contained zero usable data rows.
    #[error("no usable data rows in {file}")]
    EmptyData { file: String },

    /// Reading or classifying one uploaded file failed.
    #[error("could not analyze file {file}: {source}")]
    FileAnalysis {
        file: String,
        #[source]
        source: Box<IngestError>,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_file() {
        let err = IngestError::EmptyData {
            file: "units.csv".to_string(),
        };
        assert_eq!(err.to_string(), "no usable data rows in units.csv");

        let wrapped = IngestError::FileAnalysis {
            file: "units.csv".to_string(),
            source: Box::new(err),
        };
        assert!(wrapped.to_string().contains("units.csv"));
    }
}
