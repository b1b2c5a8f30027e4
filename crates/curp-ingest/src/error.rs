//! Error types for data ingestion.
//!
//! These cover the only fatal failure class in the system: inability to
//! read a source at all. Bad rows inside a readable source are data, not
//! errors, and flow through as values.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading applicant or catalog sources.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a CSV source.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or parse an XLSX workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Requested worksheet does not exist in the workbook.
    #[error("worksheet '{sheet}' not found in {path}: {message}")]
    SheetNotFound {
        sheet: String,
        path: PathBuf,
        message: String,
    },

    /// Required column not found in a tabular source.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Source has a header but no data rows.
    #[error("no data rows in {path}")]
    EmptyTable { path: PathBuf },

    /// Failed to extract text from a PDF catalog.
    #[error("failed to extract text from {path}: {message}")]
    PdfExtract { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IngestError::MissingColumn {
            column: "CURP".to_string(),
            path: PathBuf::from("Aspirantes.csv"),
        };
        assert_eq!(
            err.to_string(),
            "required column 'CURP' not found in Aspirantes.csv"
        );
    }
}
