//! Error handling for table conversion
//!
//! This module provides a unified error type and result type for all
//! conversion operations.

use std::fmt;

/// Table conversion error type
#[derive(Debug, Clone)]
pub enum TableError {
    /// Input file does not exist
    FileNotFound { path: String },
    /// A row has a different number of fields than the table width
    ColumnCountMismatch {
        /// 1-based index of the offending row in the input
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Alignment spec has the wrong length or an unknown character
    InvalidAlignmentSpec { spec: String, columns: usize },
    /// Unit count does not match the column count
    InvalidUnitsSpec { expected: usize, found: usize },
    /// Separator is not a named alias or a single ASCII character
    InvalidSeparator { value: String },
    /// No rows left after skipping (empty file or skip too high)
    EmptyTable { path: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::FileNotFound { path } => {
                write!(f, "File not found: {}", path)
            }
            TableError::ColumnCountMismatch {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {} has {} field(s), expected {}",
                    row, found, expected
                )
            }
            TableError::InvalidAlignmentSpec { spec, columns } => {
                write!(
                    f,
                    "Invalid alignment '{}': expected 1 or {} characters from 'l', 'c', 'r'",
                    spec, columns
                )
            }
            TableError::InvalidUnitsSpec { expected, found } => {
                write!(f, "Got {} unit(s) for {} column(s)", found, expected)
            }
            TableError::InvalidSeparator { value } => {
                write!(
                    f,
                    "Invalid separator '{}': expected a single ASCII character or one of \
                     't'/'tab', 's'/'semi', 'c'/'comma'",
                    value
                )
            }
            TableError::EmptyTable { path } => {
                write!(
                    f,
                    "No table created from {}: file is empty or skip value too high",
                    path
                )
            }
            TableError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for table conversion operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        TableError::FileNotFound { path: path.into() }
    }

    pub fn column_mismatch(row: usize, expected: usize, found: usize) -> Self {
        TableError::ColumnCountMismatch {
            row,
            expected,
            found,
        }
    }

    pub fn invalid_alignment(spec: impl Into<String>, columns: usize) -> Self {
        TableError::InvalidAlignmentSpec {
            spec: spec.into(),
            columns,
        }
    }

    pub fn invalid_units(expected: usize, found: usize) -> Self {
        TableError::InvalidUnitsSpec { expected, found }
    }

    pub fn invalid_separator(value: impl Into<String>) -> Self {
        TableError::InvalidSeparator {
            value: value.into(),
        }
    }

    pub fn empty_table(path: impl Into<String>) -> Self {
        TableError::EmptyTable { path: path.into() }
    }
}
