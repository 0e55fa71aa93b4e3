//! Error types for the reading log and history queries.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading, writing, or clearing the log.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The log file does not exist.
    #[error("no reading history found at {}", .0.display())]
    NotFound(PathBuf),

    /// The file system refused the operation.
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        /// The log file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The CSV writer or reader failed.
    #[error("log file error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised by history navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A navigation step would leave the page range.
    #[error("page {page} is out of range (1-{total})")]
    OutOfBounds {
        /// The 1-based page that was requested.
        page: usize,
        /// Total number of pages.
        total: usize,
    },
}

/// A log row that could not be turned into a record and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number of the row in the log file.
    pub line: u64,
    /// Number of fields found, or 0 if the row could not be decoded.
    pub fields: usize,
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields == 0 {
            write!(f, "line {}: undecodable row", self.line)
        } else {
            write!(
                f,
                "line {}: expected 4 fields, found {}",
                self.line, self.fields
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_row_display() {
        let row = SkippedRow { line: 7, fields: 2 };
        assert_eq!(row.to_string(), "line 7: expected 4 fields, found 2");
        let row = SkippedRow { line: 3, fields: 0 };
        assert_eq!(row.to_string(), "line 3: undecodable row");
    }

    #[test]
    fn out_of_bounds_display() {
        let err = QueryError::OutOfBounds { page: 4, total: 3 };
        assert_eq!(err.to_string(), "page 4 is out of range (1-3)");
    }
}
