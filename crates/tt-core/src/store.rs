//! Append-only CSV storage for reading records.
//!
//! The log is a UTF-8 CSV file whose first row is the [`HEADER`]. Every
//! operation opens the file, does its work, and closes it again; nothing is
//! held open between calls.

use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{SkippedRow, StoreError, StoreResult};
use crate::record::{HEADER, ReadingRecord};

/// Default log file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "tarot_readings_log.csv";

/// The outcome of reading the whole log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum History {
    /// No file, or a file with no data rows.
    Empty,
    /// Records in file order, oldest first. Never empty.
    Records(Vec<ReadingRecord>),
}

impl History {
    fn from_records(records: Vec<ReadingRecord>) -> Self {
        if records.is_empty() {
            Self::Empty
        } else {
            Self::Records(records)
        }
    }

    /// The records, or an empty slice.
    pub fn records(&self) -> &[ReadingRecord] {
        match self {
            Self::Empty => &[],
            Self::Records(records) => records,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Whether there is no history to show.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A full read of the log together with the rows that had to be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadReport {
    /// The usable records.
    pub history: History,
    /// Rows that were too short or could not be decoded.
    pub skipped: Vec<SkippedRow>,
}

/// The on-disk reading log.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl RecordStore {
    /// Create a store backed by the file at `path`. The file is not touched.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Log a completed reading stamped with the current local time.
    ///
    /// Card names are joined with `", "`. Returns the record as written.
    pub fn append<S: AsRef<str>>(
        &self,
        question: &str,
        cards: &[S],
        reading: &str,
    ) -> StoreResult<ReadingRecord> {
        let record = ReadingRecord::now(question, cards, reading);
        self.append_record(&record)?;
        Ok(record)
    }

    /// Append a prepared record, writing the header first if the log is new.
    ///
    /// The file is opened in append mode, so a failed write cannot truncate
    /// rows that are already there.
    pub fn append_record(&self, record: &ReadingRecord) -> StoreResult<()> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(err) if err.kind() == ErrorKind::NotFound => true,
            Err(source) => return Err(self.io_error(source)),
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);
        if needs_header {
            writer.write_record(HEADER)?;
        }
        writer.serialize(record)?;
        writer.flush().map_err(|source| self.io_error(source))?;

        debug!(
            path = %self.path.display(),
            timestamp = %record.timestamp,
            header = needs_header,
            "appended reading"
        );
        Ok(())
    }

    /// Read every record, oldest first.
    ///
    /// Malformed rows are skipped; use [`RecordStore::read_report`] to see them.
    pub fn read_all(&self) -> StoreResult<History> {
        self.read_report().map(|report| report.history)
    }

    /// Read every record and report the rows that were skipped.
    pub fn read_report(&self) -> StoreResult<ReadReport> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no log file");
                return Ok(ReadReport {
                    history: History::Empty,
                    skipped: Vec::new(),
                });
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        let mut skipped = Vec::new();

        for (index, row) in reader.records().enumerate() {
            // Header is line 1.
            let fallback_line = index as u64 + 2;
            match row {
                Ok(row) => {
                    let line = row.position().map_or(fallback_line, |p| p.line());
                    let fields: Vec<&str> = row.iter().take(HEADER.len()).collect();
                    match fields.as_slice() {
                        [timestamp, question, cards, reading] => {
                            records.push(ReadingRecord::new(
                                *timestamp, *question, *cards, *reading,
                            ));
                        }
                        _ => {
                            warn!(line, fields = row.len(), "skipping short log row");
                            skipped.push(SkippedRow {
                                line,
                                fields: row.len(),
                            });
                        }
                    }
                }
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    let line = err.position().map_or(fallback_line, |p| p.line());
                    warn!(line, error = %err, "skipping undecodable log row");
                    skipped.push(SkippedRow { line, fields: 0 });
                }
            }
        }

        debug!(
            path = %self.path.display(),
            records = records.len(),
            skipped = skipped.len(),
            "read log"
        );
        Ok(ReadReport {
            history: History::from_records(records),
            skipped,
        })
    }

    /// Delete the whole log. Irreversible; callers confirm beforehand.
    pub fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "cleared reading history");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound(self.path.clone()))
            }
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
