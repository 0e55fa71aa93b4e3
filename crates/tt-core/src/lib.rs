//! Reading log, history queries, and card frequency reports.
//!
//! Provides the append-only CSV record store, newest-first pagination and
//! field filters over past readings, and a ranked card frequency table.
//! Nothing in this crate prompts or talks to the network: callers hand it
//! records and parameters and get results back.

pub mod error;
pub mod frequency;
pub mod query;
pub mod record;
pub mod store;

pub use error::{QueryError, SkippedRow, StoreError, StoreResult};
pub use frequency::{CardCount, FrequencyTable};
pub use query::{Filter, Navigation, PAGE_SIZE, Pager, SearchMode, Step};
pub use record::ReadingRecord;
pub use store::{History, ReadReport, RecordStore};
