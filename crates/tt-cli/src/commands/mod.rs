pub mod clear;
pub mod history;
pub mod menu;
pub mod read;
pub mod search;
pub mod stats;

use tt_core::{History, ReadingRecord, RecordStore};

use crate::render;

/// Read the log for display. Prints the skipped rows, and returns `None`
/// after telling the user when there is nothing to show.
fn load_history(store: &RecordStore) -> Result<Option<Vec<ReadingRecord>>, String> {
    let report = store
        .read_report()
        .map_err(|e| format!("error reading history: {e}"))?;
    render::skipped_rows(&report.skipped);

    match report.history {
        History::Empty => {
            render::info("No reading history found.");
            Ok(None)
        }
        History::Records(records) => Ok(Some(records)),
    }
}
