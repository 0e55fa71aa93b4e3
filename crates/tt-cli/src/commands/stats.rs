use tt_core::{FrequencyTable, RecordStore};

use crate::render;

/// Show how often each card has been drawn.
pub fn run(store: &RecordStore) -> Result<(), String> {
    let Some(records) = super::load_history(store)? else {
        return Ok(());
    };

    let Some(table) = FrequencyTable::tally(&records) else {
        render::info("No cards found in your reading history.");
        return Ok(());
    };

    render::heading("--- Card Frequency ---");
    render::frequency(&table);
    println!();
    println!(
        "  {} readings, {} cards drawn, {} distinct",
        records.len(),
        table.total(),
        table.len()
    );
    Ok(())
}
