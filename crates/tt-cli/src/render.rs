//! Terminal rendering of readings, history entries, and the frequency table.

use colored::Colorize;
use comfy_table::{Cell, ContentArrangement, Table};

use tt_core::{FrequencyTable, ReadingRecord, SkippedRow};

pub fn heading(text: &str) {
    println!();
    println!("  {}", text.bold().magenta());
    println!();
}

pub fn info(text: &str) {
    println!("{}", text.yellow());
}

pub fn failure(text: &str) {
    println!("{}", text.red());
}

/// Print one history entry.
pub fn record(record: &ReadingRecord) {
    println!();
    println!("{} {}", "Date:".bold(), record.timestamp);
    println!("{} {}", "Question:".bold(), record.question);
    println!("{} {}", "Cards:".bold(), record.cards.yellow());
    println!("{} {}", "Reading:".bold(), record.reading);
    println!("{}", "-".repeat(20));
}

/// Warn about log rows that could not be read.
pub fn skipped_rows(skipped: &[SkippedRow]) {
    if skipped.is_empty() {
        return;
    }
    info(&format!(
        "Skipped {} unreadable row{} in the history log:",
        skipped.len(),
        if skipped.len() == 1 { "" } else { "s" }
    ));
    for row in skipped {
        println!("  {row}");
    }
}

/// Boxed panel with the generated reading.
pub fn reading_panel(reading: &str) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new("Your Tarot Reading")]);
    table.add_row(vec![reading]);
    table
}

/// Frequency table lines with coloured bars.
pub fn frequency(table: &FrequencyTable) {
    for line in table.render_with(|bar| bar.cyan().to_string()).lines() {
        println!("  {line}");
    }
}
