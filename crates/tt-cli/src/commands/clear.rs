use std::io::BufRead;

use colored::Colorize;
use tt_core::RecordStore;

use crate::prompt::Prompter;
use crate::render;

/// Delete the whole log, but only after an explicit "y" unless `assume_yes`.
pub fn run<R: BufRead>(
    store: &RecordStore,
    prompter: &mut Prompter<R>,
    assume_yes: bool,
) -> Result<(), String> {
    if !store.exists() {
        render::info("No reading history found. Nothing to clear.");
        return Ok(());
    }

    println!(
        "{}",
        "This will permanently delete your entire reading history."
            .bold()
            .red()
    );
    let confirmed = assume_yes || prompter.confirm("Are you sure you want to continue?")?;
    if !confirmed {
        println!("History clearing cancelled.");
        return Ok(());
    }

    store
        .clear()
        .map_err(|e| format!("error clearing history: {e}"))?;
    println!("{}", "Reading history has been cleared.".green());
    Ok(())
}
