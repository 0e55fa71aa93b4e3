use std::io::BufRead;

use colored::Colorize;
use tt_core::{Navigation, PAGE_SIZE, Pager, RecordStore, Step};

use crate::prompt::Prompter;
use crate::render;

/// Page through the log, newest first.
pub fn run<R: BufRead>(store: &RecordStore, prompter: &mut Prompter<R>) -> Result<(), String> {
    let Some(records) = super::load_history(store)? else {
        return Ok(());
    };
    let Some(mut pager) = Pager::new(&records, PAGE_SIZE) else {
        return Ok(());
    };

    render::heading("--- Your Reading History ---");

    loop {
        println!(
            "{}",
            format!("Page {} of {}", pager.page_number(), pager.total_pages()).bold()
        );
        for record in pager.current_page() {
            render::record(record);
        }

        let moves = pager.available_moves();
        if moves.is_empty() {
            return Ok(());
        }

        let keys: Vec<&str> = moves.iter().map(|m| m.key()).collect();
        let hint = moves
            .iter()
            .map(|m| format!("'{}' for {m}", m.key()))
            .collect::<Vec<_>>()
            .join(", ");

        println!();
        let choice = prompter
            .choose(&format!("Enter {hint}"), &keys, None)?
            .and_then(|key| Navigation::from_key(&key))
            .unwrap_or(Navigation::Quit);

        match pager.navigate(choice).map_err(|e| e.to_string())? {
            Step::Moved => println!(),
            Step::Quit => return Ok(()),
        }
    }
}
