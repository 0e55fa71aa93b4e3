use std::io::BufRead;

use colored::Colorize;
use tt_core::{Filter, RecordStore, SearchMode};

use crate::prompt::Prompter;
use crate::render;

/// Filter the log by one field and print the matches, oldest first.
///
/// Missing arguments are asked for; an empty answer cancels.
pub fn run<R: BufRead>(
    store: &RecordStore,
    prompter: &mut Prompter<R>,
    mode: Option<SearchMode>,
    query: Option<String>,
) -> Result<(), String> {
    let Some(records) = super::load_history(store)? else {
        return Ok(());
    };

    let mode = match mode {
        Some(mode) => mode,
        None => match ask_mode(prompter)? {
            Some(mode) => mode,
            None => {
                println!("Search cancelled.");
                return Ok(());
            }
        },
    };

    let query = match query {
        _ if !mode.needs_query() => String::new(),
        Some(query) if !query.trim().is_empty() => query,
        _ => match prompter.ask(&format!("Enter the {mode} to search for"))? {
            Some(query) if !query.is_empty() => query,
            _ => {
                println!("Search cancelled.");
                return Ok(());
            }
        },
    };

    let filter = Filter::new(mode, query.trim());
    let matches = filter.apply(&records);

    if matches.is_empty() {
        render::info("No matching readings found.");
        return Ok(());
    }

    let label = if mode.needs_query() {
        format!("{} match{} for {mode} \"{}\"", matches.len(), plural(matches.len(), "es"), query.trim())
    } else {
        format!("All {} reading{}", matches.len(), plural(matches.len(), "s"))
    };
    println!("{}", label.bold());

    for record in matches {
        render::record(record);
    }
    Ok(())
}

fn plural(n: usize, suffix: &'static str) -> &'static str {
    if n == 1 { "" } else { suffix }
}

fn ask_mode<R: BufRead>(prompter: &mut Prompter<R>) -> Result<Option<SearchMode>, String> {
    println!();
    println!("{}", "Search your reading history by:".bold());
    for (i, mode) in SearchMode::ALL.iter().enumerate() {
        println!("{}. {mode}", (i + 1).to_string().cyan());
    }
    println!("{}. cancel", (SearchMode::ALL.len() + 1).to_string().cyan());

    let choice = prompter.choose("Enter the number of your choice", &["1", "2", "3", "4", "5"], None)?;
    Ok(choice
        .and_then(|c| c.parse::<usize>().ok())
        .and_then(|n| SearchMode::ALL.get(n.wrapping_sub(1)).copied()))
}
