use std::io::BufRead;

use colored::Colorize;
use tt_core::RecordStore;
use tt_oracle::{ReadingGenerator, ReadingSession};

use crate::prompt::Prompter;
use crate::render;

const OPTIONS: &[&str] = &[
    "Get a new tarot reading",
    "View your reading history",
    "Search your reading history",
    "Show card frequency table",
    "Clear your reading history",
    "Exit",
];

/// The numbered main menu. Every action's failure is shown and the menu
/// comes back; only "Exit" or end of input leaves.
pub fn run<G: ReadingGenerator, R: BufRead>(
    session: &mut ReadingSession<G>,
    prompter: &mut Prompter<R>,
) -> Result<(), String> {
    let keys: Vec<String> = (1..=OPTIONS.len()).map(|n| n.to_string()).collect();
    let keys: Vec<&str> = keys.iter().map(String::as_str).collect();

    loop {
        render::heading("Welcome to the Terminal Tarot Reading App!");
        for (i, option) in OPTIONS.iter().enumerate() {
            println!("{}. {option}", i + 1);
        }

        let Some(choice) = prompter.choose("Please enter your choice", &keys, Some("1"))? else {
            break;
        };

        let store: RecordStore = session.store().clone();
        let result = match choice.as_str() {
            "1" => super::read::run(session, prompter, None),
            "2" => super::history::run(&store, prompter),
            "3" => super::search::run(&store, prompter, None, None),
            "4" => super::stats::run(&store),
            "5" => super::clear::run(&store, prompter, false),
            _ => break,
        };

        if let Err(e) = result {
            render::failure(&e);
        }
        prompter.pause()?;
    }

    println!(
        "{}",
        "Thank you for using the Terminal Tarot Reading App."
            .bold()
            .magenta()
    );
    Ok(())
}
