use std::io::BufRead;
use std::thread;

use colored::Colorize;
use tt_oracle::questions::validate_custom_question;
use tt_oracle::{ReadingGenerator, ReadingSession};

use crate::prompt::Prompter;
use crate::render;

/// Perform one reading. With `question` set nothing is asked; a question that
/// fails validation is an error.
pub fn run<G: ReadingGenerator, R: BufRead>(
    session: &mut ReadingSession<G>,
    prompter: &mut Prompter<R>,
    question: Option<String>,
) -> Result<(), String> {
    let question = match question {
        Some(q) => validate_custom_question(&q).map_err(|e| e.to_string())?,
        None => match choose_question(session, prompter)? {
            Some(q) => q,
            None => return Ok(()),
        },
    };

    let cards = session.draw_cards().map_err(|e| e.to_string())?;
    let delay = session.config().reveal_delay;

    println!();
    println!("{}", format!("Drawing {} cards...", cards.len()).bold().yellow());
    for card in &cards {
        println!("- {}", card.bold());
        thread::sleep(delay);
    }
    thread::sleep(delay * 2);

    if let Some((interpret, consult)) = session.next_progress_pair() {
        println!("{}", interpret.italic().green());
        thread::sleep(delay * 2);
        println!("{}", consult.italic().green());
        thread::sleep(delay * 2);
    }
    println!("{}", "Generating your reading...".bold().green());

    let outcome = session.complete(&question, cards);
    println!();
    println!("{}", render::reading_panel(&outcome.reading));

    if let Err(e) = &outcome.saved {
        render::failure(&format!("Error saving reading: {e}"));
    }
    Ok(())
}

/// Offer three suggested questions plus a custom one. `None` means go back.
fn choose_question<G: ReadingGenerator, R: BufRead>(
    session: &mut ReadingSession<G>,
    prompter: &mut Prompter<R>,
) -> Result<Option<String>, String> {
    let offered = session.offer_questions();

    println!();
    println!("{}", "Please choose one of the following focuses:".bold());
    for (i, q) in offered.iter().enumerate() {
        println!("{}. {q}", (i + 1).to_string().cyan());
    }
    let custom = offered.len() + 1;
    println!("{}. Enter your own question", custom.to_string().cyan());

    let keys: Vec<String> = (1..=custom).map(|n| n.to_string()).collect();
    let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
    let Some(choice) = prompter.choose("Enter the number of your choice", &keys, Some("1"))? else {
        return Ok(None);
    };
    let n: usize = choice.parse().map_err(|_| format!("invalid choice: {choice}"))?;

    if let Some(q) = offered.get(n - 1) {
        return Ok(Some(q.to_string()));
    }

    let Some(typed) = prompter.ask(&"Please type your personalized question".bold().to_string())?
    else {
        return Ok(None);
    };
    match validate_custom_question(&typed) {
        Ok(q) => Ok(Some(q)),
        Err(e) => {
            render::failure(&capitalize(&e.to_string()));
            Ok(None)
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
