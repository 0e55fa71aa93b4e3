//! Line-based prompts over any buffered reader.

use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Reads answers from `input`, printing prompts to stdout.
///
/// End of input is treated as "no answer": `choose` returns `None` and
/// `confirm` returns `false`, so callers fall back to their safe default.
pub struct Prompter<R> {
    input: R,
    line: String,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }

    /// Ask for free text. `None` at end of input.
    pub fn ask(&mut self, text: &str) -> Result<Option<String>, String> {
        print!("{text}: ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        self.line.clear();
        match self.input.read_line(&mut self.line) {
            Ok(0) => {
                println!();
                Ok(None)
            }
            Ok(_) => Ok(Some(self.line.trim().to_string())),
            Err(e) => Err(e.to_string()),
        }
    }

    /// Ask until the answer is one of `choices`. An empty answer picks
    /// `default` when there is one.
    pub fn choose(
        &mut self,
        text: &str,
        choices: &[&str],
        default: Option<&str>,
    ) -> Result<Option<String>, String> {
        let mut label = format!("{text} [{}]", choices.join("/"));
        if let Some(d) = default {
            label.push_str(&format!(" ({d})"));
        }

        loop {
            let Some(answer) = self.ask(&label)? else {
                return Ok(None);
            };
            let answer = answer.to_lowercase();
            if answer.is_empty()
                && let Some(d) = default
            {
                return Ok(Some(d.to_string()));
            }
            if choices.contains(&answer.as_str()) {
                return Ok(Some(answer));
            }
            println!("{}", "Please select one of the available options".red());
        }
    }

    /// Yes/no question defaulting to no.
    pub fn confirm(&mut self, text: &str) -> Result<bool, String> {
        Ok(self.choose(text, &["y", "n"], Some("n"))?.as_deref() == Some("y"))
    }

    /// Wait for Enter.
    pub fn pause(&mut self) -> Result<(), String> {
        println!();
        self.ask("Press Enter to return to the main menu...")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8]> {
        Prompter::new(input.as_bytes())
    }

    #[test]
    fn choose_reasks_until_valid() {
        let mut p = prompter("x\n9\n2\n");
        assert_eq!(
            p.choose("Pick", &["1", "2"], None).unwrap().as_deref(),
            Some("2")
        );
    }

    #[test]
    fn choose_uses_default_on_empty() {
        let mut p = prompter("\n");
        assert_eq!(
            p.choose("Pick", &["1", "2"], Some("1")).unwrap().as_deref(),
            Some("1")
        );
    }

    #[test]
    fn choose_none_at_eof() {
        let mut p = prompter("");
        assert_eq!(p.choose("Pick", &["1"], None).unwrap(), None);
    }

    #[test]
    fn confirm_needs_explicit_yes() {
        assert!(prompter("y\n").confirm("Sure?").unwrap());
        assert!(prompter("Y\n").confirm("Sure?").unwrap());
        assert!(!prompter("n\n").confirm("Sure?").unwrap());
        assert!(!prompter("\n").confirm("Sure?").unwrap());
        assert!(!prompter("").confirm("Sure?").unwrap());
        assert!(!prompter("maybe\n").confirm("Sure?").unwrap());
    }

    #[test]
    fn ask_trims() {
        let mut p = prompter("  hello there \n");
        assert_eq!(p.ask("Say").unwrap().as_deref(), Some("hello there"));
    }
}
