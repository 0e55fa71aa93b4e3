//! Focus questions offered before a reading.

use rand::rngs::StdRng;
use rand::seq::index;

use crate::error::{ReadingError, ReadingResult};

/// Minimum length of a custom question, in characters.
pub const MIN_QUESTION_CHARS: usize = 10;

/// Minimum number of words in a custom question.
pub const MIN_QUESTION_WORDS: usize = 2;

/// Number of suggested questions shown per reading.
pub const OFFERED_QUESTIONS: usize = 3;

/// Built-in focus questions.
pub const QUESTIONS: &[&str] = &[
    "What do I need to focus on today?",
    "What energy surrounds my career right now?",
    "How can I improve my relationships?",
    "What is blocking my personal growth?",
    "What should I let go of?",
    "What new opportunity is coming my way?",
    "How can I find more balance in my life?",
    "What lesson is the universe teaching me?",
    "What does my heart truly desire?",
    "How can I best support the people I love?",
    "What hidden strength can I draw on?",
    "Where should I direct my creative energy?",
    "What do I need to know about my finances?",
    "How can I bring more joy into my days?",
    "What is the next step on my path?",
];

/// Pick `n` distinct questions from `bank` in random order.
///
/// Returns fewer than `n` if the bank is smaller.
pub fn sample_questions<'a>(bank: &[&'a str], n: usize, rng: &mut StdRng) -> Vec<&'a str> {
    let n = n.min(bank.len());
    index::sample(rng, bank.len(), n)
        .into_iter()
        .map(|i| bank[i])
        .collect()
}

/// Check a user-typed question and return it trimmed.
pub fn validate_custom_question(input: &str) -> ReadingResult<String> {
    let question = input.trim();
    if question.chars().count() < MIN_QUESTION_CHARS
        || question.split_whitespace().count() < MIN_QUESTION_WORDS
    {
        return Err(ReadingError::InvalidQuestion(
            "your question seems too short or may not be a valid question; please provide a more detailed question"
                .to_string(),
        ));
    }
    Ok(question.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use rand::SeedableRng;

    #[test]
    fn samples_distinct_questions() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked = sample_questions(QUESTIONS, OFFERED_QUESTIONS, &mut rng);
        assert_eq!(picked.len(), 3);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 3);
        assert!(picked.iter().all(|q| QUESTIONS.contains(q)));
    }

    #[test]
    fn sample_caps_at_bank_size() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(sample_questions(&["one?"], 3, &mut rng), vec!["one?"]);
    }

    #[test]
    fn accepts_reasonable_question() {
        assert_eq!(
            validate_custom_question("  Will my garden thrive?  ").unwrap(),
            "Will my garden thrive?"
        );
    }

    #[test]
    fn rejects_short_question() {
        assert!(validate_custom_question("Why me?").is_err());
        assert!(validate_custom_question("").is_err());
        assert!(validate_custom_question("         ").is_err());
    }

    #[test]
    fn rejects_single_word() {
        assert!(validate_custom_question("Supercalifragilistic").is_err());
    }

    #[test]
    fn boundary_lengths() {
        // Exactly ten characters, two words.
        assert!(validate_custom_question("abcd efghi").is_ok());
        assert!(validate_custom_question("abc efghi").is_err());
    }
}
