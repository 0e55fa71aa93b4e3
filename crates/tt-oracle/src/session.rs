//! A reading session: draw cards, generate the reading, and log it.
//!
//! `ReadingSession` owns every piece of per-run state (deck, RNG, progress
//! picker) so nothing is shared globally. Prompting and display stay with the
//! caller; the session only exposes the steps.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

use tt_core::{ReadingRecord, RecordStore, StoreResult};

use crate::config::ReaderConfig;
use crate::deck::Deck;
use crate::error::ReadingResult;
use crate::generator::ReadingGenerator;
use crate::picker::CyclingPicker;
use crate::questions::{OFFERED_QUESTIONS, QUESTIONS, sample_questions};

/// A finished reading and whether it made it into the log.
#[derive(Debug)]
pub struct ReadingOutcome {
    /// The focus question.
    pub question: String,
    /// Cards drawn, in draw order.
    pub cards: Vec<String>,
    /// The generated text (or generation error text).
    pub reading: String,
    /// The logged record, or why it could not be logged.
    pub saved: StoreResult<ReadingRecord>,
}

/// An interactive tarot session.
pub struct ReadingSession<G> {
    config: ReaderConfig,
    deck: Deck,
    progress: CyclingPicker<(&'static str, &'static str)>,
    rng: StdRng,
    generator: G,
    store: RecordStore,
}

impl<G: ReadingGenerator> ReadingSession<G> {
    /// Create a session with the standard deck.
    pub fn new(config: ReaderConfig, generator: G, store: RecordStore) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            deck: Deck::standard(),
            progress: CyclingPicker::progress_pairs(),
            rng,
            generator,
            store,
        }
    }

    /// Replace the deck.
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    /// The session configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// The reading log.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The deck in use.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Three distinct suggested focus questions.
    pub fn offer_questions(&mut self) -> Vec<&'static str> {
        sample_questions(QUESTIONS, OFFERED_QUESTIONS, &mut self.rng)
    }

    /// Draw the configured number of cards.
    pub fn draw_cards(&mut self) -> ReadingResult<Vec<String>> {
        self.deck.draw(self.config.cards_per_reading, &mut self.rng)
    }

    /// The next pair of progress messages, without repeats until all are used.
    pub fn next_progress_pair(&mut self) -> Option<(&'static str, &'static str)> {
        self.progress.pick(&mut self.rng)
    }

    /// Generate the reading for already drawn cards and log it.
    ///
    /// A logging failure does not lose the reading; it is reported in
    /// [`ReadingOutcome::saved`].
    pub fn complete(&mut self, question: &str, cards: Vec<String>) -> ReadingOutcome {
        let reading = self.generator.generate(question, &cards);
        let saved = self.store.append(question, &cards, &reading);
        match &saved {
            Ok(record) => info!(timestamp = %record.timestamp, "reading logged"),
            Err(err) => error!(error = %err, "reading could not be logged"),
        }
        ReadingOutcome {
            question: question.to_string(),
            cards,
            reading,
            saved,
        }
    }

    /// Draw, generate, and log in one step.
    pub fn perform(&mut self, question: &str) -> ReadingResult<ReadingOutcome> {
        let cards = self.draw_cards()?;
        Ok(self.complete(question, cards))
    }
}
