//! Card draws, focus questions, and reading generation.
//!
//! Provides the tarot deck, the focus-question bank with validation for
//! custom questions, a cycling picker for progress messages, the reading
//! generator (an OpenAI chat-completions client behind a trait), and a
//! `ReadingSession` that draws, generates, and logs a reading.

pub mod config;
pub mod deck;
pub mod error;
pub mod generator;
pub mod picker;
pub mod questions;
pub mod session;

pub use config::ReaderConfig;
pub use deck::Deck;
pub use error::{ReadingError, ReadingResult};
pub use generator::{ERROR_PREFIX, OpenAiGenerator, ReadingGenerator};
pub use picker::CyclingPicker;
pub use session::{ReadingOutcome, ReadingSession};
