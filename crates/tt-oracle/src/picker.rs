//! Random picking without repeats until the pool runs dry.

use rand::Rng;
use rand::rngs::StdRng;

/// Status messages shown while a reading is generated: one while the cards
/// are interpreted, one while the oracle is consulted.
pub const PROGRESS_PAIRS: &[(&str, &str)] = &[
    ("Interpreting the cards...", "Consulting the oracle..."),
    ("Reading the symbols...", "Listening to the spirits..."),
    ("Shuffling the energies...", "Asking the stars..."),
    ("Tracing the patterns...", "Channeling the cosmos..."),
    ("Studying the arcana...", "Seeking hidden wisdom..."),
    ("Aligning the spread...", "Communing with the unseen..."),
];

/// Hands out items at random, never repeating one until every item has
/// been used, then starts over with the full set.
#[derive(Debug, Clone)]
pub struct CyclingPicker<T> {
    original: Vec<T>,
    remaining: Vec<T>,
}

impl<T: Clone> CyclingPicker<T> {
    /// Create a picker over `items`.
    pub fn new(items: impl Into<Vec<T>>) -> Self {
        let original = items.into();
        Self {
            remaining: original.clone(),
            original,
        }
    }

    /// Take a random item, refilling the pool first if it is empty.
    /// Returns `None` only when the picker was built from no items.
    pub fn pick(&mut self, rng: &mut StdRng) -> Option<T> {
        if self.remaining.is_empty() {
            self.remaining = self.original.clone();
        }
        if self.remaining.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(i))
    }

    /// Items left before the next refill.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Size of the full set.
    pub fn len(&self) -> usize {
        self.original.len()
    }

    /// Whether the picker has nothing to hand out.
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}

impl CyclingPicker<(&'static str, &'static str)> {
    /// A picker over [`PROGRESS_PAIRS`].
    pub fn progress_pairs() -> Self {
        Self::new(PROGRESS_PAIRS)
    }
}
