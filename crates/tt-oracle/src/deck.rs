//! The tarot deck and card draws.

use rand::rngs::StdRng;
use rand::seq::index;

use crate::error::{ReadingError, ReadingResult};

/// The 22 major and 56 minor arcana.
pub const TAROT_CARDS: &[&str] = &[
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
    "Ace of Wands",
    "Two of Wands",
    "Three of Wands",
    "Four of Wands",
    "Five of Wands",
    "Six of Wands",
    "Seven of Wands",
    "Eight of Wands",
    "Nine of Wands",
    "Ten of Wands",
    "Page of Wands",
    "Knight of Wands",
    "Queen of Wands",
    "King of Wands",
    "Ace of Cups",
    "Two of Cups",
    "Three of Cups",
    "Four of Cups",
    "Five of Cups",
    "Six of Cups",
    "Seven of Cups",
    "Eight of Cups",
    "Nine of Cups",
    "Ten of Cups",
    "Page of Cups",
    "Knight of Cups",
    "Queen of Cups",
    "King of Cups",
    "Ace of Swords",
    "Two of Swords",
    "Three of Swords",
    "Four of Swords",
    "Five of Swords",
    "Six of Swords",
    "Seven of Swords",
    "Eight of Swords",
    "Nine of Swords",
    "Ten of Swords",
    "Page of Swords",
    "Knight of Swords",
    "Queen of Swords",
    "King of Swords",
    "Ace of Pentacles",
    "Two of Pentacles",
    "Three of Pentacles",
    "Four of Pentacles",
    "Five of Pentacles",
    "Six of Pentacles",
    "Seven of Pentacles",
    "Eight of Pentacles",
    "Nine of Pentacles",
    "Ten of Pentacles",
    "Page of Pentacles",
    "Knight of Pentacles",
    "Queen of Pentacles",
    "King of Pentacles",
];

/// A deck of named cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<String>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deck {
    /// The standard 78-card tarot deck.
    pub fn standard() -> Self {
        Self::from_cards(TAROT_CARDS.iter().copied())
    }

    /// A deck of custom cards. Names must not contain commas, since the log
    /// joins them with `", "`.
    pub fn from_cards<I, S>(cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }

    /// All card names.
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw `n` distinct cards, uniformly, without replacement.
    pub fn draw(&self, n: usize, rng: &mut StdRng) -> ReadingResult<Vec<String>> {
        if n > self.cards.len() {
            return Err(ReadingError::NotEnoughCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        Ok(index::sample(rng, self.cards.len(), n)
            .into_iter()
            .map(|i| self.cards[i].clone())
            .collect())
    }
}
