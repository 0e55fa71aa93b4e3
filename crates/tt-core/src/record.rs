//! The reading record stored in each log row.

use chrono::Local;
use serde::Serialize;

/// Column names of the log header row, in field order.
pub const HEADER: [&str; 4] = ["datetime", "question", "cards", "reading"];

/// `strftime` format of [`ReadingRecord::timestamp`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator used to join card names into the `cards` field.
pub const CARD_SEPARATOR: &str = ", ";

/// One logged reading. Serializes to a log row in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingRecord {
    /// Local time the reading completed, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    /// The focus question.
    pub question: String,
    /// Drawn card names joined with `", "`.
    pub cards: String,
    /// The generated narrative, or the generation error text.
    pub reading: String,
}

impl ReadingRecord {
    /// Build a record from its four fields.
    pub fn new(
        timestamp: impl Into<String>,
        question: impl Into<String>,
        cards: impl Into<String>,
        reading: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            question: question.into(),
            cards: cards.into(),
            reading: reading.into(),
        }
    }

    /// Build a record stamped with the current local time.
    pub fn now<S: AsRef<str>>(question: &str, cards: &[S], reading: &str) -> Self {
        Self::new(
            Local::now().format(TIMESTAMP_FORMAT).to_string(),
            question,
            join_cards(cards),
            reading,
        )
    }

    /// Card names in this record, trimmed, skipping empty entries.
    pub fn card_names(&self) -> impl Iterator<Item = &str> {
        self.cards
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Join card names into the denormalized `cards` field.
pub fn join_cards<S: AsRef<str>>(cards: &[S]) -> String {
    cards
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(CARD_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_uses_comma_space() {
        assert_eq!(
            join_cards(&["The Fool", "Justice", "The Star"]),
            "The Fool, Justice, The Star"
        );
        assert_eq!(join_cards::<&str>(&[]), "");
    }

    #[test]
    fn card_names_trim_and_skip_empty() {
        let r = ReadingRecord::new("t", "q", " The Fool ,, Justice,  ", "r");
        let names: Vec<_> = r.card_names().collect();
        assert_eq!(names, vec!["The Fool", "Justice"]);
    }

    #[test]
    fn now_formats_timestamp() {
        let r = ReadingRecord::now("What now?", &["The Moon"], "Patience.");
        assert_eq!(r.timestamp.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&r.timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(r.cards, "The Moon");
    }

    #[test]
    fn row_order_matches_header() {
        let r = ReadingRecord::new("2025-01-01 12:00:00", "q", "The Fool, The Sun", "r");
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.serialize(&r).unwrap();
        let row = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(row, "2025-01-01 12:00:00,q,\"The Fool, The Sun\",r\n");
        assert_eq!(HEADER, ["datetime", "question", "cards", "reading"]);
    }
}
