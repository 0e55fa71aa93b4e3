//! Card frequency table across the whole history.

use std::collections::HashMap;

use crate::record::ReadingRecord;

/// Width of the longest bar, reached by the most frequent card.
pub const BAR_WIDTH: usize = 30;

/// Character a bar is drawn with.
pub const BAR_MARKER: char = '█';

/// One row of the frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCount {
    /// Card name as it appears in the log.
    pub name: String,
    /// How many times it was drawn.
    pub count: usize,
    /// Bar length, `floor(count * BAR_WIDTH / max_count)`.
    pub bar_len: usize,
}

impl CardCount {
    /// The bar as a run of [`BAR_MARKER`].
    pub fn bar(&self) -> String {
        std::iter::repeat_n(BAR_MARKER, self.bar_len).collect()
    }
}

/// Card names ranked by how often they were drawn.
///
/// Equal counts keep the order in which the cards first appear in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<CardCount>,
    max_count: usize,
    name_width: usize,
    total: usize,
}

impl FrequencyTable {
    /// Count every card in `records`. Returns `None` if no card names are found.
    pub fn tally(records: &[ReadingRecord]) -> Option<Self> {
        // First-seen order, with an index for lookups.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut total = 0;

        for name in records.iter().flat_map(ReadingRecord::card_names) {
            total += 1;
            let slot = *index.entry(name).or_insert_with(|| {
                counts.push((name, 0));
                counts.len() - 1
            });
            counts[slot].1 += 1;
        }

        let max_count = counts.iter().map(|&(_, count)| count).max()?;

        // Stable, so ties stay in first-seen order.
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let name_width = counts
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0);

        let entries = counts
            .into_iter()
            .map(|(name, count)| CardCount {
                name: name.to_string(),
                count,
                bar_len: count * BAR_WIDTH / max_count,
            })
            .collect();

        Some(Self {
            entries,
            max_count,
            name_width,
            total,
        })
    }

    /// Ranked entries, most frequent first.
    pub fn entries(&self) -> &[CardCount] {
        &self.entries
    }

    /// Highest single count.
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Character width of the longest card name.
    pub fn name_width(&self) -> usize {
        self.name_width
    }

    /// Total number of cards drawn across all readings.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct cards.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; an empty tally is `None`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render one line per card: padded name, bar, count.
    pub fn render(&self) -> String {
        self.render_with(str::to_string)
    }

    /// Like [`FrequencyTable::render`], passing each bar through `paint`.
    ///
    /// Padding is computed on the plain name, so styling the bar keeps the
    /// columns aligned.
    pub fn render_with(&self, paint: impl Fn(&str) -> String) -> String {
        let width = self.name_width;
        self.entries
            .iter()
            .map(|e| format!("{:<width$}  {} {}", e.name, paint(&e.bar()), e.count))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_cards(cards: &[&str]) -> Vec<ReadingRecord> {
        cards
            .iter()
            .map(|c| ReadingRecord::new("2025-01-01 12:00:00", "q", *c, "r"))
            .collect()
    }

    #[test]
    fn ranks_by_count_with_proportional_bars() {
        let table = FrequencyTable::tally(&with_cards(&["A", "A", "B"])).unwrap();
        let got: Vec<_> = table
            .entries()
            .iter()
            .map(|e| (e.name.as_str(), e.count, e.bar_len))
            .collect();
        assert_eq!(got, vec![("A", 2, 30), ("B", 1, 15)]);
        assert_eq!(table.max_count(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn tokens_accumulate_across_records() {
        let recs = with_cards(&["The Fool, The Star", "Justice, The Star", "The Star"]);
        let table = FrequencyTable::tally(&recs).unwrap();
        assert_eq!(table.entries()[0].name, "The Star");
        assert_eq!(table.entries()[0].count, 3);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let recs = with_cards(&["The Moon, Justice", "The Fool, Justice, The Moon"]);
        let table = FrequencyTable::tally(&recs).unwrap();
        let names: Vec<_> = table.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["The Moon", "Justice", "The Fool"]);
    }

    #[test]
    fn bars_round_down() {
        let recs = with_cards(&["A, A, A, B, C, C"]);
        let table = FrequencyTable::tally(&recs).unwrap();
        let bars: Vec<_> = table.entries().iter().map(|e| e.bar_len).collect();
        // 3/3*30, 2/3*30, 1/3*30
        assert_eq!(bars, vec![30, 20, 10]);
    }

    #[test]
    fn name_width_is_data_driven() {
        let recs = with_cards(&["Ace of Cups, The Sun"]);
        let table = FrequencyTable::tally(&recs).unwrap();
        assert_eq!(table.name_width(), "Ace of Cups".len());
    }

    #[test]
    fn empty_input_has_no_table() {
        assert!(FrequencyTable::tally(&[]).is_none());
    }

    #[test]
    fn blank_card_fields_have_no_table() {
        assert!(FrequencyTable::tally(&with_cards(&["", "  ", " , ,"])).is_none());
    }

    #[test]
    fn render_pads_names_and_draws_bars() {
        let table = FrequencyTable::tally(&with_cards(&["Sun, Sun, Moon, Star, Star"])).unwrap();
        let rendered = table.render();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("Sun   {} 2", "█".repeat(30)));
        assert_eq!(lines[1], format!("Star  {} 2", "█".repeat(30)));
        assert_eq!(lines[2], format!("Moon  {} 1", "█".repeat(15)));
    }

    #[test]
    fn painted_bars_keep_layout() {
        let table = FrequencyTable::tally(&with_cards(&["Sun, Sun, Moon"])).unwrap();
        let painted = table.render_with(|bar| format!("<{bar}>"));
        assert_eq!(
            painted,
            format!("Sun   <{}> 2\nMoon  <{}> 1", "█".repeat(30), "█".repeat(15))
        );
        assert_eq!(table.render_with(str::to_string), table.render());
    }
}
