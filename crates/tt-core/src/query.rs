//! History pagination and field filters.
//!
//! Both work on a read-only slice of records as returned by the store
//! (oldest first). Paging shows the newest reading first; filtering keeps the
//! original order.

use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;
use crate::record::ReadingRecord;

/// Records shown per history page.
pub const PAGE_SIZE: usize = 5;

/// A navigation choice offered while paging through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Go to the previous (newer) page.
    Previous,
    /// Go to the next (older) page.
    Next,
    /// Leave the history view.
    Quit,
}

impl Navigation {
    /// Single-key shortcut used at the prompt.
    pub fn key(self) -> &'static str {
        match self {
            Self::Previous => "p",
            Self::Next => "n",
            Self::Quit => "q",
        }
    }

    /// Parse a prompt key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "p" => Some(Self::Previous),
            "n" => Some(Self::Next),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Previous => write!(f, "previous"),
            Self::Next => write!(f, "next"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

/// Result of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cursor moved to another page.
    Moved,
    /// The viewer is done.
    Quit,
}

/// A cursor over newest-first pages of history.
#[derive(Debug, Clone)]
pub struct Pager<'a> {
    newest_first: Vec<&'a ReadingRecord>,
    page_size: usize,
    current: usize,
}

impl<'a> Pager<'a> {
    /// Page `records` (oldest first) newest-first. Returns `None` when there
    /// is nothing to show. A zero page size is treated as one.
    pub fn new(records: &'a [ReadingRecord], page_size: usize) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        Some(Self {
            newest_first: records.iter().rev().collect(),
            page_size: page_size.max(1),
            current: 0,
        })
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> usize {
        self.newest_first.len().div_ceil(self.page_size)
    }

    /// Total number of records.
    pub fn total_records(&self) -> usize {
        self.newest_first.len()
    }

    /// 1-based number of the current page.
    pub fn page_number(&self) -> usize {
        self.current + 1
    }

    /// Records on the current page, newest first.
    pub fn current_page(&self) -> &[&'a ReadingRecord] {
        let start = self.current * self.page_size;
        let end = (start + self.page_size).min(self.newest_first.len());
        &self.newest_first[start..end]
    }

    /// All pages in order.
    pub fn pages(&self) -> impl Iterator<Item = &[&'a ReadingRecord]> {
        self.newest_first.chunks(self.page_size)
    }

    /// Whether this is the first page.
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Whether this is the last page.
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.total_pages()
    }

    /// Moves valid from the current page. Empty when everything fits on one
    /// page, in which case no prompt should be shown.
    pub fn available_moves(&self) -> Vec<Navigation> {
        if self.total_pages() <= 1 {
            return Vec::new();
        }
        let mut moves = Vec::with_capacity(3);
        if !self.is_first() {
            moves.push(Navigation::Previous);
        }
        if !self.is_last() {
            moves.push(Navigation::Next);
        }
        moves.push(Navigation::Quit);
        moves
    }

    /// Apply a navigation choice.
    pub fn navigate(&mut self, nav: Navigation) -> Result<Step, QueryError> {
        match nav {
            Navigation::Quit => Ok(Step::Quit),
            Navigation::Previous if self.is_first() => Err(QueryError::OutOfBounds {
                page: 0,
                total: self.total_pages(),
            }),
            Navigation::Previous => {
                self.current -= 1;
                Ok(Step::Moved)
            }
            Navigation::Next if self.is_last() => Err(QueryError::OutOfBounds {
                page: self.page_number() + 1,
                total: self.total_pages(),
            }),
            Navigation::Next => {
                self.current += 1;
                Ok(Step::Moved)
            }
        }
    }
}

/// Which field a search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Exact, case-sensitive substring of the timestamp (e.g. `2025-08`).
    Date,
    /// Case-insensitive substring of the question.
    Question,
    /// Case-insensitive substring of the joined card list.
    Card,
    /// Everything matches.
    All,
}

impl SearchMode {
    /// All modes, in menu order.
    pub const ALL: [SearchMode; 4] = [Self::Date, Self::Question, Self::Card, Self::All];

    /// Whether this mode needs a query string.
    pub fn needs_query(self) -> bool {
        !matches!(self, Self::All)
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Question => write!(f, "question"),
            Self::Card => write!(f, "card"),
            Self::All => write!(f, "all"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "question" => Ok(Self::Question),
            "card" | "cards" => Ok(Self::Card),
            "all" => Ok(Self::All),
            other => Err(format!(
                "unknown search mode '{other}', use: date, question, card, all"
            )),
        }
    }
}

/// A predicate over one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    mode: SearchMode,
    query: String,
}

impl Filter {
    /// Build a filter. The query is ignored for [`SearchMode::All`].
    pub fn new(mode: SearchMode, query: impl Into<String>) -> Self {
        let query = query.into();
        let query = match mode {
            SearchMode::Date => query,
            SearchMode::Question | SearchMode::Card => query.to_lowercase(),
            SearchMode::All => String::new(),
        };
        Self { mode, query }
    }

    /// A filter that keeps everything.
    pub fn all() -> Self {
        Self::new(SearchMode::All, "")
    }

    /// The search mode.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// The query as matched (lower-cased for text modes).
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether `record` passes this filter.
    pub fn matches(&self, record: &ReadingRecord) -> bool {
        match self.mode {
            SearchMode::Date => record.timestamp.contains(&self.query),
            SearchMode::Question => record.question.to_lowercase().contains(&self.query),
            SearchMode::Card => record.cards.to_lowercase().contains(&self.query),
            SearchMode::All => true,
        }
    }

    /// Keep matching records, preserving their order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a ReadingRecord>
    where
        I: IntoIterator<Item = &'a ReadingRecord>,
    {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<ReadingRecord> {
        (0..n)
            .map(|i| {
                ReadingRecord::new(
                    format!("2025-01-{:02} 12:00:00", i + 1),
                    format!("Question {i}"),
                    "The Fool",
                    "r",
                )
            })
            .collect()
    }

    #[test]
    fn empty_has_no_pager() {
        assert!(Pager::new(&[], PAGE_SIZE).is_none());
    }

    #[test]
    fn twelve_records_make_three_pages() {
        let recs = records(12);
        let pager = Pager::new(&recs, PAGE_SIZE).unwrap();
        assert_eq!(pager.total_pages(), 3);
        let sizes: Vec<_> = pager.pages().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![5, 5, 2]);
    }

    #[test]
    fn first_page_is_newest() {
        let recs = records(12);
        let pager = Pager::new(&recs, PAGE_SIZE).unwrap();
        assert_eq!(pager.current_page()[0].question, "Question 11");
        assert_eq!(pager.current_page()[4].question, "Question 7");
    }

    #[test]
    fn navigation_offers_only_valid_moves() {
        let recs = records(12);
        let mut pager = Pager::new(&recs, PAGE_SIZE).unwrap();
        assert_eq!(
            pager.available_moves(),
            vec![Navigation::Next, Navigation::Quit]
        );

        assert_eq!(pager.navigate(Navigation::Next), Ok(Step::Moved));
        assert_eq!(pager.page_number(), 2);
        assert_eq!(
            pager.available_moves(),
            vec![Navigation::Previous, Navigation::Next, Navigation::Quit]
        );

        pager.navigate(Navigation::Next).unwrap();
        assert_eq!(pager.page_number(), 3);
        assert_eq!(pager.current_page().len(), 2);
        assert_eq!(pager.current_page()[1].question, "Question 0");
        assert_eq!(
            pager.available_moves(),
            vec![Navigation::Previous, Navigation::Quit]
        );

        pager.navigate(Navigation::Previous).unwrap();
        assert_eq!(pager.page_number(), 2);
    }

    #[test]
    fn single_page_offers_no_prompt() {
        let recs = records(5);
        let pager = Pager::new(&recs, PAGE_SIZE).unwrap();
        assert_eq!(pager.total_pages(), 1);
        assert!(pager.available_moves().is_empty());
    }

    #[test]
    fn out_of_bounds_navigation_is_an_error() {
        let recs = records(6);
        let mut pager = Pager::new(&recs, PAGE_SIZE).unwrap();
        assert!(pager.navigate(Navigation::Previous).is_err());
        pager.navigate(Navigation::Next).unwrap();
        assert_eq!(
            pager.navigate(Navigation::Next),
            Err(QueryError::OutOfBounds { page: 3, total: 2 })
        );
        assert_eq!(pager.page_number(), 2);
    }

    #[test]
    fn quit_does_not_move() {
        let recs = records(12);
        let mut pager = Pager::new(&recs, PAGE_SIZE).unwrap();
        assert_eq!(pager.navigate(Navigation::Quit), Ok(Step::Quit));
        assert_eq!(pager.page_number(), 1);
    }

    #[test]
    fn navigation_keys() {
        for nav in [Navigation::Previous, Navigation::Next, Navigation::Quit] {
            assert_eq!(Navigation::from_key(nav.key()), Some(nav));
        }
        assert_eq!(Navigation::from_key("N"), Some(Navigation::Next));
        assert_eq!(Navigation::from_key("x"), None);
    }

    fn card_records() -> Vec<ReadingRecord> {
        vec![
            ReadingRecord::new(
                "2025-08-01 09:30:00",
                "What's my focus today?",
                "The Fool, The Star",
                "r1",
            ),
            ReadingRecord::new(
                "2025-09-14 21:00:00",
                "How can I grow at WORK?",
                "Justice, The Moon",
                "r2",
            ),
        ]
    }

    #[test]
    fn card_search_is_case_insensitive() {
        let recs = card_records();
        let hits = Filter::new(SearchMode::Card, "star").apply(&recs);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].cards, "The Fool, The Star");
    }

    #[test]
    fn card_search_matches_across_separator() {
        let recs = card_records();
        let hits = Filter::new(SearchMode::Card, "fool, the").apply(&recs);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn question_search_lowercases_both_sides() {
        let recs = card_records();
        let hits = Filter::new(SearchMode::Question, "work").apply(&recs);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].reading, "r2");
    }

    #[test]
    fn date_search_is_exact_substring() {
        let recs = card_records();
        assert_eq!(Filter::new(SearchMode::Date, "2025-08").apply(&recs).len(), 1);
        assert_eq!(Filter::new(SearchMode::Date, "2025").apply(&recs).len(), 2);
        assert_eq!(Filter::new(SearchMode::Date, "21:00").apply(&recs).len(), 1);
        assert!(Filter::new(SearchMode::Date, "2024").apply(&recs).is_empty());
    }

    #[test]
    fn all_keeps_original_order() {
        let recs = records(7);
        let hits = Filter::all().apply(&recs);
        let expected: Vec<&ReadingRecord> = recs.iter().collect();
        assert_eq!(hits, expected);
    }

    #[test]
    fn no_matches_is_empty_not_error() {
        let recs = card_records();
        assert!(Filter::new(SearchMode::Card, "tower").apply(&recs).is_empty());
    }

    #[test]
    fn refiltering_is_stable() {
        let recs = card_records();
        let filter = Filter::new(SearchMode::Question, "my");
        let once = filter.apply(&recs);
        let twice = filter.apply(once.iter().copied());
        assert_eq!(once, twice);
    }

    #[test]
    fn search_mode_parse_and_display() {
        for mode in SearchMode::ALL {
            assert_eq!(mode.to_string().parse::<SearchMode>(), Ok(mode));
        }
        assert_eq!("CARDS".parse::<SearchMode>(), Ok(SearchMode::Card));
        assert!("tarot".parse::<SearchMode>().is_err());
        assert!(!SearchMode::All.needs_query());
        assert!(SearchMode::Date.needs_query());
    }
}
