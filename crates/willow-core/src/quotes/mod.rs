//! Daily affirmation quotes.
//!
//! Each period has its own list. The selected quote for a period advances by
//! one the first time it is requested on a new calendar day, and the position
//! is persisted through a [`SettingsStore`].

mod library;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::period::{Clock, TimePeriod};
use crate::storage::SettingsStore;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub period: TimePeriod,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>, period: TimePeriod) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            period,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuoteBook {
    quotes: Vec<Quote>,
}

impl QuoteBook {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    pub fn builtin() -> Self {
        Self::new(library::builtin())
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Quotes for one period, in library order.
    pub fn for_period(&self, period: TimePeriod) -> Vec<&Quote> {
        self.quotes.iter().filter(|q| q.period == period).collect()
    }
}

fn last_date_key(period: TimePeriod) -> String {
    format!("quote.last_date.{}", period.as_str())
}

fn index_key(period: TimePeriod) -> String {
    format!("quote.index.{}", period.as_str())
}

/// Picks today's quote per period.
pub struct DailyQuotes<S, C> {
    book: QuoteBook,
    store: S,
    clock: C,
}

impl<S: SettingsStore, C: Clock> DailyQuotes<S, C> {
    pub fn new(book: QuoteBook, store: S, clock: C) -> Self {
        Self { book, store, clock }
    }

    pub fn book(&self) -> &QuoteBook {
        &self.book
    }

    pub fn current_period(&self) -> TimePeriod {
        self.clock.current_period()
    }

    /// Today's quote for the current period.
    pub fn quote_now(&self) -> Result<Option<Quote>, StorageError> {
        self.todays_quote(self.current_period())
    }

    /// Today's quote for `period`, advancing the rotation once per day.
    ///
    /// Returns `Ok(None)` when the book has no quotes for the period.
    pub fn todays_quote(&self, period: TimePeriod) -> Result<Option<Quote>, StorageError> {
        let quotes = self.book.for_period(period);
        if quotes.is_empty() {
            return Ok(None);
        }

        let today = self.clock.today();
        let date_key = last_date_key(period);
        let idx_key = index_key(period);

        let last_date = self
            .store
            .get(&date_key)?
            .and_then(|s| NaiveDate::parse_from_str(&s, DATE_FORMAT).ok());
        let mut index = self
            .store
            .get(&idx_key)?
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(0)
            % quotes.len();

        match last_date {
            Some(last) if today > last => {
                index = (index + 1) % quotes.len();
                self.persist(&date_key, &idx_key, today, index)?;
                tracing::debug!(period = period.as_str(), index, "quote rotation advanced");
            }
            Some(_) => {}
            None => self.persist(&date_key, &idx_key, today, index)?,
        }

        Ok(Some(quotes[index].clone()))
    }

    fn persist(
        &self,
        date_key: &str,
        idx_key: &str,
        today: NaiveDate,
        index: usize,
    ) -> Result<(), StorageError> {
        // Index before date: a store that fails halfway must not record
        // the day as seen without its rotation step.
        let index = index.to_string();
        let date = today.format(DATE_FORMAT).to_string();
        self.store.set_many(&[(idx_key, &index), (date_key, &date)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::FixedClock;
    use crate::storage::MemoryStore;
    use chrono::{Local, TimeZone};

    fn clock(day: u32, hour: u32) -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2026, 5, day, hour, 0, 0).unwrap())
    }

    /// Rejects writes to one key, otherwise behaves like `MemoryStore`.
    struct RejectingStore {
        inner: MemoryStore,
        rejected: &'static str,
    }

    impl SettingsStore for RejectingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.rejected {
                return Err(StorageError::Locked);
            }
            self.inner.set(key, value)
        }
    }

    #[test]
    fn builtin_book_has_fifteen_per_period() {
        let book = QuoteBook::builtin();
        assert_eq!(book.len(), 60);
        for period in TimePeriod::ALL {
            assert_eq!(book.for_period(period).len(), 15, "{period}");
        }
    }

    #[test]
    fn first_request_uses_stored_index_and_records_date() {
        let store = MemoryStore::new();
        let quotes = DailyQuotes::new(QuoteBook::builtin(), &store, clock(1, 8));

        let quote = quotes.todays_quote(TimePeriod::Morning).unwrap().unwrap();
        assert_eq!(quote, *QuoteBook::builtin().for_period(TimePeriod::Morning)[0]);
        assert_eq!(
            store.get("quote.last_date.morning").unwrap().as_deref(),
            Some("2026-05-01")
        );
        assert_eq!(store.get("quote.index.morning").unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn same_day_repeats_quote() {
        let store = MemoryStore::new();
        let quotes = DailyQuotes::new(QuoteBook::builtin(), &store, clock(1, 8));
        let first = quotes.todays_quote(TimePeriod::Day).unwrap();
        let second = quotes.todays_quote(TimePeriod::Day).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn next_day_advances_by_one() {
        let store = MemoryStore::new();
        let book = QuoteBook::builtin();
        let expected = book.for_period(TimePeriod::Night)[1].clone();

        DailyQuotes::new(book.clone(), &store, clock(1, 22))
            .todays_quote(TimePeriod::Night)
            .unwrap();
        let quote = DailyQuotes::new(book, &store, clock(4, 22))
            .todays_quote(TimePeriod::Night)
            .unwrap()
            .unwrap();

        // Skipped days do not count: one step per day the quote is viewed.
        assert_eq!(quote, expected);
        assert_eq!(store.get("quote.index.night").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn rotation_wraps_around() {
        let store = MemoryStore::new();
        store.set("quote.last_date.evening", "2026-05-01").unwrap();
        store.set("quote.index.evening", "14").unwrap();

        let book = QuoteBook::builtin();
        let quote = DailyQuotes::new(book.clone(), &store, clock(2, 18))
            .todays_quote(TimePeriod::Evening)
            .unwrap()
            .unwrap();
        assert_eq!(quote, *book.for_period(TimePeriod::Evening)[0]);
    }

    #[test]
    fn periods_rotate_independently() {
        let store = MemoryStore::new();
        let book = QuoteBook::builtin();
        DailyQuotes::new(book.clone(), &store, clock(1, 8))
            .todays_quote(TimePeriod::Morning)
            .unwrap();
        DailyQuotes::new(book.clone(), &store, clock(2, 8))
            .todays_quote(TimePeriod::Morning)
            .unwrap();

        assert_eq!(store.get("quote.index.morning").unwrap().as_deref(), Some("1"));
        assert!(store.get("quote.index.day").unwrap().is_none());
    }

    #[test]
    fn corrupt_values_are_treated_as_absent() {
        let store = MemoryStore::new();
        store.set("quote.last_date.day", "yesterday").unwrap();
        store.set("quote.index.day", "-3").unwrap();

        let book = QuoteBook::builtin();
        let quote = DailyQuotes::new(book.clone(), &store, clock(3, 13))
            .todays_quote(TimePeriod::Day)
            .unwrap()
            .unwrap();
        assert_eq!(quote, *book.for_period(TimePeriod::Day)[0]);
        assert_eq!(
            store.get("quote.last_date.day").unwrap().as_deref(),
            Some("2026-05-03")
        );
    }

    #[test]
    fn oversized_index_is_reduced() {
        let store = MemoryStore::new();
        store.set("quote.last_date.morning", "2026-05-03").unwrap();
        store.set("quote.index.morning", "17").unwrap();

        let book = QuoteBook::builtin();
        let quote = DailyQuotes::new(book.clone(), &store, clock(3, 9))
            .todays_quote(TimePeriod::Morning)
            .unwrap()
            .unwrap();
        assert_eq!(quote, *book.for_period(TimePeriod::Morning)[2]);
    }

    #[test]
    fn empty_period_yields_none() {
        let store = MemoryStore::new();
        let book = QuoteBook::new(vec![Quote::new("Breathe.", "Anon", TimePeriod::Morning)]);
        let quotes = DailyQuotes::new(book, &store, clock(1, 23));
        assert!(quotes.quote_now().unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn quote_now_follows_clock_period() {
        let store = MemoryStore::new();
        let quotes = DailyQuotes::new(QuoteBook::builtin(), &store, clock(1, 14));
        assert_eq!(quotes.current_period(), TimePeriod::Day);
        let quote = quotes.quote_now().unwrap().unwrap();
        assert_eq!(quote.period, TimePeriod::Day);
    }

    #[test]
    fn failed_date_write_keeps_rotation_step() {
        let store = RejectingStore {
            inner: MemoryStore::new(),
            rejected: "quote.last_date.night",
        };
        store.inner.set("quote.last_date.night", "2026-05-01").unwrap();
        store.inner.set("quote.index.night", "4").unwrap();

        let quotes = DailyQuotes::new(QuoteBook::builtin(), &store, clock(2, 22));
        assert!(matches!(
            quotes.todays_quote(TimePeriod::Night),
            Err(StorageError::Locked)
        ));
        assert_eq!(
            store.get("quote.index.night").unwrap().as_deref(),
            Some("5")
        );
        assert_eq!(
            store.get("quote.last_date.night").unwrap().as_deref(),
            Some("2026-05-01")
        );
    }

    #[test]
    fn rotation_persists_through_database_store() {
        let dir = tempfile::tempdir().unwrap();
        let db = crate::storage::Database::open_at(&dir.path().join("willow.db")).unwrap();
        let day1 = DailyQuotes::new(QuoteBook::builtin(), &db, clock(1, 9));
        let first = day1.todays_quote(TimePeriod::Morning).unwrap().unwrap();
        let day2 = DailyQuotes::new(QuoteBook::builtin(), &db, clock(2, 9));
        let second = day2.todays_quote(TimePeriod::Morning).unwrap().unwrap();
        assert_ne!(first, second);
        assert_eq!(db.get("quote.index.morning").unwrap().as_deref(), Some("1"));
        assert_eq!(
            db.get("quote.last_date.morning").unwrap().as_deref(),
            Some("2026-05-02")
        );
    }
}
