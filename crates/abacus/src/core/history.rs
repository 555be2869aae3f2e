//! Completed-operation history.
//!
//! A bounded queue of display strings, newest first. Every resolved
//! operation (by `=` or by chaining another operator) adds one entry of
//! the form `"<lhs> <op> <rhs> = <result>"`.

use super::format::format_number;
use super::Operator;
use std::collections::VecDeque;

/// Calculator history.
///
/// Index 0 is always the most recent entry. Pushing past capacity evicts
/// the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_MAX_ENTRIES: usize = 10;

    /// Creates an empty history with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates an empty history with a custom capacity
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Rebuilds a history from stored entries (newest first).
    ///
    /// Entries beyond the default capacity are the oldest and are dropped.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut history = Self::new();
        history
            .entries
            .extend(entries.into_iter().take(history.max_entries));
        history
    }

    /// Adds an entry as the newest
    pub fn push(&mut self, entry: String) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_back();
        }
        self.entries.push_front(entry);
    }

    /// Records a resolved operation
    pub fn record(&mut self, lhs: f64, operator: Operator, rhs: f64, result: &str) {
        self.push(format_entry(lhs, operator, rhs, result));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Clears all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates newest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Returns the entry at `index` (0 = newest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Copies the entries out, newest first
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

/// Renders one history line
#[must_use]
pub fn format_entry(lhs: f64, operator: Operator, rhs: f64, result: &str) -> String {
    format!(
        "{} {} {} = {}",
        format_number(lhs),
        operator.symbol(),
        format_number(rhs),
        result
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry() {
        assert_eq!(format_entry(1.0, Operator::Add, 2.0, "3"), "1 + 2 = 3");
        assert_eq!(
            format_entry(5.0, Operator::Divide, 0.0, "Error"),
            "5 / 0 = Error"
        );
        assert_eq!(format_entry(0.5, Operator::Multiply, -4.0, "-2"), "0.5 * -4 = -2");
    }

    #[test]
    fn test_history_new() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.max_entries(), History::DEFAULT_MAX_ENTRIES);
        assert_eq!(History::default(), history);
    }

    #[test]
    fn test_history_record_newest_first() {
        let mut history = History::new();
        history.record(1.0, Operator::Add, 1.0, "2");
        history.record(2.0, Operator::Multiply, 3.0, "6");

        assert_eq!(history.latest(), Some("2 * 3 = 6"));
        assert_eq!(history.get(0), Some("2 * 3 = 6"));
        assert_eq!(history.get(1), Some("1 + 1 = 2"));
        assert_eq!(history.get(2), None);
    }

    #[test]
    fn test_history_max_entries_enforcement() {
        let mut history = History::with_capacity(3);
        for i in 1..=4 {
            history.push(i.to_string());
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.to_vec(), vec!["4", "3", "2"]);
    }

    #[test]
    fn test_history_eleventh_entry_evicts_oldest() {
        let mut history = History::new();
        for i in 0..11 {
            history.push(format!("entry {i}"));
        }
        assert_eq!(history.len(), 10);
        assert_eq!(history.latest(), Some("entry 10"));
        assert!(history.iter().all(|e| e != "entry 0"));
    }

    #[test]
    fn test_history_zero_capacity() {
        let mut history = History::with_capacity(0);
        history.push("ignored".into());
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_clear() {
        let mut history = History::new();
        history.push("a".into());
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_from_entries_truncates_oldest() {
        let stored: Vec<String> = (0..12).map(|i| i.to_string()).collect();
        let history = History::from_entries(stored);
        assert_eq!(history.len(), 10);
        assert_eq!(history.latest(), Some("0"));
        assert_eq!(history.get(9), Some("9"));
    }

    #[test]
    fn test_history_to_vec_round_trip() {
        let mut original = History::new();
        original.push("x".into());
        original.push("y".into());
        assert_eq!(History::from_entries(original.to_vec()), original);
    }
}
