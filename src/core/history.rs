//! Navigation history tracking.
//!
//! Every applied navigation is recorded as an immutable value. The history is
//! bounded: once the limit is reached, the oldest records are dropped.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Default number of records kept by a machine's history.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Kind of stack operation that produced a record.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum NavigationKind {
    /// Whole stack replaced by one state.
    Change,
    /// State pushed over the current top.
    Push,
    /// Top state popped.
    Pop,
}

/// Record of a single navigation.
///
/// # Example
///
/// ```rust
/// use navstack::core::{NavigationKind, NavigationRecord};
/// use chrono::Utc;
///
/// let record = NavigationRecord {
///     kind: NavigationKind::Push,
///     from: Some("home"),
///     to: Some("settings"),
///     timestamp: Utc::now(),
///     depth: 2,
/// };
/// assert_eq!(record.depth, 2);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct NavigationRecord<Id> {
    pub kind: NavigationKind,
    /// Top of the stack before the navigation
    pub from: Option<Id>,
    /// Top of the stack after the navigation
    pub to: Option<Id>,
    /// When the navigation completed
    pub timestamp: DateTime<Utc>,
    /// Stack depth after the navigation
    pub depth: usize,
}

/// Ordered, bounded history of navigations.
///
/// History is immutable - `record` returns a new history with the navigation
/// appended.
///
/// # Example
///
/// ```rust
/// use navstack::core::{NavigationHistory, NavigationKind, NavigationRecord};
/// use chrono::Utc;
///
/// let history = NavigationHistory::new();
/// let history = history.record(NavigationRecord {
///     kind: NavigationKind::Change,
///     from: None,
///     to: Some("home"),
///     timestamp: Utc::now(),
///     depth: 1,
/// });
/// let history = history.record(NavigationRecord {
///     kind: NavigationKind::Push,
///     from: Some("home"),
///     to: Some("settings"),
///     timestamp: Utc::now(),
///     depth: 2,
/// });
///
/// assert_eq!(history.get_path(), vec![&"home", &"settings"]);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct NavigationHistory<Id> {
    records: Vec<NavigationRecord<Id>>,
    limit: usize,
}

impl<Id: StateId> Default for NavigationHistory<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: StateId> NavigationHistory<Id> {
    /// Create an empty history keeping [`DEFAULT_HISTORY_LIMIT`] records.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history keeping at most `limit` records.
    ///
    /// A limit of zero disables recording.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit,
        }
    }

    /// Record a navigation, returning a new history.
    ///
    /// The existing history is left untouched. When the limit is reached
    /// the oldest record is dropped.
    pub fn record(&self, record: NavigationRecord<Id>) -> Self {
        if self.limit == 0 {
            return self.clone();
        }

        let skip = (self.records.len() + 1).saturating_sub(self.limit);
        let records = self
            .records
            .iter()
            .skip(skip)
            .cloned()
            .chain(std::iter::once(record))
            .collect();

        Self {
            records,
            limit: self.limit,
        }
    }

    /// Get the sequence of top-of-stack ids visited.
    ///
    /// Starts with the `from` of the first record (when there was one), then
    /// the `to` of each record. Navigations that left the stack empty
    /// contribute nothing.
    pub fn get_path(&self) -> Vec<&Id> {
        let mut path = Vec::new();
        if let Some(from) = self.records.first().and_then(|r| r.from.as_ref()) {
            path.push(from);
        }
        for record in &self.records {
            if let Some(to) = record.to.as_ref() {
                path.push(to);
            }
        }
        path
    }

    /// Time elapsed between the first and the last record.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records, oldest first.
    pub fn records(&self) -> &[NavigationRecord<Id>] {
        &self.records
    }

    pub fn last(&self) -> Option<&NavigationRecord<Id>> {
        self.records.last()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        kind: NavigationKind,
        from: Option<&'static str>,
        to: Option<&'static str>,
        depth: usize,
    ) -> NavigationRecord<&'static str> {
        NavigationRecord {
            kind,
            from,
            to,
            timestamp: Utc::now(),
            depth,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: NavigationHistory<&str> = NavigationHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn record_is_immutable() {
        let history = NavigationHistory::new();

        let new_history = history.record(record(NavigationKind::Change, None, Some("home"), 1));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_follows_top_of_stack() {
        let history = NavigationHistory::new()
            .record(record(NavigationKind::Change, None, Some("home"), 1))
            .record(record(NavigationKind::Push, Some("home"), Some("settings"), 2))
            .record(record(NavigationKind::Pop, Some("settings"), Some("home"), 1));

        assert_eq!(history.get_path(), vec![&"home", &"settings", &"home"]);
    }

    #[test]
    fn get_path_skips_empty_targets() {
        let history = NavigationHistory::new()
            .record(record(NavigationKind::Change, None, Some("home"), 1))
            .record(record(NavigationKind::Pop, Some("home"), None, 0));

        assert_eq!(history.get_path(), vec![&"home"]);
    }

    #[test]
    fn limit_drops_oldest_records() {
        let mut history = NavigationHistory::with_limit(2);

        history = history.record(record(NavigationKind::Change, None, Some("a"), 1));
        history = history.record(record(NavigationKind::Push, Some("a"), Some("b"), 2));
        history = history.record(record(NavigationKind::Push, Some("b"), Some("c"), 3));

        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[0].to, Some("b"));
        assert_eq!(history.last().map(|r| r.depth), Some(3));
    }

    #[test]
    fn zero_limit_records_nothing() {
        let history = NavigationHistory::with_limit(0)
            .record(record(NavigationKind::Change, None, Some("home"), 1));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = NavigationHistory::new().record(record(
            NavigationKind::Change,
            None,
            Some("home"),
            1,
        ));

        std::thread::sleep(Duration::from_millis(10));

        let history = history.record(record(NavigationKind::Push, Some("home"), Some("about"), 2));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn history_serializes_for_diagnostics() {
        let history = NavigationHistory::new()
            .record(record(NavigationKind::Change, None, Some("home"), 1));

        let json = serde_json::to_value(&history).unwrap();

        assert_eq!(json["records"][0]["kind"], "Change");
        assert_eq!(json["records"][0]["to"], "home");
        assert_eq!(json["limit"], DEFAULT_HISTORY_LIMIT);
    }
}
