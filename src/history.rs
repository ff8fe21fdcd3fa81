//! Session History
//!
//! Bounded, in-memory list of calculations the user chose to save. Lives as
//! long as the process; nothing is written to disk.

use std::collections::VecDeque;

use chrono::Local;
use serde::Serialize;

use crate::engine::Assessment;
use crate::utils::formatting::round2;

/// Timestamp format used for `recorded_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One saved calculation, shaped for a table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub weight_kg: f64,
    pub height_m: f64,
    /// Rounded to two decimals.
    pub bmi: f64,
    pub classification: &'static str,
    pub recorded_at: String,
}

#[derive(Debug, Clone)]
pub struct SessionHistory {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl SessionHistory {
    /// `limit` is clamped to at least 1.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit.min(1024)),
            limit,
        }
    }

    /// Append a calculation, evicting the oldest entry when full.
    pub fn record(&mut self, assessment: &Assessment, weight_kg: f64, height_m: f64) -> HistoryEntry {
        let entry = HistoryEntry {
            weight_kg,
            height_m,
            bmi: round2(assessment.bmi),
            classification: assessment.classification.label(),
            recorded_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        };

        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.clone());
        entry
    }

    /// Oldest first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assess;
    use approx::assert_relative_eq;

    fn record(history: &mut SessionHistory, w: f64, h: f64) -> HistoryEntry {
        let a = assess(w, h).unwrap();
        history.record(&a, w, h)
    }

    #[test]
    fn test_record_rounds_and_labels() {
        let mut history = SessionHistory::new(10);
        let entry = record(&mut history, 70.0, 1.75);

        assert_relative_eq!(entry.bmi, 22.86);
        assert_eq!(entry.classification, "Normal weight");
        assert_eq!(entry.recorded_at.len(), "2024-01-01 12:00".len());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_evicts_oldest() {
        let mut history = SessionHistory::new(2);
        record(&mut history, 45.0, 1.70);
        record(&mut history, 70.0, 1.75);
        record(&mut history, 120.0, 1.80);

        let entries = history.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].classification, "Normal weight");
        assert_eq!(entries[1].classification, "Obesity");
    }

    #[test]
    fn test_clear() {
        let mut history = SessionHistory::new(0);
        assert_eq!(history.limit(), 1);
        record(&mut history, 70.0, 1.75);
        assert!(!history.is_empty());
        history.clear();
        assert!(history.is_empty());
    }
}
