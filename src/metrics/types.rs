//! @ai:module:intent Metric types for benchmark results
//! @ai:module:layer domain
//! @ai:module:public_api DurationSample, StatsSummary, ResultsReport

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// @ai:intent Elapsed seconds for each run of one target, in call order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DurationSample {
    durations: Vec<f64>,
}

impl DurationSample {
    /// @ai:intent Create an empty sample with room for the configured run count
    /// @ai:effects pure
    pub fn with_capacity(runs: usize) -> Self {
        Self {
            durations: Vec::with_capacity(runs),
        }
    }

    /// @ai:intent Append one recorded duration
    /// @ai:pre seconds is non-negative
    pub fn push(&mut self, seconds: f64) {
        self.durations.push(seconds);
    }

    /// @ai:intent Number of recorded runs
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.durations
    }
}

impl From<Vec<f64>> for DurationSample {
    fn from(durations: Vec<f64>) -> Self {
        Self { durations }
    }
}

/// @ai:intent Descriptive statistics derived from one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub average: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// @ai:intent Target name to summary, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultsReport {
    entries: IndexMap<String, StatsSummary>,
}

impl ResultsReport {
    /// @ai:intent Create an empty report
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Insert a summary; a repeated name replaces the earlier entry in place
    pub fn insert(&mut self, name: impl Into<String>, summary: StatsSummary) {
        self.entries.insert(name.into(), summary);
    }

    /// @ai:intent Summary recorded for a target, if any
    /// @ai:effects pure
    pub fn get(&self, name: &str) -> Option<&StatsSummary> {
        self.entries.get(name)
    }

    /// @ai:intent Number of distinct targets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// @ai:intent Target names in insertion order
    /// @ai:effects pure
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// @ai:intent Name and summary pairs in insertion order
    /// @ai:effects pure
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatsSummary)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// @ai:intent Name and summary of the target with the lowest average
    /// @ai:effects pure
    pub fn fastest(&self) -> Option<(&str, &StatsSummary)> {
        self.iter().min_by(|(_, a), (_, b)| {
            a.average
                .partial_cmp(&b.average)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summary(average: f64) -> StatsSummary {
        StatsSummary {
            average,
            median: average,
            std_dev: 0.0,
            min: average,
            max: average,
        }
    }

    #[test]
    fn test_insert_keeps_order_and_last_write_wins() {
        let mut report = ResultsReport::new();
        report.insert("Python", summary(1.0));
        report.insert("Go", summary(0.5));
        report.insert("Python", summary(2.0));

        let names: Vec<_> = report.names().collect();
        assert_eq!(names, vec!["Python", "Go"]);
        assert_eq!(report.get("Python").map(|s| s.average), Some(2.0));
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut report = ResultsReport::new();
        report.insert("Zeta", summary(1.0));
        report.insert("Alpha", summary(2.0));

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"Zeta":{"average":1.0,"median":1.0,"std_dev":0.0,"min":1.0,"max":1.0},"Alpha":{"average":2.0,"median":2.0,"std_dev":0.0,"min":2.0,"max":2.0}}"#
        );

        let back: ResultsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.names().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_duplicate_json_key_keeps_first_position_and_last_value() {
        let json = r#"{"A":{"average":1.0,"median":1.0,"std_dev":0.0,"min":1.0,"max":1.0},"B":{"average":2.0,"median":2.0,"std_dev":0.0,"min":2.0,"max":2.0},"A":{"average":3.0,"median":3.0,"std_dev":0.0,"min":3.0,"max":3.0}}"#;

        let report: ResultsReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(report.get("A").map(|s| s.average), Some(3.0));
    }

    #[test]
    fn test_fastest_picks_lowest_average() {
        let mut report = ResultsReport::new();
        report.insert("Python", summary(0.9));
        report.insert("Rust", summary(0.01));
        report.insert("Go", summary(0.02));

        assert_eq!(report.fastest().map(|(n, _)| n), Some("Rust"));
        assert!(ResultsReport::new().fastest().is_none());
    }
}
