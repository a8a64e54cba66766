//! Statistics engine: per-cell and per-culture motion/growth metrics.
//!
//! All computation here is pure; nothing touches the filesystem. Reports are
//! ordered label/value lists because the label order is the column order of
//! every export.

pub mod culture;
pub mod individual;
pub mod motion;

pub use culture::culture_statistics;
pub use individual::individual_statistics;

use std::fmt;

/// A single computed statistic: numeric, or categorical (compass sectors,
/// cell ids).
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl StatValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Ordered mapping from statistic label to value. Insertion order is part of
/// the output contract: exporters emit rows in exactly this order, and the
/// aggregate functions signal degenerate cases by omitting keys.
#[derive(Debug, Clone, Default)]
pub struct StatisticsReport {
    entries: Vec<(String, StatValue)>,
}

impl StatisticsReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_number(&mut self, label: impl Into<String>, value: f64) {
        self.entries.push((label.into(), StatValue::Number(value)));
    }

    pub fn push_text(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.entries
            .push((label.into(), StatValue::Text(value.into())));
    }

    pub fn get(&self, label: &str) -> Option<&StatValue> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, StatValue)> {
        self.entries.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
