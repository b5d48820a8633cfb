//! Data points, series and datasets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// FIELD VALUES
// ============================================================================

/// A single field of a data point.
///
/// Deserialises from a JSON number, an RFC 3339 timestamp string, or any other
/// string (kept as text and parsed lazily when read).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Time(DateTime<Utc>),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value. Timestamps read as milliseconds since the epoch.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n).filter(|v| v.is_finite()),
            Self::Time(t) => Some(t.timestamp_millis() as f64),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(t: DateTime<Utc>) -> Self {
        Self::Time(t)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

// ============================================================================
// DATA POINT
// ============================================================================

/// A mapping from field name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataPoint(BTreeMap<String, FieldValue>);

impl DataPoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Numeric value of a field; `None` when missing or not a number
    pub fn read(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(FieldValue::as_f64)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for DataPoint {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Ordered sequence of data points drawn as one line
pub type Series = Vec<DataPoint>;

// ============================================================================
// DATASET
// ============================================================================

/// Every series shown by a chart. Series order is the rendering identity:
/// the n-th series always maps to the n-th line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset(Vec<Series>);

impl Dataset {
    pub fn new(series: Vec<Series>) -> Self {
        Self(series)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a dataset from JSON such as `[[{"date": 0, "value": 1}]]`
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn series(&self) -> &[Series] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All points across all series
    pub fn points(&self) -> impl Iterator<Item = &DataPoint> {
        self.0.iter().flatten()
    }
}

impl From<Vec<Series>> for Dataset {
    fn from(series: Vec<Series>) -> Self {
        Self(series)
    }
}
