use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TrendCandidate: The "add car" form before submission
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendCandidate {
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    pub year_start: Option<String>,
    pub year_end: Option<String>,
}

impl TrendCandidate {
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year_start: None,
            year_end: None,
        }
    }

    pub fn years(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.year_start = Some(start.into());
        self.year_end = Some(end.into());
        self
    }
}

// ---------------------------------------------------------------------------
// TrendSelection: One line requested on the comparison chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSelection {
    pub id: u64,
    pub make: String,
    pub model: String,
    pub year_start: i32,
    pub year_end: i32,
}

impl TrendSelection {
    /// The chart series key, `"make model"`.
    pub fn series_key(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    pub fn covers(&self, year: i32) -> bool {
        year >= self.year_start && year <= self.year_end
    }
}

// ---------------------------------------------------------------------------
// TrendSeriesPoint: One x-axis entry of the chart
// ---------------------------------------------------------------------------

/// Values of every series that covers `year`.
///
/// Serializes flat, e.g. `{"year": "2020", "Toyota Camry": 61234}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeriesPoint {
    pub year: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, i64>,
}

impl TrendSeriesPoint {
    pub fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }
}

// ---------------------------------------------------------------------------
// TrendChart: Points plus the line descriptors to draw them
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDescriptor {
    pub id: u64,
    pub key: String,
    pub color_slot: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendChart {
    pub points: Vec<TrendSeriesPoint>,
    pub series: Vec<SeriesDescriptor>,
}
