use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Append-only per-tick time series keyed by metric name.
///
/// Undefined samples (aggregates over an empty population) are stored as
/// `NaN` and serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "NullableSeries", into = "NullableSeries")]
pub struct StatisticsLog {
    series: BTreeMap<String, Vec<f64>>,
}

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct NullableSeries(BTreeMap<String, Vec<Option<f64>>>);

impl From<NullableSeries> for StatisticsLog {
    fn from(raw: NullableSeries) -> Self {
        let series = raw
            .0
            .into_iter()
            .map(|(k, v)| (k, v.into_iter().map(|x| x.unwrap_or(f64::NAN)).collect()))
            .collect();
        Self { series }
    }
}

impl From<StatisticsLog> for NullableSeries {
    fn from(log: StatisticsLog) -> Self {
        let series = log
            .series
            .into_iter()
            .map(|(k, v)| (k, v.into_iter().map(|x| (!x.is_nan()).then_some(x)).collect()))
            .collect();
        Self(series)
    }
}

impl StatisticsLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one sample to the named series, creating it on first use.
    pub fn record(&mut self, metric: &str, value: f64) {
        match self.series.get_mut(metric) {
            Some(samples) => samples.push(value),
            None => {
                self.series.insert(metric.to_string(), vec![value]);
            }
        }
    }

    #[must_use]
    pub fn series(&self, metric: &str) -> Option<&[f64]> {
        self.series.get(metric).map(Vec::as_slice)
    }

    #[must_use]
    pub fn latest(&self, metric: &str) -> Option<f64> {
        self.series.get(metric).and_then(|s| s.last().copied())
    }

    pub fn metrics(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Number of samples in the longest series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.values().map(Vec::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when every series holds the same number of samples.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let len = self.len();
        self.series.values().all(|s| s.len() == len)
    }

    pub fn clear(&mut self) {
        self.series.clear();
    }
}
