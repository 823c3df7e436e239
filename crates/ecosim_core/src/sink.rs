use chrono::{DateTime, Utc};
use ecosim_data::StatisticsLog;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Everything a sink needs to persist one run's statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub frame_count: u64,
    pub config_fingerprint: String,
    pub created_at: DateTime<Utc>,
    pub statistics: StatisticsLog,
}

/// Durable destination for statistics, invoked on explicit flush or when the
/// tick limit is reached.
pub trait StatisticsSink: Send {
    /// Persists the report and returns a description of where it went.
    fn flush(&mut self, report: &StatisticsReport) -> anyhow::Result<String>;
}

/// Keeps every flushed report in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    reports: Arc<Mutex<Vec<StatisticsReport>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reports(&self) -> Vec<StatisticsReport> {
        self.reports
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl StatisticsSink for MemorySink {
    fn flush(&mut self, report: &StatisticsReport) -> anyhow::Result<String> {
        let mut reports = self.reports.lock().unwrap_or_else(|e| e.into_inner());
        reports.push(report.clone());
        Ok(format!("memory[{}]", reports.len() - 1))
    }
}
