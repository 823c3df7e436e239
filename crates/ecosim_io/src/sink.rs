//! File-backed statistics sink.

use crate::error::Result;
use crate::serialization::{read_json_file, write_json_file};
use ecosim_core::sink::{StatisticsReport, StatisticsSink};
use std::path::{Path, PathBuf};

/// Writes each flushed report to `<dir>/simulator_<unix-millis>.json`.
#[derive(Debug, Clone)]
pub struct JsonStatsSink {
    dir: PathBuf,
}

impl JsonStatsSink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Target file for a report, named after its creation time.
    #[must_use]
    pub fn path_for(&self, report: &StatisticsReport) -> PathBuf {
        self.dir.join(format!(
            "simulator_{}.json",
            report.created_at.timestamp_millis()
        ))
    }

    pub fn write(&self, report: &StatisticsReport) -> Result<PathBuf> {
        let path = self.path_for(report);
        write_json_file(report, &path)?;
        tracing::info!(
            path = %path.display(),
            frames = report.frame_count,
            "Wrote statistics report"
        );
        Ok(path)
    }
}

impl StatisticsSink for JsonStatsSink {
    fn flush(&mut self, report: &StatisticsReport) -> anyhow::Result<String> {
        let path = self.write(report)?;
        Ok(path.display().to_string())
    }
}

/// Loads a report previously written by [`JsonStatsSink`].
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<StatisticsReport> {
    read_json_file(path)
}
