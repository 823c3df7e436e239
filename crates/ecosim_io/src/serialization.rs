//! JSON and HexDNA helpers for reports and genotypes.

use crate::error::{IoError, Result};
use ecosim_data::Genotype;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub fn to_json<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {}", e)))
}

pub fn to_json_pretty<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {}", e)))
}

/// Deserializes data from a JSON string. Blank input is a validation error.
pub fn from_json<T>(json: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    if json.trim().is_empty() {
        return Err(IoError::validation("Empty JSON string"));
    }

    serde_json::from_str(json)
        .map_err(|e| IoError::serialization(format!("JSON deserialization failed: {}", e)))
}

/// Exports a genotype as HexDNA: the hex encoding of its JSON gene array.
#[must_use]
pub fn export_genotype(genotype: &Genotype) -> String {
    genotype.to_hex()
}

/// Parses HexDNA back into a genotype, enforcing the gene invariants.
pub fn import_genotype(hex_str: &str) -> Result<Genotype> {
    let trimmed = hex_str.trim();
    if trimmed.is_empty() {
        return Err(IoError::validation("Empty hex string"));
    }
    Genotype::from_hex(trimmed)
        .map_err(|e| IoError::validation(format!("Invalid HexDNA: {}", e)))
}

/// Writes pretty JSON to `path`, creating missing parent directories.
pub fn write_json_file<T, P>(data: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let json = to_json_pretty(data)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            IoError::FileSystem(e).with_context(format!("creating directory {:?}", parent))
        })?;
    }
    std::fs::write(path, json)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("writing JSON to {:?}", path)))?;
    Ok(())
}

pub fn read_json_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::not_found(path.display().to_string()));
    }
    let json = std::fs::read_to_string(path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading JSON from {:?}", path))
    })?;
    from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecosim_data::StatisticsLog;

    #[test]
    fn test_statistics_log_survives_json() {
        let mut log = StatisticsLog::new();
        log.record("population", 3.0);
        log.record("population", 2.0);

        let json = to_json(&log).unwrap();
        let restored: StatisticsLog = from_json(&json).unwrap();
        assert_eq!(restored, log);
    }

    #[test]
    fn test_empty_json_fails() {
        let result: Result<StatisticsLog> = from_json("  ");
        assert!(matches!(result, Err(IoError::Validation(_))));
    }

    #[test]
    fn test_invalid_json_fails() {
        let result: Result<StatisticsLog> = from_json("{ invalid json");
        assert!(matches!(result, Err(IoError::Serialization(_))));
    }

    #[test]
    fn test_genotype_hex_dna() {
        let genotype = Genotype::from_genes(vec![0.1, 0.5, 0.9, 0.0, 1.0]).unwrap();
        let hex = export_genotype(&genotype);
        assert_eq!(import_genotype(&hex).unwrap(), genotype);
    }

    #[test]
    fn test_import_rejects_bad_hex_dna() {
        assert!(import_genotype("").is_err());
        assert!(import_genotype("not_valid_hex!").is_err());
        // "[0.5]" has too few genes.
        let short = hex::encode("[0.5]");
        assert!(import_genotype(&short).is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let path = std::env::temp_dir().join("ecosim_io_missing_file.json");
        let result: Result<StatisticsLog> = read_json_file(&path);
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
