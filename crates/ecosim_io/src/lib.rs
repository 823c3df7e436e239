//! # Ecosim IO
//!
//! Persistence layer for the Ecosim simulation.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON and HexDNA serialization helpers
//! - A file-backed statistics sink

/// Error types and result aliases for I/O operations
pub mod error;
/// Validated serialization helpers for JSON and HexDNA formats
pub mod serialization;
/// JSON statistics export
pub mod sink;

pub use error::{IoError, Result};
pub use serialization::{
    export_genotype, from_json, import_genotype, read_json_file, to_json, to_json_pretty,
    write_json_file,
};
pub use sink::{load_report, JsonStatsSink};
