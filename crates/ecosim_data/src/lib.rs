//! # Ecosim Data
//!
//! Plain, serializable state shared by the simulation engine, the I/O layer
//! and any renderer. Nothing in this crate owns a random source or advances
//! the simulation.

pub mod data;

pub use data::agent::{Agent, AgentMark, Lineage};
pub use data::edible::{Edible, EdibleKind};
pub use data::genotype::{Genotype, MIN_GENES};
pub use data::stats::StatisticsLog;
pub use data::vector::Vec2;
