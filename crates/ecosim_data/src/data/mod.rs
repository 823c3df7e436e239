//! Core data structures for the Ecosim simulation.

pub mod agent;
pub mod edible;
pub mod genotype;
pub mod stats;
pub mod vector;
