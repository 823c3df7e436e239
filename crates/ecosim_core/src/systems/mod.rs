//! Per-tick simulation systems.

/// Eating, predation and reproduction
pub mod interaction;
/// Population statistics sampling
pub mod stats;
/// Motion integration, edge wrapping and steering forces
pub mod steering;
