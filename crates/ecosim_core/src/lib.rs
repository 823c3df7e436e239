//! # Ecosim Core
//!
//! The simulation engine for Ecosim, a 2-D artificial-life world where
//! steering agents forage for food, avoid poison, prey on each other and
//! breed.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Genotype crossover, mutation and trait expression
//! - Agent steering (separation and arrival-seek)
//! - Consumption, predation and reproduction
//! - Resource regrowth and per-tick statistics
//!
//! ## Example
//!
//! ```
//! use ecosim_core::config::AppConfig;
//! use ecosim_core::engine::{Engine, SimStatus};
//!
//! let mut config = AppConfig::default();
//! config.world.initial_population = 10;
//! config.world.seed = Some(7);
//!
//! let mut engine = Engine::new(config).unwrap();
//! let status = engine.tick().unwrap();
//! assert_ne!(status, SimStatus::Paused);
//! assert_eq!(engine.frame_count(), 1);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Food and poison spawning and regrowth
pub mod edible;
/// Tick-driven world state
pub mod engine;
/// Genotype crossover and mutation
pub mod genetics;
/// Agent creation and density-dependent potentials
pub mod lifecycle;
/// Run counters and structured logging
pub mod metrics;
/// Index-stable collection with deferred removal
pub mod roster;
/// Statistics persistence seam
pub mod sink;
/// Per-tick simulation systems (steering, interaction, statistics)
pub mod systems;

pub use engine::{Engine, SimStatus};
pub use genetics::GenotypeLogic;
pub use metrics::{init_logging, Metrics};
pub use roster::Roster;
pub use sink::{MemorySink, StatisticsReport, StatisticsSink};
