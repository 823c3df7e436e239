use super::genotype::Genotype;
use super::vector::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visual tag a renderer may use to colour an agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentMark {
    #[default]
    Normal,
    /// Has eaten another agent at least once.
    Predator,
}

/// Ancestry of an agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lineage {
    /// `None` for founders created at initialization.
    pub parents: Option<(Uuid, Uuid)>,
    pub generation: u32,
    pub birth_tick: u64,
}

/// An autonomous, mortal forager.
///
/// Phenotype fields (`size` through `poison_attraction`) are derived once from
/// the genotype at birth. `predation_potential` and `reproduction_potential`
/// start from the genotype but are overwritten every tick from the current
/// population density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: Uuid,
    pub lineage: Lineage,
    pub genotype: Genotype,

    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,

    pub size: f64,
    pub max_speed: f64,
    /// Remaining ticks of life; the agent is dead at or below zero.
    pub health: f64,
    pub food_attraction: f64,
    pub agent_attraction: f64,
    pub poison_attraction: f64,
    pub predation_potential: f64,
    pub reproduction_potential: f64,

    pub mark: AgentMark,
    /// Overlapping at least one other agent after the last tick.
    #[serde(default)]
    pub in_collision: bool,
}

impl Agent {
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }

    /// Health gained by a predator that eats this agent.
    #[must_use]
    pub fn reward(&self) -> f64 {
        self.size
    }
}
