//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every field has a default, so a partial file only
//! overrides what it names.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 1000.0
//! height = 700.0
//! initial_population = 50
//! seed = 42
//! tick_limit = 36000
//!
//! [regrowth]
//! food_constant = 3.0
//!
//! [evolution]
//! mutation_rate = 0.1
//! ```

use serde::{Deserialize, Serialize};

/// Viewport and initial population.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub initial_population: usize,
    /// Initial food items per founder agent.
    pub food_per_agent: usize,
    /// Initial poison items per founder agent.
    pub poison_per_agent: usize,
    pub seed: Option<u64>,
    /// Stop advancing once this many ticks have run.
    pub tick_limit: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
            initial_population: 50,
            food_per_agent: 20,
            poison_per_agent: 5,
            seed: None,
            tick_limit: Some(36_000),
        }
    }
}

/// Resource regrowth constants.
///
/// Food regrows with probability `food_constant / agents` per tick, poison with
/// `poison_constant / food`. A constant at or above its reference population
/// would push the probability to 1 and is skipped for that tick; a constant
/// of zero or below turns the regrowth off.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RegrowthConfig {
    pub food_constant: f64,
    pub poison_constant: f64,
}

impl Default for RegrowthConfig {
    fn default() -> Self {
        Self {
            food_constant: 3.0,
            poison_constant: 3.0,
        }
    }
}

/// Gene-to-trait ranges and steering limits.
///
/// Each `*_range` is `(value at gene 0, value at gene 1)`; ranges may be
/// descending, as `speed_range` is by default.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AgentConfig {
    pub total_genes: usize,
    pub size_range: (f64, f64),
    pub speed_range: (f64, f64),
    pub lifespan_range: (f64, f64),
    pub attraction_max: f64,
    pub predation_gene_max: f64,
    pub initial_reproduction_potential: f64,
    pub separation_force: f64,
    /// Distance under which seeking slows down linearly.
    pub arrival_radius: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            total_genes: 5,
            size_range: (5.0, 50.0),
            speed_range: (10.0, 1.0),
            lifespan_range: (1200.0, 2400.0),
            attraction_max: 0.1,
            predation_gene_max: 0.001,
            initial_reproduction_potential: 0.0005,
            separation_force: 0.1,
            arrival_radius: 50.0,
        }
    }
}

/// Density-dependent lifecycle rates and mutation.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EvolutionConfig {
    pub mutation_rate: f64,
    /// `predation_potential = population * predation_rate`.
    pub predation_rate: f64,
    /// `reproduction_potential = reproduction_rate / population`.
    pub reproduction_rate: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.1,
            predation_rate: 1.0 / 50_000.0,
            reproduction_rate: 0.025,
        }
    }
}

/// Spawn sizes for food and poison.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EdibleConfig {
    /// Half-width of the uniform size band around `width / population / 4`.
    pub size_jitter: f64,
    pub min_size: f64,
    pub poison_max_size: f64,
}

impl Default for EdibleConfig {
    fn default() -> Self {
        Self {
            size_jitter: 2.0,
            min_size: 0.5,
            poison_max_size: 10.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct StatsConfig {
    pub output_dir: String,
    pub flush_on_limit: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            output_dir: "stats".to_string(),
            flush_on_limit: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub regrowth: RegrowthConfig,
    pub agent: AgentConfig,
    pub evolution: EvolutionConfig,
    pub edible: EdibleConfig,
    pub stats: StatsConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // World validation
        anyhow::ensure!(
            self.world.width > 0.0 && self.world.width.is_finite(),
            "World width must be positive"
        );
        anyhow::ensure!(
            self.world.height > 0.0 && self.world.height.is_finite(),
            "World height must be positive"
        );
        anyhow::ensure!(
            self.world.initial_population <= 10_000,
            "Initial population too large (max 10000)"
        );
        anyhow::ensure!(
            self.world.tick_limit != Some(0),
            "Tick limit must be positive; omit it to run without a limit"
        );

        // Agent validation
        anyhow::ensure!(
            self.agent.total_genes >= ecosim_data::MIN_GENES,
            "Total genes must be at least {}",
            ecosim_data::MIN_GENES
        );
        anyhow::ensure!(
            self.agent.size_range.0 > 0.0 && self.agent.size_range.1 > 0.0,
            "Agent sizes must be positive"
        );
        anyhow::ensure!(
            self.agent.speed_range.0 >= 0.0 && self.agent.speed_range.1 >= 0.0,
            "Agent speeds must be non-negative"
        );
        anyhow::ensure!(
            self.agent.lifespan_range.0 > 0.0 && self.agent.lifespan_range.1 > 0.0,
            "Agent lifespan must be positive"
        );
        anyhow::ensure!(
            self.agent.attraction_max >= 0.0,
            "Attraction max must be non-negative"
        );
        anyhow::ensure!(
            self.agent.separation_force >= 0.0,
            "Separation force must be non-negative"
        );
        anyhow::ensure!(
            self.agent.arrival_radius > 0.0,
            "Arrival radius must be positive"
        );

        // Evolution validation
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.evolution.mutation_rate),
            "Mutation rate must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.evolution.predation_rate >= 0.0,
            "Predation rate must be non-negative"
        );
        anyhow::ensure!(
            self.evolution.reproduction_rate >= 0.0,
            "Reproduction rate must be non-negative"
        );

        // Edible validation
        anyhow::ensure!(
            self.edible.size_jitter >= 0.0,
            "Size jitter must be non-negative"
        );
        anyhow::ensure!(self.edible.min_size > 0.0, "Min size must be positive");
        anyhow::ensure!(
            self.edible.poison_max_size >= self.edible.min_size,
            "Poison max size must not be below min size"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// SHA-256 over the parameters that change simulation behaviour.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.regrowth).as_bytes());
        hasher.update(format!("{:?}", self.agent).as_bytes());
        hasher.update(format!("{:?}", self.evolution).as_bytes());
        hasher.update(format!("{:?}", self.edible).as_bytes());
        hex::encode(hasher.finalize())
    }
}
