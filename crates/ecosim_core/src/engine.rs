//! The tick-driven simulation engine.
//!
//! One [`Engine::tick`] regrows resources, walks the agent population once in
//! order and appends a statistics sample. Agents processed later in a tick see
//! every removal and birth caused by agents processed earlier.
//!
//! Removal during the walk only marks slots dead (see [`Roster`]); the
//! populations are compacted after the walk, so indices stay valid while the
//! pass is running and newborns appended mid-pass are not walked until the
//! next tick.

use crate::config::AppConfig;
use crate::edible;
use crate::lifecycle;
use crate::metrics::Metrics;
use crate::roster::Roster;
use crate::sink::{StatisticsReport, StatisticsSink};
use crate::systems::{interaction, stats, steering};
use ecosim_data::{Agent, Edible, EdibleKind, StatisticsLog};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::time::Instant;

/// Where the simulation stands after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimStatus {
    Running,
    /// Ticks are ignored until [`Engine::resume`].
    Paused,
    /// No agents are left. Terminal, but not an error.
    Extinct,
    /// The configured tick budget is spent.
    LimitReached,
}

impl SimStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, SimStatus::Extinct | SimStatus::LimitReached)
    }
}

pub struct Engine {
    pub config: AppConfig,
    pub agents: Roster<Agent>,
    pub food: Roster<Edible>,
    pub poison: Roster<Edible>,
    frame_count: u64,
    /// Population the world was initialized with; scales resource sizes.
    scale_population: usize,
    statistics: StatisticsLog,
    metrics: Metrics,
    paused: bool,
    flushed_at_limit: bool,
    rng: ChaCha8Rng,
    sink: Option<Box<dyn StatisticsSink>>,
}

impl Engine {
    /// Creates an engine populated per `config.world`.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let population = config.world.initial_population;
        let mut engine = Self::empty(config)?;
        engine.initialize(population)?;
        Ok(engine)
    }

    /// Creates an engine with no agents, food or poison.
    pub fn empty(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            scale_population: config.world.initial_population,
            config,
            agents: Roster::new(),
            food: Roster::new(),
            poison: Roster::new(),
            frame_count: 0,
            statistics: StatisticsLog::new(),
            metrics: Metrics::new(),
            paused: false,
            flushed_at_limit: false,
            rng,
            sink: None,
        })
    }

    /// Discards all state and seeds a fresh world of `population` founders.
    ///
    /// A configured seed is re-applied, so resetting a seeded engine replays
    /// the same run.
    pub fn initialize(&mut self, population: usize) -> anyhow::Result<()> {
        if let Some(seed) = self.config.world.seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
        self.scale_population = population;
        self.frame_count = 0;
        self.statistics.clear();
        self.metrics = Metrics::new();
        self.paused = false;
        self.flushed_at_limit = false;

        let agents = (0..population)
            .map(|_| lifecycle::create_agent_with_rng(&self.config, 0, &mut self.rng))
            .collect::<anyhow::Result<Vec<_>>>()?;
        self.agents = Roster::from_vec(agents);

        let food_count = population * self.config.world.food_per_agent;
        let poison_count = population * self.config.world.poison_per_agent;
        let food: Vec<Edible> = (0..food_count)
            .map(|_| self.spawn(EdibleKind::Food))
            .collect();
        let poison: Vec<Edible> = (0..poison_count)
            .map(|_| self.spawn(EdibleKind::Poison))
            .collect();
        self.food = Roster::from_vec(food);
        self.poison = Roster::from_vec(poison);

        tracing::info!(
            agents = population,
            food = food_count,
            poison = poison_count,
            "World initialized"
        );
        Ok(())
    }

    fn spawn(&mut self, kind: EdibleKind) -> Edible {
        edible::spawn_edible(
            kind,
            None,
            self.scale_population,
            &self.config,
            &mut self.rng,
        )
    }

    /// Advances the world by one tick.
    ///
    /// Errors only come from the statistics sink when the tick limit triggers
    /// an automatic flush.
    pub fn tick(&mut self) -> anyhow::Result<SimStatus> {
        if self.paused {
            return Ok(SimStatus::Paused);
        }
        if self.limit_reached() {
            return Ok(SimStatus::LimitReached);
        }

        let start = Instant::now();
        let had_agents = !self.agents.is_empty();

        self.regrow();
        self.update_agents();

        self.agents.compact();
        self.food.compact();
        self.poison.compact();

        let duration = start.elapsed();
        self.metrics.record_tick(
            self.frame_count,
            duration,
            self.agents.len(),
            self.food.len(),
            self.poison.len(),
        );
        stats::record_sample(stats::StatsInput {
            agents: self.agents.iter(),
            food_count: self.food.len(),
            poison_count: self.poison.len(),
            frame_rate: self.metrics.frame_rate(),
            log: &mut self.statistics,
        });
        self.frame_count += 1;

        if had_agents && self.agents.is_empty() {
            tracing::warn!(tick = self.frame_count, "Population collapsed");
        }

        if self.limit_reached() && !self.flushed_at_limit {
            self.flushed_at_limit = true;
            tracing::info!(tick = self.frame_count, "Tick limit reached");
            if self.config.stats.flush_on_limit {
                self.flush_statistics()?;
            }
        }

        Ok(self.status())
    }

    fn regrow(&mut self) {
        let Engine {
            config,
            agents,
            food,
            poison,
            metrics,
            rng,
            scale_population,
            ..
        } = self;
        let config = &*config;

        if let Some(item) =
            edible::try_regrow(EdibleKind::Food, agents.len(), *scale_population, config, rng)
        {
            food.push(item);
            metrics.food_regrown += 1;
        }
        if let Some(item) =
            edible::try_regrow(EdibleKind::Poison, food.len(), *scale_population, config, rng)
        {
            poison.push(item);
            metrics.poison_regrown += 1;
        }
    }

    fn update_agents(&mut self) {
        let Engine {
            config,
            agents,
            food,
            poison,
            metrics,
            rng,
            scale_population,
            frame_count,
            ..
        } = self;
        let config = &*config;
        let tick = *frame_count;
        let slots = agents.slots();
        let mut bred_pairs = HashSet::new();

        for i in 0..slots {
            // Eaten earlier in this tick.
            let Some(agent) = agents.get(i) else {
                continue;
            };

            if agent.is_dead() {
                let (id, position) = (agent.id, agent.position);
                agents.remove(i);
                let corpse = edible::spawn_edible(
                    EdibleKind::Food,
                    Some(position),
                    *scale_population,
                    config,
                    rng,
                );
                food.push(corpse);
                metrics.natural_deaths += 1;
                tracing::debug!(tick, agent = %id, "Agent died");
                continue;
            }

            let population = agents.len();
            if let Some(agent) = agents.get_mut(i) {
                lifecycle::update_density_potentials(agent, population, config);
                steering::integrate(agent);
                steering::wrap_edges(agent, config.world.width, config.world.height);
                agent.health -= 1.0;
            }

            let neighbours = steering::collisions(i, agents);
            let force = steering::steering_force(i, &neighbours, agents, food, poison, config);

            let Some(agent) = agents.get_mut(i) else {
                continue;
            };
            agent.acceleration += force;
            agent.in_collision = !neighbours.is_empty();
            metrics.food_eaten += interaction::consume_edibles(agent, food) as u64;
            metrics.poison_eaten += interaction::consume_edibles(agent, poison) as u64;

            let predation_chance = agent.predation_potential.clamp(0.0, 1.0);
            if rng.gen_bool(predation_chance) {
                let eaten = interaction::predate(i, agents);
                for prey in &eaten {
                    tracing::debug!(tick, prey = %prey, "Agent eaten");
                }
                metrics.predations += eaten.len() as u64;
            }

            let mut ctx = interaction::ReproductionContext {
                config,
                tick,
                first_newborn: slots,
                bred_pairs: &mut bred_pairs,
                rng: &mut *rng,
            };
            let children = interaction::reproduce(i, agents, &mut ctx);
            for child in &children {
                tracing::debug!(tick, child = %child, "Agent born");
            }
            metrics.births += children.len() as u64;
        }
    }

    #[must_use]
    pub fn status(&self) -> SimStatus {
        if self.paused {
            SimStatus::Paused
        } else if self.limit_reached() {
            SimStatus::LimitReached
        } else if self.agents.is_empty() {
            SimStatus::Extinct
        } else {
            SimStatus::Running
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.agents.is_empty()
    }

    #[must_use]
    pub fn limit_reached(&self) -> bool {
        self.config
            .world
            .tick_limit
            .is_some_and(|limit| self.frame_count >= limit)
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn live_agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn live_food(&self) -> impl Iterator<Item = &Edible> {
        self.food.iter()
    }

    pub fn live_poison(&self) -> impl Iterator<Item = &Edible> {
        self.poison.iter()
    }

    #[must_use]
    pub fn viewport(&self) -> (f64, f64) {
        (self.config.world.width, self.config.world.height)
    }

    #[must_use]
    pub fn scale_population(&self) -> usize {
        self.scale_population
    }

    #[must_use]
    pub fn statistics(&self) -> &StatisticsLog {
        &self.statistics
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn set_sink(&mut self, sink: Box<dyn StatisticsSink>) {
        self.sink = Some(sink);
    }

    /// Snapshot of the statistics log with run metadata.
    #[must_use]
    pub fn report(&self) -> StatisticsReport {
        StatisticsReport {
            frame_count: self.frame_count,
            config_fingerprint: self.config.fingerprint(),
            created_at: chrono::Utc::now(),
            statistics: self.statistics.clone(),
        }
    }

    /// Hands the current statistics to the sink; `None` when no sink is set.
    pub fn flush_statistics(&mut self) -> anyhow::Result<Option<String>> {
        let report = self.report();
        let Some(sink) = self.sink.as_mut() else {
            tracing::debug!("No statistics sink configured, skipping flush");
            return Ok(None);
        };
        let location = sink.flush(&report)?;
        tracing::info!(
            frames = report.frame_count,
            location = %location,
            "Statistics flushed"
        );
        Ok(Some(location))
    }
}
