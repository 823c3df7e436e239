pub mod macros;

use ecosim_core::config::AppConfig;
use ecosim_core::engine::Engine;
use ecosim_core::lifecycle::agent_from_genotype;
use ecosim_core::sink::MemorySink;
use ecosim_data::{Agent, Edible, EdibleKind, Genotype, Lineage, Vec2};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Empty, seeded engine with regrowth switched off unless asked for.
#[allow(dead_code)]
pub struct EngineBuilder {
    config: AppConfig,
    agents: Vec<Agent>,
    food: Vec<Edible>,
    poison: Vec<Edible>,
    sink: Option<MemorySink>,
}

#[allow(dead_code)]
impl EngineBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.seed = Some(42);
        config.regrowth.food_constant = 0.0;
        config.regrowth.poison_constant = 0.0;
        Self {
            config,
            agents: Vec::new(),
            food: Vec::new(),
            poison: Vec::new(),
            sink: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn with_food(mut self, x: f64, y: f64, size: f64) -> Self {
        self.food.push(edible(EdibleKind::Food, x, y, size));
        self
    }

    pub fn with_poison(mut self, x: f64, y: f64, size: f64) -> Self {
        self.poison.push(edible(EdibleKind::Poison, x, y, size));
        self
    }

    pub fn with_sink(mut self, sink: MemorySink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> Engine {
        let mut engine =
            Engine::empty(self.config).expect("Failed to create engine in test builder");
        for agent in self.agents {
            engine.agents.push(agent);
        }
        for item in self.food {
            engine.food.push(item);
        }
        for item in self.poison {
            engine.poison.push(item);
        }
        if let Some(sink) = self.sink {
            engine.set_sink(Box::new(sink));
        }
        engine
    }
}

fn edible(kind: EdibleKind, x: f64, y: f64, size: f64) -> Edible {
    Edible {
        id: Uuid::new_v4(),
        kind,
        position: Vec2::new(x, y),
        size,
    }
}

/// A stationary agent: zero speed and zero attraction so it never moves.
#[allow(dead_code)]
pub struct AgentBuilder {
    x: f64,
    y: f64,
    size: f64,
    health: f64,
    genes: Vec<f64>,
    id: Option<Uuid>,
}

#[allow(dead_code)]
impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            x: 100.0,
            y: 100.0,
            size: 10.0,
            health: 100.0,
            genes: vec![0.5; 5],
            id: None,
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn health(mut self, health: f64) -> Self {
        self.health = health;
        self
    }

    pub fn genes(mut self, genes: Vec<f64>) -> Self {
        self.genes = genes;
        self
    }

    pub fn build(self) -> Agent {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let genotype = Genotype::from_genes(self.genes).expect("Invalid genes in test builder");
        let mut agent = agent_from_genotype(
            genotype,
            Vec2::new(self.x, self.y),
            Lineage::default(),
            &AppConfig::default(),
            &mut rng,
        );
        agent.id = self.id.unwrap_or_else(Uuid::new_v4);
        agent.size = self.size;
        agent.health = self.health;
        agent.max_speed = 0.0;
        agent.food_attraction = 0.0;
        agent.agent_attraction = 0.0;
        agent.poison_attraction = 0.0;
        agent
    }
}
