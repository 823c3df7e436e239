use crate::config::AppConfig;
use crate::genetics::{express, GenotypeLogic};
use ecosim_data::{Agent, AgentMark, Genotype, Lineage, Vec2};
use rand::Rng;
use uuid::Uuid;

/// Gene slots in the chromosome.
pub mod gene {
    /// Size, and through it speed and lifespan.
    pub const BODY: usize = 0;
    pub const FOOD_ATTRACTION: usize = 1;
    pub const AGENT_ATTRACTION: usize = 2;
    pub const POISON_ATTRACTION: usize = 3;
    pub const PREDATION: usize = 4;
}

fn expressed(genotype: &Genotype, slot: usize, range: (f64, f64)) -> f64 {
    // Chromosomes shorter than the slot map express the midpoint.
    express(genotype.gene(slot).unwrap_or(0.5), range)
}

/// Builds an agent whose phenotype is derived from `genotype`.
pub fn agent_from_genotype<R: Rng>(
    genotype: Genotype,
    position: Vec2,
    lineage: Lineage,
    config: &AppConfig,
    rng: &mut R,
) -> Agent {
    let a = &config.agent;
    let attraction = (0.0, a.attraction_max);
    Agent {
        id: Uuid::from_u128(rng.gen::<u128>()),
        lineage,
        position,
        velocity: Vec2::ZERO,
        acceleration: Vec2::ZERO,
        size: expressed(&genotype, gene::BODY, a.size_range),
        max_speed: expressed(&genotype, gene::BODY, a.speed_range),
        health: expressed(&genotype, gene::BODY, a.lifespan_range),
        food_attraction: expressed(&genotype, gene::FOOD_ATTRACTION, attraction),
        agent_attraction: expressed(&genotype, gene::AGENT_ATTRACTION, attraction),
        poison_attraction: expressed(&genotype, gene::POISON_ATTRACTION, attraction),
        predation_potential: expressed(&genotype, gene::PREDATION, (0.0, a.predation_gene_max)),
        reproduction_potential: a.initial_reproduction_potential,
        mark: AgentMark::Normal,
        in_collision: false,
        genotype,
    }
}

/// Founder agent with a random genotype at a random point of the viewport.
pub fn create_agent_with_rng<R: Rng>(
    config: &AppConfig,
    tick: u64,
    rng: &mut R,
) -> anyhow::Result<Agent> {
    let genotype = Genotype::new_random_with_rng(config.agent.total_genes, rng)?;
    let position = Vec2::new(
        rng.gen::<f64>() * config.world.width,
        rng.gen::<f64>() * config.world.height,
    );
    let lineage = Lineage {
        parents: None,
        generation: 0,
        birth_tick: tick,
    };
    Ok(agent_from_genotype(genotype, position, lineage, config, rng))
}

/// Offspring of `parent` and `partner`, born at the parent's position.
///
/// The child genotype is `parent.crossover(partner)` followed by mutation.
pub fn create_child_with_rng<R: Rng>(
    parent: &Agent,
    partner: &Agent,
    config: &AppConfig,
    tick: u64,
    rng: &mut R,
) -> Agent {
    let mut genotype = parent.genotype.crossover_with_rng(&partner.genotype, rng);
    genotype.mutate_with_rng(config.evolution.mutation_rate, rng);
    let lineage = Lineage {
        parents: Some((parent.id, partner.id)),
        generation: parent.lineage.generation.max(partner.lineage.generation) + 1,
        birth_tick: tick,
    };
    agent_from_genotype(genotype, parent.position, lineage, config, rng)
}

/// Predation chance grows with the population.
#[must_use]
pub fn predation_potential(population: usize, config: &AppConfig) -> f64 {
    population as f64 * config.evolution.predation_rate
}

/// Reproduction chance shrinks with the population; zero for an empty one.
#[must_use]
pub fn reproduction_potential(population: usize, config: &AppConfig) -> f64 {
    if population == 0 {
        return 0.0;
    }
    config.evolution.reproduction_rate / population as f64
}

pub fn update_density_potentials(agent: &mut Agent, population: usize, config: &AppConfig) {
    agent.predation_potential = predation_potential(population, config);
    agent.reproduction_potential = reproduction_potential(population, config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_phenotype_from_extreme_genes() {
        let config = AppConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let small = agent_from_genotype(
            Genotype::from_genes(vec![0.0; 5]).unwrap(),
            Vec2::ZERO,
            Lineage::default(),
            &config,
            &mut rng,
        );
        assert_eq!(small.size, 5.0);
        assert_eq!(small.max_speed, 10.0);
        assert_eq!(small.health, 1200.0);
        assert_eq!(small.food_attraction, 0.0);

        let large = agent_from_genotype(
            Genotype::from_genes(vec![1.0; 5]).unwrap(),
            Vec2::ZERO,
            Lineage::default(),
            &config,
            &mut rng,
        );
        assert_eq!(large.size, 50.0);
        assert_eq!(large.max_speed, 1.0);
        assert_eq!(large.health, 2400.0);
        assert!((large.poison_attraction - 0.1).abs() < 1e-12);
        assert!((large.predation_potential - 0.001).abs() < 1e-12);
        assert_eq!(large.reproduction_potential, 0.0005);
    }

    #[test]
    fn test_density_formulas() {
        let config = AppConfig::default();
        let cases = [
            (5, 0.0001, 0.005),
            (100, 0.002, 0.00025),
            (500, 0.01, 0.00005),
        ];
        for (pop, pred, repro) in cases {
            assert!((predation_potential(pop, &config) - pred).abs() < 1e-15);
            assert!((reproduction_potential(pop, &config) - repro).abs() < 1e-15);
        }
        assert_eq!(reproduction_potential(0, &config), 0.0);
    }

    #[test]
    fn test_child_lineage_and_position() {
        let config = AppConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut a = create_agent_with_rng(&config, 0, &mut rng).unwrap();
        let b = create_agent_with_rng(&config, 0, &mut rng).unwrap();
        a.lineage.generation = 3;
        let child = create_child_with_rng(&a, &b, &config, 42, &mut rng);
        assert_eq!(child.position, a.position);
        assert_eq!(child.lineage.parents, Some((a.id, b.id)));
        assert_eq!(child.lineage.generation, 4);
        assert_eq!(child.lineage.birth_tick, 42);
        assert_eq!(child.genotype.len(), a.genotype.len());
        assert_ne!(child.id, a.id);
    }
}
