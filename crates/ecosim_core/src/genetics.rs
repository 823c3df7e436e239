//! Chromosome construction, single-point crossover and mutation.
//!
//! Mutation replaces a selected gene with a fresh uniform draw from `[0, 1]`,
//! so every gene stays inside the domain the trait map expects.

use ecosim_data::Genotype;
use rand::Rng;

/// Trait defining the genetic operators on organism genotypes.
pub trait GenotypeLogic: Sized {
    fn new_random_with_rng<R: Rng>(total_genes: usize, rng: &mut R) -> anyhow::Result<Self>;

    /// Uses `genes` verbatim, or draws `total_genes` fresh genes when it is empty.
    fn from_chromosome_with_rng<R: Rng>(
        total_genes: usize,
        genes: Vec<f64>,
        rng: &mut R,
    ) -> anyhow::Result<Self>;

    fn crossover_at(&self, partner: &Self, midpoint: usize) -> Self;
    fn crossover_with_rng<R: Rng>(&self, partner: &Self, rng: &mut R) -> Self;
    fn mutate_with_rng<R: Rng>(&mut self, mutation_rate: f64, rng: &mut R);
}

impl GenotypeLogic for Genotype {
    fn new_random_with_rng<R: Rng>(total_genes: usize, rng: &mut R) -> anyhow::Result<Self> {
        Self::from_chromosome_with_rng(total_genes, Vec::new(), rng)
    }

    fn from_chromosome_with_rng<R: Rng>(
        total_genes: usize,
        genes: Vec<f64>,
        rng: &mut R,
    ) -> anyhow::Result<Self> {
        if genes.is_empty() {
            let genes = (0..total_genes).map(|_| rng.gen::<f64>()).collect();
            return Genotype::from_genes(genes);
        }
        anyhow::ensure!(
            genes.len() == total_genes,
            "Expected {} genes, got {}",
            total_genes,
            genes.len()
        );
        Genotype::from_genes(genes)
    }

    /// Genes at indices `<= midpoint` come from `partner`, the rest from `self`.
    fn crossover_at(&self, partner: &Self, midpoint: usize) -> Self {
        let mut child = self.clone();
        let n = midpoint.min(child.len().min(partner.len()) - 1);
        child.genes_mut()[..=n].copy_from_slice(&partner.genes()[..=n]);
        child
    }

    /// Midpoint is uniform in `[1, len - 2]` so the child inherits from both parents.
    fn crossover_with_rng<R: Rng>(&self, partner: &Self, rng: &mut R) -> Self {
        let midpoint = rng.gen_range(1..=self.len() - 2);
        self.crossover_at(partner, midpoint)
    }

    fn mutate_with_rng<R: Rng>(&mut self, mutation_rate: f64, rng: &mut R) {
        let rate = mutation_rate.clamp(0.0, 1.0);
        for gene in self.genes_mut() {
            if rng.gen_bool(rate) {
                *gene = rng.gen::<f64>();
            }
        }
    }
}

/// Linear gene-to-trait map: `in_min` maps to `out_min`, `in_max` to `out_max`.
#[must_use]
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Maps a unit-interval gene onto `(at_zero, at_one)`.
#[must_use]
pub fn express(gene: f64, range: (f64, f64)) -> f64 {
    map_range(gene, 0.0, 1.0, range.0, range.1)
}
