use ecosim_core::genetics::GenotypeLogic;
use ecosim_data::{Genotype, MIN_GENES};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

prop_compose! {
    fn arb_genotype(len: usize)(
        genes in prop::collection::vec(0.0f64..=1.0f64, len)
    ) -> Genotype {
        Genotype::from_genes(genes).unwrap()
    }
}

prop_compose! {
    fn arb_parents()(len in MIN_GENES..16usize)(
        a in arb_genotype(len),
        b in arb_genotype(len)
    ) -> (Genotype, Genotype) {
        (a, b)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_crossover_preserves_length((a, b) in arb_parents(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let child = a.crossover_with_rng(&b, &mut rng);
        prop_assert_eq!(child.len(), a.len());
    }

    #[test]
    fn test_crossover_genes_come_from_a_parent((a, b) in arb_parents(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let child = a.crossover_with_rng(&b, &mut rng);
        for (i, gene) in child.genes().iter().enumerate() {
            prop_assert!(*gene == a.genes()[i] || *gene == b.genes()[i]);
        }
    }

    #[test]
    fn test_crossover_at_splits_prefix_and_suffix((a, b) in arb_parents(), raw in any::<usize>()) {
        let midpoint = 1 + raw % (a.len() - 2);
        let child = a.crossover_at(&b, midpoint);
        for i in 0..child.len() {
            let expected = if i <= midpoint { b.genes()[i] } else { a.genes()[i] };
            prop_assert_eq!(child.genes()[i], expected);
        }
    }

    #[test]
    fn test_mutation_stays_in_domain(
        g in arb_genotype(8),
        rate in 0.0f64..=1.0f64,
        seed in any::<u64>()
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut mutated = g.clone();
        mutated.mutate_with_rng(rate, &mut rng);
        prop_assert_eq!(mutated.len(), g.len());
        prop_assert!(mutated.genes().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_zero_rate_is_identity(g in arb_genotype(6), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut mutated = g.clone();
        mutated.mutate_with_rng(0.0, &mut rng);
        prop_assert_eq!(mutated, g);
    }

    #[test]
    fn test_short_chromosomes_rejected(
        genes in prop::collection::vec(0.0f64..=1.0f64, 0..MIN_GENES)
    ) {
        prop_assert!(Genotype::from_genes(genes).is_err());
    }
}
