use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecosim_core::config::AppConfig;
use ecosim_core::engine::Engine;
use ecosim_core::genetics::GenotypeLogic;
use ecosim_data::Genotype;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_config(population: usize) -> AppConfig {
    let mut config = AppConfig::default();
    config.world.initial_population = population;
    config.world.seed = Some(42);
    config.world.tick_limit = None;
    config
}

fn bench_tick_50(c: &mut Criterion) {
    let mut engine = Engine::new(seeded_config(50)).unwrap();

    c.bench_function("engine_tick_50_agents", |b| {
        b.iter(|| black_box(engine.tick().unwrap()))
    });
}

fn bench_tick_200(c: &mut Criterion) {
    let mut engine = Engine::new(seeded_config(200)).unwrap();

    c.bench_function("engine_tick_200_agents", |b| {
        b.iter(|| black_box(engine.tick().unwrap()))
    });
}

fn bench_crossover_mutate(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let a = Genotype::new_random_with_rng(5, &mut rng).unwrap();
    let b = Genotype::new_random_with_rng(5, &mut rng).unwrap();

    c.bench_function("genotype_crossover_mutate", |bench| {
        bench.iter(|| {
            let mut child = a.crossover_with_rng(&b, &mut rng);
            child.mutate_with_rng(0.1, &mut rng);
            black_box(child)
        })
    });
}

criterion_group!(benches, bench_tick_50, bench_tick_200, bench_crossover_mutate);
criterion_main!(benches);
