use ecosim_core::config::AppConfig;
use ecosim_core::engine::Engine;

fn run(seed: u64, ticks: usize) -> Engine {
    let mut config = AppConfig::default();
    config.world.initial_population = 20;
    config.world.seed = Some(seed);
    let mut engine = Engine::new(config).expect("Failed to create engine");
    for _ in 0..ticks {
        engine.tick().expect("tick failed");
    }
    engine
}

#[test]
fn test_same_seed_same_world() {
    let a = run(7, 200);
    let b = run(7, 200);

    let agents_a: Vec<_> = a.live_agents().cloned().collect();
    let agents_b: Vec<_> = b.live_agents().cloned().collect();
    assert_eq!(agents_a, agents_b);
    assert_eq!(a.food.len(), b.food.len());
    assert_eq!(a.poison.len(), b.poison.len());
    // frameRate is wall-clock and excluded.
    for key in ["population", "medianHealth", "maxSize", "foodCount"] {
        assert_eq!(a.statistics().series(key), b.statistics().series(key));
    }
}

#[test]
fn test_different_seed_different_world() {
    let a = run(1, 0);
    let b = run(2, 0);
    let ids_a: Vec<_> = a.live_agents().map(|x| x.id).collect();
    let ids_b: Vec<_> = b.live_agents().map(|x| x.id).collect();
    assert_ne!(ids_a, ids_b);
}

#[test]
fn test_reset_replays_seeded_run() {
    let mut engine = run(3, 50);
    let population = engine.statistics().series("population").unwrap().to_vec();

    engine.initialize(20).unwrap();
    for _ in 0..50 {
        engine.tick().unwrap();
    }

    assert_eq!(engine.statistics().series("population").unwrap(), &population[..]);
}
