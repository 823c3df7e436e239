/// Asserts that an agent with the given ID has the expected health.
#[macro_export]
macro_rules! assert_health {
    ($engine:expr, $id:expr, $health:expr) => {
        let agent = $engine
            .live_agents()
            .find(|a| a.id == $id)
            .expect("Agent not found in engine");
        assert!(
            (agent.health - $health).abs() < 1e-9,
            "Agent {} health {} != {}",
            $id,
            agent.health,
            $health
        );
    };
}

/// Asserts that an agent with the given ID is no longer in the population.
#[macro_export]
macro_rules! assert_agent_gone {
    ($engine:expr, $id:expr) => {
        let exists = $engine.live_agents().any(|a| a.id == $id);
        assert!(!exists, "Agent {} should be gone but was found alive", $id);
    };
}

/// Asserts the live agent count.
#[macro_export]
macro_rules! assert_population {
    ($engine:expr, $count:expr) => {
        assert_eq!($engine.agents.len(), $count, "Population count mismatch");
    };
}
