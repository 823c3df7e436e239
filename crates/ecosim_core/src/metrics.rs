//! Run counters and logging setup for the simulation.

use std::time::Duration;

/// Cumulative lifecycle counters for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    pub births: u64,
    pub natural_deaths: u64,
    pub predations: u64,
    pub food_eaten: u64,
    pub poison_eaten: u64,
    pub food_regrown: u64,
    pub poison_regrown: u64,
    pub last_tick_duration: Duration,
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed tick and logs progress every 1000 ticks.
    pub fn record_tick(
        &mut self,
        tick: u64,
        duration: Duration,
        agents: usize,
        food: usize,
        poison: usize,
    ) {
        self.last_tick_duration = duration;
        if tick > 0 && tick % 1000 == 0 {
            tracing::info!(
                tick = tick,
                agents = agents,
                food = food,
                poison = poison,
                births = self.births,
                deaths = self.natural_deaths,
                predations = self.predations,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    /// Ticks per second implied by the last tick's compute time; 0 if unmeasurable.
    #[must_use]
    pub fn frame_rate(&self) -> f64 {
        let secs = self.last_tick_duration.as_secs_f64();
        if secs > 0.0 {
            1.0 / secs
        } else {
            0.0
        }
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`, falling back to `info`. Calling it twice is harmless.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
