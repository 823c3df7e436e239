use ecosim_data::{Agent, StatisticsLog};

/// Per-agent values sampled into the statistics log, with their metric suffix.
pub const TRACKED_TRAITS: [(&str, fn(&Agent) -> f64); 7] = [
    ("Size", |a| a.size),
    ("Speed", |a| a.max_speed),
    ("Health", |a| a.health),
    ("FoodAttraction", |a| a.food_attraction),
    ("AgentAttraction", |a| a.agent_attraction),
    ("PoisonAttraction", |a| a.poison_attraction),
    ("PredationPotential", |a| a.predation_potential),
];

/// Median, minimum, maximum and sample standard deviation of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub std: f64,
}

impl Summary {
    /// Every field is `NaN` when there is nothing to summarise.
    pub const EMPTY: Summary = Summary {
        median: f64::NAN,
        min: f64::NAN,
        max: f64::NAN,
        std: f64::NAN,
    };

    #[must_use]
    pub fn of(values: &[f64]) -> Summary {
        if values.is_empty() {
            return Self::EMPTY;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let std = if n > 1 {
            let var = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            var.sqrt()
        } else {
            0.0
        };
        Summary {
            median,
            min: sorted[0],
            max: sorted[n - 1],
            std,
        }
    }
}

/// Read-only population state for one statistics sample.
pub struct StatsInput<'a, I> {
    pub agents: I,
    pub food_count: usize,
    pub poison_count: usize,
    pub frame_rate: f64,
    pub log: &'a mut StatisticsLog,
}

/// Appends one sample to every tracked series.
pub fn record_sample<'a, I>(input: StatsInput<'_, I>)
where
    I: Iterator<Item = &'a Agent>,
{
    let agents: Vec<&Agent> = input.agents.collect();
    let log = input.log;

    log.record("frameRate", input.frame_rate);
    log.record("population", agents.len() as f64);
    log.record("foodCount", input.food_count as f64);
    log.record("poisonCount", input.poison_count as f64);

    for (name, value) in TRACKED_TRAITS {
        let values: Vec<f64> = agents.iter().map(|&a| value(a)).collect();
        let s = Summary::of(&values);
        log.record(&format!("median{name}"), s.median);
        log.record(&format!("min{name}"), s.min);
        log.record(&format!("max{name}"), s.max);
        log.record(&format!("std{name}"), s.std);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_odd_and_even() {
        let s = Summary::of(&[3.0, 1.0, 2.0]);
        assert_eq!(s.median, 2.0);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 3.0);
        assert!((s.std - 1.0).abs() < 1e-12);

        let s = Summary::of(&[4.0, 1.0, 2.0, 3.0]);
        assert_eq!(s.median, 2.5);
    }

    #[test]
    fn test_summary_single_sample() {
        let s = Summary::of(&[7.0]);
        assert_eq!(s.median, 7.0);
        assert_eq!(s.std, 0.0);
    }

    #[test]
    fn test_empty_population_records_nan() {
        let mut log = StatisticsLog::new();
        record_sample(StatsInput {
            agents: std::iter::empty(),
            food_count: 3,
            poison_count: 1,
            frame_rate: 60.0,
            log: &mut log,
        });
        assert!(log.latest("medianSize").is_some_and(f64::is_nan));
        assert_eq!(log.latest("population"), Some(0.0));
        assert_eq!(log.latest("foodCount"), Some(3.0));
        assert!(log.is_consistent());
        // 4 scalar series + 7 traits x 4 aggregates
        assert_eq!(log.metrics().count(), 32);
    }
}
