//! Food and poison spawning and regrowth.

use crate::config::AppConfig;
use ecosim_data::{Edible, EdibleKind, Vec2};
use rand::Rng;
use uuid::Uuid;

/// Draws a spawn size from the band around `width / scale_population / 4`.
///
/// `scale_population` is the population the world was initialized with, so
/// item sizes shrink as the simulated world gets more crowded.
pub fn spawn_size<R: Rng>(
    kind: EdibleKind,
    scale_population: usize,
    config: &AppConfig,
    rng: &mut R,
) -> f64 {
    let center = config.world.width / scale_population.max(1) as f64 / 4.0;
    let jitter = config.edible.size_jitter;
    let size = if jitter > 0.0 {
        rng.gen_range(center - jitter..=center + jitter)
    } else {
        center
    };
    let size = size.max(config.edible.min_size);
    match kind {
        EdibleKind::Food => size,
        EdibleKind::Poison => size.min(config.edible.poison_max_size),
    }
}

/// Spawns an item at `position`, or at a uniform random point when `None`.
pub fn spawn_edible<R: Rng>(
    kind: EdibleKind,
    position: Option<Vec2>,
    scale_population: usize,
    config: &AppConfig,
    rng: &mut R,
) -> Edible {
    let position = position.unwrap_or_else(|| {
        Vec2::new(
            rng.gen::<f64>() * config.world.width,
            rng.gen::<f64>() * config.world.height,
        )
    });
    Edible {
        id: Uuid::from_u128(rng.gen::<u128>()),
        kind,
        position,
        size: spawn_size(kind, scale_population, config, rng),
    }
}

/// Per-tick spawn probability `constant / reference`.
///
/// `None` for an empty reference, a non-positive constant, or a constant at or
/// above the reference.
#[must_use]
pub fn regrowth_rate(constant: f64, reference: usize) -> Option<f64> {
    if reference == 0 || constant <= 0.0 || constant >= reference as f64 {
        return None;
    }
    Some(constant / reference as f64)
}

/// Rolls regrowth for one resource kind; returns the new item if one sprouted.
pub fn try_regrow<R: Rng>(
    kind: EdibleKind,
    reference: usize,
    scale_population: usize,
    config: &AppConfig,
    rng: &mut R,
) -> Option<Edible> {
    let constant = match kind {
        EdibleKind::Food => config.regrowth.food_constant,
        EdibleKind::Poison => config.regrowth.poison_constant,
    };
    let rate = regrowth_rate(constant, reference)?;
    if rng.gen_bool(rate) {
        Some(spawn_edible(kind, None, scale_population, config, rng))
    } else {
        None
    }
}
