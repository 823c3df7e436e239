//! Eating, predation and mating between agents and the things they touch.

use crate::config::AppConfig;
use crate::lifecycle;
use crate::roster::Roster;
use crate::systems::steering;
use ecosim_data::{Agent, AgentMark, Edible, Vec2};
use rand::Rng;
use std::collections::HashSet;
use uuid::Uuid;

/// Disk-disk overlap: centres closer than the sum of the radii.
#[must_use]
pub fn touches(a_pos: Vec2, a_size: f64, b_pos: Vec2, b_size: f64) -> bool {
    a_pos.distance(b_pos) < a_size / 2.0 + b_size / 2.0
}

/// Eats every overlapping item; returns how many were eaten.
pub fn consume_edibles(agent: &mut Agent, items: &mut Roster<Edible>) -> usize {
    let hits: Vec<(usize, f64)> = items
        .iter_indexed()
        .filter(|(_, e)| touches(agent.position, agent.size, e.position, e.size))
        .map(|(i, e)| (i, e.reward()))
        .collect();
    let mut eaten = 0;
    for (i, reward) in hits {
        if items.remove(i) {
            agent.health += reward;
            eaten += 1;
        }
    }
    eaten
}

/// Eats every other live agent that overlaps `index`.
///
/// Prey are removed outright; no corpse is left, so predation never injects
/// food. Returns the ids of the prey.
pub fn predate(index: usize, agents: &mut Roster<Agent>) -> Vec<Uuid> {
    let Some(me) = agents.get(index) else {
        return Vec::new();
    };
    let (pos, size) = (me.position, me.size);
    let prey: Vec<(usize, Uuid, f64)> = agents
        .iter_indexed()
        .filter(|(j, other)| *j != index && touches(pos, size, other.position, other.size))
        .map(|(j, other)| (j, other.id, other.reward()))
        .collect();

    let mut eaten = Vec::with_capacity(prey.len());
    let mut gained = 0.0;
    for (j, id, reward) in prey {
        if agents.remove(j) {
            gained += reward;
            eaten.push(id);
        }
    }
    if let Some(me) = agents.get_mut(index) {
        if !eaten.is_empty() {
            me.health += gained;
            me.mark = AgentMark::Predator;
        }
    }
    eaten
}

/// Mating bookkeeping for one tick.
pub struct ReproductionContext<'a, R: Rng> {
    pub config: &'a AppConfig,
    pub tick: u64,
    /// Slots at or past this index were born this tick and cannot mate yet.
    pub first_newborn: usize,
    /// Unordered pairs that already produced a child this tick.
    pub bred_pairs: &'a mut HashSet<(Uuid, Uuid)>,
    pub rng: &'a mut R,
}

fn pair_key(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Rolls `reproduction_potential` against every colliding partner and appends
/// the children to `agents`. A pair yields at most one child per tick.
pub fn reproduce<R: Rng>(
    index: usize,
    agents: &mut Roster<Agent>,
    ctx: &mut ReproductionContext<'_, R>,
) -> Vec<Uuid> {
    let partners: Vec<usize> = steering::collisions(index, agents)
        .into_iter()
        .filter(|&j| j < ctx.first_newborn)
        .collect();

    let mut children = Vec::new();
    for j in partners {
        let (Some(parent), Some(partner)) = (agents.get(index), agents.get(j)) else {
            continue;
        };
        let key = pair_key(parent.id, partner.id);
        if ctx.bred_pairs.contains(&key) {
            continue;
        }
        let chance = parent.reproduction_potential.clamp(0.0, 1.0);
        if !ctx.rng.gen_bool(chance) {
            continue;
        }
        let child =
            lifecycle::create_child_with_rng(parent, partner, ctx.config, ctx.tick, &mut *ctx.rng);
        ctx.bred_pairs.insert(key);
        children.push(child.id);
        agents.push(child);
    }
    children
}
