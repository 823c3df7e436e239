//! Motion integration and steering forces.

use crate::config::AppConfig;
use crate::roster::Roster;
use ecosim_data::{Agent, Edible, Vec2};

/// Integrates one step: `v += a`, `|v| <= max_speed`, `p += v`, `a = 0`.
pub fn integrate(agent: &mut Agent) {
    agent.velocity = (agent.velocity + agent.acceleration).limit(agent.max_speed);
    agent.position += agent.velocity;
    agent.acceleration = Vec2::ZERO;
}

/// Wraps the agent to the opposite edge once its whole body has left the view.
pub fn wrap_edges(agent: &mut Agent, width: f64, height: f64) {
    let r = agent.radius();
    let p = &mut agent.position;
    if p.x + r <= 0.0 {
        p.x = width + r;
    } else if p.x - r >= width {
        p.x = -r;
    }
    if p.y + r <= 0.0 {
        p.y = height + r;
    } else if p.y - r >= height {
        p.y = -r;
    }
}

/// Live agents other than `index` whose centre lies within `size` of the agent.
pub fn collisions(index: usize, agents: &Roster<Agent>) -> Vec<usize> {
    let Some(me) = agents.get(index) else {
        return Vec::new();
    };
    agents
        .iter_indexed()
        .filter(|(j, other)| *j != index && me.position.distance(other.position) < me.size)
        .map(|(j, _)| j)
        .collect()
}

/// Average push away from colliding neighbours, weighted by inverse distance.
pub fn separation(agent: &Agent, neighbours: &[&Agent]) -> Vec2 {
    if neighbours.is_empty() {
        return Vec2::ZERO;
    }
    let mut sum = Vec2::ZERO;
    for other in neighbours {
        let away = agent.position - other.position;
        let d = away.magnitude();
        if d > 0.0 {
            sum += away / d / d;
        }
    }
    sum / neighbours.len() as f64 - agent.velocity
}

/// Position of the closest candidate; the first one found wins ties.
pub fn nearest<I>(from: Vec2, candidates: I) -> Option<Vec2>
where
    I: IntoIterator<Item = Vec2>,
{
    let mut best: Option<(f64, Vec2)> = None;
    for pos in candidates {
        let d = from.distance(pos);
        if best.map_or(true, |(bd, _)| d < bd) {
            best = Some((d, pos));
        }
    }
    best.map(|(_, pos)| pos)
}

/// Arrival steering: full speed far away, slowing linearly inside `arrival_radius`.
pub fn arrive(agent: &Agent, target: Vec2, arrival_radius: f64) -> Vec2 {
    let desired = target - agent.position;
    let d = desired.magnitude();
    let speed = if d < arrival_radius {
        agent.max_speed * d / arrival_radius
    } else {
        agent.max_speed
    };
    desired.with_magnitude(speed) - agent.velocity
}

fn seek<I>(agent: &Agent, targets: I, limit: f64, arrival_radius: f64) -> Vec2
where
    I: IntoIterator<Item = Vec2>,
{
    match nearest(agent.position, targets) {
        Some(target) => arrive(agent, target, arrival_radius).limit(limit),
        None => Vec2::ZERO,
    }
}

/// Sum of the separation and the three seek forces, each capped on its own.
pub fn steering_force(
    index: usize,
    neighbours: &[usize],
    agents: &Roster<Agent>,
    food: &Roster<Edible>,
    poison: &Roster<Edible>,
    config: &AppConfig,
) -> Vec2 {
    let Some(agent) = agents.get(index) else {
        return Vec2::ZERO;
    };
    let arrival = config.agent.arrival_radius;
    let near: Vec<&Agent> = neighbours.iter().filter_map(|&j| agents.get(j)).collect();

    let mut force = separation(agent, &near).limit(config.agent.separation_force);
    force += seek(
        agent,
        food.iter().map(|f| f.position),
        agent.food_attraction,
        arrival,
    );
    force += seek(
        agent,
        agents
            .iter_indexed()
            .filter(|(j, _)| *j != index)
            .map(|(_, a)| a.position),
        agent.agent_attraction,
        arrival,
    );
    force += seek(
        agent,
        poison.iter().map(|p| p.position),
        agent.poison_attraction,
        arrival,
    );
    force
}
