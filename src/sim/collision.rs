//! Pairwise collision detection and combat resolution
//!
//! Runs once per frame after every entity has advanced. Removal is
//! deferred in both passes: casualties are marked during the scan and
//! compacted afterwards, so destruction can never skip or double-process
//! a survivor mid-iteration, and a projectile is consumed by at most one
//! enemy per frame.

use glam::Vec2;
use rand::Rng;

use super::progression;
use super::state::{Color, GameEvent, GamePhase, GameState, Particle};
use crate::consts::*;

/// Circle contact test with the discrete-step overlap slack
#[inline]
#[must_use]
pub fn circles_touch(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) - a_radius - b_radius < COLLISION_EPSILON
}

/// Full per-frame resolver: defender pass, then projectile pass unless
/// the defender went down mid-scan.
pub fn resolve_frame(state: &mut GameState, events: &mut Vec<GameEvent>) {
    defender_pass(state, events);
    if state.phase == GamePhase::Over {
        return;
    }
    projectile_pass(state, events);
}

/// Defender-enemy pass: contact damage and enemy destruction.
///
/// The scan is abandoned the moment the defender goes down; the phase
/// flips to Over right here so the rest of the frame never runs against
/// a dead defender.
fn defender_pass(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let mut dead = vec![false; state.enemies.len()];
    for (i, enemy) in state.enemies.iter().enumerate() {
        if !circles_touch(
            enemy.pos,
            enemy.radius,
            state.defender.pos,
            state.defender.radius,
        ) {
            continue;
        }
        dead[i] = true;
        let down = state.defender.take_damage(ENEMY_CONTACT_DAMAGE);
        events.push(GameEvent::DefenderHit {
            health: state.defender.health,
        });
        if down {
            log::info!("defender down at score {}", state.score);
            state.phase = GamePhase::Over;
            events.push(GameEvent::DefenderDown { score: state.score });
            break;
        }
    }
    compact(&mut state.enemies, &dead);
}

/// Projectile-enemy pass: first-match consumption, particle bursts,
/// scoring and level progression.
fn projectile_pass(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let mut dead_enemies = vec![false; state.enemies.len()];
    let mut dead_projectiles = vec![false; state.projectiles.len()];
    // (enemy index, impact point); bursts and scoring run after the scan
    let mut impacts: Vec<(usize, Vec2)> = Vec::new();

    for (ei, enemy) in state.enemies.iter().enumerate() {
        for (pi, projectile) in state.projectiles.iter().enumerate() {
            if dead_projectiles[pi] {
                continue;
            }
            if circles_touch(projectile.pos, projectile.radius, enemy.pos, enemy.radius) {
                dead_enemies[ei] = true;
                dead_projectiles[pi] = true;
                impacts.push((ei, projectile.pos));
                break;
            }
        }
    }

    for (ei, impact_pos) in impacts {
        let (radius, color, score) = {
            let enemy = &state.enemies[ei];
            (enemy.radius, enemy.color, enemy.score_value())
        };
        spawn_burst(state, impact_pos, radius, color);
        progression::award(state, score, events);
        events.push(GameEvent::EnemyDestroyed {
            pos: impact_pos,
            score,
        });
    }

    compact(&mut state.enemies, &dead_enemies);
    compact(&mut state.projectiles, &dead_projectiles);
}

/// Particle burst sized to the destroyed enemy, in its color
fn spawn_burst(state: &mut GameState, pos: Vec2, enemy_radius: f32, color: Color) {
    let count = (enemy_radius * 2.0).round() as usize;
    for _ in 0..count {
        if state.particles.len() >= state.particle_cap {
            break;
        }
        let vel = Vec2::new(
            (state.rng.random::<f32>() - 0.5) * (state.rng.random::<f32>() * PARTICLE_SPEED_SPREAD),
            (state.rng.random::<f32>() - 0.5) * (state.rng.random::<f32>() * PARTICLE_SPEED_SPREAD),
        );
        let radius = state.rng.random::<f32>() * PARTICLE_MAX_RADIUS;
        state.particles.push(Particle::new(pos, vel, radius, color));
    }
}

/// Keep items whose mark is false, preserving order
fn compact<T>(items: &mut Vec<T>, dead: &[bool]) {
    let mut idx = 0;
    items.retain(|_| {
        let keep = !dead[idx];
        idx += 1;
        keep
    });
}
