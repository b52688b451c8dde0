//! Combat scenario tests at the simulation layer

use glam::Vec2;

use nova_siege::consts::*;
use nova_siege::sim::{
    Color, Enemy, EnemyKind, GameEvent, GamePhase, GameState, Projectile, tick,
};

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn active_state(seed: u64) -> GameState {
    let mut state = GameState::new(VIEWPORT, seed);
    state.phase = GamePhase::Active;
    state
}

fn enemy_at(pos: Vec2, base_radius: f32, kind: EnemyKind) -> Enemy {
    Enemy::new(pos, Vec2::ZERO, base_radius, Color::from_hue(180.0), kind)
}

#[test]
fn three_contacts_end_the_session_not_two() {
    let mut state = active_state(1);
    let center = state.center();
    let mut events = Vec::new();

    for (expected_health, expect_over) in [(66, false), (32, false), (-2, true)] {
        state.enemies.push(enemy_at(center, 12.0, EnemyKind::Normal));
        events.clear();
        tick(&mut state, &mut events);

        assert_eq!(state.defender.health, expected_health);
        assert!(state.enemies.is_empty(), "contact must destroy the enemy");
        assert!(events.contains(&GameEvent::DefenderHit {
            health: expected_health
        }));
        if expect_over {
            assert_eq!(state.phase, GamePhase::Over);
            assert!(events.contains(&GameEvent::DefenderDown { score: 0 }));
        } else {
            assert_eq!(state.phase, GamePhase::Active);
            assert!(!events.iter().any(|e| matches!(e, GameEvent::DefenderDown { .. })));
        }
    }
}

#[test]
fn normal_enemy_is_worth_its_floored_radius() {
    let mut state = active_state(2);
    let pos = Vec2::new(150.0, 150.0);
    state.enemies.push(enemy_at(pos, 20.0, EnemyKind::Normal));
    state.projectiles.push(Projectile::new(pos, Vec2::ZERO));
    let mut events = Vec::new();
    tick(&mut state, &mut events);

    assert_eq!(state.score, 20);
    assert!(events.contains(&GameEvent::EnemyDestroyed { pos, score: 20 }));
}

#[test]
fn special_enemy_is_worth_double() {
    let mut state = active_state(3);
    let pos = Vec2::new(150.0, 150.0);
    // Base 20 scales to radius 30 at creation; worth 2 * floor(30)
    let enemy = enemy_at(pos, 20.0, EnemyKind::Special);
    assert_eq!(enemy.radius, 30.0);
    state.enemies.push(enemy);
    state.projectiles.push(Projectile::new(pos, Vec2::ZERO));
    let mut events = Vec::new();
    tick(&mut state, &mut events);

    assert_eq!(state.score, 60);
}

#[test]
fn impact_spawns_burst_in_enemy_color() {
    let mut state = active_state(4);
    let pos = Vec2::new(300.0, 200.0);
    let color = Color::from_hue(180.0);
    state.enemies.push(enemy_at(pos, 14.0, EnemyKind::Normal));
    state.projectiles.push(Projectile::new(pos, Vec2::ZERO));
    let mut events = Vec::new();
    tick(&mut state, &mut events);

    assert_eq!(state.particles.len(), 28);
    for particle in &state.particles {
        assert_eq!(particle.color, color);
        assert_eq!(particle.alpha, 1.0);
        assert!(particle.radius < PARTICLE_MAX_RADIUS);
        assert!(particle.vel.length() < PARTICLE_SPEED_SPREAD);
    }
}

#[test]
fn one_projectile_consumes_at_most_one_enemy() {
    let mut state = active_state(5);
    let pos = Vec2::new(250.0, 250.0);
    state.enemies.push(enemy_at(pos, 18.0, EnemyKind::Normal));
    state.enemies.push(enemy_at(pos, 18.0, EnemyKind::Normal));
    state.projectiles.push(Projectile::new(pos, Vec2::ZERO));
    let mut events = Vec::new();
    tick(&mut state, &mut events);

    assert_eq!(state.enemies.len(), 1);
    assert!(state.projectiles.is_empty());
    assert_eq!(state.score, 18);
    let kills = events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
        .count();
    assert_eq!(kills, 1);
}

#[test]
fn level_up_fires_when_an_impact_crosses_the_threshold() {
    let mut state = active_state(6);
    state.score = 995;
    let pos = Vec2::new(150.0, 400.0);
    state.enemies.push(enemy_at(pos, 10.0, EnemyKind::Normal));
    state.projectiles.push(Projectile::new(pos, Vec2::ZERO));
    let mut events = Vec::new();
    tick(&mut state, &mut events);

    assert_eq!(state.score, 1005);
    assert_eq!(state.level, 2);
    assert!(events.contains(&GameEvent::LevelUp { level: 2 }));
}

#[test]
fn no_level_up_below_the_threshold() {
    let mut state = active_state(7);
    state.score = 900;
    let pos = Vec2::new(150.0, 400.0);
    state.enemies.push(enemy_at(pos, 10.0, EnemyKind::Normal));
    state.projectiles.push(Projectile::new(pos, Vec2::ZERO));
    let mut events = Vec::new();
    tick(&mut state, &mut events);

    assert_eq!(state.score, 910);
    assert_eq!(state.level, 1);
    assert!(!events.iter().any(|e| matches!(e, GameEvent::LevelUp { .. })));
}

#[test]
fn killing_blow_skips_the_projectile_pass_that_frame() {
    let mut state = active_state(8);
    state.defender.health = ENEMY_CONTACT_DAMAGE; // next contact is fatal
    let center = state.center();
    state.enemies.push(enemy_at(center, 12.0, EnemyKind::Normal));

    // Elsewhere, a projectile is sitting on another enemy
    let far = Vec2::new(80.0, 80.0);
    state.enemies.push(enemy_at(far, 16.0, EnemyKind::Normal));
    state.projectiles.push(Projectile::new(far, Vec2::ZERO));

    let mut events = Vec::new();
    tick(&mut state, &mut events);

    assert_eq!(state.phase, GamePhase::Over);
    assert_eq!(state.score, 0, "no kill may score after the defender falls");
    assert_eq!(state.projectiles.len(), 1);
    assert_eq!(state.enemies.len(), 1);
}
