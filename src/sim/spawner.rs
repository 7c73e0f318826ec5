//! Time-gated enemy spawning with a level-driven difficulty ramp

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyKind, World};
use crate::tuning::Tuning;

/// Pick an archetype from the player's level and a uniform draw in [0, 1).
///
/// Tiers unlock with level; a higher tier overrides a lower one when both pass.
pub fn choose_kind(level: u32, draw: f32) -> EnemyKind {
    let mut kind = EnemyKind::Drone;
    if level > 2 && draw > 0.5 {
        kind = EnemyKind::Cyborg;
    }
    if level > 5 && draw > 0.85 {
        kind = EnemyKind::Mech;
    }
    kind
}

/// Seconds between spawns at the player's current level, floored
pub fn spawn_interval(world: &World, tuning: &Tuning) -> f32 {
    (world.spawn_rate - world.player.level as f32 * tuning.spawn_rate_per_level)
        .max(tuning.min_spawn_rate)
}

/// Spawn at most one enemy if the interval has elapsed.
///
/// No catch-up: a long gap still yields a single spawn. Returns the new id.
pub fn run_spawner<R: Rng>(world: &mut World, tuning: &Tuning, rng: &mut R, elapsed: f32) -> Option<u32> {
    let level = world.player.level;
    if elapsed - world.last_spawn_time <= spawn_interval(world, tuning) {
        return None;
    }
    world.last_spawn_time = elapsed;

    let angle = rng.random::<f32>() * std::f32::consts::TAU;
    let radius = tuning.spawn_radius();
    let pos = Vec2::new(angle.cos() * radius, angle.sin() * radius);
    let kind = choose_kind(level, rng.random::<f32>());

    let id = world.next_entity_id();
    world.enemies.push(Enemy::new(id, kind, pos, level));
    log::debug!("Spawned {:?} #{} at level {}", kind, id, level);
    Some(id)
}
