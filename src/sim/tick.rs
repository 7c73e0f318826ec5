//! Per-frame simulation tick
//!
//! Core game loop that advances the world by one variable-length frame.

use glam::Vec2;
use rand::Rng;

use super::enemy::step_enemies;
use super::feedback::decay_texts;
use super::progression::apply_level_up;
use super::spawner::run_spawner;
use super::state::{GamePhase, World};
use crate::bearing;
use crate::tuning::Tuning;

/// What happened during a tick (for drivers and logging)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub spawned: Option<u32>,
    pub killed: u32,
    pub damage_taken: i32,
    pub leveled_up: bool,
    pub game_over: bool,
}

/// Move the player along the input direction and clamp to the arena.
///
/// Facing only changes while moving.
pub fn move_player(world: &mut World, tuning: &Tuning, dt: f32) {
    let input = world.input;
    if input == Vec2::ZERO {
        return;
    }
    let player = &mut world.player;
    player.pos += input.normalize_or_zero() * tuning.player_speed * dt;
    let limit = tuning.arena_limit();
    player.pos = player.pos.clamp(Vec2::splat(-limit), Vec2::splat(limit));
    player.rotation = bearing(input);
}

/// Advance the game state by one frame.
///
/// Does nothing unless playing. `dt` is clamped to `tuning.max_frame_dt`;
/// `elapsed` is total session time and only gates spawning.
pub fn tick<R: Rng>(world: &mut World, tuning: &Tuning, rng: &mut R, dt: f32, elapsed: f32) -> TickReport {
    let mut report = TickReport::default();
    if world.phase != GamePhase::Playing {
        return report;
    }
    let dt = dt.clamp(0.0, tuning.max_frame_dt);

    move_player(world, tuning, dt);
    world.player.attack_cooldown = (world.player.attack_cooldown - dt).max(0.0);

    report.spawned = run_spawner(world, tuning, rng, elapsed);

    let player_pos = world.player.pos;
    let step = step_enemies(world, tuning, player_pos, dt);
    report.damage_taken = step.damage_taken;

    report.leveled_up = apply_level_up(world, tuning);

    if world.player.is_dead() {
        world.phase = GamePhase::GameOver;
        report.game_over = true;
        log::info!("Game over: score {}, level {}", world.score + step.removed.len() as u32, world.player.level);
    }

    decay_texts(&mut world.texts, dt, tuning.text_velocity_damping);

    if !step.removed.is_empty() {
        world.enemies.retain(|e| !step.removed.contains(&e.id));
        report.killed = step.removed.len() as u32;
        world.score += report.killed;
    }

    report
}
