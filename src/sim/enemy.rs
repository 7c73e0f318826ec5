//! Enemy AI and physics step
//!
//! Per enemy, in order: decay timers, resolve death, then seek or strike the
//! player, then push away from crowding neighbours.

use glam::Vec2;

use super::state::{TextColor, World};
use crate::tuning::{SeparationMode, Tuning};

const REWARD_TEXT_LIFE: f32 = 1.2;
const REWARD_TEXT_RISE: f32 = 1.0;
const WARN_TEXT_LIFE: f32 = 0.8;
const WARN_TEXT_RISE: f32 = 2.0;

/// Result of one AI pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Enemies that died and must be removed at commit
    pub removed: Vec<u32>,
    pub xp_gained: u32,
    pub damage_taken: i32,
}

/// Advance every enemy one tick. `player_pos` is the player's already-moved
/// position. Dead enemies stay in the list; the caller filters `removed`.
pub fn step_enemies(world: &mut World, tuning: &Tuning, player_pos: Vec2, dt: f32) -> StepReport {
    let mut report = StepReport::default();
    let mut texts: Vec<(Vec2, String, TextColor, f32, f32)> = Vec::new();

    let snapshot: Vec<Vec2> = match tuning.separation {
        SeparationMode::Snapshot => world.enemies.iter().map(|e| e.pos).collect(),
        SeparationMode::InPlace => Vec::new(),
    };

    for i in 0..world.enemies.len() {
        let enemy = &mut world.enemies[i];
        enemy.hit_flash = (enemy.hit_flash - dt).max(0.0);
        enemy.attack_cooldown = (enemy.attack_cooldown - dt).max(0.0);

        if enemy.is_dead() {
            let xp = enemy.kind.xp_reward();
            report.removed.push(enemy.id);
            report.xp_gained += xp;
            texts.push((
                enemy.pos,
                format!("+{xp} DATA"),
                TextColor::Reward,
                REWARD_TEXT_LIFE,
                REWARD_TEXT_RISE,
            ));
            log::debug!("{:?} #{} destroyed (+{} xp)", enemy.kind, enemy.id, xp);
            continue;
        }

        let to_player = player_pos - enemy.pos;
        let dist = to_player.length();
        if dist < enemy.kind.attack_range() {
            if enemy.attack_cooldown <= 0.0 {
                report.damage_taken += enemy.damage;
                enemy.attack_cooldown = tuning.enemy_attack_cooldown;
                texts.push((
                    player_pos,
                    format!("WARN -{}", enemy.damage),
                    TextColor::Warning,
                    WARN_TEXT_LIFE,
                    WARN_TEXT_RISE,
                ));
            }
        } else {
            enemy.pos += to_player.normalize_or_zero() * enemy.speed * dt;
        }

        let mut pos = enemy.pos;
        for (j, other) in world.enemies.iter().enumerate() {
            if j == i || other.is_dead() {
                continue;
            }
            let other_pos = match tuning.separation {
                SeparationMode::Snapshot => snapshot[j],
                SeparationMode::InPlace => other.pos,
            };
            let away = pos - other_pos;
            let d = away.length();
            if d < tuning.separation_radius && d > 0.0 {
                pos += away / d * tuning.separation_speed * dt;
            }
        }
        world.enemies[i].pos = pos;
    }

    world.player.health -= report.damage_taken;
    world.player.xp = world.player.xp.saturating_add(report.xp_gained);
    for (pos, text, color, life, rise) in texts {
        world.push_text(pos, text, color, life, rise);
    }

    report
}
