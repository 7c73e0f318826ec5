//! XP accumulation and level-up

use super::state::{TextColor, World};
use crate::tuning::Tuning;

const LEVEL_UP_TEXT_LIFE: f32 = 2.0;
const LEVEL_UP_TEXT_RISE: f32 = 1.5;

/// Next XP threshold: `floor(max_xp * growth)` in double precision.
///
/// Curve from 100: 140, 196, 274, 383, ... The cast saturates, so an
/// oversized threshold pins at `u32::MAX` instead of wrapping.
pub fn next_max_xp(max_xp: u32, growth: f64) -> u32 {
    (max_xp as f64 * growth).floor() as u32
}

/// Apply at most one level-up.
///
/// Surplus XP carries over. Even if the surplus covers another level, the
/// next level waits for the next tick.
pub fn apply_level_up(world: &mut World, tuning: &Tuning) -> bool {
    let player = &mut world.player;
    if player.xp < player.max_xp {
        return false;
    }

    player.xp -= player.max_xp;
    player.level += 1;
    player.max_xp = next_max_xp(player.max_xp, tuning.xp_growth);
    player.max_health += tuning.health_per_level;
    player.health = player.max_health;
    player.damage += tuning.damage_per_level;

    let pos = player.pos;
    let level = player.level;
    world.push_text(pos, "SYSTEM UPGRADE", TextColor::LevelUp, LEVEL_UP_TEXT_LIFE, LEVEL_UP_TEXT_RISE);
    log::info!("Level up: now level {}", level);
    true
}
