//! Melee arc attack
//!
//! A swing is a cone on the ground plane: a reach radius plus a half-angle
//! either side of the player's facing.

use glam::Vec2;
use rand::Rng;

use super::state::{TextColor, World};
use crate::tuning::Tuning;
use crate::{bearing, normalize_angle};

/// Damage number lifetime and rise speed
const DAMAGE_TEXT_LIFE: f32 = 0.8;
const DAMAGE_TEXT_RISE: f32 = 3.0;

/// A cone-shaped hit area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingArc {
    pub origin: Vec2,
    /// Center of the cone (radians, 0 = +z)
    pub facing: f32,
    pub range: f32,
    /// Half of the cone width
    pub half_angle: f32,
}

impl SwingArc {
    pub fn new(origin: Vec2, facing: f32, range: f32, width: f32) -> Self {
        Self {
            origin,
            facing,
            range,
            half_angle: width / 2.0,
        }
    }

    /// Signed angle from the facing to `point`, in (-π, π]
    pub fn angle_to(&self, point: Vec2) -> f32 {
        normalize_angle(bearing(point - self.origin) - self.facing)
    }

    /// Check if a point is strictly inside reach and cone
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.origin.distance(point) < self.range && self.angle_to(point).abs() < self.half_angle
    }
}

/// What a swing did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttackOutcome {
    /// (enemy id, damage dealt, crit)
    pub hits: Vec<(u32, i32, bool)>,
}

impl AttackOutcome {
    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }
}

/// Damage of one hit, floored on crit
pub fn hit_damage(base: i32, crit: bool, multiplier: f32) -> i32 {
    if crit {
        (base as f32 * multiplier).floor() as i32
    } else {
        base
    }
}

/// Swing the player's weapon.
///
/// Returns `None` without touching the world when not playing or still on
/// cooldown. Clearing `is_attacking` afterwards is the caller's job.
pub fn player_attack<R: Rng>(world: &mut World, tuning: &Tuning, rng: &mut R) -> Option<AttackOutcome> {
    if !world.is_playing() || world.player.attack_cooldown > 0.0 {
        return None;
    }

    world.player.is_attacking = true;
    world.player.attack_cooldown = tuning.attack_cooldown;

    let arc = SwingArc::new(
        world.player.pos,
        world.player.rotation,
        tuning.attack_range,
        tuning.attack_angle,
    );
    let base = world.player.damage;

    let mut outcome = AttackOutcome::default();
    let mut texts = Vec::new();
    for enemy in world.enemies.iter_mut() {
        if !arc.contains_point(enemy.pos) {
            continue;
        }
        let crit = rng.random::<f32>() < tuning.crit_chance;
        let dmg = hit_damage(base, crit, tuning.crit_multiplier);

        enemy.health -= dmg;
        enemy.hit_flash = tuning.hit_flash;

        let color = if crit { TextColor::Critical } else { TextColor::Damage };
        texts.push((enemy.pos, dmg.to_string(), color));
        outcome.hits.push((enemy.id, dmg, crit));
    }

    for (pos, text, color) in texts {
        world.push_text(pos, text, color, DAMAGE_TEXT_LIFE, DAMAGE_TEXT_RISE);
    }

    log::trace!("Swing hit {} enemies", outcome.hit_count());
    Some(outcome)
}
