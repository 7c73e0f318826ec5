//! Data-driven game balance
//!
//! Every knob the simulation reads lives here. Defaults come from
//! [`crate::consts`]; a JSON document can override any subset of them.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// How enemy separation reads the positions of its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparationMode {
    /// Each enemy sees neighbours already moved earlier in the same pass.
    /// Result depends on iteration order.
    #[default]
    InPlace,
    /// All pushes are computed from positions captured before the pass.
    Snapshot,
}

/// Gameplay tuning for a session.
///
/// Keep this separate from the driver's frame pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_speed: f32,
    pub attack_range: f32,
    /// Full cone width in radians
    pub attack_angle: f32,
    pub attack_cooldown: f32,
    pub attack_flash_ms: u64,
    pub arena_size: f32,
    pub arena_margin: f32,
    pub max_frame_dt: f32,

    pub crit_chance: f32,
    pub crit_multiplier: f32,
    pub hit_flash: f32,

    pub base_spawn_rate: f32,
    pub min_spawn_rate: f32,
    pub spawn_rate_per_level: f32,
    pub spawn_ring_offset: f32,

    pub enemy_attack_cooldown: f32,
    pub separation_radius: f32,
    pub separation_speed: f32,
    pub separation: SeparationMode,

    pub text_velocity_damping: f32,

    pub player_max_health: i32,
    pub player_max_xp: u32,
    pub player_damage: i32,
    /// max_xp multiplier per level (result floored)
    pub xp_growth: f64,
    pub health_per_level: i32,
    pub damage_per_level: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            attack_range: ATTACK_RANGE,
            attack_angle: ATTACK_ANGLE,
            attack_cooldown: ATTACK_COOLDOWN,
            attack_flash_ms: ATTACK_FLASH_MS,
            arena_size: ARENA_SIZE,
            arena_margin: ARENA_MARGIN,
            max_frame_dt: MAX_FRAME_DT,

            crit_chance: CRIT_CHANCE,
            crit_multiplier: CRIT_MULTIPLIER,
            hit_flash: HIT_FLASH,

            base_spawn_rate: BASE_SPAWN_RATE,
            min_spawn_rate: MIN_SPAWN_RATE,
            spawn_rate_per_level: SPAWN_RATE_PER_LEVEL,
            spawn_ring_offset: SPAWN_RING_OFFSET,

            enemy_attack_cooldown: ENEMY_ATTACK_COOLDOWN,
            separation_radius: SEPARATION_RADIUS,
            separation_speed: SEPARATION_SPEED,
            separation: SeparationMode::InPlace,

            text_velocity_damping: TEXT_VELOCITY_DAMPING,

            player_max_health: PLAYER_MAX_HEALTH,
            player_max_xp: PLAYER_MAX_XP,
            player_damage: PLAYER_DAMAGE,
            xp_growth: XP_GROWTH,
            health_per_level: HEALTH_PER_LEVEL,
            damage_per_level: DAMAGE_PER_LEVEL,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("player_speed", self.player_speed),
            ("attack_range", self.attack_range),
            ("attack_angle", self.attack_angle),
            ("arena_size", self.arena_size),
            ("max_frame_dt", self.max_frame_dt),
            ("min_spawn_rate", self.min_spawn_rate),
            ("crit_multiplier", self.crit_multiplier),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(Error::InvalidTuning(format!("{name} must be > 0, got {value}")));
            }
        }
        if !(0.0..=1.0).contains(&self.crit_chance) {
            return Err(Error::InvalidTuning(format!(
                "crit_chance must be within [0, 1], got {}",
                self.crit_chance
            )));
        }
        if self.arena_margin < 0.0 || self.arena_margin * 2.0 >= self.arena_size {
            return Err(Error::InvalidTuning(format!(
                "arena_margin {} does not fit arena_size {}",
                self.arena_margin, self.arena_size
            )));
        }
        if !(self.xp_growth >= 1.0) || !self.xp_growth.is_finite() {
            return Err(Error::InvalidTuning(format!(
                "xp_growth must be a finite value >= 1, got {}",
                self.xp_growth
            )));
        }
        if self.player_max_xp == 0 {
            return Err(Error::InvalidTuning("player_max_xp must be > 0".into()));
        }
        Ok(())
    }

    /// Largest |x| or |z| the player may reach
    #[inline]
    pub fn arena_limit(&self) -> f32 {
        self.arena_size / 2.0 - self.arena_margin
    }

    /// Radius of the ring enemies spawn on, just outside the arena
    #[inline]
    pub fn spawn_radius(&self) -> f32 {
        self.arena_size / 2.0 + self.spawn_ring_offset
    }
}
