//! Neon Arena - A cyberpunk arena brawler
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, combat, enemy AI, spawning, leveling)
//! - `session`: Owned simulation context and the command/read surface
//! - `clock`: Real-time source for the attack-reset timer
//! - `tuning`: Data-driven game balance
//! - `highscores`: In-memory run leaderboard

pub mod clock;
pub mod error;
pub mod highscores;
pub mod session;
pub mod sim;
pub mod tuning;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::Error;
pub use highscores::HighScores;
pub use session::Session;
pub use tuning::{SeparationMode, Tuning};

/// Game configuration constants
///
/// Defaults for [`Tuning`]. The simulation reads the tuning, never these directly.
pub mod consts {
    use std::f32::consts::PI;

    /// Player movement speed (units/s)
    pub const PLAYER_SPEED: f32 = 8.0;
    /// Melee reach (units, planar)
    pub const ATTACK_RANGE: f32 = 3.0;
    /// Full width of the melee cone (radians)
    pub const ATTACK_ANGLE: f32 = PI / 1.5;
    /// Seconds between player swings
    pub const ATTACK_COOLDOWN: f32 = 0.25;
    /// How long `is_attacking` stays set after a swing (real time, ms)
    pub const ATTACK_FLASH_MS: u64 = 150;
    /// Side length of the square arena
    pub const ARENA_SIZE: f32 = 28.0;
    /// Keep the player this far inside the arena edge
    pub const ARENA_MARGIN: f32 = 0.5;

    /// Largest delta a single tick will integrate (frame hitch guard)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Crit roll probability
    pub const CRIT_CHANCE: f32 = 0.3;
    pub const CRIT_MULTIPLIER: f32 = 1.8;
    /// Enemy hit-flash duration (s)
    pub const HIT_FLASH: f32 = 0.15;

    /// Spawn interval at level 0 (s)
    pub const BASE_SPAWN_RATE: f32 = 1.5;
    /// Spawn interval floor (s)
    pub const MIN_SPAWN_RATE: f32 = 0.5;
    /// Spawn interval reduction per player level (s)
    pub const SPAWN_RATE_PER_LEVEL: f32 = 0.1;
    /// Spawn ring sits this far outside the arena half-size
    pub const SPAWN_RING_OFFSET: f32 = 1.0;

    /// Enemy melee cooldown (s)
    pub const ENEMY_ATTACK_COOLDOWN: f32 = 1.0;
    /// Enemies closer than this push each other apart
    pub const SEPARATION_RADIUS: f32 = 1.0;
    /// Separation push speed (units/s)
    pub const SEPARATION_SPEED: f32 = 3.0;

    /// Per-tick multiplier on floating text rise speed
    pub const TEXT_VELOCITY_DAMPING: f32 = 0.9;

    /// Player defaults
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    pub const PLAYER_MAX_XP: u32 = 100;
    pub const PLAYER_DAMAGE: i32 = 20;

    /// Level-up growth (max_xp grows 1.4x per level, floored)
    pub const XP_GROWTH: f64 = 1.4;
    pub const HEALTH_PER_LEVEL: i32 = 25;
    pub const DAMAGE_PER_LEVEL: i32 = 8;
}

/// Normalize angle to (-π, π]
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}

/// Bearing of a ground-plane direction, measured from +z toward +x.
///
/// Matches the facing convention: rotation 0 looks down +z.
#[inline]
pub fn bearing(dir: glam::Vec2) -> f32 {
    dir.x.atan2(dir.y)
}
