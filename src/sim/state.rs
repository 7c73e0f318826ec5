//! Game state and core simulation types
//!
//! Positions live on the ground plane as `Vec2`, where `x` is world x and
//! `y` is world z. Height is a presentation concern and is never stored.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Top-level game state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulates
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Player health reached zero
    GameOver,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Facing angle (radians, 0 = +z, see [`crate::bearing`])
    pub rotation: f32,
    /// May drop below zero before game over is observed
    pub health: i32,
    pub max_health: i32,
    pub xp: u32,
    pub max_xp: u32,
    pub level: u32,
    pub damage: i32,
    pub is_attacking: bool,
    /// Seconds until the next swing is allowed
    pub attack_cooldown: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            rotation: 0.0,
            health: tuning.player_max_health,
            max_health: tuning.player_max_health,
            xp: 0,
            max_xp: tuning.player_max_xp,
            level: 1,
            damage: tuning.player_damage,
            is_attacking: false,
            attack_cooldown: 0.0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Health bar fill, clamped to [0, 1]
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health as f32 / self.max_health as f32).clamp(0.0, 1.0)
    }

    /// XP bar fill, clamped to [0, 1]
    pub fn xp_fraction(&self) -> f32 {
        if self.max_xp == 0 {
            return 0.0;
        }
        (self.xp as f32 / self.max_xp as f32).clamp(0.0, 1.0)
    }
}

/// Enemy archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Drone,
    Cyborg,
    Mech,
}

/// Spawn-time stats for an enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub health: i32,
    pub damage: i32,
    pub speed: f32,
}

impl EnemyKind {
    /// Stats scaled by the player's level at spawn time
    pub fn stats(self, level: u32) -> EnemyStats {
        let level = level as i32;
        match self {
            EnemyKind::Drone => EnemyStats {
                health: 30 + level * 5,
                damage: 5 + level / 2,
                speed: 3.0,
            },
            EnemyKind::Cyborg => EnemyStats {
                health: 60 + level * 8,
                damage: 10 + level,
                speed: 2.5,
            },
            EnemyKind::Mech => EnemyStats {
                health: 200 + level * 20,
                damage: 25 + level * 2,
                speed: 1.2,
            },
        }
    }

    /// XP awarded on death
    pub fn xp_reward(self) -> u32 {
        match self {
            EnemyKind::Drone => 15,
            EnemyKind::Cyborg => 35,
            EnemyKind::Mech => 100,
        }
    }

    /// Reach of the enemy's melee (planar distance to the player)
    pub fn attack_range(self) -> f32 {
        match self {
            EnemyKind::Mech => 2.0,
            EnemyKind::Drone | EnemyKind::Cyborg => 1.2,
        }
    }
}

/// A hostile unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub health: i32,
    pub max_health: i32,
    pub speed: f32,
    pub damage: i32,
    pub attack_cooldown: f32,
    /// Hit flash timer (seconds remaining, presentation only)
    pub hit_flash: f32,
}

impl Enemy {
    /// A fresh enemy of `kind` at full health
    pub fn new(id: u32, kind: EnemyKind, pos: Vec2, level: u32) -> Self {
        let stats = kind.stats(level);
        Self {
            id,
            pos,
            kind,
            health: stats.health,
            max_health: stats.health,
            speed: stats.speed,
            damage: stats.damage,
            attack_cooldown: 0.0,
            hit_flash: 0.0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn is_flashing(&self) -> bool {
        self.hit_flash > 0.0
    }

    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health as f32 / self.max_health as f32).clamp(0.0, 1.0)
    }
}

/// Display color of a floating text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextColor {
    /// Regular hit number
    Damage,
    /// Critical hit number
    Critical,
    /// XP gained from a kill
    Reward,
    /// Damage taken by the player
    Warning,
    /// Level up banner
    LevelUp,
}

impl TextColor {
    pub fn hex(self) -> &'static str {
        match self {
            TextColor::Damage => "#00f3ff",
            TextColor::Critical => "#ff00c1",
            TextColor::Reward => "#4ade80",
            TextColor::Warning => "#ef4444",
            TextColor::LevelUp => "#facc15",
        }
    }
}

/// Rising combat text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingText {
    pub id: u32,
    pub pos: Vec2,
    pub text: String,
    pub color: TextColor,
    /// Seconds remaining
    pub life: f32,
    /// Rise speed, damped every tick
    pub velocity_y: f32,
}

/// Complete world snapshot
///
/// Replaced atomically by [`super::tick`]; readers never see a half-applied tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub phase: GamePhase,
    /// Enemies killed this run
    pub score: u32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub texts: Vec<FloatingText>,
    /// Latest movement intent (x, z), components in {-1, 0, 1}
    pub input: Vec2,
    /// Elapsed time of the last spawn
    pub last_spawn_time: f32,
    /// Base spawn interval before the level ramp
    pub spawn_rate: f32,
    /// Next entity ID
    next_id: u32,
}

impl World {
    /// A world sitting on the title screen
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Menu,
            score: 0,
            player: Player::new(tuning),
            enemies: Vec::new(),
            texts: Vec::new(),
            input: Vec2::ZERO,
            last_spawn_time: 0.0,
            spawn_rate: tuning.base_spawn_rate,
            next_id: 1,
        }
    }

    /// Reinitialize everything and start playing.
    ///
    /// The id counter keeps running so ids stay unique for the session.
    pub fn reset(&mut self, tuning: &Tuning) {
        let next_id = self.next_id;
        *self = Self::new(tuning);
        self.next_id = next_id;
        self.phase = GamePhase::Playing;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Queue a floating text
    pub fn push_text(
        &mut self,
        pos: Vec2,
        text: impl Into<String>,
        color: TextColor,
        life: f32,
        velocity_y: f32,
    ) {
        let id = self.next_entity_id();
        self.texts.push(FloatingText {
            id,
            pos,
            text: text.into(),
            color,
            life,
            velocity_y,
        });
    }

    pub fn enemy(&self, id: u32) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }
}
