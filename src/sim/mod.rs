//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick` deltas
//! - Seeded RNG only, passed in by the caller
//! - Stable iteration order (insertion order of entities)
//! - No rendering, input device, or platform dependencies

pub mod combat;
pub mod enemy;
pub mod feedback;
pub mod progression;
pub mod spawner;
pub mod state;
pub mod tick;

pub use combat::{AttackOutcome, SwingArc, hit_damage, player_attack};
pub use enemy::{StepReport, step_enemies};
pub use feedback::decay_texts;
pub use progression::{apply_level_up, next_max_xp};
pub use spawner::{choose_kind, run_spawner, spawn_interval};
pub use state::{
    Enemy, EnemyKind, EnemyStats, FloatingText, GamePhase, Player, TextColor, World,
};
pub use tick::{TickReport, move_player, tick};
