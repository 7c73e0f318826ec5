//! Game session: the owned simulation context
//!
//! Holds the single world snapshot together with everything needed to
//! advance it deterministically (tuning, seeded RNG) and the one real-time
//! effect, the swing-pose reset. Input collaborators call the command
//! methods; presentation reads through [`Session::world`].

use std::time::Duration;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::highscores::{HighScores, RunRecord};
use crate::sim::{self, AttackOutcome, TickReport, World};
use crate::tuning::Tuning;

/// Pending clear of `player.is_attacking`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AttackReset {
    due: Duration,
    /// Session epoch the swing belonged to; a reset invalidates it
    epoch: u64,
}

/// One play session
pub struct Session<C: Clock = SystemClock> {
    world: World,
    tuning: Tuning,
    rng: Pcg32,
    clock: C,
    /// Bumped by every reset; cancels timers scheduled before it
    epoch: u64,
    attack_reset: Option<AttackReset>,
    /// `elapsed` seen on the first tick of the current run
    run_started_at: Option<f32>,
    high_scores: HighScores,
}

impl Session<SystemClock> {
    /// Session on the wall clock
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self::with_clock(seed, tuning, SystemClock::new())
    }
}

impl<C: Clock> Session<C> {
    /// Session on a caller-supplied clock. Starts on the menu.
    pub fn with_clock(seed: u64, tuning: Tuning, clock: C) -> Self {
        Self {
            world: World::new(&tuning),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            clock,
            epoch: 0,
            attack_reset: None,
            run_started_at: None,
            high_scores: HighScores::new(),
        }
    }

    /// Read-only view of the current snapshot
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Whether a swing-pose clear is still scheduled
    pub fn attack_reset_pending(&self) -> bool {
        self.attack_reset.is_some()
    }

    /// Latest movement intent (last write wins). Ignored unless playing.
    pub fn set_input_vector(&mut self, x: f32, z: f32) {
        if !self.world.is_playing() || !x.is_finite() || !z.is_finite() {
            return;
        }
        self.world.input = Vec2::new(x.clamp(-1.0, 1.0), z.clamp(-1.0, 1.0));
    }

    /// Swing the weapon. `None` means the command was ignored.
    pub fn player_attack(&mut self) -> Option<AttackOutcome> {
        self.poll_timers();
        let outcome = sim::player_attack(&mut self.world, &self.tuning, &mut self.rng)?;
        self.attack_reset = Some(AttackReset {
            due: self.clock.now() + Duration::from_millis(self.tuning.attack_flash_ms),
            epoch: self.epoch,
        });
        Some(outcome)
    }

    /// Start a fresh run from any state.
    ///
    /// Cancels a pending swing-pose clear so it cannot land on the new run.
    pub fn reset_game(&mut self) {
        self.epoch += 1;
        self.attack_reset = None;
        self.run_started_at = None;
        self.world.reset(&self.tuning);
        log::info!("New run started (epoch {})", self.epoch);
    }

    /// Advance one frame. `delta` is clamped to the tuning's max frame time.
    pub fn game_tick(&mut self, delta: f32, elapsed: f32) -> TickReport {
        self.poll_timers();
        let delta = delta.min(self.tuning.max_frame_dt);
        if self.world.is_playing() && self.run_started_at.is_none() {
            self.run_started_at = Some(elapsed);
        }
        let report = sim::tick(&mut self.world, &self.tuning, &mut self.rng, delta, elapsed);

        if report.game_over {
            let run = RunRecord {
                score: self.world.score,
                level: self.world.player.level,
                survived_secs: elapsed - self.run_started_at.unwrap_or(elapsed),
            };
            if let Some(rank) = self.high_scores.add_run(run) {
                log::info!("Run placed #{} on the leaderboard", rank);
            }
        }
        report
    }

    /// Fire expired timers. Safe to call at any rate.
    pub fn poll_timers(&mut self) {
        let Some(reset) = self.attack_reset else {
            return;
        };
        if self.clock.now() < reset.due {
            return;
        }
        self.attack_reset = None;
        if reset.epoch == self.epoch {
            self.world.player.is_attacking = false;
        }
    }

    /// Snapshot as JSON for an out-of-process presentation layer
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.world)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::sim::{Enemy, EnemyKind, GamePhase};

    const DT: f32 = 1.0 / 60.0;

    fn session() -> Session<ManualClock> {
        Session::with_clock(42, Tuning::default(), ManualClock::new())
    }

    fn playing() -> Session<ManualClock> {
        let mut s = session();
        s.reset_game();
        s
    }

    fn add_enemy(s: &mut Session<ManualClock>, pos: Vec2) -> u32 {
        let id = s.world.next_entity_id();
        s.world.enemies.push(Enemy::new(id, EnemyKind::Mech, pos, 1));
        id
    }

    #[test]
    fn test_starts_in_menu_and_ignores_commands() {
        let mut s = session();
        assert_eq!(s.world().phase, GamePhase::Menu);
        let before = s.world().clone();

        s.set_input_vector(1.0, 0.0);
        assert!(s.player_attack().is_none());
        s.game_tick(DT, 10.0);
        assert_eq!(s.world(), &before);
    }

    #[test]
    fn test_reset_transitions_to_playing() {
        let mut s = session();
        s.reset_game();
        assert_eq!(s.world().phase, GamePhase::Playing);
        s.set_input_vector(1.0, 1.0);
        assert_eq!(s.world().input, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_attack_pose_clears_after_real_time() {
        let mut s = playing();
        assert!(s.player_attack().is_some());
        assert!(s.world().player.is_attacking);

        s.clock().advance(Duration::from_millis(100));
        s.poll_timers();
        assert!(s.world().player.is_attacking);

        s.clock().advance(Duration::from_millis(50));
        s.poll_timers();
        assert!(!s.world().player.is_attacking);
        assert!(!s.attack_reset_pending());
    }

    #[test]
    fn test_attack_pose_clears_without_ticks_frame_independent() {
        let mut s = playing();
        s.player_attack();
        // Many short ticks that add up to well over 150ms of sim time
        for i in 0..30 {
            s.game_tick(DT, i as f32 * DT);
        }
        assert!(s.world().player.is_attacking);

        s.clock().advance(Duration::from_millis(150));
        s.game_tick(DT, 0.5);
        assert!(!s.world().player.is_attacking);
    }

    #[test]
    fn test_attack_pose_clears_after_game_over() {
        let mut s = playing();
        s.player_attack();
        s.world.player.health = 0;
        s.game_tick(DT, 0.0);
        assert_eq!(s.world().phase, GamePhase::GameOver);

        s.clock().advance(Duration::from_millis(200));
        s.poll_timers();
        assert!(!s.world().player.is_attacking);
    }

    #[test]
    fn test_reset_cancels_pending_attack_clear() {
        let mut s = playing();
        s.player_attack();
        assert!(s.attack_reset_pending());

        s.reset_game();
        assert!(!s.attack_reset_pending());

        // New run swings at t=100ms; the stale timer from t=0 must not clear it early
        s.clock().advance(Duration::from_millis(100));
        s.player_attack();
        s.clock().advance(Duration::from_millis(100));
        s.poll_timers();
        assert!(s.world().player.is_attacking);

        s.clock().advance(Duration::from_millis(50));
        s.poll_timers();
        assert!(!s.world().player.is_attacking);
    }

    #[test]
    fn test_attack_gated_by_cooldown() {
        let mut s = playing();
        let id = add_enemy(&mut s, Vec2::new(0.0, 2.0));
        assert_eq!(s.player_attack().unwrap().hit_count(), 1);
        let hp = s.world().enemy(id).unwrap().health;

        assert!(s.player_attack().is_none());
        assert_eq!(s.world().enemy(id).unwrap().health, hp);
    }

    #[test]
    fn test_game_over_records_run_once() {
        let mut s = playing();
        s.game_tick(DT, 2.0);
        s.world.score = 4;
        s.world.player.health = 0;
        s.game_tick(DT, 12.0);
        s.game_tick(DT, 12.1);
        assert_eq!(s.high_scores().entries.len(), 1);
        assert_eq!(s.high_scores().top_score(), Some(4));
        assert_eq!(s.high_scores().entries[0].survived_secs, 10.0);

        s.reset_game();
        assert_eq!(s.world().score, 0);
        assert_eq!(s.world().phase, GamePhase::Playing);
    }

    #[test]
    fn test_survival_time_is_per_run() {
        let mut s = playing();
        s.game_tick(DT, 0.0);
        s.world.score = 3;
        s.world.player.health = 0;
        s.game_tick(DT, 30.0);

        // Second run in the same session starts late on the session clock
        s.reset_game();
        s.game_tick(DT, 100.0);
        s.game_tick(DT, 104.5);
        s.world.score = 5;
        s.world.player.health = 0;
        s.game_tick(DT, 108.0);

        let board = s.high_scores();
        assert_eq!(board.entries.len(), 2);
        assert_eq!(board.entries[0].score, 5);
        assert_eq!(board.entries[0].survived_secs, 8.0);
        assert_eq!(board.entries[1].survived_secs, 30.0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = playing();
        let mut b = playing();
        for i in 0..300 {
            let elapsed = i as f32 * DT;
            for s in [&mut a, &mut b] {
                s.set_input_vector(((i / 60) % 2) as f32, 1.0 - ((i / 40) % 3) as f32);
                if i % 15 == 0 {
                    s.player_attack();
                }
                s.game_tick(DT, elapsed);
            }
        }
        assert_eq!(a.world(), b.world());
    }

    #[test]
    fn test_snapshot_json() {
        let s = playing();
        let json = s.snapshot_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "Playing");
        assert_eq!(value["player"]["health"], 100);
    }
}
