//! Neon Arena headless entry point
//!
//! Drives a session at a fixed 60 Hz with a simple autopilot standing in for
//! keyboard and mouse. Useful for balance checks and soak runs.
//!
//! Usage: `neon-arena [seed] [seconds] [tuning.json]`

use std::time::Duration;

use glam::Vec2;
use neon_arena::sim::World;
use neon_arena::{ManualClock, Session, Tuning, bearing, normalize_angle};

const FRAME_DT: f32 = 1.0 / 60.0;

/// Autopilot: face the nearest enemy and swing when it is in the cone,
/// otherwise circle the arena center to keep enemies strung out.
fn autopilot(world: &World, t: f32) -> (Vec2, bool) {
    let player = &world.player;
    let nearest = world
        .enemies
        .iter()
        .filter(|e| !e.is_dead())
        .min_by(|a, b| {
            a.pos
                .distance(player.pos)
                .partial_cmp(&b.pos.distance(player.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(target) = nearest else {
        let orbit = Vec2::new(t.cos(), t.sin()) * 6.0;
        return (snap(orbit - player.pos), false);
    };

    let to_target = target.pos - player.pos;
    if to_target.length() < 2.5 {
        // Turn by stepping toward it; keys only give 8 directions
        let dir = snap(to_target);
        let facing_ok = normalize_angle(bearing(to_target) - player.rotation).abs() < 0.9;
        (if facing_ok { Vec2::ZERO } else { dir }, facing_ok)
    } else if to_target.length() < 6.0 && player.health_fraction() < 0.3 {
        (snap(-to_target), false)
    } else {
        (snap(to_target), false)
    }
}

/// Quantize a direction to key-pair input (-1, 0, 1 per axis)
fn snap(dir: Vec2) -> Vec2 {
    let axis = |v: f32| {
        if v > 0.3 {
            1.0
        } else if v < -0.3 {
            -1.0
        } else {
            0.0
        }
    };
    let d = dir.normalize_or_zero();
    Vec2::new(axis(d.x), axis(d.y))
}

fn load_tuning(path: Option<&String>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };
    let loaded = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
    match loaded {
        Ok(tuning) => tuning,
        Err(e) => {
            log::warn!("Ignoring tuning file {}: {}", path, e);
            Tuning::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(12345);
    let seconds: f32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(120.0);
    let tuning = load_tuning(args.get(3));

    log::info!("Neon Arena headless run: seed={}, duration={}s", seed, seconds);

    let mut session = Session::with_clock(seed, tuning, ManualClock::new());
    session.reset_game();

    let frames = (seconds / FRAME_DT) as u32;
    let mut elapsed = 0.0;
    let mut runs = 1;
    for _ in 0..frames {
        session.clock().advance(Duration::from_secs_f32(FRAME_DT));
        elapsed += FRAME_DT;

        if !session.world().is_playing() {
            runs += 1;
            session.reset_game();
        }

        let (input, attack) = autopilot(session.world(), elapsed);
        session.set_input_vector(input.x, input.y);
        if attack {
            session.player_attack();
        }
        session.game_tick(FRAME_DT, elapsed);
    }

    let world = session.world();
    log::info!(
        "Finished after {} run(s): score {}, level {}, health {}/{}, {} enemies alive",
        runs,
        world.score,
        world.player.level,
        world.player.health,
        world.player.max_health,
        world.enemies.len()
    );

    match serde_json::to_string_pretty(session.high_scores()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode leaderboard: {}", e),
    }
}
