//! High score leaderboard system
//!
//! Tracks the top 10 finished runs of a session. Kept in memory only.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Enemies killed
    pub score: u32,
    /// Level reached
    pub level: u32,
    /// Seconds from the run's first tick to game over
    pub survived_secs: f32,
}

/// High score leaderboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<RunRecord>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Slot a score would take: after every entry scoring at least as much
    fn slot_for(&self, score: u32) -> usize {
        self.entries.partition_point(|e| e.score >= score)
    }

    /// Check if a score would make the board
    pub fn qualifies(&self, score: u32) -> bool {
        score > 0 && self.slot_for(score) < MAX_HIGH_SCORES
    }

    /// Add a finished run. Returns the rank achieved (1-indexed) or None.
    ///
    /// Entries stay sorted by descending score; a tie ranks below the older run.
    pub fn add_run(&mut self, run: RunRecord) -> Option<usize> {
        if !self.qualifies(run.score) {
            return None;
        }
        let slot = self.slot_for(run.score);
        self.entries.insert(slot, run);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}
