use serde::{Deserialize, Serialize};

use crate::PlayerName;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: PlayerName,
    pub score: u32,
}

impl LeaderboardEntry {
    pub fn new(player: PlayerName, score: u32) -> Self {
        Self { player, score }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: LeaderboardEntry) {
        self.entries.push(entry);
    }

    // equal scores keep recording order
    pub fn top_n(&self, n: usize) -> Vec<LeaderboardEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted.truncate(n);
        sorted
    }

    pub fn high_score(&self) -> u32 {
        self.entries.iter().map(|e| e.score).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
