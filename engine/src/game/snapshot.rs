use serde::{Deserialize, Serialize};

use crate::PlayerName;
use super::leaderboard::LeaderboardEntry;
use super::types::Cell;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub snake_cells: Vec<Cell>,
    pub target_cell: Cell,
    pub score: u32,
    pub high_score: u32,
    pub speed_period_ms: u64,
    pub running: bool,
    pub game_over: bool,
    pub current_player: Option<PlayerName>,
    pub last_result: Option<LeaderboardEntry>,
}
