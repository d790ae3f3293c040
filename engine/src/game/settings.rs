use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::grid::Grid;
use super::types::Cell;

pub const MAX_SCORE_PER_TARGET: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub canvas_size: u32,
    pub scale: u32,
    pub initial_period_ms: u64,
    pub min_period_ms: u64,
    pub period_step_ms: u64,
    pub score_per_target: u32,
    pub snake_start: Vec<Cell>,
    pub target_start: Cell,
    pub leaderboard_size: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            canvas_size: 400,
            scale: 10,
            initial_period_ms: 120,
            min_period_ms: 20,
            period_step_ms: 4,
            score_per_target: 10,
            snake_start: vec![Cell::new(5, 5), Cell::new(4, 5)],
            target_start: Cell::new(20, 4),
            leaderboard_size: 10,
        }
    }
}

impl EngineSettings {
    pub fn grid(&self) -> Grid {
        Grid::from_canvas(self.canvas_size, self.scale)
    }
}

impl Validate for EngineSettings {
    fn validate(&self) -> Result<(), String> {
        if self.scale == 0 {
            return Err("Scale must be positive".to_string());
        }
        if self.canvas_size % self.scale != 0 {
            return Err("Canvas size must be a multiple of scale".to_string());
        }
        let cells = self.canvas_size / self.scale;
        if !(10..=200).contains(&cells) {
            return Err("Grid must be between 10 and 200 cells per side".to_string());
        }
        if self.min_period_ms == 0 {
            return Err("Minimum tick period must be positive".to_string());
        }
        if self.min_period_ms > self.initial_period_ms {
            return Err("Minimum tick period must not exceed the initial period".to_string());
        }
        if self.period_step_ms == 0 {
            return Err("Tick period step must be positive".to_string());
        }
        if self.score_per_target > MAX_SCORE_PER_TARGET {
            return Err(format!("Score per target must be at most {}", MAX_SCORE_PER_TARGET));
        }
        if self.leaderboard_size == 0 {
            return Err("Leaderboard size must be positive".to_string());
        }
        if self.snake_start.len() < 2 {
            return Err("Snake must start with at least 2 cells".to_string());
        }

        let grid = self.grid();
        if self.snake_start.iter().any(|cell| !grid.in_bounds(*cell)) {
            return Err("Snake start cells must be inside the grid".to_string());
        }
        if !self
            .snake_start
            .windows(2)
            .all(|pair| pair[0].is_adjacent(&pair[1]))
        {
            return Err("Snake start cells must be consecutive neighbours".to_string());
        }
        let distinct: HashSet<&Cell> = self.snake_start.iter().collect();
        if distinct.len() != self.snake_start.len() {
            return Err("Snake start cells must be distinct".to_string());
        }
        if !grid.in_bounds(self.target_start) {
            return Err("Target start must be inside the grid".to_string());
        }
        if distinct.contains(&self.target_start) {
            return Err("Target start must not overlap the snake".to_string());
        }
        Ok(())
    }
}
