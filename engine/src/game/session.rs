use crate::config::Validate;
use crate::{log, PlayerName};
use super::grid::Grid;
use super::leaderboard::{Leaderboard, LeaderboardEntry};
use super::session_rng::SessionRng;
use super::settings::EngineSettings;
use super::snake::Snake;
use super::snapshot::Snapshot;
use super::target::TargetPlacer;
use super::types::{Cell, Direction, GameEndReason};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Running,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Ignored,
    Moved,
    Grew,
    GameOver(GameEndReason),
}

pub struct SessionController {
    settings: EngineSettings,
    grid: Grid,
    rng: SessionRng,
    phase: SessionPhase,
    snake: Snake,
    target: Cell,
    score: u32,
    period_ms: u64,
    player: Option<PlayerName>,
    leaderboard: Leaderboard,
    high_score: u32,
    last_result: Option<LeaderboardEntry>,
    last_end_reason: Option<GameEndReason>,
}

impl SessionController {
    pub fn new(settings: EngineSettings, seed: u64) -> Result<Self, String> {
        settings
            .validate()
            .map_err(|e| format!("Invalid engine settings: {}", e))?;

        let grid = settings.grid();
        let snake = Snake::new(&settings.snake_start, Direction::None);
        Ok(Self {
            grid,
            rng: SessionRng::new(seed),
            phase: SessionPhase::Idle,
            snake,
            target: settings.target_start,
            score: 0,
            period_ms: settings.initial_period_ms,
            player: None,
            leaderboard: Leaderboard::new(),
            high_score: 0,
            last_result: None,
            last_end_reason: None,
            settings,
        })
    }

    pub fn with_random_seed(settings: EngineSettings) -> Result<Self, String> {
        let seed = SessionRng::from_random().seed();
        Self::new(settings, seed)
    }

    pub fn start(&mut self, player_name: &str) -> bool {
        if player_name.is_empty() || self.phase == SessionPhase::Running {
            return false;
        }

        self.reset_transient();
        self.snake.set_direction(Direction::Right);
        self.player = Some(PlayerName::from(player_name));
        self.phase = SessionPhase::Running;

        log!(
            "[{}] session started, tick period {}ms, seed {}",
            player_name,
            self.period_ms,
            self.rng.seed()
        );
        true
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.phase != SessionPhase::Running || !direction.is_moving() {
            return false;
        }
        self.snake.set_direction(direction);
        true
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != SessionPhase::Running {
            return TickOutcome::Ignored;
        }

        let outcome = self.snake.step(&self.grid, self.target);
        if let Some(kind) = outcome.collision {
            let reason = GameEndReason::Collision(kind);
            self.end_session(reason);
            return TickOutcome::GameOver(reason);
        }

        self.snake.advance(outcome.head, outcome.grows);
        if !outcome.grows {
            return TickOutcome::Moved;
        }

        self.score = self.score.saturating_add(self.settings.score_per_target);
        self.speed_up();

        match TargetPlacer::place(&self.grid, &self.snake.occupied(), &mut self.rng) {
            Some(target) => {
                log!(
                    "[{}] reached target at ({}, {}). Score: {}, next target ({}, {})",
                    self.player_label(),
                    outcome.head.x,
                    outcome.head.y,
                    self.score,
                    target.x,
                    target.y
                );
                self.target = target;
                TickOutcome::Grew
            }
            None => {
                self.end_session(GameEndReason::BoardFull);
                TickOutcome::GameOver(GameEndReason::BoardFull)
            }
        }
    }

    pub fn stop(&mut self) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        self.end_session(GameEndReason::Stopped);
        true
    }

    fn speed_up(&mut self) {
        let floor = self.settings.min_period_ms;
        if self.period_ms > floor {
            self.period_ms = self
                .period_ms
                .saturating_sub(self.settings.period_step_ms)
                .max(floor);
            log!("[{}] tick period now {}ms", self.player_label(), self.period_ms);
        }
    }

    fn end_session(&mut self, reason: GameEndReason) {
        let player = self.player.take().unwrap_or_default();
        let entry = LeaderboardEntry::new(player, self.score);

        log!(
            "[{}] game over ({:?}) with score {}",
            entry.player,
            reason,
            entry.score
        );

        self.leaderboard.record(entry.clone());
        self.high_score = self.leaderboard.high_score();
        self.last_result = Some(entry);
        self.last_end_reason = Some(reason);

        self.reset_transient();
        self.phase = SessionPhase::Over;
    }

    fn reset_transient(&mut self) {
        self.snake = Snake::new(&self.settings.snake_start, Direction::None);
        self.target = self.settings.target_start;
        self.score = 0;
        self.period_ms = self.settings.initial_period_ms;
        self.player = None;
    }

    fn player_label(&self) -> &str {
        self.player.as_ref().map(|p| p.as_str()).unwrap_or("-")
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake_cells: self.snake.cells(),
            target_cell: self.target,
            score: self.score,
            high_score: self.high_score,
            speed_period_ms: self.period_ms,
            running: self.phase == SessionPhase::Running,
            game_over: self.phase == SessionPhase::Over,
            current_player: self.player.clone(),
            last_result: self.last_result.clone(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn target(&self) -> Cell {
        self.target
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn last_end_reason(&self) -> Option<GameEndReason> {
        self.last_end_reason
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn top_scores(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard.top_n(self.settings.leaderboard_size)
    }

    pub fn next_player_number(&self) -> usize {
        self.leaderboard.len() + 1
    }

    #[cfg(test)]
    fn set_snake(&mut self, cells: &[Cell], direction: Direction) {
        self.snake = Snake::new(cells, direction);
    }

    #[cfg(test)]
    fn set_target(&mut self, target: Cell) {
        self.target = target;
    }

    #[cfg(test)]
    fn set_period(&mut self, period_ms: u64) {
        self.period_ms = period_ms;
    }
}
