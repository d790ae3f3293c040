use rand::Rng;
use serde::{Deserialize, Serialize};
use snake_engine::game::{Cell, CollisionDetector, Direction, SessionController};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Autopilot {
    Greedy,
    Random,
}

impl Autopilot {
    pub fn calculate_move(&self, controller: &SessionController) -> Option<Direction> {
        if !controller.is_running() {
            return None;
        }

        match self {
            Autopilot::Greedy => Self::greedy_move(controller),
            Autopilot::Random => Self::random_safe_move(controller),
        }
    }

    fn greedy_move(controller: &SessionController) -> Option<Direction> {
        let head = controller.snake().head();
        let target = controller.target();

        Self::safe_directions(controller)
            .into_iter()
            .min_by_key(|dir| head.moved(*dir).manhattan_distance(&target))
            .or_else(|| Self::random_safe_move(controller))
    }

    fn random_safe_move(controller: &SessionController) -> Option<Direction> {
        let current = controller.snake().direction();
        let safe = Self::safe_directions(controller);

        if safe.is_empty() {
            return Some(current);
        }
        let idx = rand::rng().random_range(0..safe.len());
        Some(safe[idx])
    }

    fn safe_directions(controller: &SessionController) -> Vec<Direction> {
        let snake = controller.snake();
        let current = snake.direction();

        Direction::MOVES
            .into_iter()
            .filter(|dir| !dir.is_opposite(&current))
            .filter(|dir| Self::is_safe(controller, snake.head().moved(*dir)))
            .collect()
    }

    fn is_safe(controller: &SessionController, next: Cell) -> bool {
        let grows = next == controller.target();
        !CollisionDetector::is_fatal(controller.grid(), next, controller.snake().body(), grows)
    }
}
