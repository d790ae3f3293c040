use std::collections::{HashSet, VecDeque};

use super::collision::CollisionDetector;
use super::grid::Grid;
use super::types::{Cell, CollisionKind, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub head: Cell,
    pub grows: bool,
    pub collision: Option<CollisionKind>,
}

impl StepOutcome {
    pub fn is_fatal(&self) -> bool {
        self.collision.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
}

impl Snake {
    pub fn new(cells: &[Cell], direction: Direction) -> Self {
        Self {
            body: cells.iter().copied().collect(),
            direction,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn cells(&self) -> Vec<Cell> {
        self.body.iter().copied().collect()
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn step(&self, grid: &Grid, target: Cell) -> StepOutcome {
        let head = self.head().moved(self.direction);
        let grows = self.direction.is_moving() && head == target;
        let collision = CollisionDetector::check(grid, head, &self.body, grows);

        StepOutcome {
            head,
            grows,
            collision,
        }
    }

    pub fn advance(&mut self, new_head: Cell, grew: bool) {
        if !self.direction.is_moving() {
            return;
        }

        // on growth the tail stays; the old head is already at target - direction
        self.body.push_front(new_head);
        if !grew {
            self.body.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_snake() -> Snake {
        Snake::new(&[Cell::new(5, 5), Cell::new(4, 5)], Direction::Right)
    }

    #[test]
    fn test_step_does_not_mutate() {
        let grid = Grid::new(40, 40);
        let snake = start_snake();
        let outcome = snake.step(&grid, Cell::new(20, 4));

        assert_eq!(outcome.head, Cell::new(6, 5));
        assert!(!outcome.grows);
        assert!(!outcome.is_fatal());
        assert_eq!(snake, start_snake());
    }

    #[test]
    fn test_advance_without_growth_keeps_length() {
        let grid = Grid::new(40, 40);
        let mut snake = start_snake();
        let outcome = snake.step(&grid, Cell::new(20, 4));
        snake.advance(outcome.head, outcome.grows);

        assert_eq!(snake.cells(), vec![Cell::new(6, 5), Cell::new(5, 5)]);
    }

    #[test]
    fn test_advance_with_growth_appends_one_segment() {
        let grid = Grid::new(40, 40);
        let mut snake = start_snake();
        let outcome = snake.step(&grid, Cell::new(6, 5));
        assert!(outcome.grows);

        snake.advance(outcome.head, outcome.grows);
        assert_eq!(
            snake.cells(),
            vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]
        );
    }

    #[test]
    fn test_growth_after_turn_keeps_body_connected() {
        let grid = Grid::new(40, 40);
        let mut snake = Snake::new(
            &[Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            Direction::Right,
        );
        snake.set_direction(Direction::Down);
        let target = Cell::new(5, 6);
        let outcome = snake.step(&grid, target);
        snake.advance(outcome.head, outcome.grows);

        let cells = snake.cells();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], target);
        assert_eq!(cells[1], target.moved_back(Direction::Down));
        assert_eq!(cells[3], Cell::new(3, 5));
        assert!(cells.windows(2).all(|pair| pair[0].is_adjacent(&pair[1])));
    }

    #[test]
    fn test_stationary_step_is_harmless() {
        let grid = Grid::new(40, 40);
        let mut snake = Snake::new(&[Cell::new(5, 5), Cell::new(4, 5)], Direction::None);
        let outcome = snake.step(&grid, Cell::new(5, 5));

        assert_eq!(outcome.head, Cell::new(5, 5));
        assert!(!outcome.grows);
        assert!(!outcome.is_fatal());

        snake.advance(outcome.head, outcome.grows);
        assert_eq!(snake.cells(), vec![Cell::new(5, 5), Cell::new(4, 5)]);
    }

    #[test]
    fn test_step_into_wall_is_fatal() {
        let grid = Grid::new(10, 10);
        let snake = Snake::new(&[Cell::new(9, 0), Cell::new(8, 0)], Direction::Up);
        let outcome = snake.step(&grid, Cell::new(1, 1));
        assert_eq!(outcome.collision, Some(CollisionKind::Wall));
    }
}
