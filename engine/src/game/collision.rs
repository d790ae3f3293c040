use std::collections::VecDeque;

use super::grid::Grid;
use super::types::{Cell, CollisionKind};

pub struct CollisionDetector;

impl CollisionDetector {
    // the head cell is skipped, and the tail too unless the move grows
    pub fn check(
        grid: &Grid,
        candidate: Cell,
        body: &VecDeque<Cell>,
        grows: bool,
    ) -> Option<CollisionKind> {
        if !grid.in_bounds(candidate) {
            return Some(CollisionKind::Wall);
        }

        let end = if grows {
            body.len()
        } else {
            body.len().saturating_sub(1)
        };

        if body.iter().take(end).skip(1).any(|cell| *cell == candidate) {
            return Some(CollisionKind::SelfCollision);
        }

        None
    }

    pub fn is_fatal(grid: &Grid, candidate: Cell, body: &VecDeque<Cell>, grows: bool) -> bool {
        Self::check(grid, candidate, body, grows).is_some()
    }
}
