use std::collections::HashSet;

use crate::log;
use super::grid::Grid;
use super::session_rng::SessionRng;
use super::types::Cell;

pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

pub struct TargetPlacer;

impl TargetPlacer {
    pub fn place(grid: &Grid, occupied: &HashSet<Cell>, rng: &mut SessionRng) -> Option<Cell> {
        if occupied.len() < grid.cell_count() {
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                let cell = Cell::new(
                    rng.random_range(0..grid.width() as i32),
                    rng.random_range(0..grid.height() as i32),
                );
                if !occupied.contains(&cell) {
                    return Some(cell);
                }
            }
        }

        let free: Vec<Cell> = grid.cells().filter(|cell| !occupied.contains(cell)).collect();
        if free.is_empty() {
            log!("No free cell left for a target on {}x{} grid", grid.width(), grid.height());
            return None;
        }
        rng.choose(&free).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placed_target_avoids_occupied_cells() {
        let grid = Grid::new(10, 10);
        let mut rng = SessionRng::new(42);
        let occupied: HashSet<Cell> = (0..10).map(|x| Cell::new(x, 0)).collect();

        for _ in 0..200 {
            let cell = TargetPlacer::place(&grid, &occupied, &mut rng).unwrap();
            assert!(grid.in_bounds(cell));
            assert!(!occupied.contains(&cell));
        }
    }

    #[test]
    fn test_nearly_full_grid_finds_last_cell() {
        let grid = Grid::new(10, 10);
        let mut rng = SessionRng::new(3);
        let last = Cell::new(7, 2);
        let occupied: HashSet<Cell> = grid.cells().filter(|c| *c != last).collect();

        assert_eq!(TargetPlacer::place(&grid, &occupied, &mut rng), Some(last));
    }

    #[test]
    fn test_full_grid_has_no_target() {
        let grid = Grid::new(3, 3);
        let mut rng = SessionRng::new(3);
        let occupied: HashSet<Cell> = grid.cells().collect();

        assert_eq!(TargetPlacer::place(&grid, &occupied, &mut rng), None);
    }
}
