use std::collections::HashSet;

use rand::Rng;

use crate::grid::{Grid, Position};

pub struct Apple {
    grid: Grid,
    position: Position,
}

impl Apple {
    /// Places a new apple on a random cell outside `occupied`
    pub fn new(grid: Grid, occupied: &[Position], rng: &mut impl Rng) -> Self {
        let mut apple = Apple {
            grid,
            position: grid.center(),
        };
        apple.relocate(occupied, rng);
        apple
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves the apple to a uniformly random free cell.
    ///
    /// Returns `None`, leaving the apple where it was, when `occupied`
    /// already covers the whole board.
    pub fn relocate(&mut self, occupied: &[Position], rng: &mut impl Rng) -> Option<Position> {
        let taken: HashSet<Position> = occupied
            .iter()
            .copied()
            .filter(|pos| self.grid.contains(*pos))
            .collect();
        if taken.len() >= self.grid.cell_count() {
            return None;
        }

        loop {
            let pos = Position::new(
                rng.gen_range(0..=self.grid.width - 1),
                rng.gen_range(0..=self.grid.height - 1),
            );
            if !taken.contains(&pos) {
                self.position = pos;
                return Some(pos);
            }
        }
    }

    #[cfg(test)]
    pub fn place_at(&mut self, position: Position) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_cells(grid: Grid) -> Vec<Position> {
        (0..grid.height)
            .flat_map(|y| (0..grid.width).map(move |x| Position::new(x, y)))
            .collect()
    }

    #[test]
    fn test_relocate_stays_on_board() {
        let grid = Grid::new(32, 24);
        let mut rng = StdRng::seed_from_u64(7);
        let mut apple = Apple::new(grid, &[], &mut rng);

        for _ in 0..500 {
            let pos = apple.relocate(&[], &mut rng).unwrap();
            assert!(grid.contains(pos));
            assert_eq!(apple.position(), pos);
        }
    }

    #[test]
    fn test_relocate_avoids_occupied_cells() {
        let grid = Grid::new(6, 4);
        let mut rng = StdRng::seed_from_u64(42);
        let cells = all_cells(grid);
        let mut apple = Apple::new(grid, &[], &mut rng);

        // Every occupancy from empty up to one free cell
        for taken in 0..cells.len() {
            let occupied = &cells[..taken];
            let pos = apple.relocate(occupied, &mut rng).unwrap();
            assert!(!occupied.contains(&pos));
        }
    }

    #[test]
    fn test_relocate_finds_last_free_cell() {
        let grid = Grid::new(4, 4);
        let mut rng = StdRng::seed_from_u64(3);
        let free = Position::new(2, 1);
        let occupied: Vec<Position> = all_cells(grid)
            .into_iter()
            .filter(|pos| *pos != free)
            .collect();

        let mut apple = Apple::new(grid, &occupied, &mut rng);
        assert_eq!(apple.position(), free);
        assert_eq!(apple.relocate(&occupied, &mut rng), Some(free));
    }

    #[test]
    fn test_relocate_on_full_board_is_noop() {
        let grid = Grid::new(3, 3);
        let mut rng = StdRng::seed_from_u64(1);
        let mut apple = Apple::new(grid, &[], &mut rng);
        let before = apple.position();

        assert_eq!(apple.relocate(&all_cells(grid), &mut rng), None);
        assert_eq!(apple.position(), before);
    }
}
