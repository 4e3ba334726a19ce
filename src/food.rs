use std::collections::HashSet;

use rand::Rng;

use crate::grid::{Grid, Position};

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

/// Chooses free cells for new food.
#[derive(Debug, Clone, Copy)]
pub struct FoodPlacer {
    grid: Grid,
}

impl FoodPlacer {
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Samples cells uniformly until one is not in `occupied`.
    ///
    /// # Panics
    ///
    /// Panics when `occupied` covers the whole grid. Callers must treat a
    /// full board as a win before asking for food.
    #[must_use]
    pub fn place<R: Rng + ?Sized>(&self, rng: &mut R, occupied: &HashSet<Position>) -> Position {
        assert!(
            occupied.len() < self.grid.cell_count(),
            "FoodPlacer::place: no free cells on the board ({}x{})",
            self.grid.width(),
            self.grid.height(),
        );

        loop {
            let candidate = Position {
                x: rng.gen_range(0..self.grid.width()),
                y: rng.gen_range(0..self.grid.height()),
            };
            if !occupied.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Samples uniformly from the explicit free-cell list.
    ///
    /// Runs in one pass regardless of how full the board is. Returns `None`
    /// when every cell is occupied.
    #[must_use]
    pub fn place_from_free_cells<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        occupied: &HashSet<Position>,
    ) -> Option<Position> {
        let candidates: Vec<Position> = self
            .grid
            .cells()
            .filter(|cell| !occupied.contains(cell))
            .collect();

        if candidates.is_empty() {
            return None;
        }

        Some(candidates[rng.gen_range(0..candidates.len())])
    }

    /// Places a fresh [`Food`] on a free cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, occupied: &HashSet<Position>) -> Food {
        Food::new(self.place(rng, occupied))
    }
}
