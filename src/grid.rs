use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Toroidal coordinate space: stepping off one edge re-enters on the opposite one.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    size: GridSize,
}

impl Grid {
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        debug_assert!(size.width > 0 && size.height > 0);
        Self { size }
    }

    #[must_use]
    pub fn size(self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn width(self) -> i32 {
        i32::from(self.size.width)
    }

    #[must_use]
    pub fn height(self) -> i32 {
        i32::from(self.size.height)
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn cell_count(self) -> usize {
        self.size.total_cells()
    }

    /// Returns the cell a fresh snake starts on.
    #[must_use]
    pub fn center(self) -> Position {
        Position::new(self.width() / 2, self.height() / 2)
    }

    /// Returns true when the position lies inside the grid.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width() && position.y < self.height()
    }

    /// Steps `position` one cell in `direction`, wrapping on both axes.
    #[must_use]
    pub fn wrap(self, position: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: (position.x + dx).rem_euclid(self.width()),
            y: (position.y + dy).rem_euclid(self.height()),
        }
    }

    /// Iterates every cell row by row.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let width = self.width();
        (0..self.height()).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }
}
