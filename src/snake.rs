use std::collections::{HashSet, VecDeque};

use rand::Rng;

use crate::grid::{Grid, Position};
use crate::input::{direction_change_is_valid, Direction};

/// Result of one [`Snake::move_forward`] step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveOutcome {
    Moved,
    /// The head would have entered a cell still held by the body. The body
    /// is left as it was before the step.
    Collided,
}

/// Mutable snake state: body, heading and growth target.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    last_removed: Option<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        Self::from_segments(vec![start], direction)
    }

    /// Creates a snake from explicit body segments (front is head). The
    /// growth target equals the number of segments.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            length: segments.len(),
            body: VecDeque::from(segments),
            direction,
            pending_direction: None,
            last_removed: None,
        }
    }

    /// Creates the post-collision snake: one segment on the grid centre,
    /// heading in a random direction.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        Self::new(grid.center(), Direction::random(rng))
    }

    /// Queues a turn for the next move. Reversals of the current heading are
    /// ignored; a later valid request replaces an earlier one.
    pub fn update_direction(&mut self, requested: Direction) {
        if direction_change_is_valid(self.direction, requested) {
            self.pending_direction = Some(requested);
        }
    }

    /// Applies one movement step on `grid`.
    pub fn move_forward(&mut self, grid: Grid) -> MoveOutcome {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let next_head = grid.wrap(self.head(), self.direction);

        // The tail cell is free this tick when it is about to be popped.
        let vacating_tail = self.body.len() + 1 > self.length;
        let kept = if vacating_tail {
            self.body.len() - 1
        } else {
            self.body.len()
        };
        if self.body.iter().take(kept).any(|segment| *segment == next_head) {
            return MoveOutcome::Collided;
        }

        self.body.push_front(next_head);
        self.last_removed = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };

        MoveOutcome::Moved
    }

    /// Raises the growth target by one. The body catches up on the next move.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Puts the snake back to a single centred segment with a random heading.
    pub fn reset<R: Rng + ?Sized>(&mut self, grid: Grid, rng: &mut R) {
        *self = Self::spawn(grid, rng);
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns the set of cells the body covers.
    #[must_use]
    pub fn occupied(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the growth target.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Returns the cell vacated by the most recent move, if any.
    #[must_use]
    pub fn last_removed(&self) -> Option<Position> {
        self.last_removed
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
