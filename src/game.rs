use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GameConfig, GridSize};
use crate::food::{Food, FoodPlacer};
use crate::grid::{Grid, Position};
use crate::input::{Direction, GameInput};
use crate::snake::{MoveOutcome, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    /// The snake hit itself this tick and the session was reset. Lasts for
    /// exactly one snapshot.
    Collided,
    /// Terminal. Ticks and inputs are ignored from here on.
    Victory,
}

/// Read-only view of the state handed to renderers after each tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub segments: Vec<Position>,
    pub last_removed: Option<Position>,
    pub food: Position,
    pub score: u32,
    pub ticks_per_second: u32,
    pub status: GameStatus,
    pub length: usize,
    pub win_length: usize,
    pub tick_count: u64,
    pub grid: GridSize,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub ticks_per_second: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    config: GameConfig,
    grid: Grid,
    placer: FoodPlacer,
    rng: StdRng,
}

impl GameState {
    /// Creates a session seeded from OS entropy.
    ///
    /// # Panics
    ///
    /// Panics when `config` fails [`GameConfig::validate`].
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    ///
    /// # Panics
    ///
    /// Panics when `config` fails [`GameConfig::validate`].
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        if let Err(error) = config.validate() {
            panic!("GameState: invalid config: {error}");
        }

        let grid = Grid::new(config.grid);
        let placer = FoodPlacer::new(grid);
        let snake = Snake::new(grid.center(), Direction::Right);
        let food = placer.spawn(&mut rng, &snake.occupied());

        Self {
            snake,
            food,
            score: 0,
            ticks_per_second: config.fps_default,
            tick_count: 0,
            status: GameStatus::Playing,
            config,
            grid,
            placer,
            rng,
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) {
        match self.status {
            GameStatus::Victory => return,
            GameStatus::Collided => self.status = GameStatus::Playing,
            GameStatus::Playing => {}
        }

        self.tick_count += 1;

        if self.snake.move_forward(self.grid) == MoveOutcome::Collided {
            info!(
                "self-collision at {:?} on tick {}, score {} lost",
                self.snake.head(),
                self.tick_count,
                self.score
            );
            self.reset_session();
            self.status = GameStatus::Collided;
            return;
        }

        if self.snake.head() == self.food.position {
            self.snake.grow();
            self.score += 1;
            debug!("food eaten at {:?}, score {}", self.food.position, self.score);

            if self.snake.len() >= self.grid.cell_count() {
                self.declare_victory();
                return;
            }

            self.food = self.placer.spawn(&mut self.rng, &self.snake.occupied());
        }

        if self.snake.length() >= self.config.win_length {
            self.declare_victory();
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        if self.status == GameStatus::Victory {
            return;
        }

        match input {
            GameInput::Direction(direction) => self.snake.update_direction(direction),
            GameInput::SpeedUp => self.set_ticks_per_second(self.ticks_per_second.saturating_add(1)),
            GameInput::SpeedDown => {
                self.set_ticks_per_second(self.ticks_per_second.saturating_sub(1));
            }
            GameInput::Pause | GameInput::Quit | GameInput::Confirm => {}
        }
    }

    /// Returns the render view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.snake.segments().copied().collect(),
            last_removed: self.snake.last_removed(),
            food: self.food.position,
            score: self.score,
            ticks_per_second: self.ticks_per_second,
            status: self.status,
            length: self.snake.length(),
            win_length: self.config.win_length,
            tick_count: self.tick_count,
            grid: self.grid.size(),
        }
    }

    /// Returns true once the terminal victory state is reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Victory
    }

    fn set_ticks_per_second(&mut self, requested: u32) {
        let clamped = requested.clamp(self.config.fps_min, self.config.fps_max);
        if clamped != self.ticks_per_second {
            debug!("speed changed to {clamped} ticks/s");
        }
        self.ticks_per_second = clamped;
    }

    fn reset_session(&mut self) {
        self.snake = Snake::spawn(self.grid, &mut self.rng);
        self.food = self.placer.spawn(&mut self.rng, &self.snake.occupied());
        self.score = 0;
        self.ticks_per_second = self.config.fps_default;
    }

    fn declare_victory(&mut self) {
        info!(
            "victory on tick {} with length {} and score {}",
            self.tick_count,
            self.snake.length(),
            self.score
        );
        self.status = GameStatus::Victory;
    }
}
