//! Snake on a toroidal grid.
//!
//! The engine lives in [`grid`], [`food`], [`snake`] and [`game`]. The
//! remaining modules are the terminal front-end that feeds intents into a
//! [`game::GameState`] and draws its [`game::Snapshot`].

pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
