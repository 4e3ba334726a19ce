use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a [`crate::config::GameConfig`] cannot be loaded or used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },

    #[error("speed bounds are out of order: min {min} > max {max}")]
    SpeedBounds { min: u32, max: u32 },

    #[error("minimum speed must be at least 1 tick per second")]
    ZeroSpeed,

    #[error("default speed {default} lies outside [{min}, {max}]")]
    DefaultSpeed { default: u32, min: u32, max: u32 },

    #[error("win length {win_length} must be between 2 and the {cells} cells of the grid")]
    WinLength { win_length: usize, cells: usize },
}

/// Host-level failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
