use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Directory name used under the platform config and data dirs.
pub const APP_DIR_NAME: &str = "torus-snake";

const CONFIG_FILE_NAME: &str = "config.json";

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 32;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 24;

/// Snake length that ends the session in victory.
pub const DEFAULT_WIN_LENGTH: usize = 20;

/// Slowest selectable tick rate.
pub const FPS_MIN: u32 = 5;

/// Fastest selectable tick rate.
pub const FPS_MAX: u32 = 30;

/// Tick rate at startup and after every collision reset.
pub const FPS_DEFAULT: u32 = 10;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Load-time constants for one session.
///
/// Every field may be omitted from the JSON file; missing fields keep
/// their defaults.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid: GridSize,
    pub win_length: usize,
    pub fps_min: u32,
    pub fps_max: u32,
    pub fps_default: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            win_length: DEFAULT_WIN_LENGTH,
            fps_min: FPS_MIN,
            fps_max: FPS_MAX,
            fps_default: FPS_DEFAULT,
        }
    }
}

impl GameConfig {
    /// Creates the default configuration on a custom grid.
    #[must_use]
    pub fn with_grid(width: u16, height: u16) -> Self {
        Self {
            grid: GridSize { width, height },
            ..Self::default()
        }
    }

    /// Replaces every field the overrides set.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(width) = overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = overrides.height {
            self.grid.height = height;
        }
        if let Some(win_length) = overrides.win_length {
            self.win_length = win_length;
        }
        if let Some(fps) = overrides.fps {
            self.fps_default = fps;
        }
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let GridSize { width, height } = self.grid;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }

        if self.fps_min == 0 {
            return Err(ConfigError::ZeroSpeed);
        }

        if self.fps_min > self.fps_max {
            return Err(ConfigError::SpeedBounds {
                min: self.fps_min,
                max: self.fps_max,
            });
        }

        if !(self.fps_min..=self.fps_max).contains(&self.fps_default) {
            return Err(ConfigError::DefaultSpeed {
                default: self.fps_default,
                min: self.fps_min,
                max: self.fps_max,
            });
        }

        // The win check has to fire before food placement runs out of free cells.
        let cells = self.grid.total_cells();
        if self.win_length < 2 || self.win_length > cells {
            return Err(ConfigError::WinLength {
                win_length: self.win_length,
                cells,
            });
        }

        Ok(())
    }

    /// Loads a configuration from a JSON file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the explicit file when given, else the default config file.
    ///
    /// A missing default file yields the built-in defaults; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };

        match Self::load_from_path(&path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub win_length: Option<usize>,
    pub fps: Option<u32>,
}

/// Returns the platform-correct config file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    Some(base)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::error::ConfigError;

    use super::{ConfigOverrides, GameConfig, GridSize};

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();

        assert_eq!(config.grid, GridSize { width: 32, height: 24 });
        assert_eq!(config.win_length, 20);
        assert_eq!((config.fps_min, config.fps_default, config.fps_max), (5, 10, 30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let config = GameConfig::with_grid(0, 10);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyGrid { width: 0, height: 10 })
        ));
    }

    #[test]
    fn speed_bounds_must_bracket_default() {
        let reversed = GameConfig {
            fps_min: 20,
            fps_max: 10,
            ..GameConfig::default()
        };
        let outside = GameConfig {
            fps_default: 40,
            ..GameConfig::default()
        };
        let zero = GameConfig {
            fps_min: 0,
            ..GameConfig::default()
        };

        assert!(matches!(reversed.validate(), Err(ConfigError::SpeedBounds { .. })));
        assert!(matches!(outside.validate(), Err(ConfigError::DefaultSpeed { .. })));
        assert!(matches!(zero.validate(), Err(ConfigError::ZeroSpeed)));
    }

    #[test]
    fn win_length_must_fit_on_grid() {
        let too_long = GameConfig {
            win_length: 17,
            ..GameConfig::with_grid(4, 4)
        };
        let too_short = GameConfig {
            win_length: 1,
            ..GameConfig::default()
        };

        assert!(matches!(
            too_long.validate(),
            Err(ConfigError::WinLength { win_length: 17, cells: 16 })
        ));
        assert!(matches!(too_short.validate(), Err(ConfigError::WinLength { .. })));
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let mut config = GameConfig::default();

        config.apply_overrides(ConfigOverrides {
            width: Some(40),
            fps: Some(12),
            ..ConfigOverrides::default()
        });

        assert_eq!(config.grid, GridSize { width: 40, height: 24 });
        assert_eq!(config.fps_default, 12);
        assert_eq!(config.win_length, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = unique_test_path("partial");
        write_test_file(&path, r#"{ "grid": { "width": 12, "height": 9 }, "win_length": 8 }"#);

        let config = GameConfig::load_from_path(&path).expect("config should load");

        assert_eq!(config.grid, GridSize { width: 12, height: 9 });
        assert_eq!(config.win_length, 8);
        assert_eq!(config.fps_default, 10);
        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_file_returns_parse_error() {
        let path = unique_test_path("malformed");
        write_test_file(&path, "not-json");

        assert!(matches!(
            GameConfig::load_from_path(&path),
            Err(ConfigError::Parse { .. })
        ));
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = unique_test_path("missing");

        assert!(matches!(
            GameConfig::load(Some(&path)),
            Err(ConfigError::Read { .. })
        ));
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("torus-snake-config-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn write_test_file(path: &PathBuf, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
