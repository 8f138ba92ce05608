use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The smallest board that still leaves room around the default seed.
pub const MIN_BOARD_SIZE: usize = 13;

/// The largest board. Keeps coordinates well within `i32` and the grid in memory.
pub const MAX_BOARD_SIZE: usize = 999;

/// Board size and seed used by [`GameConfig::default()`].
pub const DEFAULT_BOARD_SIZE: usize = 21;
pub const DEFAULT_LINE_LENGTH: usize = 8;

/// Parameters of one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the board. Must be odd, so that there is a center cell.
    pub size: usize,
    /// Length of each of the four runs in the seeded cross.
    pub line_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            line_length: DEFAULT_LINE_LENGTH,
        }
    }
}

impl GameConfig {
    pub fn new(size: usize, line_length: usize) -> Result<Self, ConfigError> {
        let config = Self { size, line_length };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall { size: self.size });
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge { size: self.size });
        }
        if self.size % 2 == 0 {
            return Err(ConfigError::EvenBoardSize { size: self.size });
        }
        if self.line_length < crate::WINDOW_LEN {
            return Err(ConfigError::LineTooShort {
                line_length: self.line_length,
            });
        }
        Ok(())
    }
}
