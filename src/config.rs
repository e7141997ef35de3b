//! Board and pacing configuration
//!
//! Supplied once when a game is built and never changed afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Narrowest board that fits the 3-segment start layout around the centre
pub const MIN_COLUMNS: u32 = 4;
/// Largest board edge; cells are addressed with `i32` coordinates
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive")]
    Zero { field: &'static str },

    #[error("board needs at least {min} columns, got {columns}", min = MIN_COLUMNS)]
    TooNarrow { columns: u32 },

    #[error("{field} must be at most {max}, got {value}", max = MAX_DIMENSION)]
    TooLarge { field: &'static str, value: u32 },

    #[error("{axis} canvas size overflows: {cells} cells of {cell_size}px")]
    PixelOverflow {
        axis: &'static str,
        cells: u32,
        cell_size: u32,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Board width in cells
    pub columns: u32,
    /// Board height in cells
    pub rows: u32,
    /// Cell edge in pixels
    pub cell_size: u32,
    /// Tick interval at score 0
    pub base_speed_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: 25,
            rows: 20,
            cell_size: 28,
            base_speed_ms: 200,
        }
    }
}

impl GameConfig {
    pub fn new(
        columns: u32,
        rows: u32,
        cell_size: u32,
        base_speed_ms: u32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            columns,
            rows,
            cell_size,
            base_speed_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON object; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("columns", self.columns),
            ("rows", self.rows),
            ("cellSize", self.cell_size),
            ("baseSpeedMs", self.base_speed_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::Zero { field });
            }
        }
        if self.columns < MIN_COLUMNS {
            return Err(ConfigError::TooNarrow {
                columns: self.columns,
            });
        }
        for (field, value) in [("columns", self.columns), ("rows", self.rows)] {
            if value > MAX_DIMENSION {
                return Err(ConfigError::TooLarge { field, value });
            }
        }
        for (axis, cells) in [("width", self.columns), ("height", self.rows)] {
            if cells.checked_mul(self.cell_size).is_none() {
                return Err(ConfigError::PixelOverflow {
                    axis,
                    cells,
                    cell_size: self.cell_size,
                });
            }
        }
        Ok(())
    }

    /// Head cell of a freshly spawned snake
    pub fn start_cell(&self) -> (i32, i32) {
        ((self.columns / 2) as i32, (self.rows / 2) as i32)
    }

    /// Canvas size in pixels. Saturates on configs that skipped `validate`.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.columns.saturating_mul(self.cell_size),
            self.rows.saturating_mul(self.cell_size),
        )
    }
}
