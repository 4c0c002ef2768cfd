//! Runtime configuration.
//!
//! Defaults match the classic layout: a 600x400 pixel canvas cut into 20 px
//! cells, 8 moves per second, 60 frames per second. A JSON file may override
//! any subset of fields; the binary applies command-line overrides on top and
//! calls [`GameConfig::validate`] before starting.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameState, Grid, RandomSource};
use crate::engine::Scheduler;
use crate::types::{
    DEFAULT_CANVAS_HEIGHT_PX, DEFAULT_CANVAS_WIDTH_PX, DEFAULT_CELL_PX, DEFAULT_FRAME_RATE_HZ,
    DEFAULT_TICK_RATE_HZ, MAX_GRID_CELLS, MIN_GRID_CELLS,
};

/// Rates above this would round to a zero-millisecond interval.
pub const MAX_RATE_HZ: u32 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be non-zero")]
    Zero { field: &'static str },
    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        field: &'static str,
        value: u32,
        max: u32,
    },
    #[error("canvas yields a {width}x{height} grid, minimum is {min}x{min}")]
    GridTooSmall { width: u32, height: u32, min: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Snake moves per second.
    pub tick_rate_hz: u32,
    /// Virtual pixels per grid cell.
    pub cell_px: u32,
    pub canvas_width_px: u32,
    pub canvas_height_px: u32,
    /// Render frames (and particle steps) per second.
    pub frame_rate_hz: u32,
    /// Fixed seed for a reproducible game; random when absent.
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            cell_px: DEFAULT_CELL_PX,
            canvas_width_px: DEFAULT_CANVAS_WIDTH_PX,
            canvas_height_px: DEFAULT_CANVAS_HEIGHT_PX,
            frame_rate_hz: DEFAULT_FRAME_RATE_HZ,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Grid size in cells before clamping.
    pub fn grid_cells(&self) -> (u32, u32) {
        let cell = self.cell_px.max(1);
        (self.canvas_width_px / cell, self.canvas_height_px / cell)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("tick_rate_hz", self.tick_rate_hz),
            ("frame_rate_hz", self.frame_rate_hz),
        ] {
            if value == 0 {
                return Err(ConfigError::Zero { field });
            }
            if value > MAX_RATE_HZ {
                return Err(ConfigError::TooLarge {
                    field,
                    value,
                    max: MAX_RATE_HZ,
                });
            }
        }
        if self.cell_px == 0 {
            return Err(ConfigError::Zero { field: "cell_px" });
        }

        let (width, height) = self.grid_cells();
        if width < MIN_GRID_CELLS || height < MIN_GRID_CELLS {
            return Err(ConfigError::GridTooSmall {
                width,
                height,
                min: MIN_GRID_CELLS,
            });
        }
        for (field, value) in [("grid width", width), ("grid height", height)] {
            if value > MAX_GRID_CELLS {
                return Err(ConfigError::TooLarge {
                    field,
                    value,
                    max: MAX_GRID_CELLS,
                });
            }
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::from_canvas(self.canvas_width_px, self.canvas_height_px, self.cell_px)
    }

    pub fn scheduler(&self) -> Scheduler {
        Scheduler::new(self.tick_rate_hz, self.frame_rate_hz)
    }

    /// Fresh game seeded with `seed`.
    pub fn new_game(&self, seed: u32) -> GameState {
        GameState::new(self.grid(), self.cell_px, seed)
    }

    /// Fresh game driven by an arbitrary random source.
    pub fn new_game_with_rng<R: RandomSource>(&self, rng: R) -> GameState<R> {
        GameState::with_rng(self.grid(), self.cell_px, rng)
    }
}
