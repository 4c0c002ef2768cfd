//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Two coordinate spaces are in play:
//!
//! - **Grid space**: integer [`Cell`]s, `x` grows to the right and `y` grows down.
//! - **Pixel space**: `f32` positions on the virtual canvas. A grid cell is
//!   `cell_px` pixels square; particles live in pixel space.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_RATE_HZ` | 8 | Gameplay ticks per second |
//! | `DEFAULT_FRAME_RATE_HZ` | 60 | Render frames per second |
//! | `DEFAULT_CELL_PX` | 20 | Grid cell size in pixels |
//! | `DEFAULT_CANVAS_WIDTH_PX` | 600 | Virtual canvas width |
//! | `DEFAULT_CANVAS_HEIGHT_PX` | 400 | Virtual canvas height |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, GameAction};
//!
//! let head = Cell::new(5, 5);
//! assert_eq!(head.step(Direction::Right), Cell::new(6, 5));
//!
//! assert!(Direction::Left.is_opposite(Direction::Right));
//!
//! let action = GameAction::from_str("up").unwrap();
//! assert_eq!(action, GameAction::Turn(Direction::Up));
//! ```

/// Gameplay ticks per second (snake steps per second).
pub const DEFAULT_TICK_RATE_HZ: u32 = 8;

/// Render frames per second (particle advance + draw).
pub const DEFAULT_FRAME_RATE_HZ: u32 = 60;

/// Grid cell size in pixels.
pub const DEFAULT_CELL_PX: u32 = 20;

/// Virtual canvas width in pixels (30 cells at the default cell size).
pub const DEFAULT_CANVAS_WIDTH_PX: u32 = 600;

/// Virtual canvas height in pixels (20 cells at the default cell size).
pub const DEFAULT_CANVAS_HEIGHT_PX: u32 = 400;

/// Minimum grid extent on either axis.
///
/// Anything smaller leaves no free interior cell next to the spawn cell.
pub const MIN_GRID_CELLS: u32 = 4;

/// Maximum grid extent on either axis.
///
/// Keeps cell coordinates and the scaled terminal frame well inside `i32` and `u16`.
pub const MAX_GRID_CELLS: u32 = 1000;

/// Pointer travel (pixel units) before a drag counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f32 = 30.0;

/// Number of ambient tracks the audio collaborator chooses from.
pub const AMBIENT_TRACK_COUNT: u32 = 5;

/// Spark (primary) particles spawned per burst.
pub const SPARK_COUNT: usize = 50;

/// Smoke (secondary) particles spawned per burst.
pub const SMOKE_COUNT: usize = 20;

/// Spark initial speed range `[min, max)` in pixels per frame.
pub const SPARK_SPEED: (f32, f32) = (2.0, 5.0);

/// Spark initial size range `[min, max)` in pixels.
pub const SPARK_SIZE: (f32, f32) = (2.0, 4.0);

/// Spark downward acceleration per frame.
pub const SPARK_GRAVITY: f32 = 0.1;

/// Spark alpha lost per frame.
pub const SPARK_ALPHA_STEP: f32 = 0.02;

/// Spark size lost per frame.
pub const SPARK_SIZE_STEP: f32 = 0.05;

/// Smoke initial speed range `[min, max)` in pixels per frame.
pub const SMOKE_SPEED: (f32, f32) = (0.5, 1.5);

/// Smoke initial size range `[min, max)` in pixels.
pub const SMOKE_SIZE: (f32, f32) = (3.0, 6.0);

/// Smoke starting alpha.
pub const SMOKE_ALPHA: f32 = 0.8;

/// Smoke acceleration per frame (negative: rises).
pub const SMOKE_GRAVITY: f32 = -0.05;

/// Smoke alpha lost per frame.
pub const SMOKE_ALPHA_STEP: f32 = 0.01;

/// Smoke size gained per frame.
pub const SMOKE_SIZE_STEP: f32 = 0.05;

/// Smoke size cap in pixels.
pub const SMOKE_SIZE_MAX: f32 = 10.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_thirty_by_twenty() {
        assert_eq!(DEFAULT_CANVAS_WIDTH_PX / DEFAULT_CELL_PX, 30);
        assert_eq!(DEFAULT_CANVAS_HEIGHT_PX / DEFAULT_CELL_PX, 20);
    }

    #[test]
    fn particle_defaults() {
        assert_eq!(SPARK_COUNT, 50);
        assert_eq!(SMOKE_COUNT, 20);
        assert!(SPARK_GRAVITY > 0.0);
        assert!(SMOKE_GRAVITY < 0.0);
        assert!(SMOKE_ALPHA < 1.0);
        assert!(SMOKE_ALPHA_STEP < SPARK_ALPHA_STEP);
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend from `self` toward `other` (`t = 0` keeps `self`).
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Palette shared by the snake body, the food and the spark particles.
pub const PALETTE: [Rgb; 16] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 165, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(128, 0, 128),
    Rgb::new(255, 0, 255),
    Rgb::new(128, 0, 0),
    Rgb::new(128, 128, 0),
    Rgb::new(0, 128, 0),
    Rgb::new(0, 128, 128),
    Rgb::new(0, 0, 128),
    Rgb::new(128, 0, 128),
    Rgb::new(255, 192, 203),
    Rgb::new(192, 192, 192),
];

/// Smoke particle color.
pub const SMOKE_COLOR: Rgb = Rgb::new(128, 128, 128);

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Movement direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta `(dx, dy)`; `y` grows downward.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True if turning from `self` to `other` would be a 180-degree reversal.
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Lifecycle phase of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Waiting for the first start signal.
    NotStarted,
    Playing,
    /// Ticks and frames are both frozen.
    Paused,
    /// Terminal until a reset command.
    Over,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::NotStarted => "not_started",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::Over => "over",
        }
    }
}

/// Normalized commands delivered by the input adapter
///
/// Every input modality (keys, pointer press, drag) is reduced to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Direction intent
    Turn(Direction),
    /// Start signal (only meaningful before the first start)
    Start,
    /// Toggle between Playing and Paused
    TogglePause,
    /// Start a new round (only meaningful when the game is over)
    Reset,
    /// Pointer press: starts the first round, or resets after game over
    Tap,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("pause"), Some(GameAction::TogglePause));
    /// assert_eq!(GameAction::from_str("Down"), Some(GameAction::Turn(Direction::Down)));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(dir) = Direction::from_str(s) {
            return Some(GameAction::Turn(dir));
        }
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "pause" => Some(GameAction::TogglePause),
            "reset" => Some(GameAction::Reset),
            "tap" => Some(GameAction::Tap),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(dir) => dir.as_str(),
            GameAction::Start => "start",
            GameAction::TogglePause => "pause",
            GameAction::Reset => "reset",
            GameAction::Tap => "tap",
        }
    }
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverReason {
    Wall,
    SelfCollision,
    /// No free interior cell is left for food.
    BoardFull,
}

impl OverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverReason::Wall => "wall",
            OverReason::SelfCollision => "self",
            OverReason::BoardFull => "board_full",
        }
    }
}

/// Core-side notification for collaborators (audio, logging).
///
/// Drained by the runtime after each tick or action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Restarted,
    AteFood { at: Cell, score: u32 },
    GameOver { reason: OverReason, score: u32 },
}
