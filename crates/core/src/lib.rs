//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games and identical fireworks
//! - **Testable**: Unit tests for every rule and transition
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: grid dimensions, bounds and occupancy checks
//! - [`game_state`]: phase machine, movement, collision, food and scoring
//! - [`particles`]: firework bursts (sparks + smoke) advanced per frame
//! - [`rng`]: injectable random sources (seeded LCG, thread RNG)
//! - [`snapshot`]: borrowed read-only view for renderers
//! - [`audio`]: audio collaborator trait
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, Grid};
//! use tui_snake_types::{Direction, GameAction, GamePhase};
//!
//! let mut game = GameState::new(Grid::new(20, 20), 20, 12345);
//! game.apply_action(GameAction::Turn(Direction::Up));
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! let head = game.head();
//! game.tick();
//! assert_eq!(game.head(), head.step(Direction::Up));
//! ```
//!
//! # Timing
//!
//! Two clocks drive a game:
//! - [`GameState::tick`](game_state::GameState::tick) at the configured tick rate (movement)
//! - [`GameState::advance_frame`](game_state::GameState::advance_frame) once per rendered frame (particles)
//!
//! Both are frozen while paused.

pub mod audio;
pub mod game_state;
pub mod grid;
pub mod particles;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use audio::{AudioSink, NullAudio};
pub use game_state::GameState;
pub use grid::{is_occupied, Grid};
pub use particles::{Burst, Particle, ParticleEngine};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::GameSnapshot;
