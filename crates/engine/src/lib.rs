//! Scheduling layer between the pure core and a platform runtime.
//!
//! - [`schedule`]: turns elapsed time into due ticks and frames
//! - [`game_loop`]: owns a session and runs steps in the documented order

pub mod game_loop;
pub mod schedule;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use game_loop::GameLoop;
pub use schedule::{Scheduler, Step, MAX_CATCH_UP_TICKS};
