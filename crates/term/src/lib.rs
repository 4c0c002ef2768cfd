//! Terminal "game renderer" for the snake game.
//!
//! A small, game-oriented rendering layer: the view draws a snapshot into a
//! plain framebuffer, and the renderer flushes only what changed to the
//! terminal. No widget toolkit, no layout engine.
//!
//! - Keep `core` deterministic and testable
//! - Control aspect ratio precisely (2 columns per grid cell by default)
//! - Blend particle colors over the board in true color

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use audio::BellAudio;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
