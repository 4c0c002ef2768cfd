//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! `crossterm` event types. It maps key events and mouse gestures into
//! [`crate::types::GameAction`]s; legality (e.g. no reversals) is enforced by
//! the core, identically for every modality.

pub mod map;
pub mod pointer;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{classify_swipe, PixelScale, PointerTracker};
