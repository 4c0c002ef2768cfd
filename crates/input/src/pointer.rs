//! Pointer gestures (mouse press / drag) to game actions.
//!
//! A press anchors the gesture and counts as a tap (start or reset,
//! depending on the game phase). Any later motion that strays more than the
//! swipe threshold from the anchor becomes a direction intent along the
//! dominant axis and re-anchors at the current position, so one long drag
//! can steer several times.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, GameAction, SWIPE_THRESHOLD_PX};

/// Terminal cell to canvas pixel conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelScale {
    pub px_per_col: f32,
    pub px_per_row: f32,
}

impl PixelScale {
    pub fn new(px_per_col: f32, px_per_row: f32) -> Self {
        Self {
            px_per_col,
            px_per_row,
        }
    }

    pub fn to_px(&self, column: u16, row: u16) -> (f32, f32) {
        (column as f32 * self.px_per_col, row as f32 * self.px_per_row)
    }
}

impl Default for PixelScale {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct PointerTracker {
    anchor: Option<(f32, f32)>,
    threshold: f32,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD_PX)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            anchor: None,
            threshold,
        }
    }

    pub fn anchor(&self) -> Option<(f32, f32)> {
        self.anchor
    }

    /// Pointer down at a canvas position.
    pub fn press(&mut self, x: f32, y: f32) -> GameAction {
        self.anchor = Some((x, y));
        GameAction::Tap
    }

    /// Pointer motion at a canvas position.
    pub fn motion(&mut self, x: f32, y: f32) -> Option<GameAction> {
        let (ax, ay) = self.anchor?;
        let (dx, dy) = (x - ax, y - ay);
        if (dx * dx + dy * dy).sqrt() <= self.threshold {
            return None;
        }
        self.anchor = Some((x, y));
        Some(GameAction::Turn(classify_swipe(dx, dy)))
    }

    /// Translate a terminal mouse event.
    pub fn handle_mouse_event(&mut self, event: MouseEvent, scale: PixelScale) -> Option<GameAction> {
        let (x, y) = scale.to_px(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(self.press(x, y)),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => self.motion(x, y),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.anchor = None;
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Dominant-axis classification; ties go to the vertical axis.
pub fn classify_swipe(dx: f32, dy: f32) -> Direction {
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_motion_without_press_is_ignored() {
        let mut p = PointerTracker::new();
        assert_eq!(p.motion(100.0, 100.0), None);
    }

    #[test]
    fn test_press_is_tap() {
        let mut p = PointerTracker::new();
        assert_eq!(p.press(10.0, 20.0), GameAction::Tap);
        assert_eq!(p.anchor(), Some((10.0, 20.0)));
    }

    #[test]
    fn test_short_drag_is_ignored() {
        let mut p = PointerTracker::new();
        p.press(0.0, 0.0);
        assert_eq!(p.motion(30.0, 0.0), None);
        assert_eq!(p.motion(20.0, 20.0), None);
        assert_eq!(p.anchor(), Some((0.0, 0.0)));
    }

    #[test]
    fn test_long_drag_picks_dominant_axis() {
        let mut p = PointerTracker::new();
        p.press(100.0, 100.0);
        assert_eq!(p.motion(140.0, 110.0), Some(GameAction::Turn(Direction::Right)));

        p.press(100.0, 100.0);
        assert_eq!(p.motion(60.0, 90.0), Some(GameAction::Turn(Direction::Left)));

        p.press(100.0, 100.0);
        assert_eq!(p.motion(110.0, 140.0), Some(GameAction::Turn(Direction::Down)));

        p.press(100.0, 100.0);
        assert_eq!(p.motion(95.0, 50.0), Some(GameAction::Turn(Direction::Up)));
    }

    #[test]
    fn test_swipe_reanchors() {
        let mut p = PointerTracker::new();
        p.press(0.0, 0.0);
        assert!(p.motion(40.0, 0.0).is_some());
        assert_eq!(p.anchor(), Some((40.0, 0.0)));
        // Measured from the new anchor: only 20px.
        assert_eq!(p.motion(60.0, 0.0), None);
        assert_eq!(p.motion(60.0, 45.0), Some(GameAction::Turn(Direction::Down)));
    }

    #[test]
    fn test_diagonal_tie_is_vertical() {
        assert_eq!(classify_swipe(40.0, 40.0), Direction::Down);
        assert_eq!(classify_swipe(-40.0, -40.0), Direction::Up);
    }

    #[test]
    fn test_mouse_events_are_scaled() {
        // One column = 10px, one row = 20px.
        let scale = PixelScale::new(10.0, 20.0);
        let mut p = PointerTracker::new();

        assert_eq!(
            p.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), scale),
            Some(GameAction::Tap)
        );
        assert_eq!(p.anchor(), Some((100.0, 100.0)));

        // 3 columns = 30px: not past the threshold.
        assert_eq!(
            p.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 13, 5), scale),
            None
        );
        // 2 rows = 40px up.
        assert_eq!(
            p.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 3), scale),
            Some(GameAction::Turn(Direction::Up))
        );
        assert_eq!(
            p.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 0, 0), scale),
            None
        );
    }
}
