//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The core works in a virtual pixel canvas (`cell_px` pixels per grid cell).
//! Each grid cell becomes a `cell_w x cell_h` block of terminal cells, and
//! particle positions are scaled from pixels into that block space.

use crate::core::{GameSnapshot, Particle};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Direction, GamePhase};

const BOARD_BG: Rgb = Rgb::new(224, 247, 250);
const BORDER_FG: Rgb = Rgb::new(2, 119, 189);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const TEXT_FG: Rgb = Rgb::new(255, 255, 255);
const EYE_FG: Rgb = Rgb::new(0, 0, 0);

/// Panel needs at least this many columns to be drawn.
const PANEL_MIN_W: u16 = 12;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Virtual pixels per terminal column and per terminal row.
    ///
    /// The runtime feeds this to the pointer tracker so swipe distances are
    /// measured in the same units as the swipe threshold.
    pub fn pixel_scale(&self, cell_px: u32) -> (f32, f32) {
        let px = cell_px as f32;
        (px / self.cell_w as f32, px / self.cell_h as f32)
    }

    /// Top-left corner of the border frame for a given snapshot and viewport.
    pub fn frame_origin(&self, snap: &GameSnapshot, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(snap);
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = (snap.grid.width() as u16).saturating_mul(self.cell_w);
        let h = (snap.grid.height() as u16).saturating_mul(self.cell_h);
        (w.saturating_add(2), h.saturating_add(2))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT_FG, SCREEN_BG).into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let (start_x, start_y) = self.frame_origin(snap, viewport);
        let board = BoardRect {
            x: start_x.saturating_add(1),
            y: start_y.saturating_add(1),
            w: frame_w - 2,
            h: frame_h - 2,
        };

        fb.fill_rect(
            board.x,
            board.y,
            board.w,
            board.h,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(BORDER_FG, SCREEN_BG).bold(),
        );

        // Body first so the head always wins.
        let body = CellStyle::new(snap.snake_color, BOARD_BG);
        for &seg in snap.snake.iter().skip(1) {
            self.fill_grid_cell(fb, &board, seg, '█', body);
        }
        if let Some(head) = snap.head() {
            self.draw_head(fb, &board, head, snap.direction, snap.snake_color);
        }

        self.fill_grid_cell(
            fb,
            &board,
            snap.food,
            '●',
            CellStyle::new(snap.food_color, BOARD_BG).bold(),
        );

        // Smoke under sparks.
        let (px_per_col, px_per_row) = self.pixel_scale(snap.cell_px);
        for burst in snap.bursts {
            for p in burst.smoke() {
                let ch = if p.size >= 6.0 { '▒' } else { '░' };
                plot_particle(fb, &board, p, ch, px_per_col, px_per_row);
            }
        }
        for burst in snap.bursts {
            for p in burst.sparks() {
                let ch = if p.size >= 3.0 {
                    '*'
                } else if p.size >= 1.5 {
                    '+'
                } else {
                    '·'
                };
                plot_particle(fb, &board, p, ch, px_per_col, px_per_row);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.phase {
            GamePhase::NotStarted => {
                shade_rect(fb, &board, 0.6);
                draw_overlay_lines(
                    fb,
                    &board,
                    &[
                        Some("S N A K E"),
                        None,
                        Some("press SPACE or click to start"),
                        Some("arrows / WASD / swipe to steer"),
                    ],
                );
            }
            GamePhase::Paused => {
                shade_rect(fb, &board, 0.5);
                draw_overlay_lines(fb, &board, &[Some("PAUSED")]);
            }
            GamePhase::Over => {
                shade_rect(fb, &board, 0.7);
                let mut score_buf = [0u8; 32];
                let score_line = format_score(&mut score_buf, snap.score);
                draw_overlay_lines(
                    fb,
                    &board,
                    &[
                        Some("GAME OVER"),
                        None,
                        Some(score_line),
                        Some("press R or click to restart"),
                    ],
                );
            }
            GamePhase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        board: &BoardRect,
        cell: Cell,
        ch: char,
        style: CellStyle,
    ) {
        if cell.x < 0 || cell.y < 0 {
            return;
        }
        let x = board.x.saturating_add((cell.x as u16).saturating_mul(self.cell_w));
        let y = board.y.saturating_add((cell.y as u16).saturating_mul(self.cell_h));
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_head(
        &self,
        fb: &mut FrameBuffer,
        board: &BoardRect,
        head: Cell,
        direction: Direction,
        color: Rgb,
    ) {
        if head.x < 0 || head.y < 0 {
            return;
        }
        let style = CellStyle::new(EYE_FG, color).bold();
        self.fill_grid_cell(fb, board, head, ' ', style);

        // Eye sits on the leading edge of the block.
        let x0 = board.x.saturating_add((head.x as u16).saturating_mul(self.cell_w));
        let y0 = board.y.saturating_add((head.y as u16).saturating_mul(self.cell_h));
        let (dx, dy) = match direction {
            Direction::Left => (0, self.cell_h / 2),
            Direction::Right => (self.cell_w - 1, self.cell_h / 2),
            Direction::Up => (self.cell_w / 2, 0),
            Direction::Down => (self.cell_w / 2, self.cell_h - 1),
        };
        fb.put_char(x0.saturating_add(dx), y0.saturating_add(dy), head_glyph(direction), style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let dim = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.snake.len() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.phase.as_str(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "COLOR", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "██", CellStyle::new(snap.snake_color, SCREEN_BG));
        fb.put_str(
            panel_x + 3,
            y,
            "●",
            CellStyle::new(snap.food_color, SCREEN_BG),
        );
        y = y.saturating_add(2);

        for line in ["P pause", "R restart", "Q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }
}

/// Board interior in terminal cells.
struct BoardRect {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl BoardRect {
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x as i32
            && y >= self.y as i32
            && x < (self.x + self.w) as i32
            && y < (self.y + self.h) as i32
    }
}

fn head_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '▲',
        Direction::Down => '▼',
        Direction::Left => '◀',
        Direction::Right => '▶',
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '╭', style);
    fb.put_char(x + w - 1, y, '╮', style);
    fb.put_char(x, y + h - 1, '╰', style);
    fb.put_char(x + w - 1, y + h - 1, '╯', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Plot one particle, blending its color over whatever is underneath.
fn plot_particle(
    fb: &mut FrameBuffer,
    board: &BoardRect,
    p: &Particle,
    ch: char,
    px_per_col: f32,
    px_per_row: f32,
) {
    if !p.is_alive() {
        return;
    }
    let col = board.x as i32 + (p.x / px_per_col).floor() as i32;
    let row = board.y as i32 + (p.y / px_per_row).floor() as i32;
    if !board.contains(col, row) {
        return;
    }
    let (col, row) = (col as u16, row as u16);
    let under = fb.get(col, row).map(|c| c.style.bg).unwrap_or(BOARD_BG);
    fb.put_glyph(col, row, ch, under.lerp(p.color, p.alpha), false);
}

/// Darken a region toward black, like a translucent overlay.
fn shade_rect(fb: &mut FrameBuffer, board: &BoardRect, alpha: f32) {
    for y in board.y..board.y.saturating_add(board.h) {
        for x in board.x..board.x.saturating_add(board.w) {
            if let Some(mut cell) = fb.get(x, y) {
                cell.style.fg = cell.style.fg.lerp(SCREEN_BG, alpha);
                cell.style.bg = cell.style.bg.lerp(SCREEN_BG, alpha);
                fb.set(x, y, cell);
            }
        }
    }
}

/// Centered block of text lines; `None` is a blank spacer line.
fn draw_overlay_lines(fb: &mut FrameBuffer, board: &BoardRect, lines: &[Option<&str>]) {
    let n = lines.len() as u16;
    let top = board.y.saturating_add(board.h.saturating_sub(n) / 2);
    for (i, line) in lines.iter().enumerate() {
        let Some(text) = line else { continue };
        let text = clip_chars(text, board.w as usize);
        let y = top.saturating_add(i as u16);
        if y >= board.y.saturating_add(board.h) {
            break;
        }
        let style = if i == 0 {
            CellStyle::new(TEXT_FG, SCREEN_BG).bold()
        } else {
            CellStyle::new(TEXT_FG, SCREEN_BG)
        };
        fb.put_str_centered(board.x, board.w, y, text, style);
    }
}

fn clip_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

fn format_score(buf: &mut [u8; 32], score: u32) -> &str {
    use std::io::Write;

    let mut cursor = std::io::Cursor::new(&mut buf[..]);
    // 32 bytes always fit "final score " plus a u32.
    let _ = write!(cursor, "final score {score}");
    let len = cursor.position() as usize;
    std::str::from_utf8(&buf[..len]).unwrap_or("final score")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Grid};
    use crate::types::{Direction, GameAction};

    fn find(fb: &FrameBuffer, ch: char) -> Vec<(u16, u16)> {
        let mut out = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).map(|c| c.ch) == Some(ch) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_board_fits_in_viewport_and_is_centered() {
        let game = GameState::new(Grid::new(10, 6), 20, 1);
        let view = GameView::default();
        let fb = view.render(&game.snapshot(), Viewport::new(40, 12));

        // frame = 10*2+2 wide, 6+2 tall
        assert_eq!(view.frame_origin(&game.snapshot(), Viewport::new(40, 12)), (9, 2));
        assert_eq!(fb.get(9, 2).unwrap().ch, '╭');
        assert_eq!(fb.get(30, 9).unwrap().ch, '╯');
    }

    #[test]
    fn test_start_screen_overlay() {
        let game = GameState::new(Grid::new(20, 12), 20, 1);
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 20));
        assert!(fb.to_text().contains("S N A K E"));
        assert!(fb.to_text().contains("press SPACE"));
    }

    #[test]
    fn test_head_glyph_follows_direction() {
        let mut game = GameState::new(Grid::new(20, 12), 20, 1);
        game.start();
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 20));
        assert_eq!(find(&fb, '▶').len(), 1);
        assert!(!fb.to_text().contains("S N A K E"));

        game.apply_action(GameAction::Turn(Direction::Up));
        game.tick();
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 20));
        assert_eq!(find(&fb, '▲').len(), 1);
        assert!(find(&fb, '▶').is_empty());
    }

    #[test]
    fn test_head_and_food_positions() {
        let mut game = GameState::new(Grid::new(20, 12), 20, 1);
        game.start();
        let snap = game.snapshot();
        let view = GameView::default();
        let vp = Viewport::new(80, 20);
        let fb = view.render(&snap, vp);
        let (fx, fy) = view.frame_origin(&snap, vp);

        let head = snap.head().unwrap();
        let hx = fx + 1 + head.x as u16 * 2 + 1;
        let hy = fy + 1 + head.y as u16;
        let cell = fb.get(hx, hy).unwrap();
        assert_eq!(cell.ch, '▶');
        assert_eq!(cell.style.bg, snap.snake_color);

        let food_x = fx + 1 + snap.food.x as u16 * 2;
        let food_y = fy + 1 + snap.food.y as u16;
        let food = fb.get(food_x, food_y).unwrap();
        assert_eq!(food.ch, '●');
        assert_eq!(food.style.fg, snap.food_color);
    }

    #[test]
    fn test_pause_and_game_over_overlays() {
        let mut game = GameState::new(Grid::new(20, 12), 20, 1);
        game.start();
        game.toggle_pause();
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 20));
        assert!(fb.to_text().contains("PAUSED"));

        game.toggle_pause();
        for _ in 0..100 {
            if game.phase() != GamePhase::Playing {
                break;
            }
            game.tick();
        }
        assert_eq!(game.phase(), GamePhase::Over);
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 20));
        let text = fb.to_text();
        assert!(text.contains("GAME OVER"));
        assert!(text.contains(&format!("final score {}", game.score())));
        assert!(text.contains("press R"));
    }

    #[test]
    fn test_side_panel_shows_score_and_length() {
        let game = GameState::new(Grid::new(10, 10), 20, 1);
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(60, 14));
        let text = fb.to_text();
        assert!(text.contains("SCORE"));
        assert!(text.contains("LENGTH"));
        assert!(text.contains("STATE"));
        assert!(text.contains("not_started"));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let game = GameState::new(Grid::new(30, 20), 20, 1);
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }

    #[test]
    fn test_pixel_scale() {
        let view = GameView::default();
        assert_eq!(view.pixel_scale(20), (10.0, 20.0));
        assert_eq!(GameView::new(1, 1).pixel_scale(16), (16.0, 16.0));
    }

    #[test]
    fn test_overlay_text_stays_inside_border() {
        let game = GameState::new(Grid::new(10, 10), 20, 1);
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 12));
        for y in 1..11 {
            assert_eq!(fb.get(21, y).unwrap().ch, '│');
        }
        assert_eq!(clip_chars("héllo", 2), "hé");
        assert_eq!(clip_chars("hi", 5), "hi");
    }

    #[test]
    fn test_format_score() {
        let mut buf = [0u8; 32];
        assert_eq!(format_score(&mut buf, 4_294_967_295), "final score 4294967295");
    }
}
