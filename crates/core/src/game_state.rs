//! Game state module - manages the complete game state
//!
//! This module ties together all core components: grid, snake, food, RNG and
//! the particle engine. It owns the phase machine
//! (`NotStarted -> Playing <-> Paused -> Over -> Playing`), the per-tick
//! movement and collision rules, and the per-frame particle advance.

use std::collections::VecDeque;

use log::{debug, info};

use crate::grid::{is_occupied, Grid};
use crate::particles::ParticleEngine;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Rejection-sampling attempts before falling back to scanning free cells.
const FOOD_SAMPLE_ATTEMPTS: u32 = 64;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    grid: Grid,
    cell_px: u32,
    /// Head first.
    snake: VecDeque<Cell>,
    food: Cell,
    /// Committed at the last tick.
    direction: Direction,
    /// Applied at the next tick.
    pending: Direction,
    score: u32,
    phase: GamePhase,
    snake_color: usize,
    food_color: usize,
    particles: ParticleEngine,
    /// Monotonic round id (increments on reset).
    round_id: u32,
    /// Ticks that moved the snake in the current round.
    steps: u32,
    /// Collaborator notifications not yet drained.
    events: Vec<GameEvent>,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a reproducible game driven by the seeded LCG
    pub fn new(grid: Grid, cell_px: u32, seed: u32) -> Self {
        Self::with_rng(grid, cell_px, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a game driven by an arbitrary random source
    pub fn with_rng(grid: Grid, cell_px: u32, rng: R) -> Self {
        let center = grid.center();
        let mut state = Self {
            grid,
            cell_px: cell_px.max(1),
            snake: VecDeque::from([center]),
            food: center,
            direction: Direction::Right,
            pending: Direction::Right,
            score: 0,
            phase: GamePhase::NotStarted,
            snake_color: 0,
            food_color: 0,
            particles: ParticleEngine::new(),
            round_id: 0,
            steps: 0,
            events: Vec::new(),
            rng,
        };
        state.reset_round();
        state
    }

    /// Shared by construction and reset: fresh snake, food, colors and effects.
    fn reset_round(&mut self) {
        let center = self.grid.center();
        self.snake.clear();
        self.snake.push_back(center);
        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.score = 0;
        self.steps = 0;
        self.snake_color = self.random_palette_index();
        self.food_color = self.random_palette_index();
        self.particles.clear();
        // A grid is at least 4x4, so a one-cell snake always leaves interior room.
        self.food = self.generate_food().unwrap_or(center);
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn cell_px(&self) -> u32 {
        self.cell_px
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake.front().copied().unwrap_or_else(|| self.grid.center())
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn snake_color(&self) -> Rgb {
        PALETTE[self.snake_color]
    }

    pub fn food_color(&self) -> Rgb {
        PALETTE[self.food_color]
    }

    pub fn particles(&self) -> &ParticleEngine {
        &self.particles
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Drain pending collaborator notifications in emission order.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            grid: self.grid,
            cell_px: self.cell_px,
            snake: &self.snake,
            food: self.food,
            direction: self.direction,
            phase: self.phase,
            score: self.score,
            snake_color: self.snake_color(),
            food_color: self.food_color(),
            bursts: self.particles.bursts(),
            round_id: self.round_id,
        }
    }

    /// `NotStarted -> Playing`. Returns false in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::NotStarted {
            return false;
        }
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Started);
        info!(
            "game started: grid {}x{}, food at ({}, {})",
            self.grid.width(),
            self.grid.height(),
            self.food.x,
            self.food.y
        );
        true
    }

    /// `Playing <-> Paused`. Returns false in any other phase.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            _ => return false,
        };
        info!("phase -> {}", self.phase.as_str());
        true
    }

    /// `Over -> Playing` through the same reset procedure as a fresh game.
    ///
    /// A no-op outside `Over`.
    pub fn reset(&mut self) -> bool {
        if self.phase != GamePhase::Over {
            return false;
        }
        self.reset_round();
        self.round_id = self.round_id.wrapping_add(1);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Restarted);
        info!("round {} started", self.round_id);
        true
    }

    /// Queue a direction for the next tick.
    ///
    /// Rejected when it reverses the committed direction, so two quick
    /// turns between ticks can never fold the head back through the neck.
    pub fn queue_direction(&mut self, dir: Direction) -> bool {
        if !matches!(self.phase, GamePhase::NotStarted | GamePhase::Playing) {
            return false;
        }
        if self.direction.is_opposite(dir) {
            return false;
        }
        self.pending = dir;
        true
    }

    /// Apply a normalized input command
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(dir) => {
                let started = self.start();
                let queued = self.queue_direction(dir);
                started || queued
            }
            GameAction::Start => self.start(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Reset => self.reset(),
            GameAction::Tap => match self.phase {
                GamePhase::NotStarted => self.start(),
                GamePhase::Over => self.reset(),
                _ => false,
            },
        }
    }

    /// Main game tick - advance the snake by one cell
    ///
    /// Returns true if the snake moved. Only runs in `Playing`.
    pub fn tick(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }

        self.direction = self.pending;
        let next = self.head().step(self.direction);

        if !self.grid.in_bounds(next) {
            self.end_round(OverReason::Wall);
            return false;
        }

        // The tail vacates its cell this tick unless the snake grows.
        let grows = next == self.food;
        let body_len = if grows {
            self.snake.len()
        } else {
            self.snake.len() - 1
        };
        if is_occupied(next, self.snake.iter().take(body_len)) {
            self.end_round(OverReason::SelfCollision);
            return false;
        }

        self.snake.push_front(next);
        self.steps = self.steps.wrapping_add(1);

        if grows {
            self.eat(next);
        } else {
            self.snake.pop_back();
        }

        true
    }

    /// Per-frame update: advance particle effects.
    ///
    /// Frozen while paused, like the tick.
    pub fn advance_frame(&mut self) {
        if self.phase == GamePhase::Paused {
            return;
        }
        self.particles.advance_frame();
    }

    fn eat(&mut self, at: Cell) {
        self.score += 1;
        self.snake_color = self.random_palette_index();
        self.food_color = self.random_palette_index();

        let (px, py) = self.grid.cell_center_px(at, self.cell_px);
        self.particles.spawn_burst(px, py, &mut self.rng);
        self.events.push(GameEvent::AteFood {
            at,
            score: self.score,
        });
        debug!(
            "ate food at ({}, {}), score {}, length {}",
            at.x,
            at.y,
            self.score,
            self.snake.len()
        );

        match self.generate_food() {
            Some(food) => self.food = food,
            None => self.end_round(OverReason::BoardFull),
        }
    }

    fn end_round(&mut self, reason: OverReason) {
        self.phase = GamePhase::Over;
        self.events.push(GameEvent::GameOver {
            reason,
            score: self.score,
        });
        info!(
            "game over ({}): score {}, length {}, steps {}",
            reason.as_str(),
            self.score,
            self.snake.len(),
            self.steps
        );
    }

    fn random_palette_index(&mut self) -> usize {
        self.rng.next_below(PALETTE.len() as u32) as usize
    }

    /// Pick a free interior cell, or `None` if the interior is full.
    fn generate_food(&mut self) -> Option<Cell> {
        let (w, h) = self.grid.interior_size();
        if w == 0 || h == 0 {
            return None;
        }

        for _ in 0..FOOD_SAMPLE_ATTEMPTS {
            let cell = Cell::new(
                1 + self.rng.next_below(w) as i32,
                1 + self.rng.next_below(h) as i32,
            );
            if !is_occupied(cell, &self.snake) {
                return Some(cell);
            }
        }

        // Crowded board: pick uniformly among what is left.
        let free: Vec<Cell> = self
            .grid
            .interior_cells()
            .filter(|&c| !is_occupied(c, &self.snake))
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.next_below(free.len() as u32) as usize])
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(
            Grid::from_canvas(DEFAULT_CANVAS_WIDTH_PX, DEFAULT_CANVAS_HEIGHT_PX, DEFAULT_CELL_PX),
            DEFAULT_CELL_PX,
            1,
        )
    }
}

#[cfg(test)]
impl<R: RandomSource> GameState<R> {
    /// Force a mid-round layout (head first) and enter `Playing`.
    fn set_scenario(&mut self, snake: &[Cell], direction: Direction, food: Cell) {
        self.snake = snake.iter().copied().collect();
        self.direction = direction;
        self.pending = direction;
        self.food = food;
        self.phase = GamePhase::Playing;
    }
}
