use std::collections::hash_map::DefaultHasher;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;
use crate::particles::Burst;
use crate::types::{Cell, Direction, GamePhase, Rgb};

/// Immutable view of everything the render adapter needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub grid: Grid,
    pub cell_px: u32,
    /// Head first.
    pub snake: &'a VecDeque<Cell>,
    pub food: Cell,
    pub direction: Direction,
    pub phase: GamePhase,
    pub score: u32,
    pub snake_color: Rgb,
    pub food_color: Rgb,
    pub bursts: &'a [Burst],
    pub round_id: u32,
}

impl GameSnapshot<'_> {
    pub fn head(&self) -> Option<Cell> {
        self.snake.front().copied()
    }

    /// Nothing on screen moves between ticks (no live particles).
    pub fn is_static(&self) -> bool {
        self.bursts.is_empty()
    }

    /// Cheap identity of the visible gameplay state, for render throttling.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.grid.hash(&mut h);
        self.snake.hash(&mut h);
        self.food.hash(&mut h);
        self.direction.hash(&mut h);
        self.phase.hash(&mut h);
        self.score.hash(&mut h);
        self.snake_color.hash(&mut h);
        self.food_color.hash(&mut h);
        self.round_id.hash(&mut h);
        h.finish()
    }
}
