//! Grid module - discrete coordinate space and occupancy rules
//!
//! The grid is derived from the virtual canvas: `floor(canvas_px / cell_px)`
//! cells on each axis. Coordinates: `x` in `0..width` (left to right), `y` in
//! `0..height` (top to bottom). The outermost ring is playable but food never
//! spawns there.

use crate::types::{Cell, MAX_GRID_CELLS, MIN_GRID_CELLS};

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a grid, clamping each axis to `MIN_GRID_CELLS..=MAX_GRID_CELLS`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: clamp_axis(width),
            height: clamp_axis(height),
        }
    }

    /// Derive the grid from a canvas size in pixels.
    pub fn from_canvas(canvas_width_px: u32, canvas_height_px: u32, cell_px: u32) -> Self {
        let cell_px = cell_px.max(1);
        Self::new(canvas_width_px / cell_px, canvas_height_px / cell_px)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if a cell lies inside the grid
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Check if a cell lies inside the grid, excluding the outermost ring
    pub fn in_interior(&self, cell: Cell) -> bool {
        cell.x >= 1 && cell.x < self.width - 1 && cell.y >= 1 && cell.y < self.height - 1
    }

    /// Spawn cell: `(floor(W/2), floor(H/2))`.
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Interior cell extent `(w, h)`; food is sampled in `1..=w` x `1..=h`.
    pub fn interior_size(&self) -> (u32, u32) {
        ((self.width - 2).max(0) as u32, (self.height - 2).max(0) as u32)
    }

    /// All interior cells in row-major order.
    pub fn interior_cells(&self) -> impl Iterator<Item = Cell> {
        let (w, h) = (self.width, self.height);
        (1..h - 1).flat_map(move |y| (1..w - 1).map(move |x| Cell::new(x, y)))
    }

    /// Pixel-space center of a cell.
    pub fn cell_center_px(&self, cell: Cell, cell_px: u32) -> (f32, f32) {
        let size = cell_px as f32;
        (
            cell.x as f32 * size + size / 2.0,
            cell.y as f32 * size + size / 2.0,
        )
    }
}

fn clamp_axis(cells: u32) -> i32 {
    i32::try_from(cells.clamp(MIN_GRID_CELLS, MAX_GRID_CELLS)).unwrap_or(MAX_GRID_CELLS as i32)
}

/// Equality-based occupancy check against an arbitrary cell sequence.
pub fn is_occupied<'a, I>(cell: Cell, cells: I) -> bool
where
    I: IntoIterator<Item = &'a Cell>,
{
    cells.into_iter().any(|&c| c == cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_canvas_floors() {
        let grid = Grid::from_canvas(610, 399, 20);
        assert_eq!(grid.width(), 30);
        assert_eq!(grid.height(), 19);
    }

    #[test]
    fn test_tiny_grid_is_clamped() {
        let grid = Grid::new(1, 2);
        assert_eq!(grid.width(), MIN_GRID_CELLS as i32);
        assert_eq!(grid.height(), MIN_GRID_CELLS as i32);
    }

    #[test]
    fn test_huge_grid_is_clamped() {
        let grid = Grid::from_canvas(u32::MAX, 4000, 1);
        assert_eq!(grid.width(), MAX_GRID_CELLS as i32);
        assert_eq!(grid.height(), MAX_GRID_CELLS as i32);
        assert!(grid.width() > 0);
        assert!(grid.in_interior(grid.center()));
    }

    #[test]
    fn test_in_bounds_edges() {
        let grid = Grid::new(10, 8);
        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(9, 7)));
        assert!(!grid.in_bounds(Cell::new(-1, 0)));
        assert!(!grid.in_bounds(Cell::new(0, -1)));
        assert!(!grid.in_bounds(Cell::new(10, 0)));
        assert!(!grid.in_bounds(Cell::new(0, 8)));
    }

    #[test]
    fn test_interior_excludes_outer_ring() {
        let grid = Grid::new(5, 4);
        let cells: Vec<Cell> = grid.interior_cells().collect();
        assert_eq!(cells.len(), 3 * 2);
        assert!(cells.iter().all(|&c| grid.in_interior(c)));
        assert!(!grid.in_interior(Cell::new(0, 1)));
        assert!(!grid.in_interior(Cell::new(4, 1)));
        assert!(!grid.in_interior(Cell::new(1, 3)));
        assert_eq!(grid.interior_size(), (3, 2));
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(30, 20).center(), Cell::new(15, 10));
        assert_eq!(Grid::new(5, 5).center(), Cell::new(2, 2));
    }

    #[test]
    fn test_cell_center_px() {
        let grid = Grid::new(10, 10);
        assert_eq!(grid.cell_center_px(Cell::new(0, 0), 20), (10.0, 10.0));
        assert_eq!(grid.cell_center_px(Cell::new(3, 2), 20), (70.0, 50.0));
    }

    #[test]
    fn test_is_occupied() {
        let body = [Cell::new(1, 1), Cell::new(2, 1)];
        assert!(is_occupied(Cell::new(2, 1), &body));
        assert!(!is_occupied(Cell::new(3, 1), &body));
        assert!(!is_occupied(Cell::new(3, 1), &[]));
    }
}
