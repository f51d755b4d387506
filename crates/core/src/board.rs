//! Board module - manages the game grid
//!
//! The board is a W×H grid where each cell is [`CellState::Empty`],
//! [`CellState::Snake`] or [`CellState::Apple`].
//! Uses a flat row-major vector for cache locality; the allocation is made
//! once and reused across restarts.
//! Coordinates: (x, y) where x ranges 0..W (left to right), y ranges 0..H (top to bottom)

use crate::types::{CellState, Pos};

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellState>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Empty; width as usize * height as usize],
        }
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.y as usize) * (self.width as usize) + (pos.x as usize))
    }

    #[inline(always)]
    fn pos_of(&self, idx: usize) -> Pos {
        let w = self.width as usize;
        Pos::new((idx % w) as i16, (idx / w) as i16)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if position lies on the board
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u16) < self.width && (pos.y as u16) < self.height
    }

    /// Get cell at position
    /// Returns None if out of bounds
    pub fn get(&self, pos: Pos) -> Option<CellState> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at position
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Pos, state: CellState) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = state;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_cell(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(CellState::Empty))
    }

    /// Number of cells currently in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// The `n`-th empty cell in row-major order
    pub fn nth_empty(&self, n: usize) -> Option<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == CellState::Empty)
            .nth(n)
            .map(|(idx, _)| self.pos_of(idx))
    }

    /// Iterate all cells with their positions, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Pos, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &c)| (self.pos_of(idx), c))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::GRID_WIDTH, crate::types::GRID_HEIGHT)
    }
}
