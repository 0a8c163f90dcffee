use std::fmt;

use itertools::Itertools;
use rand::Rng;

use super::{
    error::{LifeError, LifeResult},
    pos::Position,
};

/// A fixed-size, row-major matrix of cells.
///
/// The dimensions never change after construction. Edits go through
/// [`Grid::toggled`], which hands back a new grid and leaves `self` alone, so a
/// caller holding an older generation never sees it change underneath them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn empty(rows: usize, cols: usize) -> LifeResult<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self::with_cells(rows, cols, vec![CellState::default(); rows * cols]))
    }

    pub fn random(rows: usize, cols: usize) -> LifeResult<Self> {
        Self::random_with(rows, cols, &mut rand::rng())
    }

    pub fn random_with<R>(rows: usize, cols: usize, rng: &mut R) -> LifeResult<Self>
    where
        R: Rng + ?Sized,
    {
        check_dimensions(rows, cols)?;

        let cells = (0..rows * cols)
            .map(|_| CellState::from_alive(rng.random_bool(0.5)))
            .collect();

        Ok(Self::with_cells(rows, cols, cells))
    }

    /// Builds an otherwise empty grid with the given cells alive.
    pub fn with_alive<I, P>(rows: usize, cols: usize, alive: I) -> LifeResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        let mut grid = Self::empty(rows, cols)?;

        for pos in alive {
            let index = grid.checked_index(pos)?;
            grid.cells[index] = CellState::Alive;
        }

        Ok(grid)
    }

    pub(crate) fn with_cells(rows: usize, cols: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell<P>(&self, pos: P) -> Option<CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index).copied()
    }

    pub fn get<P>(&self, pos: P) -> LifeResult<CellState>
    where
        P: Into<Position>,
    {
        let index = self.checked_index(pos)?;
        Ok(self.cells[index])
    }

    /// Returns a copy of this grid with the cell at `pos` flipped.
    pub fn toggled<P>(&self, pos: P) -> LifeResult<Self>
    where
        P: Into<Position>,
    {
        let index = self.checked_index(pos)?;

        let mut next = self.clone();
        next.cells[index] = next.cells[index].flipped();
        Ok(next)
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), *cell))
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Whether `pos` lies on the outer ring of the grid.
    pub fn is_border(&self, pos: Position) -> bool {
        pos.row == 0 || pos.col == 0 || pos.row + 1 == self.rows || pos.col + 1 == self.cols
    }

    fn checked_index<P>(&self, pos: P) -> LifeResult<usize>
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        self.pos_to_index(pos).ok_or(LifeError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.rows {
            return None;
        }

        if col >= self.cols {
            return None;
        }

        Some(col + (row * self.cols))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.cols;
        let col = index % self.cols;
        Position { row, col }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .join("\n");

        f.write_str(&text)
    }
}

fn check_dimensions(rows: usize, cols: usize) -> LifeResult<()> {
    if rows == 0 || cols == 0 {
        return Err(LifeError::InvalidDimensions { rows, cols });
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

impl CellState {
    pub fn from_alive(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }

    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn flipped(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }

    fn symbol(self) -> char {
        match self {
            CellState::Alive => '#',
            CellState::Dead => '.',
        }
    }
}
