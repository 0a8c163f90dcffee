use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

use super::{
    board::{CellState, Grid},
    error::LifeResult,
    pos::Position,
    rule,
};

pub type SharedStore = Arc<RwLock<GridStore>>;

/// Owner of the current generation.
///
/// Every mutation swaps in a whole new [`Grid`]; cells are never edited in
/// place, so snapshots taken earlier stay valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStore {
    grid: Grid,
    generation: u64,
}

impl GridStore {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    pub fn empty(rows: usize, cols: usize) -> LifeResult<Self> {
        Ok(Self::new(Grid::empty(rows, cols)?))
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Number of generations committed since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn toggle<P>(&mut self, pos: P) -> LifeResult<()>
    where
        P: Into<Position>,
    {
        self.grid = self.grid.toggled(pos)?;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.reset(Grid::with_cells(
            self.grid.rows(),
            self.grid.cols(),
            vec![CellState::Dead; self.grid.rows() * self.grid.cols()],
        ));
        debug!("grid cleared");
    }

    pub fn randomize(&mut self) {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());

        // The current grid already passed the dimension check.
        if let Ok(grid) = Grid::random(rows, cols) {
            self.reset(grid);
            debug!(alive = self.grid.alive_count(), "grid randomized");
        }
    }

    /// Commits the next generation.
    pub fn advance(&mut self) -> &Grid {
        self.grid = rule::step(&self.grid);
        self.generation += 1;
        trace!(generation = self.generation, "generation committed");
        &self.grid
    }

    fn reset(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
    }
}

pub fn read(store: &RwLock<GridStore>) -> RwLockReadGuard<'_, GridStore> {
    store.read().unwrap_or_else(PoisonError::into_inner)
}

pub fn write(store: &RwLock<GridStore>) -> RwLockWriteGuard<'_, GridStore> {
    store.write().unwrap_or_else(PoisonError::into_inner)
}
