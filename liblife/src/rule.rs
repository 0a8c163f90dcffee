//! The B3/S23 transition rule on a bounded board.
//!
//! Only interior cells are evolved. Cells on the outer ring keep whatever
//! state they had, there is no wraparound and no edge death rule.

use super::{
    board::{CellState, Grid},
    pos::Position,
};

const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// Computes the generation after `grid`.
///
/// Every neighbor read goes to `grid` itself, never to the grid being built,
/// so the result does not depend on the order cells are visited in.
pub fn step(grid: &Grid) -> Grid {
    let next_cells = grid
        .enumerate_cells()
        .map(|(pos, cell)| {
            if grid.is_border(pos) {
                cell
            } else {
                next_state(cell, alive_neighbors(grid, pos))
            }
        })
        .collect();

    Grid::with_cells(grid.rows(), grid.cols(), next_cells)
}

pub fn next_state(current: CellState, alive_neighbors: usize) -> CellState {
    match (current, alive_neighbors) {
        // Under- and overpopulation.
        (_, n) if !(2..=3).contains(&n) => CellState::Dead,
        (CellState::Dead, 3) => CellState::Alive,
        (cell, _) => cell,
    }
}

/// Counts alive cells in the Moore neighborhood of `pos`, ignoring positions
/// that fall outside the grid.
pub fn alive_neighbors(grid: &Grid, pos: Position) -> usize {
    fn abs_pos(center_pos: usize, offset_pos: isize) -> Option<usize> {
        center_pos.checked_add_signed(offset_pos)
    }

    NEIGHBOR_RELATIVE_POSITIONS
        .iter()
        .filter_map(|rel_pos| {
            let neighbor = Position {
                row: abs_pos(pos.row, rel_pos[0])?,
                col: abs_pos(pos.col, rel_pos[1])?,
            };

            grid.cell(neighbor)
        })
        .filter(|neighbor| neighbor.is_alive())
        .count()
}
