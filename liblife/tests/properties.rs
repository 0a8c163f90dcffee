//! Property tests for the grid and the transition rule.

use liblife::{CellState, Grid, Position, step};
use proptest::prelude::*;

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..24, 1usize..24).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(any::<bool>(), rows * cols).prop_map(move |alive| {
            let positions = alive
                .iter()
                .enumerate()
                .filter(|(_, alive)| **alive)
                .map(|(index, _)| Position::new(index / cols, index % cols));

            Grid::with_alive(rows, cols, positions).unwrap()
        })
    })
}

/// Straightforward nested-loop version of the rule, reading only `before`.
fn reference_step(grid: &Grid) -> Vec<Vec<bool>> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let before: Vec<Vec<bool>> = (0..rows)
        .map(|row| (0..cols).map(|col| grid.cell((row, col)).unwrap().is_alive()).collect())
        .collect();

    let mut after = before.clone();

    for i in 1..rows.saturating_sub(1) {
        for j in 1..cols.saturating_sub(1) {
            let neighbors = [
                before[i - 1][j - 1],
                before[i - 1][j],
                before[i - 1][j + 1],
                before[i][j - 1],
                before[i][j + 1],
                before[i + 1][j - 1],
                before[i + 1][j],
                before[i + 1][j + 1],
            ]
            .iter()
            .filter(|alive| **alive)
            .count();

            if !(2..=3).contains(&neighbors) {
                after[i][j] = false;
            } else if !before[i][j] && neighbors == 3 {
                after[i][j] = true;
            }
        }
    }

    after
}

proptest! {
    #[test]
    fn step_matches_reference(grid in arb_grid()) {
        let next = step(&grid);
        let expected = reference_step(&grid);

        for (pos, cell) in next.enumerate_cells() {
            prop_assert_eq!(cell.is_alive(), expected[pos.row][pos.col], "at {}", pos);
        }
    }

    #[test]
    fn step_keeps_dimensions_and_input(grid in arb_grid()) {
        let before = grid.clone();
        let next = step(&grid);

        prop_assert_eq!(&grid, &before);
        prop_assert_eq!((next.rows(), next.cols()), (grid.rows(), grid.cols()));
    }

    #[test]
    fn border_cells_never_change(grid in arb_grid()) {
        let next = step(&grid);

        for (pos, cell) in grid.enumerate_cells().filter(|(pos, _)| grid.is_border(*pos)) {
            prop_assert_eq!(next.cell(pos), Some(cell));
        }
    }

    #[test]
    fn empty_grid_is_a_fixed_point(rows in 1usize..40, cols in 1usize..40) {
        let empty = Grid::empty(rows, cols).unwrap();
        prop_assert_eq!(step(&empty), empty);
    }

    #[test]
    fn toggle_is_an_involution(grid in arb_grid(), row in 0usize..24, col in 0usize..24) {
        let before = grid.clone();

        match grid.toggled((row, col)) {
            Ok(once) => {
                prop_assert_ne!(once.cell((row, col)), grid.cell((row, col)));
                prop_assert_eq!(once.toggled((row, col)).unwrap(), before.clone());
            }
            Err(_) => prop_assert!(row >= grid.rows() || col >= grid.cols()),
        }

        prop_assert_eq!(grid, before);
    }

    #[test]
    fn random_grid_has_exact_shape(rows in 1usize..40, cols in 1usize..40) {
        let grid = Grid::random(rows, cols).unwrap();

        prop_assert_eq!((grid.rows(), grid.cols()), (rows, cols));
        prop_assert_eq!(grid.enumerate_cells().count(), rows * cols);
        prop_assert!(grid
            .enumerate_cells()
            .all(|(_, cell)| matches!(cell, CellState::Alive | CellState::Dead)));
    }
}
