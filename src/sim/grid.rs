//! Board grid: cells, hidden ships, and pointer mapping
//!
//! Cells are addressed by `(col, row)` with the origin at the board's
//! top-left corner, matching canvas pixel space.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// A discrete grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Whether this cell lies on a `grid_size`-square board
    #[inline]
    pub fn in_bounds(&self, grid_size: u32) -> bool {
        self.col < grid_size && self.row < grid_size
    }

    /// Top-left pixel of the cell, relative to the board origin
    #[inline]
    pub fn top_left(&self, cell_size: f64) -> DVec2 {
        DVec2::new(self.col as f64, self.row as f64) * cell_size
    }

    /// Pixel centre of the cell, relative to the board origin
    #[inline]
    pub fn center(&self, cell_size: f64) -> DVec2 {
        self.top_left(cell_size) + DVec2::splat(cell_size / 2.0)
    }
}

/// Hidden ship positions for one session.
///
/// Built once when the session starts and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    grid_size: u32,
    ships: Vec<Cell>,
}

impl GridModel {
    /// Place `ship_count` ships on distinct cells, uniformly at random.
    ///
    /// Collisions are re-rolled until every ship has its own cell.
    pub fn initialize<R: Rng + ?Sized>(
        grid_size: u32,
        ship_count: usize,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let capacity = (grid_size as usize).pow(2);
        if ship_count > capacity {
            return Err(GridError::TooManyShips {
                ship_count,
                capacity,
            });
        }

        let mut ships = Vec::with_capacity(ship_count);
        while ships.len() < ship_count {
            let candidate = Cell::new(
                rng.random_range(0..grid_size),
                rng.random_range(0..grid_size),
            );
            if !ships.contains(&candidate) {
                ships.push(candidate);
            }
        }

        Ok(Self { grid_size, ships })
    }

    /// Build a grid with known ship positions
    pub fn with_ships(grid_size: u32, ships: Vec<Cell>) -> Result<Self, GridError> {
        for (i, cell) in ships.iter().enumerate() {
            if !cell.in_bounds(grid_size) {
                return Err(GridError::OutOfBounds {
                    cell: *cell,
                    grid_size,
                });
            }
            if ships[..i].contains(cell) {
                return Err(GridError::DuplicateShip(*cell));
            }
        }
        Ok(Self { grid_size, ships })
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn ships(&self) -> &[Cell] {
        &self.ships
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.ships.contains(&cell)
    }

    /// Every cell on the board, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let n = self.grid_size;
        (0..n).flat_map(move |row| (0..n).map(move |col| Cell::new(col, row)))
    }
}

/// Convert a pointer position into the cell under it.
///
/// `origin` is the board's top-left corner in the same space as `pointer`.
/// Positions left of or above the board saturate to column/row 0; callers are
/// expected to only pass pointers that landed on the board.
pub fn map_pointer_to_cell(pointer: DVec2, origin: DVec2, cell_size: f64) -> Cell {
    let local = ((pointer - origin) / cell_size).floor();
    Cell::new(local.x as u32, local.y as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_single_ship_on_two_by_two() {
        let mut rng = Pcg32::seed_from_u64(7);
        let grid = GridModel::initialize(2, 1, &mut rng).unwrap();
        assert_eq!(grid.ships().len(), 1);
        assert!(grid.ships()[0].in_bounds(2));
        assert_eq!(grid.cells().filter(|c| grid.is_occupied(*c)).count(), 1);
    }

    #[test]
    fn test_full_board_fills_every_cell() {
        let mut rng = Pcg32::seed_from_u64(99);
        let grid = GridModel::initialize(3, 9, &mut rng).unwrap();
        assert!(grid.cells().all(|c| grid.is_occupied(c)));
    }

    #[test]
    fn test_too_many_ships_rejected() {
        let mut rng = Pcg32::seed_from_u64(1);
        let err = GridModel::initialize(2, 5, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GridError::TooManyShips {
                ship_count: 5,
                capacity: 4
            }
        );
    }

    #[test]
    fn test_same_seed_same_placement() {
        let a = GridModel::initialize(2, 1, &mut Pcg32::seed_from_u64(42)).unwrap();
        let b = GridModel::initialize(2, 1, &mut Pcg32::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_ships_validates() {
        assert!(GridModel::with_ships(2, vec![Cell::new(1, 0)]).is_ok());
        assert_eq!(
            GridModel::with_ships(2, vec![Cell::new(2, 0)]).unwrap_err(),
            GridError::OutOfBounds {
                cell: Cell::new(2, 0),
                grid_size: 2
            }
        );
        assert_eq!(
            GridModel::with_ships(2, vec![Cell::new(0, 1), Cell::new(0, 1)]).unwrap_err(),
            GridError::DuplicateShip(Cell::new(0, 1))
        );
    }

    #[test]
    fn test_cells_row_major() {
        let grid = GridModel::with_ships(2, vec![]).unwrap();
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(0, 1),
                Cell::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_cell_center() {
        assert_eq!(Cell::new(1, 0).center(200.0), DVec2::new(300.0, 100.0));
        assert_eq!(Cell::new(0, 1).top_left(200.0), DVec2::new(0.0, 200.0));
    }

    #[test]
    fn test_map_pointer_with_board_offset() {
        let origin = DVec2::new(120.0, 80.0);
        assert_eq!(
            map_pointer_to_cell(DVec2::new(120.0, 80.0), origin, 200.0),
            Cell::new(0, 0)
        );
        assert_eq!(
            map_pointer_to_cell(DVec2::new(519.9, 279.0), origin, 200.0),
            Cell::new(1, 0)
        );
        assert_eq!(
            map_pointer_to_cell(DVec2::new(320.0, 280.0), origin, 200.0),
            Cell::new(1, 1)
        );
    }

    proptest! {
        #[test]
        fn prop_grid_has_distinct_cells_in_range(
            grid_size in 1u32..7,
            fill in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let capacity = (grid_size * grid_size) as usize;
            let ship_count = (capacity as f64 * fill).floor() as usize;
            let mut rng = Pcg32::seed_from_u64(seed);
            let grid = GridModel::initialize(grid_size, ship_count, &mut rng).unwrap();

            prop_assert_eq!(grid.ships().len(), ship_count);
            for (i, ship) in grid.ships().iter().enumerate() {
                prop_assert!(ship.in_bounds(grid_size));
                prop_assert!(!grid.ships()[..i].contains(ship));
            }
        }

        #[test]
        fn prop_pointer_maps_to_containing_cell(
            col in 0u32..8,
            row in 0u32..8,
            cell_size in 1u32..500,
            fx in 0.0f64..0.999,
            fy in 0.0f64..0.999,
        ) {
            let cell_size = cell_size as f64;
            let pointer = DVec2::new(
                cell_size * col as f64 + fx * cell_size,
                cell_size * row as f64 + fy * cell_size,
            );
            let cell = map_pointer_to_cell(pointer, DVec2::ZERO, cell_size);
            prop_assert_eq!(cell, Cell::new(col, row));
        }
    }
}
