use lightcycle_core::player::PlayerSlot;

use crate::Direction;
use crate::grid::{CELL_SIZE, Cell, Grid};

/// A spawn position with starting heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnPoint {
    pub cell: Cell,
    pub heading: Direction,
}

/// Fixed starting layout: both bikes on the middle row, a quarter of the way
/// in from their side, facing each other.
pub fn spawn_point(grid: &Grid, slot: PlayerSlot) -> SpawnPoint {
    let row = grid.rows() / 2;
    match slot {
        PlayerSlot::One => SpawnPoint {
            cell: Cell::new(grid.columns() / 4 * CELL_SIZE, row * CELL_SIZE),
            heading: Direction::Right,
        },
        PlayerSlot::Two => SpawnPoint {
            cell: Cell::new(grid.columns() * 3 / 4 * CELL_SIZE, row * CELL_SIZE),
            heading: Direction::Left,
        },
    }
}
