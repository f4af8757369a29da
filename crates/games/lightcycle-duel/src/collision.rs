use lightcycle_core::events::{CrashCause, Outcome};
use lightcycle_core::player::PlayerSlot;

use crate::grid::{Cell, Grid};
use crate::trail::TrailRegistry;

/// Check if a cell lies outside the arena.
pub fn check_bounds(grid: &Grid, cell: Cell) -> bool {
    !grid.contains(cell)
}

/// Check if a cell is already part of any trail, and whose.
pub fn check_trail(trail: &TrailRegistry, mover: PlayerSlot, cell: Cell) -> Option<CrashCause> {
    trail.owner_at(cell).map(|owner| {
        if owner == mover {
            CrashCause::OwnTrail
        } else {
            CrashCause::OpponentTrail
        }
    })
}

/// Full crash test for a bike about to enter `next`.
pub fn crash_cause(
    grid: &Grid,
    trail: &TrailRegistry,
    mover: PlayerSlot,
    next: Cell,
) -> Option<CrashCause> {
    if check_bounds(grid, next) {
        return Some(CrashCause::Wall);
    }
    check_trail(trail, mover, next)
}

/// Decide the round after both bikes have moved. `None` means play on.
pub fn evaluate(p1_alive: bool, p2_alive: bool) -> Option<Outcome> {
    match (p1_alive, p2_alive) {
        (true, true) => None,
        (false, false) => Some(Outcome::Tie),
        (false, true) => Some(Outcome::Winner(PlayerSlot::Two)),
        (true, false) => Some(Outcome::Winner(PlayerSlot::One)),
    }
}
