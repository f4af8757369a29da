use lightcycle_core::events::CrashCause;
use lightcycle_core::player::{PlayerColor, PlayerSlot};
use lightcycle_core::surface::Surface;

use crate::Direction;
use crate::arena::SpawnPoint;
use crate::collision;
use crate::grid::{CELL_SIZE, Cell, Grid};
use crate::input::{self, KeyBindings};
use crate::trail::TrailRegistry;

/// A light cycle.
#[derive(Debug, Clone)]
pub struct Bike {
    slot: PlayerSlot,
    position: Cell,
    heading: Direction,
    /// Last accepted steering input since the previous tick.
    pending_heading: Option<Direction>,
    color: PlayerColor,
    controls: KeyBindings,
    alive: bool,
    crash: Option<CrashCause>,
}

impl Bike {
    /// A fresh bike for `slot` with that seat's color and key bindings.
    pub fn new(slot: PlayerSlot, spawn: SpawnPoint) -> Self {
        Self {
            slot,
            position: spawn.cell,
            heading: spawn.heading,
            pending_heading: None,
            color: PlayerColor::for_slot(slot),
            controls: KeyBindings::for_slot(slot),
            alive: true,
            crash: None,
        }
    }

    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Heading used for the next move (ignores a pending, not yet applied turn).
    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_heading(&self) -> Option<Direction> {
        self.pending_heading
    }

    pub fn color(&self) -> PlayerColor {
        self.color
    }

    pub fn controls(&self) -> &KeyBindings {
        &self.controls
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn crash(&self) -> Option<CrashCause> {
        self.crash
    }

    /// Request a new heading, applied at the start of the next tick.
    ///
    /// Rejected when the bike is dead or when `requested` reverses the current
    /// heading. A later accepted request replaces an earlier one.
    pub fn set_heading(&mut self, requested: Direction) -> bool {
        if !self.alive || input::steer(self.heading, requested) != requested {
            return false;
        }
        self.pending_heading = Some(requested);
        true
    }

    /// First half of a tick: commit the pending turn and lay a trail
    /// segment on the current cell. Dead bikes do nothing.
    ///
    /// Every bike lays its segment before any bike moves, so a bike can never
    /// slip into a cell its opponent is just leaving.
    pub fn lay_trail(&mut self, trail: &mut TrailRegistry) {
        if !self.alive {
            return;
        }
        if let Some(heading) = self.pending_heading.take() {
            self.heading = heading;
        }
        trail.push(self.position, self.slot, self.color);
    }

    /// Second half of a tick: step one cell along the heading. A step into a
    /// wall or any trail cell kills the bike in place; the target cell is
    /// never entered. Returns the crash cause on the tick the bike dies.
    pub fn advance(&mut self, trail: &TrailRegistry, grid: &Grid) -> Option<CrashCause> {
        if !self.alive {
            return None;
        }

        let next = self.position.step(self.heading);
        if let Some(cause) = collision::crash_cause(grid, trail, self.slot, next) {
            self.wreck(cause);
            return Some(cause);
        }

        self.position = next;
        None
    }

    /// Stop the bike where it stands.
    pub(crate) fn wreck(&mut self, cause: CrashCause) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.crash = Some(cause);
        tracing::debug!(
            player = %self.slot,
            ?cause,
            x = self.position.x,
            y = self.position.y,
            "Bike crashed"
        );
    }

    /// Paint the bike's cell. Dead bikes still draw where they stopped.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(
            self.position.x,
            self.position.y,
            CELL_SIZE as u32,
            CELL_SIZE as u32,
            self.color,
        );
    }
}

#[cfg(test)]
mod tests {
    use lightcycle_core::test_helpers::{DrawOp, RecordingSurface};

    use super::*;

    /// One tick for a bike riding alone.
    fn ride(bike: &mut Bike, trail: &mut TrailRegistry, grid: &Grid) -> Option<CrashCause> {
        bike.lay_trail(trail);
        bike.advance(trail, grid)
    }

    fn bike_at(x: i32, y: i32, heading: Direction) -> Bike {
        Bike::new(
            PlayerSlot::One,
            SpawnPoint {
                cell: Cell::new(x, y),
                heading,
            },
        )
    }

    #[test]
    fn tick_lays_trail_and_moves() {
        let grid = Grid::new(50, 50);
        let mut trail = TrailRegistry::new();
        let mut bike = bike_at(0, 0, Direction::Right);

        assert_eq!(ride(&mut bike, &mut trail, &grid), None);
        assert_eq!(bike.position(), Cell::new(5, 0));
        assert!(trail.contains(Cell::new(0, 0)));
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn reversal_request_keeps_heading() {
        let mut bike = bike_at(0, 0, Direction::Right);
        assert!(!bike.set_heading(Direction::Left));
        assert_eq!(bike.heading(), Direction::Right);
        assert_eq!(bike.pending_heading(), None);
    }

    #[test]
    fn pending_heading_applied_on_tick() {
        let grid = Grid::new(50, 50);
        let mut trail = TrailRegistry::new();
        let mut bike = bike_at(10, 10, Direction::Right);

        assert!(bike.set_heading(Direction::Down));
        assert_eq!(bike.heading(), Direction::Right);
        ride(&mut bike, &mut trail, &grid);
        assert_eq!(bike.heading(), Direction::Down);
        assert_eq!(bike.position(), Cell::new(10, 15));
        assert_eq!(bike.pending_heading(), None);
    }

    #[test]
    fn double_turn_between_ticks_cannot_reverse() {
        let mut bike = bike_at(10, 10, Direction::Right);
        assert!(bike.set_heading(Direction::Up));
        // Still moving right, so left is a reversal even though up is pending.
        assert!(!bike.set_heading(Direction::Left));
        assert_eq!(bike.pending_heading(), Some(Direction::Up));
    }

    #[test]
    fn last_accepted_request_wins() {
        let mut bike = bike_at(10, 10, Direction::Right);
        assert!(bike.set_heading(Direction::Up));
        assert!(bike.set_heading(Direction::Down));
        assert_eq!(bike.pending_heading(), Some(Direction::Down));
    }

    #[test]
    fn wall_crash_freezes_position() {
        let grid = Grid::new(50, 50);
        let mut trail = TrailRegistry::new();
        let mut bike = bike_at(45, 0, Direction::Right);

        assert_eq!(ride(&mut bike, &mut trail, &grid), Some(CrashCause::Wall));
        assert!(!bike.is_alive());
        assert_eq!(bike.position(), Cell::new(45, 0));
        assert!(trail.contains(Cell::new(45, 0)));
        assert!(!trail.contains(Cell::new(50, 0)));
    }

    #[test]
    fn dead_bike_is_inert() {
        let grid = Grid::new(50, 50);
        let mut trail = TrailRegistry::new();
        let mut bike = bike_at(0, 0, Direction::Up);
        ride(&mut bike, &mut trail, &grid);
        assert!(!bike.is_alive());
        let len = trail.len();

        assert!(!bike.set_heading(Direction::Right));
        assert_eq!(ride(&mut bike, &mut trail, &grid), None);
        assert_eq!(bike.position(), Cell::new(0, 0));
        assert_eq!(bike.heading(), Direction::Up);
        assert_eq!(trail.len(), len);
    }

    #[test]
    fn own_trail_crash() {
        let grid = Grid::new(50, 50);
        let mut trail = TrailRegistry::new();
        let mut bike = bike_at(10, 10, Direction::Right);
        // Box in: right, down, left, then up into the first cell.
        ride(&mut bike, &mut trail, &grid);
        bike.set_heading(Direction::Down);
        ride(&mut bike, &mut trail, &grid);
        bike.set_heading(Direction::Left);
        ride(&mut bike, &mut trail, &grid);
        bike.set_heading(Direction::Up);
        assert_eq!(ride(&mut bike, &mut trail, &grid), Some(CrashCause::OwnTrail));
        assert_eq!(bike.position(), Cell::new(10, 15));
        assert_eq!(bike.crash(), Some(CrashCause::OwnTrail));
    }

    #[test]
    fn draw_fills_one_cell() {
        let bike = bike_at(20, 30, Direction::Right);
        let mut surface = RecordingSurface::new(50, 50);
        bike.draw(&mut surface);
        assert_eq!(
            surface.ops(),
            &[DrawOp::Fill {
                x: 20,
                y: 30,
                width: 5,
                height: 5,
                color: PlayerColor::CYAN,
            }]
        );
    }
}
