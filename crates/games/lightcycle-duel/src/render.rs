use lightcycle_core::surface::Surface;

use crate::DuelState;
use crate::grid::CELL_SIZE;

/// Redraw a whole frame: clear, every trail segment in insertion order, then
/// both bikes on top.
pub fn draw_frame(surface: &mut dyn Surface, state: &DuelState) {
    surface.clear();

    for segment in state.trail.iter() {
        surface.fill_rect(
            segment.cell.x,
            segment.cell.y,
            CELL_SIZE as u32,
            CELL_SIZE as u32,
            segment.color,
        );
    }

    for bike in &state.bikes {
        bike.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use lightcycle_core::player::{PlayerColor, PlayerSlot};
    use lightcycle_core::test_helpers::{DrawOp, RecordingSurface};

    use super::*;
    use crate::grid::{Cell, Grid};

    #[test]
    fn fresh_round_draws_only_bikes() {
        let state = DuelState::new(&Grid::new(400, 300));
        let mut surface = RecordingSurface::new(400, 300);
        draw_frame(&mut surface, &state);

        assert_eq!(surface.ops()[0], DrawOp::Clear);
        assert_eq!(surface.last_frame().len(), 2);
        assert_eq!(surface.color_at(100, 150), Some(PlayerColor::CYAN));
        assert_eq!(surface.color_at(300, 150), Some(PlayerColor::RED));
        assert_eq!(surface.color_at(200, 150), None);
    }

    #[test]
    fn trail_drawn_before_bikes() {
        let mut state = DuelState::new(&Grid::new(400, 300));
        state
            .trail
            .push(Cell::new(0, 0), PlayerSlot::Two, PlayerColor::RED);
        state
            .trail
            .push(Cell::new(5, 0), PlayerSlot::One, PlayerColor::CYAN);

        let mut surface = RecordingSurface::new(400, 300);
        draw_frame(&mut surface, &state);

        let frame = surface.last_frame();
        assert_eq!(frame.len(), 4);
        assert!(matches!(frame[0], DrawOp::Fill { x: 0, y: 0, .. }));
        assert!(matches!(frame[1], DrawOp::Fill { x: 5, y: 0, .. }));
        assert!(matches!(
            frame[2],
            DrawOp::Fill {
                color: PlayerColor::CYAN,
                ..
            }
        ));
        assert_eq!(surface.color_at(2, 2), Some(PlayerColor::RED));
    }
}
