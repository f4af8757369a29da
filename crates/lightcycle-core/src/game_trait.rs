use std::time::Duration;

use crate::events::{GameEvent, Outcome};
use crate::input::KeyId;
use crate::surface::Surface;

/// Default tick period shared by the arcade games (10 Hz).
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Core trait that every arcade game driven by the
/// [`GameController`](crate::controller::GameController) implements.
///
/// The controller owns scheduling, restart flow and the HUD; the game only
/// handles its own simulation, input mapping and drawing.
pub trait ArcadeGame {
    /// Static description of the game.
    fn metadata(&self) -> GameMetadata;

    /// Fixed interval between ticks.
    fn tick_period(&self) -> Duration {
        TICK_PERIOD
    }

    /// Throw away all round state and recreate the starting layout.
    fn reset(&mut self);

    /// Apply a key press. Returns whether the key changed any state.
    fn handle_key(&mut self, key: &KeyId) -> bool;

    /// Advance the simulation by one tick. A finished round ignores ticks.
    fn tick(&mut self) -> Vec<GameEvent>;

    /// The round result, once the round is over.
    fn outcome(&self) -> Option<Outcome>;

    /// Redraw the whole frame.
    fn render(&self, surface: &mut dyn Surface);

    /// Pixel dimensions the game expects its surface to have.
    fn surface_size(&self) -> (u32, u32);
}

/// Game metadata, shown in the frontend title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMetadata {
    pub name: String,
    pub description: String,
    pub players: u8,
}
