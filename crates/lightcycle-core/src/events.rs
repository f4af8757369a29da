use std::fmt;

use crate::player::PlayerSlot;

/// Why a bike crashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    /// Drove off the edge of the arena.
    Wall,
    /// Ran into its own trail.
    OwnTrail,
    /// Ran into the opponent's trail.
    OpponentTrail,
    /// Reached the same cell as the other bike on the same tick.
    HeadOn,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(PlayerSlot),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(slot) => write!(f, "{slot} wins!"),
            Self::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Events emitted by a game during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    BikeCrashed {
        player: PlayerSlot,
        cause: CrashCause,
        /// Pixel position the bike was frozen at.
        at: (i32, i32),
    },
    RoundComplete {
        outcome: Outcome,
    },
}
