use std::fmt;

/// One of the two seats in a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    /// Zero-based index, handy for fixed-size per-player arrays.
    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "Player 1"),
            Self::Two => write!(f, "Player 2"),
        }
    }
}

/// Trail and bike color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PlayerColor {
    /// `#0ff`
    pub const CYAN: PlayerColor = PlayerColor {
        r: 0,
        g: 255,
        b: 255,
    };
    /// `#FF0000`
    pub const RED: PlayerColor = PlayerColor { r: 255, g: 0, b: 0 };

    /// Fixed color per seat.
    pub fn for_slot(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::One => Self::CYAN,
            PlayerSlot::Two => Self::RED,
        }
    }
}
