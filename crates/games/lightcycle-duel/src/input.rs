use lightcycle_core::input::KeyId;
use lightcycle_core::player::PlayerSlot;

use crate::Direction;
use crate::bike::Bike;

/// No-reversal rule: a request for the exact opposite of `current` is
/// dropped, anything else is taken as-is.
pub fn steer(current: Direction, requested: Direction) -> Direction {
    if requested == current.opposite() {
        current
    } else {
        requested
    }
}

/// Keys that steer one bike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: KeyId,
    pub down: KeyId,
    pub left: KeyId,
    pub right: KeyId,
}

impl KeyBindings {
    /// Player 1: `w`/`a`/`s`/`d`.
    pub fn wasd() -> Self {
        Self {
            up: KeyId::from("w"),
            down: KeyId::from("s"),
            left: KeyId::from("a"),
            right: KeyId::from("d"),
        }
    }

    /// Player 2: arrow keys.
    pub fn arrows() -> Self {
        Self {
            up: KeyId::from("ArrowUp"),
            down: KeyId::from("ArrowDown"),
            left: KeyId::from("ArrowLeft"),
            right: KeyId::from("ArrowRight"),
        }
    }

    pub fn for_slot(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::One => Self::wasd(),
            PlayerSlot::Two => Self::arrows(),
        }
    }

    pub fn direction_for(&self, key: &KeyId) -> Option<Direction> {
        if *key == self.up {
            Some(Direction::Up)
        } else if *key == self.down {
            Some(Direction::Down)
        } else if *key == self.left {
            Some(Direction::Left)
        } else if *key == self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

/// Find the bike a key belongs to and the direction it asks for.
pub fn route_key(bikes: &[Bike; 2], key: &KeyId) -> Option<(PlayerSlot, Direction)> {
    bikes
        .iter()
        .find_map(|bike| Some((bike.slot(), bike.controls().direction_for(key)?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_is_rejected() {
        assert_eq!(steer(Direction::Right, Direction::Left), Direction::Right);
        assert_eq!(steer(Direction::Left, Direction::Right), Direction::Left);
        assert_eq!(steer(Direction::Up, Direction::Down), Direction::Up);
        assert_eq!(steer(Direction::Down, Direction::Up), Direction::Down);
    }

    #[test]
    fn perpendicular_and_same_accepted() {
        assert_eq!(steer(Direction::Right, Direction::Up), Direction::Up);
        assert_eq!(steer(Direction::Right, Direction::Down), Direction::Down);
        assert_eq!(steer(Direction::Right, Direction::Right), Direction::Right);
    }

    #[test]
    fn bindings_are_disjoint() {
        let p1 = KeyBindings::wasd();
        let p2 = KeyBindings::arrows();
        for key in [&p1.up, &p1.down, &p1.left, &p1.right] {
            assert_eq!(p2.direction_for(key), None, "{key} bound twice");
        }
    }

    #[test]
    fn wasd_maps_to_directions() {
        let keys = KeyBindings::wasd();
        assert_eq!(keys.direction_for(&"w".into()), Some(Direction::Up));
        assert_eq!(keys.direction_for(&"a".into()), Some(Direction::Left));
        assert_eq!(keys.direction_for(&"s".into()), Some(Direction::Down));
        assert_eq!(keys.direction_for(&"d".into()), Some(Direction::Right));
        assert_eq!(keys.direction_for(&"W".into()), None);
        assert_eq!(keys.direction_for(&"x".into()), None);
    }
}
