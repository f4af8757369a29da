use std::collections::HashMap;

use lightcycle_core::player::{PlayerColor, PlayerSlot};

use crate::grid::Cell;

/// A cell left behind by a bike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailSegment {
    pub cell: Cell,
    pub owner: PlayerSlot,
    pub color: PlayerColor,
}

/// Append-only record of every cell occupied this round.
///
/// Segments keep insertion order for drawing; a cell index answers
/// membership and ownership queries without scanning.
#[derive(Debug, Clone, Default)]
pub struct TrailRegistry {
    segments: Vec<TrailSegment>,
    occupied: HashMap<Cell, PlayerSlot>,
}

impl TrailRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cell: Cell, owner: PlayerSlot, color: PlayerColor) {
        self.segments.push(TrailSegment { cell, owner, color });
        self.occupied.insert(cell, owner);
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.occupied.contains_key(&cell)
    }

    /// Who laid the segment on `cell`.
    pub fn owner_at(&self, cell: Cell) -> Option<PlayerSlot> {
        self.occupied.get(&cell).copied()
    }

    /// Number of segments laid.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TrailSegment> {
        self.segments.iter()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
        self.occupied.clear();
    }
}
