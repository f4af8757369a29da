use crate::Direction;

/// Edge length of one grid cell, in pixels.
pub const CELL_SIZE: i32 = 5;

/// A cell on the arena, addressed by the pixel coordinates of its top-left
/// corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * CELL_SIZE,
            y: self.y + dy * CELL_SIZE,
        }
    }

    /// Whether both coordinates sit on the cell lattice.
    pub fn is_aligned(self) -> bool {
        self.x.rem_euclid(CELL_SIZE) == 0 && self.y.rem_euclid(CELL_SIZE) == 0
    }
}

/// The playfield: a `width × height` pixel canvas cut into square cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    /// Canvas width and height in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    pub fn columns(&self) -> i32 {
        self.width / CELL_SIZE
    }

    pub fn rows(&self) -> i32 {
        self.height / CELL_SIZE
    }

    /// Bounds test against `[0, width) × [0, height)` in raw pixels.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }
}
