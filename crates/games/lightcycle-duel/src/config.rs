use serde::Deserialize;

use crate::grid::{CELL_SIZE, Grid};

/// Smallest arena edge, in cells.
pub const MIN_CELLS: u32 = 4;
/// Largest arena edge, in cells.
pub const MAX_CELLS: u32 = 1000;

/// Canvas dimensions for a duel. Cell size, tick period and rules are fixed;
/// only the size of the drawing surface can be chosen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400,
            canvas_height: 300,
        }
    }
}

impl DuelConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("LIGHTCYCLE_DUEL_CONFIG")
            .unwrap_or_else(|_| "config/duel.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<DuelConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    DuelConfig::default()
                },
            },
            Err(_) => DuelConfig::default(),
        }
    }

    /// The arena grid, with each dimension snapped down to whole cells and
    /// clamped to [`MIN_CELLS`]..=[`MAX_CELLS`].
    pub fn grid(&self) -> Grid {
        let snap =
            |px: u32| (px / CELL_SIZE as u32).clamp(MIN_CELLS, MAX_CELLS) * CELL_SIZE as u32;
        Grid::new(snap(self.canvas_width), snap(self.canvas_height))
    }
}
