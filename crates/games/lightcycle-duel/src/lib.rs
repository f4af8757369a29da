pub mod arena;
pub mod bike;
pub mod collision;
pub mod config;
pub mod grid;
pub mod input;
pub mod render;
pub mod trail;

use lightcycle_core::events::{CrashCause, GameEvent, Outcome};
use lightcycle_core::game_trait::{ArcadeGame, GameMetadata};
use lightcycle_core::input::KeyId;
use lightcycle_core::player::PlayerSlot;
use lightcycle_core::surface::Surface;

use bike::Bike;
use config::DuelConfig;
use grid::Grid;
use trail::TrailRegistry;

/// Cardinal direction on the grid. Screen coordinates: `Up` is toward y = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step in cells.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Everything that changes during a round.
#[derive(Debug, Clone)]
pub struct DuelState {
    /// Indexed by [`PlayerSlot::index`].
    pub bikes: [Bike; 2],
    pub trail: TrailRegistry,
    pub game_over: bool,
    pub outcome: Option<Outcome>,
    /// Ticks played this round.
    pub tick: u32,
}

impl DuelState {
    /// Starting layout for a round on `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            bikes: PlayerSlot::ALL.map(|slot| Bike::new(slot, arena::spawn_point(grid, slot))),
            trail: TrailRegistry::new(),
            game_over: false,
            outcome: None,
            tick: 0,
        }
    }

    pub fn bike(&self, slot: PlayerSlot) -> &Bike {
        &self.bikes[slot.index()]
    }
}

/// The two-player light cycle duel.
pub struct LightCycleDuel {
    state: DuelState,
    grid: Grid,
    config: DuelConfig,
}

impl LightCycleDuel {
    pub fn with_config(config: DuelConfig) -> Self {
        let grid = config.grid();
        Self {
            state: DuelState::new(&grid),
            grid,
            config,
        }
    }

    pub fn state(&self) -> &DuelState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    pub fn bike(&self, slot: PlayerSlot) -> &Bike {
        self.state.bike(slot)
    }
}

impl Default for LightCycleDuel {
    fn default() -> Self {
        Self::with_config(DuelConfig::default())
    }
}

impl ArcadeGame for LightCycleDuel {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Light Cycle Duel".to_string(),
            description: "Leave a wall behind you. First to crash loses.".to_string(),
            players: 2,
        }
    }

    fn reset(&mut self) {
        self.state = DuelState::new(&self.grid);
    }

    fn handle_key(&mut self, key: &KeyId) -> bool {
        let Some((slot, direction)) = input::route_key(&self.state.bikes, key) else {
            return false;
        };
        let accepted = self.state.bikes[slot.index()].set_heading(direction);
        if !accepted {
            tracing::trace!(player = %slot, ?direction, "Heading change rejected");
        }
        accepted
    }

    fn tick(&mut self) -> Vec<GameEvent> {
        if self.state.game_over {
            return Vec::new();
        }

        self.state.tick += 1;
        let mut events = Vec::new();

        for bike in &mut self.state.bikes {
            bike.lay_trail(&mut self.state.trail);
        }

        for bike in &mut self.state.bikes {
            if let Some(cause) = bike.advance(&self.state.trail, &self.grid) {
                events.push(crash_event(bike, cause));
            }
        }

        let [p1, p2] = &mut self.state.bikes;
        if p1.is_alive() && p2.is_alive() && p1.position() == p2.position() {
            for bike in [p1, p2] {
                bike.wreck(CrashCause::HeadOn);
                events.push(crash_event(bike, CrashCause::HeadOn));
            }
        }

        let [p1, p2] = &self.state.bikes;
        if let Some(outcome) = collision::evaluate(p1.is_alive(), p2.is_alive()) {
            self.state.game_over = true;
            self.state.outcome = Some(outcome);
            tracing::info!(tick = self.state.tick, %outcome, "Duel finished");
            events.push(GameEvent::RoundComplete { outcome });
        }

        events
    }

    fn outcome(&self) -> Option<Outcome> {
        self.state.outcome
    }

    fn render(&self, surface: &mut dyn Surface) {
        render::draw_frame(surface, &self.state);
    }

    fn surface_size(&self) -> (u32, u32) {
        self.grid.size()
    }
}

fn crash_event(bike: &Bike, cause: CrashCause) -> GameEvent {
    let at = bike.position();
    GameEvent::BikeCrashed {
        player: bike.slot(),
        cause,
        at: (at.x, at.y),
    }
}
