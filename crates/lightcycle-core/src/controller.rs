use crate::events::{GameEvent, Outcome};
use crate::game_trait::ArcadeGame;
use crate::input::KeyId;
use crate::schedule::TickScheduler;
use crate::surface::Surface;

/// Status text shown while a round is running.
pub const PROMPT: &str = "First to crash loses!";

/// Controller state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// What the frontend shows around the arena: the status label and whether the
/// restart control is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub status: String,
    pub restart_visible: bool,
}

impl Hud {
    fn prompt() -> Self {
        Self {
            status: PROMPT.to_string(),
            restart_visible: false,
        }
    }

    fn game_over(outcome: Outcome) -> Self {
        Self {
            status: format!("Game Over! {outcome}"),
            restart_visible: true,
        }
    }
}

/// Owns a game session: the game, its tick schedule, and the restart flow.
///
/// Every mutation goes through `&mut self`, so ticks, key presses and restarts
/// are serialized by whoever owns the controller.
pub struct GameController<G, S> {
    game: G,
    scheduler: S,
    phase: Phase,
    hud: Hud,
    round: u32,
}

impl<G: ArcadeGame, S: TickScheduler> GameController<G, S> {
    /// Reset the game and start ticking immediately. There is no separate
    /// "start" action: the first round begins on construction.
    pub fn start(game: G, scheduler: S) -> Self {
        let mut controller = Self {
            game,
            scheduler,
            phase: Phase::Running,
            hud: Hud::prompt(),
            round: 0,
        };
        controller.begin_round();
        controller
    }

    fn begin_round(&mut self) {
        self.game.reset();
        self.phase = Phase::Running;
        self.hud = Hud::prompt();
        self.round += 1;
        // Replace, never stack, schedules.
        self.scheduler.stop();
        self.scheduler.start(self.game.tick_period());
        tracing::info!(round = self.round, "Round started");
    }

    /// Run one tick: update, evaluate, render. Ignored once the round is over.
    pub fn on_tick(&mut self, surface: &mut dyn Surface) -> Vec<GameEvent> {
        if self.phase != Phase::Running {
            return Vec::new();
        }

        let events = self.game.tick();

        if let Some(outcome) = self.game.outcome() {
            self.scheduler.stop();
            self.phase = Phase::GameOver;
            self.hud = Hud::game_over(outcome);
            tracing::info!(round = self.round, %outcome, "Round over");
        }

        self.game.render(surface);
        events
    }

    /// Forward a key press to the game. Keys are accepted in every phase;
    /// the game decides which ones matter.
    pub fn on_key(&mut self, key: &KeyId) -> bool {
        self.game.handle_key(key)
    }

    /// Start a fresh round. Only meaningful after game over; while a round is
    /// running this is a no-op and returns false.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            tracing::debug!("Ignoring restart while running");
            return false;
        }
        self.begin_round();
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// 1-based number of the current round.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
