pub mod config;
pub mod error;
pub mod game_loop;
pub mod keys;
pub mod scheduler;
pub mod terminal;

use std::io;

use crossterm::event::EventStream;

use lightcycle_core::controller::GameController;
use lightcycle_core::game_trait::ArcadeGame;
use lightcycle_duel::LightCycleDuel;

use config::AppConfig;
use error::AppError;
use scheduler::IntervalScheduler;
use terminal::{TerminalGuard, TerminalSurface};

/// Refuse to start when the terminal cannot hold the arena.
pub fn check_fits(needed: (u16, u16), actual: (u16, u16)) -> Result<(), AppError> {
    if actual.0 < needed.0 || actual.1 < needed.1 {
        return Err(AppError::TerminalTooSmall { needed, actual });
    }
    Ok(())
}

/// Set up the terminal and play until the user quits.
pub async fn run_app(config: &AppConfig) -> Result<(), AppError> {
    let game = LightCycleDuel::with_config(config.duel_config());
    let (width, height) = game.surface_size();

    check_fits(
        TerminalSurface::required_size_for(width, height),
        crossterm::terminal::size()?,
    )?;
    let meta = game.metadata();
    tracing::info!(
        game = %meta.name,
        players = meta.players,
        width,
        height,
        "Arena ready: {}",
        meta.description
    );

    let mut surface = TerminalSurface::new(width, height);
    let _guard = TerminalGuard::enter()?;
    let mut session = GameController::start(game, IntervalScheduler::new());
    let mut events = EventStream::new();
    let mut out = io::stdout();

    game_loop::run(&mut session, &mut surface, &mut events, &mut out).await
}
