use std::io::{self, Write};

use crossterm::event::Event;
use crossterm::{queue, terminal};
use futures::{Stream, StreamExt};

use lightcycle_core::controller::GameController;
use lightcycle_core::events::GameEvent;
use lightcycle_core::game_trait::ArcadeGame;

use crate::error::AppError;
use crate::keys::{self, Command};
use crate::scheduler::IntervalScheduler;
use crate::terminal::TerminalSurface;

/// Drive a session until the player quits or the input stream ends.
///
/// Ticks and terminal events are multiplexed on the current task, so every
/// state change runs to completion before the next one starts.
pub async fn run<G, E, W>(
    session: &mut GameController<G, IntervalScheduler>,
    surface: &mut TerminalSurface,
    events: &mut E,
    out: &mut W,
) -> Result<(), AppError>
where
    G: ArcadeGame,
    E: Stream<Item = io::Result<Event>> + Unpin,
    W: Write,
{
    let title = session.game().metadata().name;

    session.game().render(surface);
    surface.present(out, &title, session.hud())?;

    loop {
        tokio::select! {
            _ = session.scheduler_mut().tick() => {
                for event in session.on_tick(surface) {
                    log_game_event(&event);
                }
                surface.present(out, &title, session.hud())?;
            }
            next = events.next() => {
                let Some(event) = next else {
                    tracing::info!("Input stream closed");
                    break;
                };
                match keys::translate(&event?, session.hud().restart_visible) {
                    Some(Command::Key(key)) => {
                        session.on_key(&key);
                    },
                    Some(Command::Restart) => {
                        if session.restart() {
                            session.game().render(surface);
                            surface.present(out, &title, session.hud())?;
                        }
                    },
                    Some(Command::Redraw) => {
                        queue!(out, terminal::Clear(terminal::ClearType::All))?;
                        surface.present(out, &title, session.hud())?;
                    },
                    Some(Command::Quit) => {
                        tracing::info!(round = session.round(), "Quit requested");
                        break;
                    },
                    None => {},
                }
            }
        }
    }

    Ok(())
}

fn log_game_event(event: &GameEvent) {
    match event {
        GameEvent::BikeCrashed { player, cause, at } => {
            tracing::info!(%player, ?cause, x = at.0, y = at.1, "Bike crashed");
        },
        GameEvent::RoundComplete { outcome } => {
            tracing::info!(%outcome, "Round complete");
        },
    }
}
