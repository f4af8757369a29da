//! Full round flow: the duel driven by the tick controller, the way the
//! terminal frontend drives it, but with a manual scheduler.

use std::time::Duration;

use lightcycle_core::controller::{GameController, PROMPT, Phase};
use lightcycle_core::events::{GameEvent, Outcome};
use lightcycle_core::input::KeyId;
use lightcycle_core::player::{PlayerColor, PlayerSlot};
use lightcycle_core::schedule::TickScheduler;
use lightcycle_core::test_helpers::{ManualScheduler, RecordingSurface};
use lightcycle_duel::grid::Cell;
use lightcycle_duel::{Direction, LightCycleDuel};

type Session = GameController<LightCycleDuel, ManualScheduler>;

fn session() -> (Session, RecordingSurface) {
    let game = LightCycleDuel::default();
    let (w, h) = lightcycle_core::game_trait::ArcadeGame::surface_size(&game);
    (
        GameController::start(game, ManualScheduler::default()),
        RecordingSurface::new(w, h),
    )
}

/// Tick while the scheduler is running, like the real tick loop would.
fn run_round(session: &mut Session, surface: &mut RecordingSurface) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let mut guard = 0;
    while session.scheduler().is_running() {
        events.extend(session.on_tick(surface));
        guard += 1;
        assert!(guard < 10_000, "round never finished");
    }
    events
}

#[test]
fn untouched_round_ends_in_tie() {
    let (mut session, mut surface) = session();
    let events = run_round(&mut session, &mut surface);

    assert_eq!(session.phase(), Phase::GameOver);
    assert_eq!(session.hud().status, "Game Over! It's a tie!");
    assert!(session.hud().restart_visible);
    assert_eq!(surface.clears(), 20);
    assert_eq!(
        events.last(),
        Some(&GameEvent::RoundComplete {
            outcome: Outcome::Tie
        })
    );
}

#[test]
fn restart_after_tie_resets_everything() {
    let (mut session, mut surface) = session();
    run_round(&mut session, &mut surface);
    assert_eq!(session.game().state().outcome, Some(Outcome::Tie));

    assert!(session.restart());

    let state = session.game().state();
    assert!(state.trail.is_empty());
    assert!(!state.game_over);
    assert_eq!(state.outcome, None);
    let p1 = state.bike(PlayerSlot::One);
    let p2 = state.bike(PlayerSlot::Two);
    assert!(p1.is_alive() && p2.is_alive());
    assert_eq!(p1.position(), Cell::new(100, 150));
    assert_eq!(p1.heading(), Direction::Right);
    assert_eq!(p1.color(), PlayerColor::CYAN);
    assert_eq!(p2.position(), Cell::new(300, 150));
    assert_eq!(p2.heading(), Direction::Left);
    assert_eq!(p2.color(), PlayerColor::RED);

    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.hud().status, PROMPT);
    assert!(!session.hud().restart_visible);
    assert_eq!(
        session.scheduler().period(),
        Some(Duration::from_millis(100))
    );
    assert_eq!(session.round(), 2);
}

#[test]
fn second_round_plays_identically() {
    let (mut session, mut surface) = session();
    run_round(&mut session, &mut surface);
    let first = session.game().state().tick;

    session.restart();
    run_round(&mut session, &mut surface);
    assert_eq!(session.game().state().tick, first);
    assert_eq!(session.game().state().outcome, Some(Outcome::Tie));
}

#[test]
fn player_two_steering_into_wall_hands_player_one_the_win() {
    let (mut session, mut surface) = session();
    // Player 2 turns up at row 150 and hits the top edge after 30 moves;
    // Player 1 keeps going right on the middle row, now unobstructed.
    session.on_key(&KeyId::from("ArrowUp"));
    let events = run_round(&mut session, &mut surface);

    assert_eq!(session.hud().status, "Game Over! Player 1 wins!");
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::BikeCrashed {
            player: PlayerSlot::Two,
            ..
        }
    )));
    let p2 = session.game().state().bike(PlayerSlot::Two);
    assert_eq!(p2.position(), Cell::new(300, 0));
    assert_eq!(session.game().state().tick, 31);
}

#[test]
fn keys_during_game_over_do_not_restart() {
    let (mut session, mut surface) = session();
    run_round(&mut session, &mut surface);
    session.on_key(&KeyId::from("w"));
    session.on_tick(&mut surface);
    assert_eq!(session.phase(), Phase::GameOver);
    assert_eq!(session.round(), 1);
}

#[test]
fn final_frame_shows_frozen_bikes() {
    let (mut session, mut surface) = session();
    run_round(&mut session, &mut surface);
    // Both bikes stopped on (200, 150); Player 2 is drawn last.
    assert_eq!(surface.color_at(200, 150), Some(PlayerColor::RED));
    assert_eq!(surface.color_at(195, 150), Some(PlayerColor::CYAN));
    assert_eq!(surface.color_at(205, 150), Some(PlayerColor::RED));
}
